pub mod geometry;
pub mod law;
pub mod pure_pronav;

pub use geometry::LosGeometry;
pub use law::GuidanceLaw;
pub use pure_pronav::PurePronav;
