pub mod math;
pub mod lifecycle;

pub use math::*;
pub use lifecycle::*;
