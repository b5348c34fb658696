pub mod platform;
pub mod market;
pub mod position;
pub mod evidence;

pub use platform::*;
pub use market::*;
pub use position::*;
pub use evidence::*;
