pub mod submit_evidence;
pub mod resolve_market;

pub use submit_evidence::*;
pub use resolve_market::*;
