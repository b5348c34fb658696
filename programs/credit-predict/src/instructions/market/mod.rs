pub mod create_market;

pub use create_market::*;
