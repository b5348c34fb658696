pub mod init_platform;
pub mod pause;
pub mod cancel_market;

pub use init_platform::*;
pub use pause::*;
pub use cancel_market::*;
