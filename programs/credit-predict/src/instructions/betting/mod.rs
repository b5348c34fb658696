pub mod place_bet;
pub mod claim_payout;

pub use place_bet::*;
pub use claim_payout::*;
