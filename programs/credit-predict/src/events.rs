use anchor_lang::prelude::*;
use crate::state::market::Outcome;

#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub fee_bps: u16,
}

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub creator: Pubkey,
    pub title: String,
    pub option_a: String,
    pub option_b: String,
    pub end_time: i64,
}

#[event]
pub struct BetPlaced {
    pub market_id: u64,
    pub user: Pubkey,
    pub option: Outcome,
    pub amount: u64,
    pub shares: u64,
    pub new_option_a_total: u64,
    pub new_option_b_total: u64,
    pub timestamp: i64,
}

#[event]
pub struct EvidenceSubmitted {
    pub market_id: u64,
    pub submitter: Pubkey,
    pub requested_outcome: Outcome,
    pub timestamp: i64,
}

#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub outcome: Outcome,
    pub resolver: Pubkey,
    pub total_pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarketCancelled {
    pub market_id: u64,
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PayoutClaimed {
    pub market_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub pnl: i64,
}
