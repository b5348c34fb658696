use anchor_lang::prelude::*;

#[account]
pub struct UserPosition {
    pub user: Pubkey,
    pub market: Pubkey,
    pub option_a_shares: u64,
    pub option_b_shares: u64,
    pub total_invested: u64,    // net of platform fee; monotone until claim
    pub claimed: bool,
    pub last_bet_timestamp: i64,
    pub bump: u8,
}

impl UserPosition {
    pub const LEN: usize = 8 + 32 + 32 + 8 * 3 + 1 + 8 + 1;
}
