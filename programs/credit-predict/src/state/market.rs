use anchor_lang::prelude::*;

#[account]
pub struct Market {
    pub market_id: u64,
    pub creator: Pubkey,
    pub title: String,              // max 128 chars
    pub description: String,        // max 512 chars
    pub image_url: String,          // max 256 chars, empty = no image
    pub category: MarketCategory,
    pub option_a: String,           // label, max 64 chars
    pub option_b: String,           // label, max 64 chars
    pub status: MarketStatus,       // cached label; guards derive from end_time/resolved_outcome
    pub vault: Pubkey,
    pub total_option_a_shares: u64,
    pub total_option_b_shares: u64,
    pub total_pool: u64,            // net collateral staked across both options
    pub created_at: i64,
    pub end_time: i64,              // betting closes, resolution becomes eligible
    pub resolved_outcome: Option<Outcome>,
    pub resolved_at: Option<i64>,
    pub resolution_justification: String, // max 256 chars, empty until resolved
    pub evidence_submitted: bool,
    pub min_bet: u64,
    pub max_bet: u64,               // 0 = unlimited
    pub fee_bps: u16,
    pub bump: u8,
}

impl Market {
    // 8 (discriminator)
    // 8 (market_id) + 32 (creator)
    // 4 + 128 (title) + 4 + 512 (description) + 4 + 256 (image_url)
    // 1 (category) + 4 + 64 (option_a) + 4 + 64 (option_b) + 1 (status)
    // 32 (vault)
    // 8 (total_a) + 8 (total_b) + 8 (total_pool)
    // 8 (created_at) + 8 (end_time)
    // 1+1 (resolved_outcome option) + 1+8 (resolved_at option)
    // 4 + 256 (resolution_justification) + 1 (evidence_submitted)
    // 8 (min_bet) + 8 (max_bet) + 2 (fee_bps)
    // 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 + (4 + 128) + (4 + 512) + (4 + 256) + 1
        + (4 + 64) * 2 + 1 + 32 + 8 * 3 + 8 * 2 + 2 + 9 + (4 + 256) + 1 + 8 * 2 + 2 + 1;

    pub fn is_resolved(&self) -> bool {
        self.resolved_outcome.is_some()
    }

    pub fn total_shares(&self) -> u64 {
        self.total_option_a_shares.saturating_add(self.total_option_b_shares)
    }

    /// Shares staked on one side. Draw/Cancelled are not stakeable sides.
    pub fn shares_for(&self, option: Outcome) -> u64 {
        match option {
            Outcome::OptionA => self.total_option_a_shares,
            Outcome::OptionB => self.total_option_b_shares,
            Outcome::Draw | Outcome::Cancelled => 0,
        }
    }

    /// Share-weighted probability of an option, 50/50 while the market is empty.
    pub fn implied_probability(&self, option: Outcome) -> f64 {
        let total = self.total_shares();
        if total == 0 {
            return 0.5;
        }
        self.shares_for(option) as f64 / total as f64
    }

    pub fn time_remaining(&self, now: i64) -> i64 {
        (self.end_time - now).max(0)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, InitSpace, Debug)]
pub enum MarketStatus {
    Active,
    Ended,
    EvidencePending,
    Resolved,
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, InitSpace)]
pub enum MarketCategory {
    Crypto,
    Sports,
    Politics,
    Entertainment,
    Weather,
    Custom,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, InitSpace, Debug)]
pub enum Outcome {
    OptionA,
    OptionB,
    Draw,
    Cancelled,
}
