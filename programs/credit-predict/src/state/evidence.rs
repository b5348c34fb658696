use anchor_lang::prelude::*;
use crate::state::market::Outcome;

/// Creator-submitted justification for a requested outcome. Created once per
/// market, never mutated; persists as the audit trail after resolution.
#[account]
pub struct ResolutionEvidence {
    pub market: Pubkey,
    pub submitter: Pubkey,
    pub evidence_text: String,      // max 512 chars, non-empty
    pub requested_outcome: Outcome, // OptionA or OptionB only
    pub submitted_at: i64,
    pub bump: u8,
}

impl ResolutionEvidence {
    pub const LEN: usize = 8 + 32 + 32 + (4 + 512) + 1 + 8 + 1;
}
