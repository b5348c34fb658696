use anchor_lang::prelude::*;
use crate::state::{Market, MarketStatus, ResolutionEvidence, Outcome};
use crate::events::EvidenceSubmitted;
use crate::errors::MarketError;

#[derive(Accounts)]
pub struct SubmitEvidence<'info> {
    #[account(
        mut,
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    // `init` makes this create-once at the runtime level; the
    // evidence_submitted flag below gives callers the precise error when a
    // stale client races a duplicate in.
    #[account(
        init,
        seeds = [b"evidence", market.key().as_ref()],
        bump,
        payer = creator,
        space = ResolutionEvidence::LEN
    )]
    pub evidence: Account<'info, ResolutionEvidence>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_submit_evidence(
    ctx: Context<SubmitEvidence>,
    market_id: u64,
    evidence_text: String,
    requested_outcome: Outcome,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    // Guards
    require!(
        ctx.accounts.creator.key() == market.creator,
        MarketError::Unauthorized
    );
    require!(
        clock.unix_timestamp >= market.end_time,
        MarketError::MarketStillActive
    );
    require!(!market.is_resolved(), MarketError::AlreadyResolved);
    require!(
        market.status != MarketStatus::Cancelled,
        MarketError::AlreadyResolved
    );
    require!(!market.evidence_submitted, MarketError::AlreadySubmitted);
    require!(!evidence_text.is_empty(), MarketError::EvidenceEmpty);
    require!(evidence_text.len() <= 512, MarketError::EvidenceTooLong);
    require!(
        requested_outcome == Outcome::OptionA || requested_outcome == Outcome::OptionB,
        MarketError::InvalidOutcome
    );

    let evidence = &mut ctx.accounts.evidence;
    evidence.market = market.key();
    evidence.submitter = ctx.accounts.creator.key();
    evidence.evidence_text = evidence_text;
    evidence.requested_outcome = requested_outcome;
    evidence.submitted_at = clock.unix_timestamp;
    evidence.bump = ctx.bumps.evidence;

    market.evidence_submitted = true;
    market.status = MarketStatus::EvidencePending;

    emit!(EvidenceSubmitted {
        market_id,
        submitter: evidence.submitter,
        requested_outcome,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
