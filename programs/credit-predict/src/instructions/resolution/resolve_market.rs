use anchor_lang::prelude::*;
use crate::state::{PlatformConfig, Market, MarketStatus, Outcome};
use crate::events::MarketResolved;
use crate::errors::MarketError;

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    #[account(
        mut,
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub resolver: Signer<'info>,
}

/// Commits the final outcome. The creator and the platform admin are both
/// authorized resolvers; prior evidence is advisory input, never a
/// prerequisite. Terminal: no evidence or resolution is accepted afterward.
pub fn process_resolve_market(
    ctx: Context<ResolveMarket>,
    market_id: u64,
    outcome: Outcome,
    justification: String,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let platform = &ctx.accounts.platform_config;
    let clock = Clock::get()?;

    // Guards
    require!(!market.is_resolved(), MarketError::AlreadyResolved);
    require!(
        market.status != MarketStatus::Cancelled,
        MarketError::AlreadyResolved
    );
    require!(
        clock.unix_timestamp >= market.end_time,
        MarketError::MarketStillActive
    );
    let resolver = ctx.accounts.resolver.key();
    require!(
        resolver == market.creator || resolver == platform.admin,
        MarketError::Unauthorized
    );
    // Cancelled is committed through cancel_market, not here
    require!(outcome != Outcome::Cancelled, MarketError::InvalidOutcome);
    require!(justification.len() <= 256, MarketError::JustificationTooLong);

    market.resolved_outcome = Some(outcome);
    market.resolved_at = Some(clock.unix_timestamp);
    market.resolution_justification = justification;
    market.status = MarketStatus::Resolved;

    emit!(MarketResolved {
        market_id,
        outcome,
        resolver,
        total_pool: market.total_pool,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
