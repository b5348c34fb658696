use anchor_lang::prelude::*;
use crate::state::{PlatformConfig, Market, MarketStatus, Outcome};
use crate::events::MarketCancelled;
use crate::errors::MarketError;

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct CancelMarket<'info> {
    #[account(
        mut,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ MarketError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub admin: Signer<'info>,
}

/// Voids a market. Terminal: every position becomes refundable at its net
/// invested amount through the regular claim path.
pub fn process_cancel_market(ctx: Context<CancelMarket>, market_id: u64) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    // Guards
    require!(!market.is_resolved(), MarketError::AlreadyResolved);
    require!(
        market.status != MarketStatus::Cancelled,
        MarketError::MarketNotCancellable
    );

    market.resolved_outcome = Some(Outcome::Cancelled);
    market.resolved_at = Some(clock.unix_timestamp);
    market.status = MarketStatus::Cancelled;

    emit!(MarketCancelled {
        market_id,
        admin: ctx.accounts.admin.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
