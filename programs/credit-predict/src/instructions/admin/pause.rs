use anchor_lang::prelude::*;
use crate::state::PlatformConfig;
use crate::errors::MarketError;

#[derive(Accounts)]
pub struct PlatformAdmin<'info> {
    #[account(
        mut,
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ MarketError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,
    pub admin: Signer<'info>,
}

pub fn pause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
    ctx.accounts.platform_config.paused = true;
    Ok(())
}

pub fn unpause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
    ctx.accounts.platform_config.paused = false;
    Ok(())
}
