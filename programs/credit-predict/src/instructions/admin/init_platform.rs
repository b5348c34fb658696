use anchor_lang::prelude::*;
use crate::state::PlatformConfig;
use crate::events::PlatformInitialized;
use crate::errors::MarketError;

#[derive(Accounts)]
pub struct InitPlatform<'info> {
    #[account(
        init,
        seeds = [b"platform_config"],
        bump,
        payer = admin,
        space = PlatformConfig::LEN
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    /// CHECK: Collateral mint (CTC or other SPL mint) used for staking. The deployer provides the correct one.
    pub collateral_mint: AccountInfo<'info>,
    /// CHECK: Treasury wallet address receiving platform fees
    pub treasury: AccountInfo<'info>,
}

pub fn process_init_platform(ctx: Context<InitPlatform>, fee_bps: u16) -> Result<()> {
    require!(fee_bps <= 1000, MarketError::FeeExceedsMax); // Max 10%

    let platform = &mut ctx.accounts.platform_config;
    platform.admin = ctx.accounts.admin.key();
    platform.fee_bps = fee_bps;
    platform.treasury = ctx.accounts.treasury.key();
    platform.paused = false;
    platform.total_markets = 0;
    platform.collateral_mint = ctx.accounts.collateral_mint.key();
    platform.bump = ctx.bumps.platform_config;

    emit!(PlatformInitialized {
        admin: platform.admin,
        fee_bps: platform.fee_bps,
    });

    Ok(())
}
