use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, Mint, TokenAccount, Transfer};
use crate::state::{Market, UserPosition};
use crate::events::PayoutClaimed;
use crate::errors::MarketError;
use crate::utils::math::compute_payout;

#[derive(Accounts)]
pub struct ClaimPayout<'info> {
    #[account(
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"vault", market.key().as_ref()],
        bump,
        token::mint = collateral_mint
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"position", market.key().as_ref(), user.key().as_ref()],
        bump = user_position.bump,
        has_one = user,
    )]
    pub user_position: Account<'info, UserPosition>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = user,
    )]
    pub user_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_claim_payout(ctx: Context<ClaimPayout>, market_id: u64) -> Result<()> {
    let market = &ctx.accounts.market;

    // Guards
    require!(market.is_resolved(), MarketError::MarketNotResolved);
    require!(!ctx.accounts.user_position.claimed, MarketError::AlreadyClaimed);

    let breakdown = compute_payout(&ctx.accounts.user_position, market)?;
    require!(breakdown.payout > 0, MarketError::NothingToClaim);

    // total_pool is the settlement snapshot and stays constant across claims;
    // the vault drains physically. Cap the last claim so integer rounding
    // can never underflow the vault.
    let payout = breakdown.payout.min(ctx.accounts.vault.amount);
    require!(payout > 0, MarketError::InsufficientVault);

    let market_id_bytes = market.market_id.to_le_bytes();
    let seeds = &[b"market", market_id_bytes.as_ref(), &[market.bump]];
    let signer = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.user_ata.to_account_info(),
                authority: market.to_account_info(),
            },
            signer,
        ),
        payout,
    )?;

    ctx.accounts.user_position.claimed = true;

    emit!(PayoutClaimed {
        market_id,
        user: ctx.accounts.user.key(),
        amount: payout,
        pnl: breakdown.pnl,
    });

    Ok(())
}
