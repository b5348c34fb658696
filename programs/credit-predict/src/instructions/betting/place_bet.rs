use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, Mint, TokenAccount, Transfer};
use crate::state::{PlatformConfig, Market, UserPosition, Outcome};
use crate::events::BetPlaced;
use crate::errors::MarketError;
use crate::utils::lifecycle::betting_open;

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct PlaceBet<'info> {
    #[account(
        mut,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        mut,
        seeds = [b"vault", market.key().as_ref()],
        bump,
        token::mint = collateral_mint
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        seeds = [b"position", market.key().as_ref(), user.key().as_ref()],
        bump,
        payer = user,
        space = UserPosition::LEN
    )]
    pub user_position: Account<'info, UserPosition>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = user,
    )]
    pub user_ata: Account<'info, TokenAccount>,

    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        has_one = collateral_mint,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        constraint = treasury.key() == platform_config.treasury,
        constraint = treasury.mint == collateral_mint.key() @ MarketError::Unauthorized,
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn process_place_bet(
    ctx: Context<PlaceBet>,
    market_id: u64,
    option: Outcome,
    amount: u64,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let platform = &ctx.accounts.platform_config;
    let clock = Clock::get()?;

    // 1. Guard Checks
    require!(!platform.paused, MarketError::PlatformPaused);
    require!(betting_open(market, clock.unix_timestamp), MarketError::BettingClosed);
    require!(amount >= market.min_bet, MarketError::BelowMinBet);
    if market.max_bet > 0 {
        require!(amount <= market.max_bet, MarketError::AboveMaxBet);
    }
    require!(
        option == Outcome::OptionA || option == Outcome::OptionB,
        MarketError::InvalidOutcome
    );

    // 2. Fee Calculation (round up to prevent micro-bet fee bypass)
    let fee = ((amount as u128 * market.fee_bps as u128 + 9999) / 10000) as u64;
    let net_amount = amount.checked_sub(fee).ok_or(MarketError::MathOverflow)?;
    require!(net_amount > 0, MarketError::BelowMinBet);

    // 3. Transfer collateral
    // User -> Vault (net)
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_ata.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        net_amount,
    )?;

    // User -> Treasury (fee)
    if fee > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.user_ata.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.user.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    // 4. Update State
    // Shares are 1:1 with net stake; payout is a pro-rata pool split at
    // resolution, so no pricing curve is involved here.
    let shares = net_amount;
    market.total_pool = market
        .total_pool
        .checked_add(net_amount)
        .ok_or(MarketError::MathOverflow)?;
    if option == Outcome::OptionA {
        market.total_option_a_shares = market
            .total_option_a_shares
            .checked_add(shares)
            .ok_or(MarketError::MathOverflow)?;
    } else {
        market.total_option_b_shares = market
            .total_option_b_shares
            .checked_add(shares)
            .ok_or(MarketError::MathOverflow)?;
    }

    // Update User Position
    let position = &mut ctx.accounts.user_position;
    position.user = ctx.accounts.user.key();
    position.market = market.key();
    if option == Outcome::OptionA {
        position.option_a_shares = position
            .option_a_shares
            .checked_add(shares)
            .ok_or(MarketError::MathOverflow)?;
    } else {
        position.option_b_shares = position
            .option_b_shares
            .checked_add(shares)
            .ok_or(MarketError::MathOverflow)?;
    }
    position.total_invested = position
        .total_invested
        .checked_add(net_amount)
        .ok_or(MarketError::MathOverflow)?;
    position.last_bet_timestamp = clock.unix_timestamp;
    position.bump = ctx.bumps.user_position;

    emit!(BetPlaced {
        market_id,
        user: ctx.accounts.user.key(),
        option,
        amount,
        shares,
        new_option_a_total: market.total_option_a_shares,
        new_option_b_total: market.total_option_b_shares,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
