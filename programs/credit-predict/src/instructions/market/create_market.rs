use anchor_lang::prelude::*;
use anchor_spl::token::{Token, Mint, TokenAccount};
use crate::state::{PlatformConfig, Market, MarketCategory, MarketStatus};
use crate::events::MarketCreated;
use crate::errors::MarketError;

#[derive(Accounts)]
#[instruction(market_id: u64)] // market_id is passed as instruction arg to derive seeds
pub struct CreateMarket<'info> {
    #[account(
        init,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = Market::LEN
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        seeds = [b"vault", market.key().as_ref()],
        bump,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = market,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        has_one = collateral_mint,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateMarketParams {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: MarketCategory,
    pub option_a: String,
    pub option_b: String,
    pub end_time: i64,
    pub min_bet: u64,
    pub max_bet: u64,
}

pub fn process_create_market(
    ctx: Context<CreateMarket>,
    market_id: u64,
    params: CreateMarketParams,
) -> Result<()> {
    let platform = &mut ctx.accounts.platform_config;
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    // Validation
    require!(!platform.paused, MarketError::PlatformPaused);
    require!(params.title.len() <= 128, MarketError::TitleTooLong);
    require!(params.description.len() <= 512, MarketError::DescriptionTooLong);
    require!(params.image_url.len() <= 256, MarketError::ImageUrlTooLong);
    require!(!params.option_a.is_empty() && !params.option_b.is_empty(), MarketError::EmptyLabel);
    require!(params.option_a.len() <= 64 && params.option_b.len() <= 64, MarketError::LabelTooLong);
    require!(params.end_time > clock.unix_timestamp, MarketError::InvalidTimestamps);
    if params.max_bet > 0 {
        require!(params.min_bet <= params.max_bet, MarketError::InvalidBetLimits);
    }

    market.market_id = market_id;
    market.creator = ctx.accounts.creator.key();
    market.title = params.title.clone();
    market.description = params.description;
    market.image_url = params.image_url;
    market.category = params.category;
    market.option_a = params.option_a.clone();
    market.option_b = params.option_b.clone();
    market.status = MarketStatus::Active;
    market.vault = ctx.accounts.vault.key();
    market.total_option_a_shares = 0;
    market.total_option_b_shares = 0;
    market.total_pool = 0;
    market.created_at = clock.unix_timestamp;
    market.end_time = params.end_time;
    market.resolved_outcome = None;
    market.resolved_at = None;
    market.resolution_justification = String::new();
    market.evidence_submitted = false;
    market.min_bet = params.min_bet;
    market.max_bet = params.max_bet;
    // Fee policy is platform-wide, snapshotted at creation
    market.fee_bps = platform.fee_bps;
    market.bump = ctx.bumps.market;

    platform.total_markets = platform
        .total_markets
        .checked_add(1)
        .ok_or(MarketError::MathOverflow)?;

    emit!(MarketCreated {
        market_id,
        creator: market.creator,
        title: market.title.clone(),
        option_a: market.option_a.clone(),
        option_b: market.option_b.clone(),
        end_time: market.end_time,
    });

    Ok(())
}
