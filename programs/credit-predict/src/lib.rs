use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;
use state::market::Outcome;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod credit_predict {
    use super::*;

    pub fn init_platform(ctx: Context<InitPlatform>, fee_bps: u16) -> Result<()> {
        instructions::admin::init_platform::process_init_platform(ctx, fee_bps)
    }

    pub fn create_market(ctx: Context<CreateMarket>, market_id: u64, params: CreateMarketParams) -> Result<()> {
        instructions::market::create_market::process_create_market(ctx, market_id, params)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, market_id: u64, option: Outcome, amount: u64) -> Result<()> {
        instructions::betting::place_bet::process_place_bet(ctx, market_id, option, amount)
    }

    pub fn submit_evidence(ctx: Context<SubmitEvidence>, market_id: u64, evidence_text: String, requested_outcome: Outcome) -> Result<()> {
        instructions::resolution::submit_evidence::process_submit_evidence(ctx, market_id, evidence_text, requested_outcome)
    }

    pub fn resolve_market(ctx: Context<ResolveMarket>, market_id: u64, outcome: Outcome, justification: String) -> Result<()> {
        instructions::resolution::resolve_market::process_resolve_market(ctx, market_id, outcome, justification)
    }

    pub fn claim_payout(ctx: Context<ClaimPayout>, market_id: u64) -> Result<()> {
        instructions::betting::claim_payout::process_claim_payout(ctx, market_id)
    }

    pub fn cancel_market(ctx: Context<CancelMarket>, market_id: u64) -> Result<()> {
        instructions::admin::cancel_market::process_cancel_market(ctx, market_id)
    }

    pub fn pause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
        instructions::admin::pause::pause_platform(ctx)
    }

    pub fn unpause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
        instructions::admin::pause::unpause_platform(ctx)
    }
}
