use anchor_lang::prelude::*;
use crate::errors::MarketError;
use crate::state::{Market, Outcome, UserPosition};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutBreakdown {
    pub payout: u64,
    pub pnl: i64,
    pub is_win: bool,
}

/// Settlement value of one position in one resolved market.
///
/// Winners split the entire pool pro-rata by their share of the winning side.
/// Draw and Cancelled refund the net amount invested, making the position
/// PnL-neutral. Holding no winning shares pays zero. Calling this on an
/// unresolved market is a caller bug and fails with `MarketNotResolved`.
pub fn compute_payout(position: &UserPosition, market: &Market) -> Result<PayoutBreakdown> {
    let outcome = market
        .resolved_outcome
        .ok_or(MarketError::MarketNotResolved)?;

    let payout = match outcome {
        Outcome::Draw | Outcome::Cancelled => position.total_invested,
        Outcome::OptionA => pro_rata(
            position.option_a_shares,
            market.total_option_a_shares,
            market.total_pool,
        )?,
        Outcome::OptionB => pro_rata(
            position.option_b_shares,
            market.total_option_b_shares,
            market.total_pool,
        )?,
    };

    let pnl = (payout as i128 - position.total_invested as i128) as i64;

    Ok(PayoutBreakdown {
        payout,
        pnl,
        is_win: payout > position.total_invested,
    })
}

fn pro_rata(user_shares: u64, winning_total: u64, pool: u64) -> Result<u64> {
    if user_shares == 0 {
        return Ok(0);
    }
    if winning_total == 0 {
        // Contradictory snapshot: the winning side has holders but a zero
        // accumulator. Degrade to zero instead of dividing.
        msg!("data integrity: winning side has zero total shares, paying 0");
        return Ok(0);
    }
    let payout = (user_shares as u128)
        .checked_mul(pool as u128)
        .ok_or(MarketError::MathOverflow)?
        / winning_total as u128;
    Ok(payout as u64)
}

/// Sum of settled PnL over all of a user's positions in resolved markets.
/// Positions in unresolved or unknown markets are skipped.
pub fn aggregate_pnl(positions: &[UserPosition], markets: &[(Pubkey, Market)]) -> i128 {
    settled(positions, markets)
        .filter_map(|(position, market)| compute_payout(position, market).ok())
        .map(|breakdown| breakdown.pnl as i128)
        .sum()
}

/// Wins over resolved-market positions, as a percentage. Unresolved markets
/// count in neither the numerator nor the denominator; Draw refunds are not
/// wins. Returns 0 when the user has no settled positions.
pub fn win_rate(positions: &[UserPosition], markets: &[(Pubkey, Market)]) -> f64 {
    let mut wins = 0u64;
    let mut settled_count = 0u64;
    for (position, market) in settled(positions, markets) {
        if let Ok(breakdown) = compute_payout(position, market) {
            settled_count += 1;
            if breakdown.is_win {
                wins += 1;
            }
        }
    }
    if settled_count == 0 {
        return 0.0;
    }
    wins as f64 / settled_count as f64 * 100.0
}

fn settled<'a>(
    positions: &'a [UserPosition],
    markets: &'a [(Pubkey, Market)],
) -> impl Iterator<Item = (&'a UserPosition, &'a Market)> {
    positions.iter().filter_map(move |position| {
        markets
            .iter()
            .find(|(key, _)| *key == position.market)
            .filter(|(_, market)| market.is_resolved())
            .map(|(_, market)| (position, market))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MarketCategory, MarketStatus};

    fn market(total_a: u64, total_b: u64, pool: u64, outcome: Option<Outcome>) -> Market {
        Market {
            market_id: 1,
            creator: Pubkey::new_unique(),
            title: "Will BTC close above $70k this week?".to_string(),
            description: "Weekly close price on Friday 23:59 UTC".to_string(),
            image_url: String::new(),
            category: MarketCategory::Crypto,
            option_a: "Yes".to_string(),
            option_b: "No".to_string(),
            status: if outcome.is_some() {
                MarketStatus::Resolved
            } else {
                MarketStatus::Active
            },
            vault: Pubkey::new_unique(),
            total_option_a_shares: total_a,
            total_option_b_shares: total_b,
            total_pool: pool,
            created_at: 1_000,
            end_time: 2_000,
            resolved_outcome: outcome,
            resolved_at: outcome.map(|_| 2_100),
            resolution_justification: String::new(),
            evidence_submitted: false,
            min_bet: 1,
            max_bet: 0,
            fee_bps: 0,
            bump: 255,
        }
    }

    fn position(market_key: Pubkey, a: u64, b: u64, invested: u64) -> UserPosition {
        UserPosition {
            user: Pubkey::new_unique(),
            market: market_key,
            option_a_shares: a,
            option_b_shares: b,
            total_invested: invested,
            claimed: false,
            last_bet_timestamp: 1_500,
            bump: 254,
        }
    }

    #[test]
    fn winner_gets_pro_rata_share_of_whole_pool() {
        let m = market(7200, 5300, 12500, Some(Outcome::OptionA));
        let p = position(Pubkey::new_unique(), 720, 0, 600);

        let breakdown = compute_payout(&p, &m).unwrap();
        assert_eq!(breakdown.payout, 1250);
        assert_eq!(breakdown.pnl, 650);
        assert!(breakdown.is_win);
    }

    #[test]
    fn loser_gets_nothing() {
        let m = market(7200, 5300, 12500, Some(Outcome::OptionA));
        let p = position(Pubkey::new_unique(), 0, 100, 80);

        let breakdown = compute_payout(&p, &m).unwrap();
        assert_eq!(breakdown.payout, 0);
        assert_eq!(breakdown.pnl, -80);
        assert!(!breakdown.is_win);
    }

    #[test]
    fn payouts_exhaust_the_pool() {
        // Three A holders split the full 12500 pool, both sides' stakes included.
        let m = market(10000, 5300, 12500, Some(Outcome::OptionA));
        let holders = [
            position(Pubkey::new_unique(), 5000, 0, 5000),
            position(Pubkey::new_unique(), 3000, 0, 3000),
            position(Pubkey::new_unique(), 2000, 200, 2200),
        ];

        let total: u64 = holders
            .iter()
            .map(|p| compute_payout(p, &m).unwrap().payout)
            .sum();
        assert_eq!(total, m.total_pool);
    }

    #[test]
    fn draw_refunds_invested_exactly() {
        let m = market(7200, 5300, 12500, Some(Outcome::Draw));
        let p = position(Pubkey::new_unique(), 720, 300, 1020);

        let breakdown = compute_payout(&p, &m).unwrap();
        assert_eq!(breakdown.payout, 1020);
        assert_eq!(breakdown.pnl, 0);
        assert!(!breakdown.is_win);
    }

    #[test]
    fn cancelled_refunds_invested_exactly() {
        let m = market(7200, 5300, 12500, Some(Outcome::Cancelled));
        let p = position(Pubkey::new_unique(), 0, 500, 500);

        let breakdown = compute_payout(&p, &m).unwrap();
        assert_eq!(breakdown.payout, 500);
        assert_eq!(breakdown.pnl, 0);
    }

    #[test]
    fn unresolved_market_is_a_caller_error() {
        let m = market(7200, 5300, 12500, None);
        let p = position(Pubkey::new_unique(), 720, 0, 600);

        assert_eq!(
            compute_payout(&p, &m),
            Err(MarketError::MarketNotResolved.into())
        );
    }

    #[test]
    fn zero_winning_total_degrades_to_zero_payout() {
        // Snapshot says A won but records no A shares; never divide by this.
        let m = market(0, 5300, 12500, Some(Outcome::OptionA));
        let p = position(Pubkey::new_unique(), 720, 0, 600);

        let breakdown = compute_payout(&p, &m).unwrap();
        assert_eq!(breakdown.payout, 0);
        assert_eq!(breakdown.pnl, -600);
    }

    #[test]
    fn large_stakes_do_not_overflow() {
        let m = market(
            u64::MAX / 2,
            u64::MAX / 4,
            u64::MAX / 2,
            Some(Outcome::OptionA),
        );
        let p = position(Pubkey::new_unique(), u64::MAX / 4, 0, u64::MAX / 4);

        let breakdown = compute_payout(&p, &m).unwrap();
        assert!(breakdown.payout <= m.total_pool);
    }

    #[test]
    fn empty_market_implies_even_odds() {
        let m = market(0, 0, 0, None);
        assert_eq!(m.implied_probability(Outcome::OptionA), 0.5);
        assert_eq!(m.implied_probability(Outcome::OptionB), 0.5);
    }

    #[test]
    fn implied_probability_tracks_share_split() {
        let m = market(7200, 5300, 12500, None);
        let a = m.implied_probability(Outcome::OptionA);
        let b = m.implied_probability(Outcome::OptionB);
        assert!((a - 7200.0 / 12500.0).abs() < 1e-12);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn aggregates_skip_unresolved_markets() {
        let won_key = Pubkey::new_unique();
        let lost_key = Pubkey::new_unique();
        let open_key = Pubkey::new_unique();
        let markets = vec![
            (won_key, market(7200, 5300, 12500, Some(Outcome::OptionA))),
            (lost_key, market(1000, 1000, 2000, Some(Outcome::OptionB))),
            (open_key, market(400, 600, 1000, None)),
        ];
        let positions = vec![
            position(won_key, 720, 0, 600),   // pays 1250, pnl +650
            position(lost_key, 500, 0, 500),  // pays 0, pnl -500
            position(open_key, 400, 0, 400),  // unresolved, excluded
        ];

        assert_eq!(aggregate_pnl(&positions, &markets), 650 - 500);
        assert!((win_rate(&positions, &markets) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn win_rate_is_zero_without_settled_positions() {
        let open_key = Pubkey::new_unique();
        let markets = vec![(open_key, market(400, 600, 1000, None))];
        let positions = vec![position(open_key, 400, 0, 400)];

        assert_eq!(win_rate(&positions, &markets), 0.0);
        assert_eq!(aggregate_pnl(&positions, &markets), 0);
    }
}
