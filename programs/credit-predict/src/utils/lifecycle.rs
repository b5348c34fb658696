use anchor_lang::prelude::*;
use crate::state::{Market, MarketStatus};

/// Real-time lifecycle state of a market. The stored `status` field is a
/// cached label that can lag the clock (a market past `end_time` may still
/// say Active); every eligibility check goes through this instead.
pub fn lifecycle_status(market: &Market, now: i64) -> MarketStatus {
    if market.status == MarketStatus::Cancelled {
        return MarketStatus::Cancelled;
    }
    if market.is_resolved() {
        return MarketStatus::Resolved;
    }
    if market.evidence_submitted {
        return MarketStatus::EvidencePending;
    }
    if now >= market.end_time {
        return MarketStatus::Ended;
    }
    MarketStatus::Active
}

pub fn betting_open(market: &Market, now: i64) -> bool {
    lifecycle_status(market, now) == MarketStatus::Active
}

/// Whether `caller` may submit resolution evidence right now: the market has
/// ended, is neither resolved nor cancelled, the caller created it, and no
/// evidence exists yet.
pub fn can_submit_evidence(market: &Market, caller: &Pubkey, now: i64) -> bool {
    lifecycle_status(market, now) == MarketStatus::Ended && *caller == market.creator
}

/// Whether `caller` may commit a final outcome right now. Resolvers are the
/// market creator and the platform admin; prior evidence is advisory, never
/// required.
pub fn can_resolve(market: &Market, caller: &Pubkey, admin: &Pubkey, now: i64) -> bool {
    let state = lifecycle_status(market, now);
    (state == MarketStatus::Ended || state == MarketStatus::EvidencePending)
        && (*caller == market.creator || *caller == *admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MarketCategory, Outcome};

    const END: i64 = 2_000;

    fn market(creator: Pubkey) -> Market {
        Market {
            market_id: 7,
            creator,
            title: "Test market".to_string(),
            description: String::new(),
            image_url: String::new(),
            category: MarketCategory::Custom,
            option_a: "Yes".to_string(),
            option_b: "No".to_string(),
            status: MarketStatus::Active,
            vault: Pubkey::new_unique(),
            total_option_a_shares: 100,
            total_option_b_shares: 100,
            total_pool: 200,
            created_at: 1_000,
            end_time: END,
            resolved_outcome: None,
            resolved_at: None,
            resolution_justification: String::new(),
            evidence_submitted: false,
            min_bet: 1,
            max_bet: 0,
            fee_bps: 0,
            bump: 255,
        }
    }

    #[test]
    fn status_label_lags_but_lifecycle_does_not() {
        let m = market(Pubkey::new_unique());
        assert_eq!(m.status, MarketStatus::Active);
        assert_eq!(lifecycle_status(&m, END - 1), MarketStatus::Active);
        assert_eq!(lifecycle_status(&m, END), MarketStatus::Ended);
        assert!(betting_open(&m, END - 1));
        assert!(!betting_open(&m, END));
    }

    #[test]
    fn evidence_gated_on_time_creator_and_uniqueness() {
        let creator = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut m = market(creator);

        // too early
        assert!(!can_submit_evidence(&m, &creator, END - 1));
        // ended, creator, fresh
        assert!(can_submit_evidence(&m, &creator, END));
        // wrong caller
        assert!(!can_submit_evidence(&m, &stranger, END));
        // already submitted
        m.evidence_submitted = true;
        assert!(!can_submit_evidence(&m, &creator, END + 100));
        // already resolved
        m.evidence_submitted = false;
        m.resolved_outcome = Some(Outcome::OptionA);
        assert!(!can_submit_evidence(&m, &creator, END + 100));
    }

    #[test]
    fn resolution_allowed_with_or_without_evidence() {
        let creator = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let mut m = market(creator);

        assert!(!can_resolve(&m, &creator, &admin, END - 1));
        assert!(can_resolve(&m, &creator, &admin, END));

        m.evidence_submitted = true;
        assert!(can_resolve(&m, &creator, &admin, END));
        assert!(can_resolve(&m, &admin, &admin, END));
        assert!(!can_resolve(&m, &Pubkey::new_unique(), &admin, END));
    }

    #[test]
    fn resolved_and_cancelled_are_terminal() {
        let creator = Pubkey::new_unique();
        let admin = Pubkey::new_unique();

        let mut resolved = market(creator);
        resolved.resolved_outcome = Some(Outcome::OptionB);
        assert_eq!(lifecycle_status(&resolved, END + 1), MarketStatus::Resolved);
        assert!(!can_resolve(&resolved, &creator, &admin, END + 1));
        assert!(!can_submit_evidence(&resolved, &creator, END + 1));

        let mut cancelled = market(creator);
        cancelled.status = MarketStatus::Cancelled;
        cancelled.resolved_outcome = Some(Outcome::Cancelled);
        assert_eq!(
            lifecycle_status(&cancelled, END + 1),
            MarketStatus::Cancelled
        );
        assert!(!can_resolve(&cancelled, &creator, &admin, END + 1));
    }

    #[test]
    fn time_remaining_saturates_at_zero() {
        let m = market(Pubkey::new_unique());
        assert_eq!(m.time_remaining(END - 500), 500);
        assert_eq!(m.time_remaining(END), 0);
        assert_eq!(m.time_remaining(END + 500), 0);
    }
}
