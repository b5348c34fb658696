use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Platform is paused")]
    PlatformPaused,
    #[msg("Market is not active")]
    MarketNotActive,
    #[msg("Market is not resolved")]
    MarketNotResolved,
    #[msg("Betting period has ended")]
    BettingClosed,
    #[msg("Betting period has not ended yet")]
    MarketStillActive,
    #[msg("Bet below minimum")]
    BelowMinBet,
    #[msg("Bet above maximum")]
    AboveMaxBet,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Market already resolved")]
    AlreadyResolved,
    #[msg("Evidence already submitted for this market")]
    AlreadySubmitted,
    #[msg("Payout already claimed")]
    AlreadyClaimed,
    #[msg("Nothing to claim")]
    NothingToClaim,
    #[msg("Evidence text must not be empty")]
    EvidenceEmpty,
    #[msg("Evidence too long (max 512)")]
    EvidenceTooLong,
    #[msg("Title too long (max 128)")]
    TitleTooLong,
    #[msg("Description too long (max 512)")]
    DescriptionTooLong,
    #[msg("Image URL too long (max 256)")]
    ImageUrlTooLong,
    #[msg("Option label too long (max 64)")]
    LabelTooLong,
    #[msg("Option label must not be empty")]
    EmptyLabel,
    #[msg("Justification too long (max 256)")]
    JustificationTooLong,
    #[msg("Invalid outcome for this operation")]
    InvalidOutcome,
    #[msg("Invalid timestamps")]
    InvalidTimestamps,
    #[msg("Minimum bet exceeds maximum bet")]
    InvalidBetLimits,
    #[msg("Fee exceeds maximum (10%)")]
    FeeExceedsMax,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Vault balance insufficient")]
    InsufficientVault,
    #[msg("Market is not in a cancellable state")]
    MarketNotCancellable,
}
