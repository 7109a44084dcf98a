/// Investment statuses
///
/// The lifecycle is active -> completed, and the transition happens only
/// through a claim. Maturity is never a stored state; it is derived from
/// the end timestamp at read time.
/// Principal locked, payout frozen, waiting on maturity and a claim.
pub const INVESTMENT_STATUS_ACTIVE: &str = "ACTIVE";

/// Claimed: the frozen payout was credited back to the wallet. Terminal.
pub const INVESTMENT_STATUS_COMPLETED: &str = "COMPLETED";
