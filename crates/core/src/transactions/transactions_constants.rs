/// Transaction kinds
///
/// Deposit and withdraw rows are user requests that sit pending until an
/// admin resolves them; approval is the single point where the money
/// actually moves. Investment and payout rows are log entries of a ledger
/// effect that has already been applied.
/// User asked to add funds. Credits the wallet at approval time.
pub const TRANSACTION_KIND_DEPOSIT: &str = "DEPOSIT";

/// User asked to take funds out. Debits the wallet at approval time.
pub const TRANSACTION_KIND_WITHDRAW: &str = "WITHDRAW";

/// Principal locked into an investment. Log entry, never pending.
pub const TRANSACTION_KIND_INVESTMENT: &str = "INVESTMENT";

/// Matured payout credited back to the wallet. Log entry, never pending.
pub const TRANSACTION_KIND_PAYOUT: &str = "PAYOUT";

/// Transaction statuses
///
/// A pending request transitions at most once, to approved or rejected.
/// Approved and rejected are terminal. Completed marks log entries that
/// were never requests at all.
pub const TRANSACTION_STATUS_PENDING: &str = "PENDING";
pub const TRANSACTION_STATUS_APPROVED: &str = "APPROVED";
pub const TRANSACTION_STATUS_REJECTED: &str = "REJECTED";
pub const TRANSACTION_STATUS_COMPLETED: &str = "COMPLETED";
