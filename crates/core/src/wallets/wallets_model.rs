//! Wallet domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One wallet per account, holding a single non-negative balance in minor
/// units.
///
/// The balance is only ever changed by the ledger's credit and debit
/// operations, each atomic with the event that triggered it (approval,
/// investment open, claim).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub account_id: String,
    pub balance: Money,
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    pub fn can_cover(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}
