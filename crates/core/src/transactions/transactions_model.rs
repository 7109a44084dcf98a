//! Transaction domain models.
//!
//! One row shape covers two roles, split by an explicit kind discriminant:
//! deposit/withdraw rows are approval requests, investment/payout rows are
//! audit log entries. Only the request kinds may ever be pending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::transactions_constants::*;
use super::transactions_errors::TransactionError;
use crate::money::{Money, MoneyError};
use crate::{errors::ValidationError, Error, Result};

/// Discriminant for transaction rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Investment,
    Payout,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => TRANSACTION_KIND_DEPOSIT,
            TransactionKind::Withdraw => TRANSACTION_KIND_WITHDRAW,
            TransactionKind::Investment => TRANSACTION_KIND_INVESTMENT,
            TransactionKind::Payout => TRANSACTION_KIND_PAYOUT,
        }
    }

    /// Only deposit and withdraw rows are requests that may sit pending.
    pub fn is_request(&self) -> bool {
        matches!(self, TransactionKind::Deposit | TransactionKind::Withdraw)
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == TRANSACTION_KIND_DEPOSIT => Ok(TransactionKind::Deposit),
            s if s == TRANSACTION_KIND_WITHDRAW => Ok(TransactionKind::Withdraw),
            s if s == TRANSACTION_KIND_INVESTMENT => Ok(TransactionKind::Investment),
            s if s == TRANSACTION_KIND_PAYOUT => Ok(TransactionKind::Payout),
            _ => Err(TransactionError::UnknownKind(s.to_string())),
        }
    }
}

/// Lifecycle state of a transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => TRANSACTION_STATUS_PENDING,
            TransactionStatus::Approved => TRANSACTION_STATUS_APPROVED,
            TransactionStatus::Rejected => TRANSACTION_STATUS_REJECTED,
            TransactionStatus::Completed => TRANSACTION_STATUS_COMPLETED,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

impl FromStr for TransactionStatus {
    type Err = TransactionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == TRANSACTION_STATUS_PENDING => Ok(TransactionStatus::Pending),
            s if s == TRANSACTION_STATUS_APPROVED => Ok(TransactionStatus::Approved),
            s if s == TRANSACTION_STATUS_REJECTED => Ok(TransactionStatus::Rejected),
            s if s == TRANSACTION_STATUS_COMPLETED => Ok(TransactionStatus::Completed),
            _ => Err(TransactionError::UnknownStatus(s.to_string())),
        }
    }
}

/// Domain model representing one row in the money-movement log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub kind: TransactionKind,
    pub amount: Money,
    pub status: TransactionStatus,
    pub meta: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

/// Input model for inserting a new transaction row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub kind: TransactionKind,
    pub amount: Money,
    pub status: TransactionStatus,
    pub meta: Option<String>,
}

impl NewTransaction {
    /// A deposit request awaiting admin approval. No ledger effect yet.
    pub fn pending_deposit(account_id: &str, amount: Money, meta: Option<String>) -> Self {
        Self {
            id: None,
            account_id: account_id.to_string(),
            kind: TransactionKind::Deposit,
            amount,
            status: TransactionStatus::Pending,
            meta,
        }
    }

    /// A withdraw request awaiting admin approval. No ledger effect yet.
    pub fn pending_withdraw(account_id: &str, amount: Money, meta: Option<String>) -> Self {
        Self {
            id: None,
            account_id: account_id.to_string(),
            kind: TransactionKind::Withdraw,
            amount,
            status: TransactionStatus::Pending,
            meta,
        }
    }

    /// Log entry for principal locked into an investment.
    pub fn investment_log(account_id: &str, amount: Money, meta: Option<String>) -> Self {
        Self {
            id: None,
            account_id: account_id.to_string(),
            kind: TransactionKind::Investment,
            amount,
            status: TransactionStatus::Completed,
            meta,
        }
    }

    /// Log entry for a matured payout credited back to the wallet.
    pub fn payout_log(account_id: &str, amount: Money, meta: Option<String>) -> Self {
        Self {
            id: None,
            account_id: account_id.to_string(),
            kind: TransactionKind::Payout,
            amount,
            status: TransactionStatus::Completed,
            meta,
        }
    }

    /// Validates the new transaction data
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_positive() {
            return Err(MoneyError::InvalidAmount.into());
        }
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.status == TransactionStatus::Pending && !self.kind.is_request() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Only deposit and withdraw rows may be pending".to_string(),
            )));
        }
        Ok(())
    }
}
