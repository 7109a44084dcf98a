//! Account domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an account holder.
///
/// Credentials and sessions are owned by the auth layer; the engine only
/// reads the identifier and the admin flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new account.
///
/// Invoked by the auth layer on registration; the storage layer creates
/// the account together with its zero-balance wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub is_admin: bool,
}

impl NewAccount {
    /// Validates the new account data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Admin listing row: an account joined with its wallet balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithBalance {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub balance: Money,
}

/// Authenticated caller identity, as established by the auth layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caller {
    pub account_id: String,
    pub is_admin: bool,
}

impl Caller {
    pub fn user(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            is_admin: false,
        }
    }

    pub fn admin(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            is_admin: true,
        }
    }

    /// Admin gate used by every admin-only operation.
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(Error::Forbidden)
        }
    }
}
