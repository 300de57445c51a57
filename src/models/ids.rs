//! Strongly-typed account identifier
//!
//! Card numbers are user-supplied, fixed-length numeric strings. Wrapping
//! them in a newtype keeps validation in one place and prevents raw strings
//! from leaking into map keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a valid account id
pub const ACCOUNT_ID_LEN: usize = 10;

/// A validated account identifier (exactly 10 ASCII digits)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Parse an account id from a string
    ///
    /// The id must be exactly [`ACCOUNT_ID_LEN`] ASCII digits.
    pub fn parse(s: &str) -> Result<Self, AccountIdError> {
        let s = s.trim();
        if s.len() != ACCOUNT_ID_LEN {
            return Err(AccountIdError::WrongLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccountIdError::NonNumeric(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for account id parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountIdError {
    WrongLength(usize),
    NonNumeric(String),
}

impl fmt::Display for AccountIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "Account id must be exactly {} digits (got {} characters)",
                ACCOUNT_ID_LEN, len
            ),
            Self::NonNumeric(s) => write!(f, "Account id must be numeric: '{}'", s),
        }
    }
}

impl std::error::Error for AccountIdError {}
