//! Recipient account identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccountIdError;

/// The name of a transfer recipient, e.g. `alice.testnet`.
///
/// Restricted to ASCII letters, digits, `_`, `-` and `.`. Whether the account
/// actually exists on chain is not checked here.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Whether `c` may appear in an account id.
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
    }

    pub fn new(raw: impl Into<String>) -> Result<Self, AccountIdError> {
        let s = raw.into();
        if s.is_empty() {
            return Err(AccountIdError::Empty);
        }
        if let Some(ch) = s.chars().find(|c| !Self::is_valid_char(*c)) {
            return Err(AccountIdError::InvalidChar { account: s, ch });
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_named_and_implicit_accounts() {
        for id in ["alice.testnet", "bob_1", "multi-sender.near", "a"] {
            assert!(AccountId::new(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(AccountId::new(""), Err(AccountIdError::Empty));
    }

    #[test]
    fn rejects_foreign_characters() {
        let err = AccountId::new("alice bob").unwrap_err();
        assert_eq!(
            err,
            AccountIdError::InvalidChar {
                account: "alice bob".into(),
                ch: ' '
            }
        );
        assert!(AccountId::new("ålice").is_err());
    }

    #[test]
    fn serde_validates_on_the_way_in() {
        let id: AccountId = serde_json::from_str("\"carol.near\"").expect("valid");
        assert_eq!(id.as_str(), "carol.near");
        assert!(serde_json::from_str::<AccountId>("\"not valid\"").is_err());
    }
}
