//! Signed-in identity.
//!
//! The surrounding application owns sign-in; the sender only asks whether a
//! session is active and on whose behalf it would sign.

use multisend_types::AccountId;

use crate::error::WalletError;

/// An identity session that can sign contract calls.
pub trait Session {
    /// The account calls are signed with, if signed in.
    fn account_id(&self) -> Option<&AccountId>;

    fn is_signed_in(&self) -> bool {
        self.account_id().is_some()
    }

    fn login(&mut self) -> Result<(), WalletError>;

    fn logout(&mut self);
}

/// A session backed by a preconfigured signer account.
///
/// Starts signed in when an account is configured.
#[derive(Clone, Debug)]
pub struct StaticSession {
    account: Option<AccountId>,
    active: bool,
}

impl StaticSession {
    pub fn new(account: Option<AccountId>) -> Self {
        let active = account.is_some();
        Self { account, active }
    }
}

impl Session for StaticSession {
    fn account_id(&self) -> Option<&AccountId> {
        self.account.as_ref().filter(|_| self.active)
    }

    fn login(&mut self) -> Result<(), WalletError> {
        if self.account.is_none() {
            return Err(WalletError::Session("no signer account configured".into()));
        }
        self.active = true;
        Ok(())
    }

    fn logout(&mut self) {
        self.active = false;
    }
}
