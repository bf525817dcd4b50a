//! Nullable session: sign-in state you flip by hand.

use multisend_types::AccountId;
use multisend_wallet_core::{Session, WalletError};

/// A session whose sign-in state is fully controlled by the test.
pub struct NullSession {
    account: AccountId,
    signed_in: bool,
    logins: usize,
    logouts: usize,
}

impl NullSession {
    /// A session for `account` that is already signed in.
    pub fn signed_in(account: &str) -> Self {
        Self {
            account: AccountId::new(account).expect("test account id must be valid"),
            signed_in: true,
            logins: 0,
            logouts: 0,
        }
    }

    /// A session for `account` that has not signed in yet.
    pub fn signed_out(account: &str) -> Self {
        Self {
            signed_in: false,
            ..Self::signed_in(account)
        }
    }

    /// Number of `login` calls so far.
    pub fn logins(&self) -> usize {
        self.logins
    }

    /// Number of `logout` calls so far.
    pub fn logouts(&self) -> usize {
        self.logouts
    }
}

impl Session for NullSession {
    fn account_id(&self) -> Option<&AccountId> {
        self.signed_in.then_some(&self.account)
    }

    fn login(&mut self) -> Result<(), WalletError> {
        self.logins += 1;
        self.signed_in = true;
        Ok(())
    }

    fn logout(&mut self) {
        self.logouts += 1;
        self.signed_in = false;
    }
}
