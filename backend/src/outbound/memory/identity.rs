//! In-memory identity provider.

use std::sync::Mutex;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::{IdentityError, IdentityProvider};
use crate::domain::{Credentials, SignUp, User, UserId};

#[derive(Debug)]
struct Account {
    user: User,
    password: Zeroizing<String>,
}

/// Account registry held in process memory.
///
/// Email lookups are case-insensitive because [`crate::domain::EmailAddress`]
/// normalises to lowercase at the boundary.
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryIdentityProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Account>>, IdentityError> {
        self.accounts
            .lock()
            .map_err(|_| IdentityError::unavailable("account registry lock poisoned"))
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn register(&self, signup: &SignUp) -> Result<User, IdentityError> {
        let mut accounts = self.lock()?;
        if accounts
            .iter()
            .any(|account| account.user.email() == signup.email())
        {
            return Err(IdentityError::EmailTaken);
        }

        let user = User::new(
            UserId::random(),
            signup.email().clone(),
            signup.display_name().cloned(),
        );
        accounts.push(Account {
            user: user.clone(),
            password: Zeroizing::new(signup.password().to_owned()),
        });
        Ok(user)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<User, IdentityError> {
        let accounts = self.lock()?;
        accounts
            .iter()
            .find(|account| {
                account.user.email() == credentials.email()
                    && account.password.as_str() == credentials.password()
            })
            .map(|account| account.user.clone())
            .ok_or(IdentityError::InvalidCredentials)
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, IdentityError> {
        let accounts = self.lock()?;
        Ok(accounts
            .iter()
            .find(|account| account.user.id() == id)
            .map(|account| account.user.clone()))
    }
}
