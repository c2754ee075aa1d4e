//! Authentication payloads consumed by the Identity Provider port.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to the provider.

use std::fmt;

use zeroize::Zeroizing;

use super::{DisplayName, EmailAddress, UserValidationError};

/// Minimum password length accepted at account creation.
pub const PASSWORD_MIN: usize = 6;

/// Domain error returned when authentication payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Email failed [`EmailAddress`] validation.
    Email(UserValidationError),
    /// Password was blank.
    EmptyPassword,
    /// Password was shorter than [`PASSWORD_MIN`] characters.
    PasswordTooShort {
        /// Minimum number of characters required.
        min: usize,
    },
    /// Display name failed [`DisplayName`] validation.
    DisplayName(UserValidationError),
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(err) => write!(f, "{err}"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::DisplayName(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// Validated sign-in credentials.
///
/// ## Invariants
/// - `email` is normalised by [`EmailAddress`].
/// - `password` is non-empty and retains caller-provided whitespace to avoid
///   surprising credential comparisons; the backing storage is zeroised on
///   drop.
///
/// # Examples
/// ```
/// use backend::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("ada@example.com", "secret1").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// ```
#[derive(Debug, Clone)]
pub struct Credentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthValidationError> {
        let email = EmailAddress::new(email).map_err(AuthValidationError::Email)?;
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address used for the account lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password as provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated account-creation request.
///
/// Enforces the provider's minimum password length up front so a weak
/// password never leaves the process.
#[derive(Debug, Clone)]
pub struct SignUp {
    email: EmailAddress,
    password: Zeroizing<String>,
    display_name: Option<DisplayName>,
}

impl SignUp {
    /// Construct a sign-up request from raw form inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Self, AuthValidationError> {
        let email = EmailAddress::new(email).map_err(AuthValidationError::Email)?;
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }
        if password.chars().count() < PASSWORD_MIN {
            return Err(AuthValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        let display_name = display_name
            .map(DisplayName::new)
            .transpose()
            .map_err(AuthValidationError::DisplayName)?;

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
            display_name,
        })
    }

    /// Email address for the new account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password for the new account.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Optional display name supplied at sign-up.
    pub fn display_name(&self) -> Option<&DisplayName> {
        self.display_name.as_ref()
    }
}
