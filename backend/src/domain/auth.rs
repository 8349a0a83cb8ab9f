//! Authentication primitives: sign-in credentials and registration payloads.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::profile::{normalize_full_name, EmailAddress, ProfileValidationError};

/// Domain error returned when an auth payload value is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Email was missing or malformed.
    Email(ProfileValidationError),
    /// Password was blank.
    EmptyPassword,
    /// Password is shorter than the minimum length.
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// Full name was provided but blank.
    BlankFullName,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(inner) => inner.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::BlankFullName => write!(f, "full name must not be blank"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// Minimum accepted password length for new registrations.
pub const PASSWORD_MIN: usize = 8;

/// Validated sign-in credentials used by authentication services.
///
/// ## Invariants
/// - `email` satisfies [`EmailAddress`] normalisation.
/// - `password` is non-empty but otherwise retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use backend::domain::SignInCredentials;
///
/// let creds = SignInCredentials::try_from_parts("ada@example.com", "password").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl SignInCredentials {
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

    /// Email address suitable for profile lookups.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration payload: credentials plus profile seed fields.
///
/// Registration enforces a minimum password length that sign-in does not,
/// so existing accounts predating the rule can still authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: SignInCredentials,
    full_name: Option<String>,
}

impl Registration {
    /// Construct a registration from raw inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<Self, AuthValidationError> {
        let credentials = SignInCredentials::try_from_parts(email, password)?;
        if password.chars().count() < PASSWORD_MIN {
            return Err(AuthValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        let full_name =
            normalize_full_name(full_name).map_err(|_| AuthValidationError::BlankFullName)?;

        Ok(Self {
            credentials,
            full_name,
        })
    }

    /// Credentials portion of the registration.
    pub fn credentials(&self) -> &SignInCredentials {
        &self.credentials
    }

    /// Normalised full name, if one was supplied.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}
