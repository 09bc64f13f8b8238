use std::{fmt, str::FromStr};
use thiserror::Error;

/// A bcrypt password hash.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Password(String);

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    pub const fn max_len() -> usize {
        128
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password is too short")]
    TooShort,
    #[error("The password is too long")]
    TooLong,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl From<String> for Password {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        let len = password.chars().count();
        if len < Password::min_len() {
            return Err(ParseError::TooShort);
        }
        if len > Password::max_len() {
            return Err(ParseError::TooLong);
        }
        let res = Self(pwhash::bcrypt::hash(password)?);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
