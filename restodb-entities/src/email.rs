use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress {
    address: String,
}

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self { address }
    }
    pub fn into_string(self) -> String {
        self.address
    }
    pub fn as_str(&self) -> &str {
        self.address.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

/// The domain part is case-insensitive and gets normalized
/// to lower case, the local part is kept as is.
fn normalize(addr: &str) -> String {
    match addr.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => addr.to_owned(),
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s.trim())
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        Ok(Self {
            address: normalize(&info.addr),
        })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_normalize_domain() {
        let email: EmailAddress = " Jane.Doe@Example.ORG ".parse().unwrap();
        assert_eq!(email.as_str(), "Jane.Doe@example.org");
    }

    #[test]
    fn reject_garbage() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("a@b.c, d@e.f".parse::<EmailAddress>().is_err());
    }
}
