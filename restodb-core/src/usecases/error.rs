use crate::{repositories, util::validate::RestaurantInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Latitude must be between -90 and 90")]
    Latitude,
    #[error("Longitude must be between -180 and 180")]
    Longitude,
    #[error("The {0} must not exceed {1} characters")]
    TextTooLong(&'static str, usize),
    #[error("The {0} must not be empty")]
    EmptyField(&'static str),
    #[error("Rating must be at least 1")]
    RatingTooLow,
    #[error("Rating must be at most 5")]
    RatingTooHigh,
    #[error("Invalid report category")]
    ReportCategory,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user account has been deactivated")]
    UserInactive,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Errors caused by invalid input that the user could fix.
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::Latitude
                | Self::Longitude
                | Self::TextTooLong(..)
                | Self::EmptyField(_)
                | Self::RatingTooLow
                | Self::RatingTooHigh
                | Self::ReportCategory
                | Self::Email
                | Self::Password
                | Self::UserExists
        )
    }
}

impl From<restodb_entities::password::ParseError> for Error {
    fn from(_: restodb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<restodb_entities::email::EmailAddressParseError> for Error {
    fn from(_: restodb_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<RestaurantInvalidation> for Error {
    fn from(err: RestaurantInvalidation) -> Self {
        match err {
            RestaurantInvalidation::Latitude => Self::Latitude,
            RestaurantInvalidation::Longitude => Self::Longitude,
            RestaurantInvalidation::TextTooLong(field, max_len) => Self::TextTooLong(field, max_len),
        }
    }
}
