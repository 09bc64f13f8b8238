use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use crate::core::{prelude::*, usecases};
use restodb_core::usecases::Error as ParameterError;

pub const COOKIE_EMAIL_KEY: &str = "restodb-user-email";

type Result<T> = std::result::Result<T, AppError>;

/// The optional session of the current request.
#[derive(Debug)]
pub struct Auth {
    account_email: Option<EmailAddress>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&EmailAddress> {
        self.account_email
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    /// The logged in user, if any.
    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<Option<User>> {
        let Some(email) = &self.account_email else {
            return Ok(None);
        };
        match usecases::authorize_user_by_email(repo, email) {
            Ok(user) => Ok(Some(user)),
            // Stale session of a deleted or deactivated user
            Err(ParameterError::Unauthorized) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn account_email_from_cookie(request: &Request) -> Option<EmailAddress> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let mut account_email = None;
        if cfg!(feature = "cookies") {
            account_email = Self::account_email_from_cookie(request);
        }
        Outcome::Success(Self { account_email })
    }
}

/// A request with a session.
#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Version(pub &'static str);
