use super::json_error_response;
use anyhow::anyhow;
use restodb_application::error::{AppError, BError};
pub use restodb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Self::App(err) => app_error_status(err),
            Self::OtherWithStatus(_, status) => *status,
            Self::Other(_) => Status::InternalServerError,
        }
    }
}

fn parameter_error_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden => Status::Forbidden,
        ParameterError::UserInactive => Status::Forbidden,
        ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
        ParameterError::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

fn app_error_status(err: &AppError) -> Status {
    match err {
        AppError::Business(BError::Parameter(err)) => parameter_error_status(err),
        AppError::Business(BError::Repo(RepoError::NotFound)) => Status::NotFound,
        AppError::Business(BError::ParseInt(_)) => Status::BadRequest,
        _ => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let status = self.status();
        if status.code >= 500 {
            error!("Error: {self}");
            return Err(status);
        }
        json_error_response(req, &self, status)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        AppError::from(err).into()
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<restodb_entities::email::EmailAddressParseError> for Error {
    fn from(err: restodb_entities::email::EmailAddressParseError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_errors_to_http_status() {
        assert_eq!(
            Error::from(ParameterError::Latitude).status(),
            Status::BadRequest
        );
        assert_eq!(
            Error::from(ParameterError::Unauthorized).status(),
            Status::Unauthorized
        );
        assert_eq!(
            Error::from(ParameterError::Forbidden).status(),
            Status::Forbidden
        );
        assert_eq!(Error::from(RepoError::NotFound).status(), Status::NotFound);
        assert_eq!(
            Error::from(ParameterError::Repo(RepoError::NotFound)).status(),
            Status::NotFound
        );
        assert_eq!(
            Error::from(RepoError::Other(anyhow!("broken"))).status(),
            Status::InternalServerError
        );
    }
}
