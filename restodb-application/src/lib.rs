#[macro_use]
extern crate log;

mod create_restaurant_request;
mod create_review;
mod create_user;
mod login;
mod mark_messages_read;
mod moderate_restaurant_request;

pub mod prelude {
    pub use super::{
        create_restaurant_request::*, create_review::*, create_user::*,
        login::*, mark_messages_read::*, moderate_restaurant_request::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use restodb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use restodb_db_sqlite::Connections;
}
