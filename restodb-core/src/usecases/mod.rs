mod approve_restaurant_request;
mod authorize;
mod average_rating;
mod create_new_user;
mod create_report;
mod create_restaurant;
mod create_restaurant_request;
mod create_review;
mod error;
mod load_restaurants;
mod login;
mod mark_messages_read;
mod reject_restaurant_request;

#[cfg(test)]
pub mod tests;

pub use self::{
    approve_restaurant_request::*, authorize::*, average_rating::*, create_new_user::*,
    create_report::*, create_restaurant::*, create_restaurant_request::*, create_review::*,
    error::Error, load_restaurants::*, login::*, mark_messages_read::*,
    reject_restaurant_request::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
