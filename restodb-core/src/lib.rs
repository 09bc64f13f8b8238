pub mod db;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use restodb_entities::{
        email::*, geo::*, group::*, id::*, password::*, rating::*, rejection_message::*,
        report::*, restaurant::*, restaurant_request::*, review::*, time::*, user::*,
    };
}

pub use repositories::Error as RepoError;
