pub use restodb_core::{db, rating, repositories, usecases};

pub mod entities {
    pub use restodb_core::entities::*;
    #[cfg(test)]
    pub use restodb_entities::builders::*;
}

pub mod prelude {

    use std::result;

    pub use restodb_application::error::*;

    pub use super::{db::*, entities::*, repositories::*};

    pub type Result<T> = result::Result<T, restodb_application::error::AppError>;
}
