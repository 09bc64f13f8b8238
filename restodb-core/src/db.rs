use crate::repositories::*;

/// All repositories at once.
pub trait Db:
    UserRepo
    + GroupRepo
    + RestaurantRepo
    + ReviewRepo
    + ReportRepo
    + RestaurantRequestRepo
    + RejectionMessageRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + GroupRepo
        + RestaurantRepo
        + ReviewRepo
        + ReportRepo
        + RestaurantRequestRepo
        + RejectionMessageRepo
{
}
