// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &NewUser) -> Result<Id>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: Id) -> Result<()>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait GroupRepo {
    /// Returns the group with the given name and whether
    /// it has just been created.
    fn get_or_create_group(&self, name: &str) -> Result<(Group, bool)>;
    fn get_group(&self, id: Id) -> Result<Group>;
    fn try_get_group_by_name(&self, name: &str) -> Result<Option<Group>>;

    fn add_user_to_group(&self, user_id: Id, group_id: Id) -> Result<()>;
    fn is_user_in_group(&self, user_id: Id, group_name: &str) -> Result<bool>;
    fn groups_of_user(&self, user_id: Id) -> Result<Vec<Group>>;
}

pub trait RestaurantRepo {
    fn create_restaurant(&self, restaurant: &NewRestaurant) -> Result<Id>;
    fn update_restaurant(&self, restaurant: &Restaurant) -> Result<()>;
    /// Only touches the link to the admin group.
    fn set_restaurant_admin_group(&self, id: Id, group_id: Option<Id>) -> Result<()>;
    fn delete_restaurant(&self, id: Id) -> Result<()>;

    fn get_restaurant(&self, id: Id) -> Result<Restaurant>;
    /// Ordered by name
    fn all_restaurants(&self) -> Result<Vec<Restaurant>>;
    fn count_restaurants(&self) -> Result<usize>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &NewReview) -> Result<Id>;
    fn delete_review(&self, id: Id) -> Result<()>;

    fn get_review(&self, id: Id) -> Result<Review>;
    fn load_reviews_of_restaurant(&self, restaurant_id: Id) -> Result<Vec<Review>>;
    fn load_reviews_of_user(&self, user_id: Id) -> Result<Vec<Review>>;
}

pub trait ReportRepo {
    fn create_report(&self, report: &NewReport) -> Result<Id>;
    fn delete_report(&self, id: Id) -> Result<()>;

    fn get_report(&self, id: Id) -> Result<Report>;
    /// All reports of the restaurant if no category is given
    fn load_reports_of_restaurant(
        &self,
        restaurant_id: Id,
        category: Option<ReportCategory>,
    ) -> Result<Vec<Report>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestaurantRequestFilter {
    #[default]
    All,
    /// Only proposals for new restaurants
    NewRestaurants,
    /// Only proposals to edit the given restaurant
    ForRestaurant(Id),
}

pub trait RestaurantRequestRepo {
    fn create_restaurant_request(&self, request: &NewRestaurantRequest) -> Result<Id>;
    fn update_restaurant_request(&self, request: &RestaurantRequest) -> Result<()>;
    fn delete_restaurant_request(&self, id: Id) -> Result<()>;

    fn get_restaurant_request(&self, id: Id) -> Result<RestaurantRequest>;
    /// Ordered by id, i.e. oldest first
    fn list_restaurant_requests(
        &self,
        filter: RestaurantRequestFilter,
    ) -> Result<Vec<RestaurantRequest>>;
}

pub trait RejectionMessageRepo {
    fn create_rejection_message(&self, message: &NewRejectionMessage) -> Result<Id>;

    fn load_rejection_messages(
        &self,
        recipient: Id,
        only_unread: bool,
    ) -> Result<Vec<RejectionMessage>>;

    /// Returns the number of messages that have been marked as read.
    fn mark_rejection_messages_read(&self, recipient: Id) -> Result<usize>;
}
