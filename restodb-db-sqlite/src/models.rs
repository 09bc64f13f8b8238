#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps are stored as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use restodb_core::entities::*;

use super::schema::*;

///////////////////////////////////////////////////////////////////////
// Users & Groups
///////////////////////////////////////////////////////////////////////

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: i64,
    pub last_login: Option<i64>,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(u: &'a User) -> Self {
        Self {
            email: u.email.as_str(),
            name: &u.name,
            password: u.password.as_ref(),
            is_active: u.is_active,
            is_staff: u.is_staff,
            is_superuser: u.is_superuser,
            date_joined: u.date_joined.as_millis(),
            last_login: u.last_login.map(Timestamp::as_millis),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: i64,
    pub last_login: Option<i64>,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            email,
            name,
            password,
            is_active,
            is_staff,
            is_superuser,
            date_joined,
            last_login,
        } = from;
        Self {
            id: Id::new(id),
            email: EmailAddress::new_unchecked(email),
            name,
            password: Password::from(password),
            is_active,
            is_staff,
            is_superuser,
            date_joined: Timestamp::from_millis(date_joined),
            last_login: last_login.map(Timestamp::from_millis),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = auth_groups)]
pub struct NewGroup<'a> {
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct GroupEntity {
    pub id: i64,
    pub name: String,
}

impl From<GroupEntity> for Group {
    fn from(from: GroupEntity) -> Self {
        Self {
            id: Id::new(from.id),
            name: from.name,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = user_groups)]
pub struct UserGroup {
    pub user_id: i64,
    pub group_id: i64,
}

///////////////////////////////////////////////////////////////////////
// Restaurants
///////////////////////////////////////////////////////////////////////

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub contact_info: &'a str,
    pub menu_text: &'a str,
}

impl<'a> From<&'a restodb_core::entities::NewRestaurant> for NewRestaurant<'a> {
    fn from(r: &'a restodb_core::entities::NewRestaurant) -> Self {
        Self {
            name: &r.name,
            address: &r.address,
            lat: r.pos.lat(),
            lon: r.pos.lon(),
            contact_info: &r.contact_info,
            menu_text: &r.menu_text,
        }
    }
}

/// The editable fields, i.e. without the admin group.
impl<'a> From<&'a Restaurant> for NewRestaurant<'a> {
    fn from(r: &'a Restaurant) -> Self {
        Self {
            name: &r.name,
            address: &r.address,
            lat: r.pos.lat(),
            lon: r.pos.lon(),
            contact_info: &r.contact_info,
            menu_text: &r.menu_text,
        }
    }
}

#[derive(Queryable)]
pub struct RestaurantEntity {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub contact_info: String,
    pub menu_text: String,
    pub admin_group: Option<i64>,
}

impl From<RestaurantEntity> for Restaurant {
    fn from(from: RestaurantEntity) -> Self {
        let RestaurantEntity {
            id,
            name,
            address,
            lat,
            lon,
            contact_info,
            menu_text,
            admin_group,
        } = from;
        Self {
            id: Id::new(id),
            name,
            address,
            pos: MapPoint::new_unchecked(lat, lon),
            contact_info,
            menu_text,
            admin_group: admin_group.map(Id::new),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews & Reports
///////////////////////////////////////////////////////////////////////

fn load_rating_value(value: i16) -> anyhow::Result<RatingValue> {
    RatingValue::try_from_i64(value.into()).ok_or_else(|| anyhow!("Invalid rating value: {value}"))
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub user_id: i64,
    pub restaurant_id: i64,
    pub rating: i16,
    pub review_text: &'a str,
    pub created_at: i64,
}

impl<'a> From<&'a restodb_core::entities::NewReview> for NewReview<'a> {
    fn from(r: &'a restodb_core::entities::NewReview) -> Self {
        Self {
            user_id: r.user_id.to_i64(),
            restaurant_id: r.restaurant_id.to_i64(),
            rating: r.rating.into(),
            review_text: &r.review_text,
            created_at: r.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub rating: i16,
    pub review_text: String,
    pub created_at: i64,
}

impl TryFrom<ReviewEntity> for Review {
    type Error = anyhow::Error;

    fn try_from(from: ReviewEntity) -> anyhow::Result<Self> {
        let ReviewEntity {
            id,
            user_id,
            restaurant_id,
            rating,
            review_text,
            created_at,
        } = from;
        Ok(Self {
            id: Id::new(id),
            user_id: Id::new(user_id),
            restaurant_id: Id::new(restaurant_id),
            rating: load_rating_value(rating)?,
            review_text,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = reports)]
pub struct NewReport {
    pub user_id: i64,
    pub restaurant_id: i64,
    pub category: i16,
    pub rating: i16,
    pub created_at: i64,
}

impl TryFrom<&restodb_core::entities::NewReport> for NewReport {
    type Error = anyhow::Error;

    fn try_from(r: &restodb_core::entities::NewReport) -> anyhow::Result<Self> {
        Ok(Self {
            user_id: r.user_id.to_i64(),
            restaurant_id: r.restaurant_id.to_i64(),
            category: store_report_category(r.category)?,
            rating: r.rating.into(),
            created_at: r.created_at.as_millis(),
        })
    }
}

pub fn store_report_category(category: ReportCategory) -> anyhow::Result<i16> {
    category
        .to_i16()
        .ok_or_else(|| anyhow!("Unsupported report category: {category}"))
}

#[derive(Queryable)]
pub struct ReportEntity {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub category: i16,
    pub rating: i16,
    pub created_at: i64,
}

impl TryFrom<ReportEntity> for Report {
    type Error = anyhow::Error;

    fn try_from(from: ReportEntity) -> anyhow::Result<Self> {
        let ReportEntity {
            id,
            user_id,
            restaurant_id,
            category,
            rating,
            created_at,
        } = from;
        let category = ReportCategory::from_i16(category)
            .ok_or_else(|| anyhow!("Invalid report category: {category}"))?;
        Ok(Self {
            id: Id::new(id),
            user_id: Id::new(user_id),
            restaurant_id: Id::new(restaurant_id),
            category,
            rating: load_rating_value(rating)?,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

///////////////////////////////////////////////////////////////////////
// Moderation
///////////////////////////////////////////////////////////////////////

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = restaurant_requests)]
#[diesel(treat_none_as_null = true)]
pub struct NewRestaurantRequest<'a> {
    pub corresponding_restaurant: Option<i64>,
    pub requester: Option<i64>,
    pub name: &'a str,
    pub address: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub contact_info: &'a str,
    pub menu_text: &'a str,
}

impl<'a> From<&'a restodb_core::entities::NewRestaurantRequest> for NewRestaurantRequest<'a> {
    fn from(r: &'a restodb_core::entities::NewRestaurantRequest) -> Self {
        Self {
            corresponding_restaurant: r.corresponding_restaurant.map(Id::to_i64),
            requester: r.requester.map(Id::to_i64),
            name: &r.name,
            address: &r.address,
            lat: r.pos.lat(),
            lon: r.pos.lon(),
            contact_info: &r.contact_info,
            menu_text: &r.menu_text,
        }
    }
}

impl<'a> From<&'a RestaurantRequest> for NewRestaurantRequest<'a> {
    fn from(r: &'a RestaurantRequest) -> Self {
        Self {
            corresponding_restaurant: r.corresponding_restaurant.map(Id::to_i64),
            requester: r.requester.map(Id::to_i64),
            name: &r.name,
            address: &r.address,
            lat: r.pos.lat(),
            lon: r.pos.lon(),
            contact_info: &r.contact_info,
            menu_text: &r.menu_text,
        }
    }
}

#[derive(Queryable)]
pub struct RestaurantRequestEntity {
    pub id: i64,
    pub corresponding_restaurant: Option<i64>,
    pub requester: Option<i64>,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub contact_info: String,
    pub menu_text: String,
}

impl From<RestaurantRequestEntity> for RestaurantRequest {
    fn from(from: RestaurantRequestEntity) -> Self {
        let RestaurantRequestEntity {
            id,
            corresponding_restaurant,
            requester,
            name,
            address,
            lat,
            lon,
            contact_info,
            menu_text,
        } = from;
        Self {
            id: Id::new(id),
            corresponding_restaurant: corresponding_restaurant.map(Id::new),
            requester: requester.map(Id::new),
            name,
            address,
            pos: MapPoint::new_unchecked(lat, lon),
            contact_info,
            menu_text,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = rejection_messages)]
pub struct NewRejectionMessage<'a> {
    pub recipient: i64,
    pub for_what: &'a str,
    pub message: &'a str,
    pub read: bool,
}

impl<'a> From<&'a restodb_core::entities::NewRejectionMessage> for NewRejectionMessage<'a> {
    fn from(m: &'a restodb_core::entities::NewRejectionMessage) -> Self {
        Self {
            recipient: m.recipient.to_i64(),
            for_what: &m.for_what,
            message: &m.message,
            read: false,
        }
    }
}

#[derive(Queryable)]
pub struct RejectionMessageEntity {
    pub id: i64,
    pub recipient: i64,
    pub for_what: String,
    pub message: String,
    pub read: bool,
}

impl From<RejectionMessageEntity> for RejectionMessage {
    fn from(from: RejectionMessageEntity) -> Self {
        let RejectionMessageEntity {
            id,
            recipient,
            for_what,
            message,
            read,
        } = from;
        Self {
            id: Id::new(id),
            recipient: Id::new(recipient),
            for_what,
            message,
            read,
        }
    }
}
