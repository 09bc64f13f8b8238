use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// An average rating: either a number or `"N/A"`
/// if nothing has been rated yet.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum AvgRating {
    Value(f64),
    NotAvailable(String),
}

/// A restaurant as listed on the map.
///
/// `pk` and `id` always carry the same value.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RestaurantListItem {
    pub pk           : i64,
    pub name         : String,
    pub address      : String,
    pub latitude     : f64,
    pub longitude    : f64,
    pub contact_info : String,
    pub avg_rating   : AvgRating,
    pub id           : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CategoryRatings {
    pub cleanliness  : AvgRating,
    pub crowdedness  : AvgRating,
    pub friendliness : AvgRating,
    pub menu_quality : AvgRating,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    pub id          : i64,
    pub user_id     : i64,
    pub rating      : u8,
    pub review_text : String,
    /// Milliseconds since the epoch
    pub created_at  : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RestaurantDetails {
    pub id           : i64,
    pub name         : String,
    pub address      : String,
    pub latitude     : f64,
    pub longitude    : f64,
    pub contact_info : String,
    pub menu_text    : String,
    pub avg_rating   : AvgRating,
    pub ratings      : CategoryRatings,
    pub reviews      : Vec<Review>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ServerVersion {
    pub version: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
