use super::*;
use restodb_entities as e;

impl From<e::rating::AvgRating> for AvgRating {
    fn from(from: e::rating::AvgRating) -> Self {
        match from {
            e::rating::AvgRating::Value(v) => Self::Value(v),
            e::rating::AvgRating::NotAvailable => {
                Self::NotAvailable(e::rating::AvgRating::NOT_AVAILABLE.to_string())
            }
        }
    }
}

impl From<(e::restaurant::Restaurant, e::rating::AvgRating)> for RestaurantListItem {
    fn from((restaurant, avg_rating): (e::restaurant::Restaurant, e::rating::AvgRating)) -> Self {
        let e::restaurant::Restaurant {
            id,
            name,
            address,
            pos,
            contact_info,
            menu_text: _,
            admin_group: _,
        } = restaurant;
        Self {
            pk: id.to_i64(),
            name,
            address,
            latitude: pos.lat(),
            longitude: pos.lon(),
            contact_info,
            avg_rating: avg_rating.into(),
            id: id.to_i64(),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            user_id,
            restaurant_id: _,
            rating,
            review_text,
            created_at,
        } = from;
        Self {
            id: id.to_i64(),
            user_id: user_id.to_i64(),
            rating: rating.into(),
            review_text,
            created_at: created_at.as_millis(),
        }
    }
}
