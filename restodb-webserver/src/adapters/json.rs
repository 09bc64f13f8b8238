use restodb_boundary as json;
use restodb_core::usecases::{RestaurantDetails, RestaurantWithRating};

pub fn restaurant_list_item(from: RestaurantWithRating) -> json::RestaurantListItem {
    let RestaurantWithRating {
        restaurant,
        avg_rating,
    } = from;
    (restaurant, avg_rating).into()
}

pub fn restaurant_list(from: Vec<RestaurantWithRating>) -> Vec<json::RestaurantListItem> {
    from.into_iter().map(restaurant_list_item).collect()
}

pub fn restaurant_details(from: RestaurantDetails) -> json::RestaurantDetails {
    let RestaurantDetails {
        restaurant,
        ratings,
        reviews,
    } = from;
    json::RestaurantDetails {
        id: restaurant.id.to_i64(),
        name: restaurant.name,
        address: restaurant.address,
        latitude: restaurant.pos.lat(),
        longitude: restaurant.pos.lon(),
        contact_info: restaurant.contact_info,
        menu_text: restaurant.menu_text,
        avg_rating: ratings.overall.into(),
        ratings: json::CategoryRatings {
            cleanliness: ratings.cleanliness.into(),
            crowdedness: ratings.crowdedness.into(),
            friendliness: ratings.friendliness.into(),
            menu_quality: ratings.menu_quality.into(),
        },
        reviews: reviews.into_iter().map(Into::into).collect(),
    }
}

/// Serializes the restaurant list for embedding into an inline script.
pub fn restaurant_list_script(items: &[json::RestaurantListItem]) -> serde_json::Result<String> {
    // A literal "</" would terminate the surrounding script element
    Ok(serde_json::to_string(items)?.replace("</", "<\\/"))
}
