use super::{prelude::*, restaurant_ratings};
use crate::rating::{Rated, RestaurantRatings};

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantWithRating {
    pub restaurant: Restaurant,
    pub avg_rating: AvgRating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetails {
    pub restaurant: Restaurant,
    pub ratings: RestaurantRatings,
    pub reviews: Vec<Review>,
}

/// All restaurants ordered by name with their overall rating.
pub fn load_restaurants<R>(repo: &R) -> Result<Vec<RestaurantWithRating>>
where
    R: RestaurantRepo + ReviewRepo,
{
    let restaurants = repo.all_restaurants()?;
    let mut results = Vec::with_capacity(restaurants.len());
    for restaurant in restaurants {
        let reviews = repo.load_reviews_of_restaurant(restaurant.id)?;
        let avg_rating = restaurant.avg_review_rating(&reviews);
        results.push(RestaurantWithRating {
            restaurant,
            avg_rating,
        });
    }
    Ok(results)
}

pub fn load_restaurant_details<R>(repo: &R, id: Id) -> Result<RestaurantDetails>
where
    R: RestaurantRepo + ReviewRepo + ReportRepo,
{
    let restaurant = repo.get_restaurant(id)?;
    let ratings = restaurant_ratings(repo, &restaurant)?;
    let reviews = repo.load_reviews_of_restaurant(restaurant.id)?;
    Ok(RestaurantDetails {
        restaurant,
        ratings,
        reviews,
    })
}

pub fn load_edit_requests<R>(repo: &R, restaurant_id: Id) -> Result<Vec<RestaurantRequest>>
where
    R: RestaurantRepo + RestaurantRequestRepo,
{
    // Fail early for unknown restaurants
    let restaurant = repo.get_restaurant(restaurant_id)?;
    Ok(repo.list_restaurant_requests(RestaurantRequestFilter::ForRestaurant(restaurant.id))?)
}

pub fn load_new_restaurant_requests<R>(repo: &R) -> Result<Vec<RestaurantRequest>>
where
    R: RestaurantRequestRepo,
{
    Ok(repo.list_restaurant_requests(RestaurantRequestFilter::NewRestaurants)?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use restodb_entities::builders::*;

    #[test]
    fn list_restaurants_with_ratings_ordered_by_name() {
        let db = MockDb::default();
        let b = create_restaurant(&db, NewRestaurant::build().name("B").finish()).unwrap();
        let a = create_restaurant(&db, NewRestaurant::build().name("A").finish()).unwrap();
        db.create_review(&NewReview {
            user_id: Id::new(1),
            restaurant_id: b,
            rating: RatingValue::new(4),
            review_text: "fine".into(),
            created_at: Timestamp::now(),
        })
        .unwrap();

        let list = load_restaurants(&db).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].restaurant.id, a);
        assert_eq!(list[0].avg_rating, AvgRating::NotAvailable);
        assert_eq!(list[1].restaurant.id, b);
        assert_eq!(list[1].avg_rating, AvgRating::Value(4.0));
    }

    #[test]
    fn load_details() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        let details = load_restaurant_details(&db, id).unwrap();
        assert_eq!(details.restaurant.id, id);
        assert!(details.reviews.is_empty());
        assert_eq!(details.ratings, RestaurantRatings::default());
        assert!(load_restaurant_details(&db, Id::new(100)).is_err());
    }

    #[test]
    fn separate_edit_and_new_restaurant_requests() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        create_restaurant_request(
            &db,
            RequestSubmission {
                corresponding_restaurant: Some(id),
                ..Default::default()
            },
        )
        .unwrap();
        create_restaurant_request(&db, RequestSubmission::default()).unwrap();

        let edits = load_edit_requests(&db, id).unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].corresponding_restaurant, Some(id));
        let new = load_new_restaurant_requests(&db).unwrap();
        assert_eq!(new.len(), 1);
        assert!(new[0].is_new_restaurant());
    }
}
