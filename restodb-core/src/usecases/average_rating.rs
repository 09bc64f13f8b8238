use super::prelude::*;
use crate::rating::{Rated, RatingSubject, RestaurantRatings};

/// Recomputes the average rating from all stored records.
pub fn average_rating<R>(repo: &R, restaurant_id: Id, subject: RatingSubject) -> Result<AvgRating>
where
    R: RestaurantRepo + ReviewRepo + ReportRepo,
{
    let restaurant = repo.get_restaurant(restaurant_id)?;
    let avg = match subject {
        RatingSubject::Review => {
            let reviews = repo.load_reviews_of_restaurant(restaurant.id)?;
            restaurant.avg_review_rating(&reviews)
        }
        RatingSubject::Report(category) => {
            let reports = repo.load_reports_of_restaurant(restaurant.id, Some(category))?;
            restaurant.avg_report_rating(&reports, category)
        }
    };
    Ok(avg)
}

pub fn restaurant_ratings<R>(repo: &R, restaurant: &Restaurant) -> Result<RestaurantRatings>
where
    R: ReviewRepo + ReportRepo,
{
    let reviews = repo.load_reviews_of_restaurant(restaurant.id)?;
    let reports = repo.load_reports_of_restaurant(restaurant.id, None)?;
    Ok(restaurant.avg_ratings(&reviews, &reports))
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use crate::RepoError;
    use restodb_entities::builders::*;

    fn review(db: &MockDb, restaurant_id: Id, rating: u8) -> Id {
        db.create_review(&NewReview {
            user_id: Id::new(1),
            restaurant_id,
            rating: RatingValue::new(rating),
            review_text: "ok".into(),
            created_at: Timestamp::now(),
        })
        .unwrap()
    }

    fn report(db: &MockDb, restaurant_id: Id, category: ReportCategory, rating: u8) {
        db.create_report(&NewReport {
            user_id: Id::new(1),
            restaurant_id,
            category,
            rating: RatingValue::new(rating),
            created_at: Timestamp::now(),
        })
        .unwrap();
    }

    #[test]
    fn overall_rating_from_reviews() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        let other = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        assert_eq!(
            average_rating(&db, id, RatingSubject::Review).unwrap(),
            AvgRating::NotAvailable
        );
        review(&db, id, 5);
        review(&db, id, 1);
        review(&db, id, 1);
        review(&db, other, 5);
        assert_eq!(
            average_rating(&db, id, RatingSubject::Review).unwrap(),
            AvgRating::Value(2.33)
        );
    }

    #[test]
    fn recompute_after_deleting_a_review() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        let five = review(&db, id, 5);
        review(&db, id, 1);
        assert_eq!(
            average_rating(&db, id, RatingSubject::Review).unwrap(),
            AvgRating::Value(3.0)
        );
        db.delete_review(five).unwrap();
        assert_eq!(
            average_rating(&db, id, RatingSubject::Review).unwrap(),
            AvgRating::Value(1.0)
        );
    }

    #[test]
    fn category_rating_from_reports() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        report(&db, id, ReportCategory::Cleanliness, 4);
        report(&db, id, ReportCategory::Cleanliness, 5);
        report(&db, id, ReportCategory::MenuQuality, 1);

        let cleanliness = RatingSubject::Report(ReportCategory::Cleanliness);
        assert_eq!(
            average_rating(&db, id, cleanliness).unwrap(),
            AvgRating::Value(4.5)
        );
        let friendliness = RatingSubject::Report(ReportCategory::Friendliness);
        assert_eq!(
            average_rating(&db, id, friendliness).unwrap().to_string(),
            "N/A"
        );

        let restaurant = db.get_restaurant(id).unwrap();
        let ratings = restaurant_ratings(&db, &restaurant).unwrap();
        assert_eq!(ratings.overall, AvgRating::NotAvailable);
        assert_eq!(ratings.cleanliness, AvgRating::Value(4.5));
        assert_eq!(ratings.menu_quality, AvgRating::Value(1.0));
    }

    #[test]
    fn unknown_restaurant() {
        let db = MockDb::default();
        assert!(matches!(
            average_rating(&db, Id::new(42), RatingSubject::Review),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
