use super::{create_review::check_rating, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct ReportSubmission {
    pub user_id       : Id,
    pub restaurant_id : Id,
    /// Either the two-letter code or the label
    pub category      : String,
    pub rating        : i64,
}

pub fn create_report<R>(repo: &R, submission: ReportSubmission) -> Result<Id>
where
    R: RestaurantRepo + ReportRepo,
{
    let category = submission
        .category
        .trim()
        .parse::<ReportCategory>()
        .map_err(|_| Error::ReportCategory)?;
    let rating = check_rating(submission.rating)?;
    let restaurant = repo.get_restaurant(submission.restaurant_id)?;
    let new_report = NewReport {
        user_id: submission.user_id,
        restaurant_id: restaurant.id,
        category,
        rating,
        created_at: Timestamp::now(),
    };
    let id = repo.create_report(&new_report)?;
    log::debug!(
        "User {} reported {} of restaurant {} with {rating}",
        submission.user_id,
        category.label(),
        restaurant.id
    );
    Ok(id)
}
