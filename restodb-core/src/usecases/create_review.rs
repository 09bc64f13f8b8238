use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    pub user_id       : Id,
    pub restaurant_id : Id,
    pub rating        : i64,
    pub review_text   : String,
}

pub(crate) fn check_rating(rating: i64) -> Result<RatingValue> {
    if rating < i64::from(u8::from(RatingValue::min())) {
        return Err(Error::RatingTooLow);
    }
    if rating > i64::from(u8::from(RatingValue::max())) {
        return Err(Error::RatingTooHigh);
    }
    RatingValue::try_from_i64(rating).ok_or(Error::RatingTooHigh)
}

pub fn create_review<R>(repo: &R, submission: ReviewSubmission) -> Result<Id>
where
    R: RestaurantRepo + ReviewRepo,
{
    let ReviewSubmission {
        user_id,
        restaurant_id,
        rating,
        review_text,
    } = submission;
    let rating = check_rating(rating)?;
    let review_text = review_text.trim();
    if review_text.is_empty() {
        return Err(Error::EmptyField("review text"));
    }
    if review_text.chars().count() > REVIEW_TEXT_MAX_LEN {
        return Err(Error::TextTooLong("review text", REVIEW_TEXT_MAX_LEN));
    }
    let restaurant = repo.get_restaurant(restaurant_id)?;
    let new_review = NewReview {
        user_id,
        restaurant_id: restaurant.id,
        rating,
        review_text: review_text.to_owned(),
        created_at: Timestamp::now(),
    };
    let id = repo.create_review(&new_review)?;
    log::debug!("User {user_id} rated restaurant {} with {rating}", restaurant.id);
    Ok(id)
}
