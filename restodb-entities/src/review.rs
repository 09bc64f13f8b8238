use crate::{id::*, rating::RatingValue, time::*};

pub const REVIEW_TEXT_MAX_LEN: usize = 500;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id            : Id,
    pub user_id       : Id,
    pub restaurant_id : Id,
    pub rating        : RatingValue,
    pub review_text   : String,
    pub created_at    : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub user_id       : Id,
    pub restaurant_id : Id,
    pub rating        : RatingValue,
    pub review_text   : String,
    pub created_at    : Timestamp,
}
