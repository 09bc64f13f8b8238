use restodb_entities::{rating::*, report::*, restaurant::*, review::*};

/// What an average rating is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSubject {
    /// The overall rating from reviews
    Review,
    /// The rating from reports of a single category
    Report(ReportCategory),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RestaurantRatings {
    pub overall: AvgRating,
    pub cleanliness: AvgRating,
    pub crowdedness: AvgRating,
    pub friendliness: AvgRating,
    pub menu_quality: AvgRating,
}

impl RestaurantRatings {
    pub fn by_category(&self, category: ReportCategory) -> AvgRating {
        match category {
            ReportCategory::Cleanliness => self.cleanliness,
            ReportCategory::Crowdedness => self.crowdedness,
            ReportCategory::Friendliness => self.friendliness,
            ReportCategory::MenuQuality => self.menu_quality,
        }
    }
}

pub trait Rated {
    fn avg_review_rating(&self, _: &[Review]) -> AvgRating;
    fn avg_report_rating(&self, _: &[Report], category: ReportCategory) -> AvgRating;

    fn avg_ratings(&self, reviews: &[Review], reports: &[Report]) -> RestaurantRatings {
        RestaurantRatings {
            overall: self.avg_review_rating(reviews),
            cleanliness: self.avg_report_rating(reports, ReportCategory::Cleanliness),
            crowdedness: self.avg_report_rating(reports, ReportCategory::Crowdedness),
            friendliness: self.avg_report_rating(reports, ReportCategory::Friendliness),
            menu_quality: self.avg_report_rating(reports, ReportCategory::MenuQuality),
        }
    }
}

impl Rated for Restaurant {
    fn avg_review_rating(&self, reviews: &[Review]) -> AvgRating {
        debug_assert_eq!(
            reviews.len(),
            reviews
                .iter()
                .filter(|r| r.restaurant_id == self.id)
                .count()
        );
        reviews
            .iter()
            .map(|r| r.rating)
            .collect::<AvgRatingBuilder>()
            .build()
    }

    fn avg_report_rating(&self, reports: &[Report], category: ReportCategory) -> AvgRating {
        debug_assert_eq!(
            reports.len(),
            reports
                .iter()
                .filter(|r| r.restaurant_id == self.id)
                .count()
        );
        reports
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.rating)
            .collect::<AvgRatingBuilder>()
            .build()
    }
}
