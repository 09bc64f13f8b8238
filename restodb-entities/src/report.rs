use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{id::*, rating::RatingValue, time::*};

/// The quality aspect a report is about.
///
/// Parsed from either the two-letter code or the label,
/// displayed as the two-letter code.
#[rustfmt::skip]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
    FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ReportCategory {
    #[default]
    #[strum(to_string = "CL", serialize = "cleanliness")]
    Cleanliness = 0,
    #[strum(to_string = "CR", serialize = "crowdedness")]
    Crowdedness = 1,
    #[strum(to_string = "FR", serialize = "friendliness")]
    Friendliness = 2,
    #[strum(to_string = "MQ", serialize = "menu-quality", serialize = "menu_quality")]
    MenuQuality = 3,
}

impl ReportCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cleanliness => "Cleanliness",
            Self::Crowdedness => "Crowdedness",
            Self::Friendliness => "Friendliness",
            Self::MenuQuality => "Menu Quality",
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id            : Id,
    pub user_id       : Id,
    pub restaurant_id : Id,
    pub category      : ReportCategory,
    pub rating        : RatingValue,
    pub created_at    : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub user_id       : Id,
    pub restaurant_id : Id,
    pub category      : ReportCategory,
    pub rating        : RatingValue,
    pub created_at    : Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{FromPrimitive, ToPrimitive};
    use strum::IntoEnumIterator;

    #[test]
    fn parse_codes_and_labels() {
        assert_eq!("CL".parse::<ReportCategory>().unwrap(), ReportCategory::Cleanliness);
        assert_eq!("cr".parse::<ReportCategory>().unwrap(), ReportCategory::Crowdedness);
        assert_eq!(
            "friendliness".parse::<ReportCategory>().unwrap(),
            ReportCategory::Friendliness
        );
        assert_eq!(
            "menu-quality".parse::<ReportCategory>().unwrap(),
            ReportCategory::MenuQuality
        );
        assert!("XX".parse::<ReportCategory>().is_err());
    }

    #[test]
    fn display_as_code() {
        assert_eq!(ReportCategory::MenuQuality.to_string(), "MQ");
        assert_eq!(ReportCategory::default().to_string(), "CL");
    }

    #[test]
    fn stable_primitive_representation() {
        for category in ReportCategory::iter() {
            let primitive = category.to_i16().unwrap();
            assert_eq!(ReportCategory::from_i16(primitive), Some(category));
        }
        assert_eq!(ReportCategory::from_i16(4), None);
    }
}
