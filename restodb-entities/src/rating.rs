use std::fmt;

/// An integer star rating between 1 and 5.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// Checked conversion from an arbitrary integer.
    pub fn try_from_i64(val: i64) -> Option<Self> {
        u8::try_from(val)
            .ok()
            .map(Self)
            .filter(|rating| rating.is_valid())
    }
}

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for i16 {
    fn from(from: RatingValue) -> Self {
        i16::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arithmetic mean of ratings, rounded to two decimal places.
///
/// The mean of an empty set of ratings is not defined and
/// displayed as `N/A`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum AvgRating {
    #[default]
    NotAvailable,
    Value(f64),
}

impl AvgRating {
    pub const NOT_AVAILABLE: &'static str = "N/A";

    pub fn value(self) -> Option<f64> {
        match self {
            Self::NotAvailable => None,
            Self::Value(v) => Some(v),
        }
    }

    pub const fn is_available(self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Halfway cases round to the nearest even hundredth.
fn round_to_two_decimals(val: f64) -> f64 {
    (val * 100.0).round_ties_even() / 100.0
}

impl fmt::Display for AvgRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => f.write_str(Self::NOT_AVAILABLE),
            // Whole numbers keep a single decimal, e.g. "3.0"
            Self::Value(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgRatingBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    pub const fn count(&self) -> usize {
        self.cnt
    }

    pub fn build(self) -> AvgRating {
        if self.cnt > 0 {
            AvgRating::Value(round_to_two_decimals(self.acc as f64 / self.cnt as f64))
        } else {
            AvgRating::NotAvailable
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

impl FromIterator<RatingValue> for AvgRatingBuilder {
    fn from_iter<T: IntoIterator<Item = RatingValue>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, val| {
            acc += val;
            acc
        })
    }
}
