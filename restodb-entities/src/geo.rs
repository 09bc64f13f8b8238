use std::ops::RangeInclusive;

pub const LAT_DEG_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LON_DEG_RANGE: RangeInclusive<f64> = -180.0..=180.0;

pub fn is_valid_lat_deg(lat: f64) -> bool {
    LAT_DEG_RANGE.contains(&lat)
}

pub fn is_valid_lon_deg(lon: f64) -> bool {
    LON_DEG_RANGE.contains(&lon)
}

/// A position on the map in decimal degrees (WGS 84).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lon: f64,
}

impl MapPoint {
    /// Creates a point without checking the ranges of the coordinates.
    pub const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn try_from_lat_lon_deg(lat: f64, lon: f64) -> Option<Self> {
        let pos = Self::new_unchecked(lat, lon);
        pos.is_valid().then_some(pos)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lon(self) -> f64 {
        self.lon
    }

    pub fn is_valid(self) -> bool {
        is_valid_lat_deg(self.lat) && is_valid_lon_deg(self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_bounds_are_inclusive() {
        assert!(MapPoint::try_from_lat_lon_deg(90.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lon_deg(-90.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lon_deg(90.000001, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lon_deg(0.0, -180.1).is_none());
        assert!(!MapPoint::new_unchecked(100.0, 0.0).is_valid());
        assert!(!MapPoint::new_unchecked(0.0, f64::NAN).is_valid());
    }
}
