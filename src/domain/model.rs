use crate::utils::error::{Result, RoadError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const MIN_ROAD_LENGTH: u32 = 3;
pub const MAX_ROAD_LENGTH: u32 = 1_000_000;
pub const MIN_CITIES: usize = 2;
pub const MAX_CITIES: usize = 10_000;
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub position: u32,
    pub name: String,
}

impl City {
    pub fn new(position: u32, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// A road of integer length with at least two cities placed strictly inside it.
///
/// # Invariants
/// - cities are sorted by strictly increasing position
/// - every position lies in `(0, length)`
/// - `cities.len() >= 2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    length: u32,
    cities: Vec<City>,
}

impl Road {
    /// Builds a road from cities in any order, applying the default domain limits.
    pub fn new(length: u32, cities: Vec<City>) -> Result<Self> {
        let limits = LoadLimits::default();
        limits.check_road_length(i64::from(length))?;
        limits.check_city_count(cities.len() as i64)?;
        let mut seen = Vec::with_capacity(cities.len());
        for city in &cities {
            limits.check_name(&city.name)?;
            check_position(i64::from(city.position), length)?;
            check_unique(city.position, &seen)?;
            seen.push(city.position);
        }
        Ok(Self::from_validated(length, cities))
    }

    /// Sorts and wraps cities that already passed every load check.
    pub(crate) fn from_validated(length: u32, mut cities: Vec<City>) -> Self {
        cities.sort_by_key(|city| city.position);
        Self { length, cities }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

/// The stretch of road closer to one city than to any other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighborhood {
    pub start: f64,
    pub end: f64,
}

impl Neighborhood {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeighborhoodSummary {
    pub min_span: f64,
    pub owner_index: usize,
}

impl NeighborhoodSummary {
    pub fn owner<'a>(&self, road: &'a Road) -> &'a City {
        &road.cities()[self.owner_index]
    }
}

/// Bounds applied while loading a road.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadLimits {
    pub road_length: RangeInclusive<u32>,
    pub city_count: RangeInclusive<usize>,
    pub max_name_length: usize,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            road_length: MIN_ROAD_LENGTH..=MAX_ROAD_LENGTH,
            city_count: MIN_CITIES..=MAX_CITIES,
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

impl LoadLimits {
    /// Intersects these limits with the domain bounds, so a loaded road always
    /// satisfies the `Road` invariants whatever the configuration asked for.
    pub fn clamped(self) -> Self {
        let length = |value: u32| value.clamp(MIN_ROAD_LENGTH, MAX_ROAD_LENGTH);
        let count = |value: usize| value.clamp(MIN_CITIES, MAX_CITIES);
        Self {
            road_length: length(*self.road_length.start())..=length(*self.road_length.end()),
            city_count: count(*self.city_count.start())..=count(*self.city_count.end()),
            max_name_length: self.max_name_length.min(MAX_NAME_LENGTH),
        }
    }

    pub fn check_road_length(&self, value: i64) -> Result<u32> {
        let (min, max) = (*self.road_length.start(), *self.road_length.end());
        if value < i64::from(min) || value > i64::from(max) {
            return Err(RoadError::constraint(
                "road length",
                value,
                format!("must be between {} and {}", min, max),
            ));
        }
        Ok(value as u32)
    }

    pub fn check_city_count(&self, value: i64) -> Result<usize> {
        let (min, max) = (*self.city_count.start(), *self.city_count.end());
        let in_range = u64::try_from(value)
            .map(|count| count >= min as u64 && count <= max as u64)
            .unwrap_or(false);
        if !in_range {
            return Err(RoadError::constraint(
                "city count",
                value,
                format!("must be between {} and {}", min, max),
            ));
        }
        Ok(value as usize)
    }

    pub fn check_name(&self, name: &str) -> Result<()> {
        if name.len() > self.max_name_length {
            return Err(RoadError::malformed(
                "city name",
                format!(
                    "'{}...' is {} bytes long, the limit is {}",
                    name.chars().take(16).collect::<String>(),
                    name.len(),
                    self.max_name_length
                ),
            ));
        }
        Ok(())
    }
}

pub(crate) fn check_position(value: i64, length: u32) -> Result<u32> {
    if value <= 0 || value >= i64::from(length) {
        return Err(RoadError::constraint(
            "city position",
            value,
            format!("must lie strictly between 0 and {}", length),
        ));
    }
    Ok(value as u32)
}

/// Compares a position against every previously accepted one.
pub(crate) fn check_unique(position: u32, seen: &[u32]) -> Result<()> {
    if seen.contains(&position) {
        return Err(RoadError::constraint(
            "city position",
            position,
            "another city already occupies this position",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_new_sorts_cities() {
        let road = Road::new(
            10,
            vec![City::new(3, "A"), City::new(7, "B"), City::new(1, "C")],
        )
        .unwrap();

        let names: Vec<&str> = road.cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(road.length(), 10);
        assert_eq!(road.city_count(), 3);
    }

    #[test]
    fn test_road_new_rejects_invalid_roads() {
        assert!(Road::new(2, vec![City::new(1, "A"), City::new(1, "B")]).is_err());
        assert!(Road::new(10, vec![City::new(1, "A")]).is_err());
        assert!(Road::new(10, vec![City::new(0, "A"), City::new(5, "B")]).is_err());
        assert!(Road::new(10, vec![City::new(10, "A"), City::new(5, "B")]).is_err());
        assert!(Road::new(10, vec![City::new(5, "A"), City::new(5, "B")]).is_err());
    }

    #[test]
    fn test_limits_boundaries() {
        let limits = LoadLimits::default();
        assert!(limits.check_road_length(3).is_ok());
        assert!(limits.check_road_length(1_000_000).is_ok());
        assert!(limits.check_road_length(2).is_err());
        assert!(limits.check_road_length(1_000_001).is_err());
        assert!(limits.check_city_count(2).is_ok());
        assert!(limits.check_city_count(10_000).is_ok());
        assert!(limits.check_city_count(1).is_err());
        assert!(limits.check_city_count(10_001).is_err());
        assert!(limits.check_name(&"n".repeat(255)).is_ok());
        assert!(limits.check_name(&"n".repeat(256)).is_err());
    }

    #[test]
    fn test_city_count_accepts_the_widest_bound() {
        let limits = LoadLimits {
            city_count: 2..=usize::MAX,
            ..LoadLimits::default()
        };
        assert_eq!(limits.check_city_count(2).unwrap(), 2);
        assert!(limits.check_city_count(-1).is_err());
    }

    #[test]
    fn test_clamped_limits_stay_inside_the_domain() {
        let widened = LoadLimits {
            road_length: 1..=u32::MAX,
            city_count: 0..=usize::MAX,
            max_name_length: usize::MAX,
        }
        .clamped();
        assert_eq!(widened, LoadLimits::default());

        let narrowed = LoadLimits {
            road_length: 10..=50,
            city_count: 3..=4,
            max_name_length: 8,
        };
        assert_eq!(narrowed.clone().clamped(), narrowed);
    }

    #[test]
    fn test_neighborhood_span() {
        let hood = Neighborhood {
            start: 50.5,
            end: 100.0,
        };
        assert_eq!(hood.span(), 49.5);
    }
}
