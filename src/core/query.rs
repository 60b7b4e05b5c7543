use crate::core::analyzer::analyze;
use crate::core::loader::RoadLoader;
use crate::domain::model::NeighborhoodSummary;
use crate::domain::ports::RoadSource;
use crate::utils::error::Result;

/// Returned by [`smallest_neighborhood_or_sentinel`] when the source is rejected.
pub const LOAD_FAILED: f64 = -1.0;

fn load_and_analyze<S: RoadSource + ?Sized>(source: &S) -> Result<(String, NeighborhoodSummary)> {
    let road = RoadLoader::default().load(source)?;
    let summary = analyze(&road);
    Ok((summary.owner(&road).name.clone(), summary))
}

/// Loads a road and returns the span of its smallest neighborhood.
pub fn smallest_neighborhood<S: RoadSource + ?Sized>(source: &S) -> Result<f64> {
    load_and_analyze(source).map(|(_, summary)| summary.min_span)
}

/// Loads a road and returns the name of the city owning the smallest neighborhood.
pub fn city_with_smallest_neighborhood<S: RoadSource + ?Sized>(source: &S) -> Result<String> {
    load_and_analyze(source).map(|(name, _)| name)
}

pub fn smallest_neighborhood_or_sentinel<S: RoadSource + ?Sized>(source: &S) -> f64 {
    smallest_neighborhood(source).unwrap_or(LOAD_FAILED)
}
