pub mod analyzer;
pub mod engine;
pub mod loader;
pub mod query;
pub mod report;

pub use crate::domain::model::{City, LoadLimits, Neighborhood, NeighborhoodSummary, Road};
pub use crate::domain::ports::RoadSource;
pub use crate::utils::error::Result;
