pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, QueryMode};

pub use adapters::source::{FileSource, TextSource};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    analyzer::{analyze, neighborhoods},
    engine::{NeighborhoodEngine, Query},
    loader::RoadLoader,
    query::{
        city_with_smallest_neighborhood, smallest_neighborhood, smallest_neighborhood_or_sentinel,
    },
    report::{NeighborhoodReport, OutputFormat},
};
pub use domain::model::{City, LoadLimits, Neighborhood, NeighborhoodSummary, Road};
pub use domain::ports::RoadSource;
pub use utils::error::{Result, RoadError};
