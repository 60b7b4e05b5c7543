use crate::core::analyzer::analyze;
use crate::core::loader::RoadLoader;
use crate::core::report::{NeighborhoodReport, OutputFormat};
use crate::core::RoadSource;
use crate::utils::error::Result;

/// What a run should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Report(OutputFormat),
    SmallestSpan,
    OwnerName,
}

/// Loads one road from a source, analyzes it and renders the answer.
pub struct NeighborhoodEngine<S: RoadSource> {
    source: S,
    loader: RoadLoader,
}

impl<S: RoadSource> NeighborhoodEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_loader(source, RoadLoader::default())
    }

    pub fn with_loader(source: S, loader: RoadLoader) -> Self {
        Self { source, loader }
    }

    pub fn run(&self, query: Query) -> Result<String> {
        let road = self.loader.load(&self.source)?;
        tracing::info!(
            "Loaded {} cities along a road of length {}",
            road.city_count(),
            road.length()
        );

        let output = match query {
            Query::SmallestSpan => format!("{}\n", analyze(&road).min_span),
            Query::OwnerName => format!("{}\n", analyze(&road).owner(&road).name),
            Query::Report(format) => NeighborhoodReport::from_road(&road).render(format)?,
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::source::TextSource;

    #[test]
    fn test_run_queries() {
        let engine = NeighborhoodEngine::new(TextSource::new("100 2 50 X 51 Y"));

        assert_eq!(engine.run(Query::SmallestSpan).unwrap(), "49.5\n");
        assert_eq!(engine.run(Query::OwnerName).unwrap(), "Y\n");

        let report = engine.run(Query::Report(OutputFormat::Text)).unwrap();
        assert!(report.contains("Smallest neighborhood: Y (49.5)"));
    }

    #[test]
    fn test_run_propagates_load_failure() {
        let engine = NeighborhoodEngine::new(TextSource::new("100 2 50 X 50 Y"));
        let err = engine.run(Query::OwnerName).unwrap_err();
        assert!(err.is_load_failure());
    }
}
