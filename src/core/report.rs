use crate::core::analyzer::{analyze, neighborhoods};
use crate::domain::model::Road;
use crate::utils::error::{Result, RoadError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = RoadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(RoadError::InvalidConfigValue {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "expected one of text, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRow {
    pub index: usize,
    pub name: String,
    pub position: u32,
    pub start: f64,
    pub end: f64,
    pub span: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmallestNeighborhood {
    pub name: String,
    pub index: usize,
    pub span: f64,
}

/// Every city's neighborhood plus the smallest one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborhoodReport {
    pub road_length: u32,
    pub cities: Vec<CityRow>,
    pub smallest: SmallestNeighborhood,
}

impl NeighborhoodReport {
    pub fn from_road(road: &Road) -> Self {
        let cities = road
            .cities()
            .iter()
            .zip(neighborhoods(road))
            .enumerate()
            .map(|(index, (city, hood))| CityRow {
                index,
                name: city.name.clone(),
                position: city.position,
                start: hood.start,
                end: hood.end,
                span: hood.span(),
            })
            .collect();

        let summary = analyze(road);
        Self {
            road_length: road.length(),
            cities,
            smallest: SmallestNeighborhood {
                name: summary.owner(road).name.clone(),
                index: summary.owner_index,
                span: summary.min_span,
            },
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => self.to_csv(),
        }
    }

    fn to_text(&self) -> String {
        let name_width = self
            .cities
            .iter()
            .map(|row| row.name.len())
            .max()
            .unwrap_or(0)
            .max("city".len());

        let mut out = format!(
            "Road length: {}\n{:>5}  {:<name_width$}  {:>8}  {:>10}  {:>10}  {:>10}\n",
            self.road_length, "#", "city", "position", "start", "end", "span"
        );
        for row in &self.cities {
            out.push_str(&format!(
                "{:>5}  {:<name_width$}  {:>8}  {:>10.1}  {:>10.1}  {:>10.1}\n",
                row.index, row.name, row.position, row.start, row.end, row.span
            ));
        }
        out.push_str(&format!(
            "Smallest neighborhood: {} ({:.1})\n",
            self.smallest.name, self.smallest.span
        ));
        out
    }

    fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &self.cities {
            writer.serialize(row)?;
        }
        let bytes = writer.into_inner().map_err(|e| RoadError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| RoadError::OutputError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::City;

    fn sample_road() -> Road {
        Road::new(
            10,
            vec![City::new(3, "A"), City::new(7, "B"), City::new(1, "C")],
        )
        .unwrap()
    }

    #[test]
    fn test_report_rows_follow_position_order() {
        let report = NeighborhoodReport::from_road(&sample_road());

        let names: Vec<&str> = report.cities.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(report.cities[1].start, 2.0);
        assert_eq!(report.cities[1].end, 5.0);
        assert_eq!(report.smallest.name, "C");
        assert_eq!(report.smallest.span, 2.0);
    }

    #[test]
    fn test_render_text() {
        let text = sample_road_report().render(OutputFormat::Text).unwrap();
        assert!(text.starts_with("Road length: 10"));
        assert!(text.contains("Smallest neighborhood: C (2.0)"));
    }

    #[test]
    fn test_render_text_rows() {
        let text = sample_road_report().render(OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("position"));
        assert!(lines[2].trim_start().starts_with("0  C"));
        assert!(lines[4].ends_with("5.0        10.0         5.0"));
    }

    #[test]
    fn test_render_json() {
        let json = sample_road_report().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["road_length"], 10);
        assert_eq!(value["smallest"]["name"], "C");
        assert_eq!(value["cities"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_render_csv() {
        let csv = sample_road_report().render(OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("index,name,position,start,end,span"));
        assert_eq!(lines.next(), Some("0,C,1,0.0,2.0,2.0"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    fn sample_road_report() -> NeighborhoodReport {
        NeighborhoodReport::from_road(&sample_road())
    }
}
