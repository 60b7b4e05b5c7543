use crate::domain::model::{check_position, check_unique, City, LoadLimits, Road};
use crate::domain::ports::RoadSource;
use crate::utils::error::{Result, RoadError};
use std::io::Read;
use std::str::SplitWhitespace;

/// Reads and validates road descriptions.
///
/// The expected layout is the road length, the city count, then one
/// `position name` pair per city, all separated by arbitrary whitespace.
#[derive(Debug, Clone, Default)]
pub struct RoadLoader {
    limits: LoadLimits,
}

impl RoadLoader {
    /// Limits wider than the road domain are narrowed back to it.
    pub fn new(limits: LoadLimits) -> Self {
        Self {
            limits: limits.clamped(),
        }
    }

    pub fn load<S: RoadSource + ?Sized>(&self, source: &S) -> Result<Road> {
        tracing::debug!("Loading road from {}", source.name());

        let text = {
            let mut reader = source.open()?;
            let mut bytes = Vec::new();
            reader
                .read_to_end(&mut bytes)
                .map_err(|e| RoadError::SourceError {
                    source_name: source.name().to_string(),
                    source: e,
                })?;
            String::from_utf8(bytes)
                .map_err(|_| RoadError::malformed("input", "source is not valid UTF-8 text"))?
        };

        self.parse(&text).inspect_err(|e| {
            tracing::warn!("Rejected road from {}: {}", source.name(), e);
        })
    }

    pub fn parse(&self, text: &str) -> Result<Road> {
        let mut tokens = Tokens::new(text);

        let length = tokens.next_int("road length")?;
        let length = self.limits.check_road_length(length)?;

        let count = tokens.next_int("city count")?;
        let count = self.limits.check_city_count(count)?;
        tracing::debug!("Road length {}, expecting {} cities", length, count);

        let mut cities = Vec::with_capacity(count);
        let mut seen = Vec::with_capacity(count);
        for index in 0..count {
            let record = index + 1;
            let position = tokens.next_int(&format!("city {} position", record))?;
            let name = tokens.next_token(&format!("city {} name", record))?;
            self.limits.check_name(name)?;

            let position = check_position(position, length)?;
            check_unique(position, &seen)?;
            seen.push(position);
            cities.push(City::new(position, name));
        }

        if tokens.has_remaining() {
            tracing::debug!("Ignoring input after the last city record");
        }

        let road = Road::from_validated(length, cities);
        tracing::debug!("Loaded road with {} cities", road.city_count());
        Ok(road)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, field: &str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| RoadError::malformed(field, "unexpected end of input"))
    }

    fn next_int(&mut self, field: &str) -> Result<i64> {
        let token = self.next_token(field)?;
        token
            .parse::<i64>()
            .map_err(|_| RoadError::malformed(field, format!("expected an integer, found '{}'", token)))
    }

    fn has_remaining(&mut self) -> bool {
        self.inner.next().is_some()
    }
}
