use crate::domain::model::{Neighborhood, NeighborhoodSummary, Road};

/// Yields the neighborhood of every city on the road, in position order.
///
/// Inner boundaries are the real-valued midpoints between adjacent cities; the
/// first neighborhood starts at 0 and the last ends at the road length, so the
/// neighborhoods tile the whole road.
pub fn neighborhoods(road: &Road) -> impl Iterator<Item = Neighborhood> + '_ {
    let cities = road.cities();
    let length = f64::from(road.length());
    let midpoint =
        |i: usize| (f64::from(cities[i].position) + f64::from(cities[i + 1].position)) / 2.0;

    (0..cities.len()).map(move |i| Neighborhood {
        start: if i == 0 { 0.0 } else { midpoint(i - 1) },
        end: if i + 1 == cities.len() { length } else { midpoint(i) },
    })
}

/// Finds the smallest neighborhood and the index of the city that owns it.
///
/// Ties keep the first city in position order.
pub fn analyze(road: &Road) -> NeighborhoodSummary {
    let summary = neighborhoods(road).enumerate().fold(
        NeighborhoodSummary {
            min_span: f64::INFINITY,
            owner_index: 0,
        },
        |best, (index, hood)| {
            let span = hood.span();
            if span < best.min_span {
                NeighborhoodSummary {
                    min_span: span,
                    owner_index: index,
                }
            } else {
                best
            }
        },
    );

    tracing::debug!(
        "Smallest neighborhood {} owned by city #{} ({})",
        summary.min_span,
        summary.owner_index,
        summary.owner(road).name
    );
    summary
}
