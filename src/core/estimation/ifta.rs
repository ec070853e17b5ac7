use crate::core::geo::round_to;
use crate::core::models::{IftaStateSummary, IftaSummaryRequest, IftaSummaryResponse};
use tracing::debug;

/// Reduce per-state miles and gallons to period totals
///
/// The state list follows `miles_by_state`. States reported only in
/// `gallons_by_state` count toward `total_gallons` but get no line of their
/// own.
pub fn ifta_summary(request: &IftaSummaryRequest) -> IftaSummaryResponse {
    let total_miles = round_to(request.miles_by_state.values().sum(), 2);
    let total_gallons = round_to(request.gallons_by_state.values().sum(), 3);
    let mpg = if total_gallons > 0.0 {
        round_to(total_miles / total_gallons, 2)
    } else {
        0.0
    };

    let states = request
        .miles_by_state
        .iter()
        .map(|(state, miles)| {
            let gallons = request.gallons_by_state.get(state).unwrap_or(0.0);
            IftaStateSummary {
                state: state.to_string(),
                miles: round_to(miles, 2),
                gallons: round_to(gallons, 3),
                mpg: (gallons != 0.0).then(|| round_to(miles / gallons, 2)),
            }
        })
        .collect();

    let unreported: Vec<&str> = request
        .gallons_by_state
        .iter()
        .map(|(state, _)| state)
        .filter(|state| !request.miles_by_state.contains(state))
        .collect();
    if !unreported.is_empty() {
        debug!(
            period = %request.period,
            "States with fuel but no miles left out of the breakdown: {:?}",
            unreported
        );
    }

    IftaSummaryResponse {
        period: request.period.clone(),
        total_miles,
        total_gallons,
        mpg,
        states,
    }
}
