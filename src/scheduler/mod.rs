mod light;
mod types;
mod util;
mod validate;

pub use light::{exposure_window, LIGHT_WINDOW_FAR_HOURS, LIGHT_WINDOW_NEAR_HOURS};
pub use types::{SchedError, BEDTIME_BEFORE_WAKE_HOURS, TEMPERATURE_MINIMUM_BEFORE_WAKE_HOURS};
pub use validate::parse_request;

use crate::model::{AdjustmentRequest, ScheduleEntry};
use chrono::{Duration, NaiveDate};

/// Génère le plan jour par jour, du jour 1 à `adjustment_days`.
///
/// `today` est injecté : le jour `d` tombe à `today + d`. Le réveil habituel est
/// ré-ancré sur chaque date cible avant d'appliquer le décalage cumulé, de sorte que
/// les dates restent justes quand le décalage franchit minuit.
pub fn generate(
    request: &AdjustmentRequest,
    today: NaiveDate,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    validate::check(request)?;
    log_debug!(
        direction = %request.direction,
        hours = request.total_hours_to_shift,
        days = request.adjustment_days,
        "generating schedule"
    );

    let tmin_offset = Duration::hours(-TEMPERATURE_MINIMUM_BEFORE_WAKE_HOURS);
    let bedtime_offset = Duration::hours(-BEDTIME_BEFORE_WAKE_HOURS);

    (1..=request.adjustment_days)
        .map(|day| -> Result<ScheduleEntry, SchedError> {
            let calendar_date = util::add_days(today, day)?;
            let baseline = calendar_date.and_time(request.usual_wake_time);
            let wake_time = util::offset(baseline, util::cumulative_shift(request, day)?)?;
            let temperature_minimum = util::offset(wake_time, tmin_offset)?;
            let (light_exposure_start, light_exposure_end) =
                exposure_window(temperature_minimum, request.direction)?;
            let bedtime_suggestion = util::offset(wake_time, bedtime_offset)?;

            Ok(ScheduleEntry {
                day_index: day,
                calendar_date,
                wake_time,
                temperature_minimum,
                light_exposure_start,
                light_exposure_end,
                bedtime_suggestion,
            })
        })
        .collect()
}
