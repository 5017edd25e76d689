use super::SchedError;
use crate::model::AdjustmentRequest;
use chrono::{Days, Duration, NaiveDate, NaiveDateTime};

/// Décalage cumulé au jour `day` : `day / adjustment_days` du total, signé.
///
/// Calculé en secondes entières depuis le total pour rester linéaire (pas d'accumulation).
pub(super) fn cumulative_shift(request: &AdjustmentRequest, day: u32) -> Result<Duration, SchedError> {
    let total_seconds = request.total_hours_to_shift * 3600.0;
    let seconds = (total_seconds * f64::from(day) / f64::from(request.adjustment_days)).round();
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return Err(SchedError::invalid("total hours to shift out of range"));
    }
    Duration::try_seconds(request.direction.sign() * seconds as i64)
        .ok_or_else(|| SchedError::invalid("total hours to shift out of range"))
}

pub(super) fn add_days(today: NaiveDate, day: u32) -> Result<NaiveDate, SchedError> {
    today
        .checked_add_days(Days::new(u64::from(day)))
        .ok_or_else(|| SchedError::invalid("date out of range"))
}

pub(super) fn offset(at: NaiveDateTime, delta: Duration) -> Result<NaiveDateTime, SchedError> {
    at.checked_add_signed(delta)
        .ok_or_else(|| SchedError::invalid("date out of range"))
}
