use super::SchedError;
use crate::model::{parse_clock_time, AdjustmentRequest, Direction, RawAdjustmentRequest};

/// Convertit la forme UI en requête validée.
pub fn parse_request(raw: &RawAdjustmentRequest) -> Result<AdjustmentRequest, SchedError> {
    let wake = raw
        .usual_wake_time
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SchedError::invalid("usual wake time is required"))?;
    let usual_wake_time = parse_clock_time(wake)
        .ok_or_else(|| SchedError::invalid(format!("unparseable wake time: {wake:?}")))?;

    let direction = match raw.direction.as_deref() {
        Some(d) => d.parse::<Direction>().map_err(SchedError::InvalidInput)?,
        None => Direction::Advance,
    };

    if raw.adjustment_days < 1 {
        return Err(SchedError::invalid("adjustment days must be at least 1"));
    }
    let adjustment_days = u32::try_from(raw.adjustment_days)
        .map_err(|_| SchedError::invalid("adjustment days out of range"))?;

    let request = AdjustmentRequest {
        usual_wake_time,
        direction,
        total_hours_to_shift: raw.total_hours_to_shift,
        adjustment_days,
    };
    check(&request)?;
    Ok(request)
}

/// Invariants numériques vérifiés avant tout calcul.
pub(super) fn check(request: &AdjustmentRequest) -> Result<(), SchedError> {
    if request.adjustment_days < 1 {
        return Err(SchedError::invalid("adjustment days must be at least 1"));
    }
    if !request.total_hours_to_shift.is_finite() || request.total_hours_to_shift <= 0.0 {
        return Err(SchedError::invalid("total hours to shift must be positive"));
    }
    // sous une seconde par jour, l'arrondi donnerait un décalage nul
    let per_day_seconds =
        request.total_hours_to_shift * 3600.0 / f64::from(request.adjustment_days);
    if per_day_seconds < 1.0 {
        return Err(SchedError::invalid(
            "total hours to shift is too small for the number of adjustment days",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn raw(wake: Option<&str>, hours: f64, days: i64) -> RawAdjustmentRequest {
        RawAdjustmentRequest {
            usual_wake_time: wake.map(str::to_string),
            direction: Some("delay".into()),
            total_hours_to_shift: hours,
            adjustment_days: days,
        }
    }

    #[test]
    fn valid_request_is_parsed() {
        let req = parse_request(&raw(Some("06:30"), 3.0, 2)).unwrap();
        assert_eq!(req.usual_wake_time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(req.direction, Direction::Delay);
        assert_eq!(req.adjustment_days, 2);
    }

    #[test]
    fn missing_or_blank_wake_time_is_invalid() {
        assert!(matches!(
            parse_request(&raw(None, 3.0, 2)),
            Err(SchedError::InvalidInput(_))
        ));
        assert!(parse_request(&raw(Some("  "), 3.0, 2)).is_err());
        assert!(parse_request(&raw(Some("25:00"), 3.0, 2)).is_err());
    }

    #[test]
    fn non_positive_numbers_are_invalid() {
        assert!(parse_request(&raw(Some("07:00"), 0.0, 2)).is_err());
        assert!(parse_request(&raw(Some("07:00"), -1.0, 2)).is_err());
        assert!(parse_request(&raw(Some("07:00"), f64::NAN, 2)).is_err());
        assert!(parse_request(&raw(Some("07:00"), 3.0, 0)).is_err());
        assert!(parse_request(&raw(Some("07:00"), 3.0, -4)).is_err());
    }

    #[test]
    fn sub_second_daily_shift_is_invalid() {
        assert!(matches!(
            parse_request(&raw(Some("07:00"), 0.0001, 1)),
            Err(SchedError::InvalidInput(_))
        ));
        // une seconde par jour : accepté
        assert!(parse_request(&raw(Some("07:00"), 0.25, 900)).is_ok());
    }

    #[test]
    fn missing_direction_defaults_to_advance() {
        let mut r = raw(Some("07:00"), 3.0, 2);
        r.direction = None;
        assert_eq!(parse_request(&r).unwrap().direction, Direction::Advance);
        r.direction = Some("sideways".into());
        assert!(parse_request(&r).is_err());
    }
}
