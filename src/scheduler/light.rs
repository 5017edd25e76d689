use super::{util, SchedError};
use crate::model::Direction;
use chrono::{Duration, NaiveDateTime};

/// Bord de la fenêtre le plus proche du minimum de température.
pub const LIGHT_WINDOW_NEAR_HOURS: i64 = 4;
/// Bord le plus éloigné.
pub const LIGHT_WINDOW_FAR_HOURS: i64 = 6;

/// Fenêtre d'exposition à la lumière, ancrée sur le minimum de température.
///
/// Avance : lumière *après* le minimum (`[+4h, +6h]`) ; retard : lumière *avant*
/// (`[-6h, -4h]`). Le début précède toujours la fin. Hors de la plage des dates
/// représentables → `InvalidInput`.
pub fn exposure_window(
    temperature_minimum: NaiveDateTime,
    direction: Direction,
) -> Result<(NaiveDateTime, NaiveDateTime), SchedError> {
    let near = Duration::hours(LIGHT_WINDOW_NEAR_HOURS);
    let far = Duration::hours(LIGHT_WINDOW_FAR_HOURS);
    let (from, to) = match direction {
        Direction::Advance => (near, far),
        Direction::Delay => (-far, -near),
    };
    Ok((
        util::offset(temperature_minimum, from)?,
        util::offset(temperature_minimum, to)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn advance_window_follows_minimum() {
        let (start, end) = exposure_window(at(20, 3, 0), Direction::Advance).unwrap();
        assert_eq!(start, at(20, 7, 0));
        assert_eq!(end, at(20, 9, 0));
    }

    #[test]
    fn delay_window_precedes_minimum_across_midnight() {
        let (start, end) = exposure_window(at(20, 2, 30), Direction::Delay).unwrap();
        assert_eq!(start, at(19, 20, 30));
        assert_eq!(end, at(19, 22, 30));
        assert!(start < end);
    }

    #[test]
    fn window_past_last_representable_date_is_an_error() {
        let last = NaiveDateTime::MAX - Duration::hours(1);
        assert!(matches!(
            exposure_window(last, Direction::Advance),
            Err(SchedError::InvalidInput(_))
        ));
        let first = NaiveDateTime::MIN + Duration::hours(1);
        assert!(exposure_window(first, Direction::Delay).is_err());
    }
}
