use crate::model::{Direction, ScheduleEntry};
use chrono::NaiveDateTime;

/// Ligne d'affichage : heures tronquées en `HH:MM`.
///
/// Sortie d'affichage uniquement ; l'export calendrier repart toujours des
/// `ScheduleEntry` complets, jamais de ces chaînes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub day: String,
    pub wake_time: String,
    pub temperature_minimum: String,
    pub light_exposure: String,
    pub bedtime: String,
}

impl From<&ScheduleEntry> for ScheduleRow {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            day: entry.calendar_date.format("%A, %b %-d").to_string(),
            wake_time: hhmm(entry.wake_time),
            temperature_minimum: hhmm(entry.temperature_minimum),
            light_exposure: format!(
                "{} - {}",
                hhmm(entry.light_exposure_start),
                hhmm(entry.light_exposure_end)
            ),
            bedtime: hhmm(entry.bedtime_suggestion),
        }
    }
}

fn hhmm(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

/// Tableau texte + conseils d'usage.
pub fn render_table(entries: &[ScheduleEntry], direction: Direction) -> String {
    let mut out = format!(
        "{:<20}{:<8}{:<10}{:<15}{}\n",
        "Day", "Wake", "Temp min", "Light", "Bedtime"
    );
    for row in entries.iter().map(ScheduleRow::from) {
        out.push_str(&format!(
            "{:<20}{:<8}{:<10}{:<15}{}\n",
            row.day, row.wake_time, row.temperature_minimum, row.light_exposure, row.bedtime
        ));
    }

    if let Some(first) = entries.first() {
        let phase = match direction {
            Direction::Advance => "phase advance",
            Direction::Delay => "phase delay",
        };
        out.push('\n');
        out.push_str(&format!(
            "Temperature minimum occurs around {} (2 hours before wake time).\n",
            hhmm(first.temperature_minimum)
        ));
        out.push_str(&format!(
            "For {phase}, get bright light during the light exposure window.\n"
        ));
        out.push_str(
            "Keep timing consistent each day and avoid bright light outside the window.\n",
        );
    }
    out
}
