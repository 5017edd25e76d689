mod ics;
mod types;

pub use ics::{to_ics, write_ics, DEFAULT_ICS_FILE_NAME};
pub use types::{CalendarEvent, ExportError, REMINDER_MINUTES};

use crate::model::{Direction, ScheduleEntry};

pub const WAKE_TITLE: &str = "Wake Up - Circadian Adjustment";
pub const BEDTIME_TITLE: &str = "Bedtime - Circadian Adjustment";
pub const HOME_LOCATION: &str = "Home";
pub const LIGHT_LOCATION: &str = "Anywhere with bright light";

/// Trois événements par entrée, dans l'ordre : réveil, lumière, coucher.
///
/// Les horodatages sont recopiés tels quels : le coucher porte déjà la bonne date
/// (calculé en `réveil - 7h` par le générateur), rien n'est re-déduit d'une heure seule.
pub fn export(
    entries: &[ScheduleEntry],
    direction: Direction,
) -> Result<Vec<CalendarEvent>, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::EmptySchedule);
    }
    log_debug!(entries = entries.len(), direction = %direction, "exporting schedule");

    let mut events = Vec::with_capacity(entries.len() * 3);
    for entry in entries {
        events.push(wake_event(entry));
        events.push(light_event(entry, direction));
        events.push(bedtime_event(entry));
    }
    Ok(events)
}

fn wake_event(entry: &ScheduleEntry) -> CalendarEvent {
    CalendarEvent::reminder(
        entry.wake_time,
        WAKE_TITLE,
        format!(
            "Wake up time for circadian rhythm adjustment. Temperature minimum occurs around {}.",
            entry.temperature_minimum.format("%H:%M")
        ),
        HOME_LOCATION,
    )
}

fn light_event(entry: &ScheduleEntry, direction: Direction) -> CalendarEvent {
    CalendarEvent::window(
        entry.light_exposure_start,
        entry.light_exposure_end,
        format!("Light Exposure - {}", direction.phase_label()),
        "Get bright light exposure during this window for circadian rhythm adjustment.",
        LIGHT_LOCATION,
    )
}

fn bedtime_event(entry: &ScheduleEntry) -> CalendarEvent {
    CalendarEvent::reminder(
        entry.bedtime_suggestion,
        BEDTIME_TITLE,
        "Suggested bedtime for circadian rhythm adjustment.",
        HOME_LOCATION,
    )
}
