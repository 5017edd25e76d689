//! Sérialisation `.ics` (RFC 5545).

use super::{CalendarEvent, ExportError};
use chrono::{DateTime, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub const DEFAULT_ICS_FILE_NAME: &str = "circadian-adjustment-schedule.ics";

const PRODID: &str = "-//circadian//phase-shift schedule//EN";

/// Produit le contenu `.ics` ; `stamp` alimente `DTSTAMP` (UTC).
///
/// Les heures sont « flottantes » (sans `Z` ni `TZID`) : le calendrier les interprète
/// dans le fuseau de l'utilisateur, comme l'heure de réveil saisie.
pub fn to_ics(events: &[CalendarEvent], stamp: DateTime<Utc>) -> Result<String, ExportError> {
    if events.is_empty() {
        return Err(ExportError::EmptySchedule);
    }

    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();
    let mut cal = Calendar::new();

    for (index, event) in events.iter().enumerate() {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event_uid(index, event));
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.add_property("DTSTART", floating(event.start));

        // DTEND et DURATION sont exclusifs ; `end` prime.
        match (event.end, event.duration_minutes) {
            (Some(end), _) => {
                ics_event.add_property("DTEND", floating(end));
            }
            (None, Some(minutes)) => {
                ics_event.add_property("DURATION", format!("PT{minutes}M"));
            }
            (None, None) => {}
        }

        ics_event.summary(&event.title);
        ics_event.description(&event.description);
        ics_event.location(&event.location);
        ics_event.add_property("STATUS", "CONFIRMED");
        ics_event.add_property("X-MICROSOFT-CDO-BUSYSTATUS", "BUSY");

        cal.push(ics_event.done());
    }

    Ok(replace_prodid(&cal.done().to_string()))
}

/// Écrit le fichier. Les événements sont empruntés : un échec d'écriture peut être
/// retenté sans recalculer le plan.
pub fn write_ics<P: AsRef<Path>>(
    path: P,
    events: &[CalendarEvent],
    stamp: DateTime<Utc>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let content = to_ics(events, stamp)?;
    fs::write(path, content).map_err(|source| ExportError::ExportFailure {
        context: format!("writing {}", path.display()),
        source,
    })?;
    log_debug!(path = %path.display(), events = events.len(), "calendar written");
    Ok(())
}

fn floating(at: NaiveDateTime) -> String {
    at.format("%Y%m%dT%H%M%S").to_string()
}

/// UID stable : même plan, même fichier (ré-import sans doublons).
fn event_uid(index: usize, event: &CalendarEvent) -> String {
    let key = format!("{index}|{}|{}", floating(event.start), event.title);
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes());
    format!("{uuid}@circadian")
}

fn replace_prodid(ics: &str) -> String {
    let mut out = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            out.push_str("PRODID:");
            out.push_str(PRODID);
        } else {
            out.push_str(line);
        }
        out.push_str("\r\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    /// Défait le pliage des lignes longues (RFC 5545 §3.1).
    fn unfold(ics: &str) -> String {
        ics.replace("\r\n ", "").replace("\r\n\t", "")
    }

    #[test]
    fn reminder_uses_duration_and_window_uses_dtend() {
        let events = vec![
            CalendarEvent::reminder(at(20, 5, 0), "Wake", "w", "Home"),
            CalendarEvent::window(at(20, 7, 0), at(20, 9, 0), "Light", "l", "Out"),
        ];
        let ics = unfold(&to_ics(&events, stamp()).unwrap());

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("PRODID:-//circadian//phase-shift schedule//EN\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.contains("DTSTART:20261020T050000\r\n"));
        assert!(ics.contains("DURATION:PT30M\r\n"));
        assert!(ics.contains("DTSTART:20261020T070000\r\n"));
        assert!(ics.contains("DTEND:20261020T090000\r\n"));
        assert_eq!(ics.matches("DTEND:").count(), 1);
        assert_eq!(ics.matches("STATUS:CONFIRMED").count(), 2);
        assert_eq!(ics.matches("X-MICROSOFT-CDO-BUSYSTATUS:BUSY").count(), 2);
        assert!(ics.contains("DTSTAMP:20261019T120000Z\r\n"));
        assert!(ics.contains("LOCATION:Home\r\n"));
    }

    #[test]
    fn both_end_and_duration_emit_only_dtend() {
        let mut event = CalendarEvent::window(at(20, 7, 0), at(20, 9, 0), "Light", "l", "Out");
        event.duration_minutes = Some(45);
        let ics = to_ics(&[event], stamp()).unwrap();
        assert!(ics.contains("DTEND:20261020T090000"));
        assert!(!ics.contains("DURATION:"));
    }

    #[test]
    fn uids_are_stable_and_distinct() {
        let events = vec![
            CalendarEvent::reminder(at(20, 5, 0), "Wake", "w", "Home"),
            CalendarEvent::reminder(at(20, 5, 0), "Wake", "w", "Home"),
        ];
        let a = event_uid(0, &events[0]);
        assert_eq!(a, event_uid(0, &events[0]));
        assert_ne!(a, event_uid(1, &events[1]));
        assert!(a.ends_with("@circadian"));
    }

    #[test]
    fn empty_event_list_is_rejected() {
        assert!(matches!(to_ics(&[], stamp()), Err(ExportError::EmptySchedule)));
    }
}
