use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Durée fixe des rappels ponctuels (réveil, coucher).
pub const REMINDER_MINUTES: i64 = 30;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot export an empty schedule")]
    EmptySchedule,
    #[error("calendar export failed: {context}")]
    ExportFailure {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Événement calendrier générique (indépendant du format de fichier).
///
/// `end` ou `duration_minutes` est renseigné ; si les deux le sont, `end` prime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    pub title: String,
    pub description: String,
    pub location: String,
}

impl CalendarEvent {
    /// Rappel ponctuel de 30 minutes.
    pub fn reminder<T, D, L>(start: NaiveDateTime, title: T, description: D, location: L) -> Self
    where
        T: Into<String>,
        D: Into<String>,
        L: Into<String>,
    {
        Self {
            start,
            end: None,
            duration_minutes: Some(REMINDER_MINUTES),
            title: title.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Plage explicite `[start, end]`.
    pub fn window<T, D, L>(
        start: NaiveDateTime,
        end: NaiveDateTime,
        title: T,
        description: D,
        location: L,
    ) -> Self
    where
        T: Into<String>,
        D: Into<String>,
        L: Into<String>,
    {
        Self {
            start,
            end: Some(end),
            duration_minutes: None,
            title: title.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Fin effective ; `None` si la durée sort de la plage des dates.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        match (self.end, self.duration_minutes) {
            (Some(end), _) => Some(end),
            (None, Some(minutes)) => Duration::try_minutes(minutes)
                .and_then(|d| self.start.checked_add_signed(d)),
            (None, None) => Some(self.start),
        }
    }
}
