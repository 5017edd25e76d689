use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sens du décalage : avancer (vers l'est) ou retarder (vers l'ouest) l'horloge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Advance,
    Delay,
}

impl Direction {
    /// -1 pour une avance (réveil plus tôt), +1 pour un retard.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Advance => -1,
            Direction::Delay => 1,
        }
    }

    pub fn phase_label(self) -> &'static str {
        match self {
            Direction::Advance => "Phase Advance",
            Direction::Delay => "Phase Delay",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Advance => f.write_str("advance"),
            Direction::Delay => f.write_str("delay"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advance" | "east" => Ok(Direction::Advance),
            "delay" | "west" => Ok(Direction::Delay),
            other => Err(format!("unknown direction: {other:?} (expected advance or delay)")),
        }
    }
}

/// Heure murale `HH:MM` (ou `HH:MM:SS`).
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Requête validée, immuable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRequest {
    pub usual_wake_time: NaiveTime,
    pub direction: Direction,
    pub total_hours_to_shift: f64,
    pub adjustment_days: u32,
}

/// Forme brute reçue de l'UI (`{ usualWakeTime: "HH:MM", direction, ... }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdjustmentRequest {
    #[serde(default)]
    pub usual_wake_time: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default = "default_total_hours")]
    pub total_hours_to_shift: f64,
    #[serde(default = "default_adjustment_days")]
    pub adjustment_days: i64,
}

fn default_total_hours() -> f64 {
    6.0
}

fn default_adjustment_days() -> i64 {
    3
}

impl Default for RawAdjustmentRequest {
    fn default() -> Self {
        Self {
            usual_wake_time: None,
            direction: None,
            total_hours_to_shift: default_total_hours(),
            adjustment_days: default_adjustment_days(),
        }
    }
}

/// Une journée du plan (index à partir de 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day_index: u32,
    pub calendar_date: NaiveDate,
    pub wake_time: NaiveDateTime,
    pub temperature_minimum: NaiveDateTime,
    pub light_exposure_start: NaiveDateTime,
    pub light_exposure_end: NaiveDateTime,
    pub bedtime_suggestion: NaiveDateTime,
}

impl ScheduleEntry {
    /// Réveil habituel, non décalé, posé sur la date de l'entrée.
    pub fn baseline_wake_time(&self, usual_wake_time: NaiveTime) -> NaiveDateTime {
        self.calendar_date.and_time(usual_wake_time)
    }

    /// Décalage signé du réveil par rapport à la référence du même jour.
    pub fn shift_from_baseline(&self, usual_wake_time: NaiveTime) -> Duration {
        self.wake_time - self.baseline_wake_time(usual_wake_time)
    }

    pub fn light_exposure_minutes(&self) -> i64 {
        (self.light_exposure_end - self.light_exposure_start).num_minutes()
    }
}
