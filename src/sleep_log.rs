use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SleepQuality {
    /// Échelle 1..=4.
    pub fn score(self) -> u8 {
        match self {
            SleepQuality::Poor => 1,
            SleepQuality::Fair => 2,
            SleepQuality::Good => 3,
            SleepQuality::Excellent => 4,
        }
    }
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SleepQuality::Poor => "Poor",
            SleepQuality::Fair => "Fair",
            SleepQuality::Good => "Good",
            SleepQuality::Excellent => "Excellent",
        };
        f.write_str(s)
    }
}

impl FromStr for SleepQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poor" => Ok(SleepQuality::Poor),
            "fair" => Ok(SleepQuality::Fair),
            "good" => Ok(SleepQuality::Good),
            "excellent" => Ok(SleepQuality::Excellent),
            other => Err(format!("unknown sleep quality: {other:?}")),
        }
    }
}

/// Nuit enregistrée (intervalle [start, end), heures locales).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub quality: SleepQuality,
    #[serde(default)]
    pub wake_ups: u32,
}

impl SleepRecord {
    /// Construit une nuit depuis des heures murales ; un réveil qui n'est pas après le
    /// coucher tombe le lendemain.
    pub fn from_clock_times(
        date: NaiveDate,
        bedtime: NaiveTime,
        wake: NaiveTime,
        quality: SleepQuality,
        wake_ups: u32,
    ) -> Result<Self, String> {
        let start = date.and_time(bedtime);
        let end_date = if wake <= bedtime {
            date.checked_add_days(Days::new(1))
                .ok_or_else(|| "date out of range".to_string())?
        } else {
            date
        };
        Self::new(date, start, end_date.and_time(wake), quality, wake_ups)
    }

    pub fn new(
        date: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
        quality: SleepQuality,
        wake_ups: u32,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("wake time must be after bedtime".to_string());
        }
        Ok(Self {
            date,
            start,
            end,
            quality,
            wake_ups,
        })
    }

    /// Durée en heures.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_minutes() as f64 / 60.0
    }
}
