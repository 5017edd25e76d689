use crate::model::{RawAdjustmentRequest, ScheduleEntry};
use anyhow::Context;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Charge une requête au format UI (`usualWakeTime`, `direction`, ...).
pub fn load_request_json<P: AsRef<Path>>(path: P) -> anyhow::Result<RawAdjustmentRequest> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw = serde_json::from_slice(&data)
        .with_context(|| format!("parsing request {}", path.display()))?;
    Ok(raw)
}

/// Export JSON du plan (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(entries)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV : header `day,date,wake,temperature_minimum,light_start,light_end,bedtime`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "day",
        "date",
        "wake",
        "temperature_minimum",
        "light_start",
        "light_end",
        "bedtime",
    ])?;
    for e in entries {
        w.write_record([
            e.day_index.to_string(),
            e.calendar_date.to_string(),
            iso(e.wake_time),
            iso(e.temperature_minimum),
            iso(e.light_exposure_start),
            iso(e.light_exposure_end),
            iso(e.bedtime_suggestion),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn iso(at: chrono::NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}
