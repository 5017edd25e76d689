#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use circadian::{
    prepare_analysis, JsonSleepLogStore, SleepAnalyzer, SleepLogStore, SleepQuality, SleepRecord,
    TextPrompt,
};
use tempfile::tempdir;

fn night(day: u32, bed: (u32, u32), wake: (u32, u32), quality: SleepQuality) -> SleepRecord {
    SleepRecord::from_clock_times(
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        NaiveTime::from_hms_opt(bed.0, bed.1, 0).unwrap(),
        NaiveTime::from_hms_opt(wake.0, wake.1, 0).unwrap(),
        quality,
        2,
    )
    .unwrap()
}

#[test]
fn append_and_reload() {
    let dir = tempdir().unwrap();
    let store = JsonSleepLogStore::open(dir.path().join("log.json")).unwrap();
    assert!(store.load().unwrap().is_empty());

    assert_eq!(store.append(night(17, (23, 0), (7, 0), SleepQuality::Good)).unwrap(), 1);
    assert_eq!(store.append(night(18, (0, 30), (6, 0), SleepQuality::Poor)).unwrap(), 2);

    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].quality, SleepQuality::Poor);
    assert_eq!(records[1].duration_hours(), 5.5);
}

#[test]
fn prompt_uses_latest_night() {
    let records = vec![
        night(18, (23, 0), (7, 0), SleepQuality::Good),
        night(17, (22, 0), (6, 0), SleepQuality::Poor),
    ];
    let prompt = prepare_analysis(&records, &TextPrompt).unwrap();
    assert!(prompt.starts_with("Analyze this sleep data:"));
    assert!(prompt.contains("Sleep Quality: Good"));
    assert!(prompt.contains("Number of Wake-ups: 2"));
    assert!(prompt.contains("Sleep Time: 2026-10-18T23:00"));
    assert!(prompt.contains("Wake Time: 2026-10-19T07:00"));
    assert!(prompt.contains("Duration: 8.00 hours"));

    assert!(prepare_analysis(&[], &TextPrompt).is_err());
}

struct Echo;

impl SleepAnalyzer for Echo {
    fn analyze(&self, prompt: &str) -> Result<String> {
        Ok(prompt.lines().next().unwrap_or_default().to_string())
    }
}

#[test]
fn streaming_falls_back_to_single_chunk() {
    let prompt = prepare_analysis(&[night(18, (23, 0), (7, 0), SleepQuality::Fair)], &TextPrompt)
        .unwrap();
    let mut chunks = Vec::new();
    Echo.analyze_streaming(&prompt, &mut |c| chunks.push(c.to_string()))
        .unwrap();
    assert_eq!(chunks, vec!["Analyze this sleep data:".to_string()]);
}
