use crate::sleep_log::SleepRecord;
use anyhow::{bail, Result};

/// Rendu du prompt d'analyse envoyé au service de génération de texte.
pub trait PromptRenderer {
    fn render(&self, record: &SleepRecord) -> String;
}

/// Gabarit texte par défaut.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPrompt;

impl PromptRenderer for TextPrompt {
    fn render(&self, record: &SleepRecord) -> String {
        format!(
            "Analyze this sleep data:\nSleep Quality: {quality}\nNumber of Wake-ups: {wake_ups}\nSleep Time: {start}\nWake Time: {end}\nDuration: {duration:.2} hours\n\nPlease provide insights about sleep quality, patterns, and suggestions for improvement.\n",
            quality = record.quality,
            wake_ups = record.wake_ups,
            start = record.start.format("%Y-%m-%dT%H:%M"),
            end = record.end.format("%Y-%m-%dT%H:%M"),
            duration = record.duration_hours(),
        )
    }
}

/// Service distant d'analyse ; le transport (et ses reprises) est hors de la lib.
pub trait SleepAnalyzer {
    /// Réponse complète.
    fn analyze(&self, prompt: &str) -> Result<String>;

    /// Réponse incrémentale : `on_chunk` reçoit chaque fragment dans l'ordre.
    fn analyze_streaming(&self, prompt: &str, on_chunk: &mut dyn FnMut(&str)) -> Result<()> {
        let text = self.analyze(prompt)?;
        on_chunk(&text);
        Ok(())
    }
}

/// Prépare le prompt pour la nuit la plus récente du journal.
pub fn prepare_analysis(records: &[SleepRecord], renderer: &dyn PromptRenderer) -> Result<String> {
    let Some(latest) = records.iter().max_by_key(|r| r.start) else {
        bail!("sleep log is empty");
    };
    Ok(renderer.render(latest))
}
