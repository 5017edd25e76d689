#![forbid(unsafe_code)]
//! Circadian — planification locale d'un décalage de phase circadien (jet lag, travail posté).
//!
//! - Générateur pur : requête + date du jour → un plan par jour (réveil, minimum de
//!   température, fenêtre de lumière, coucher).
//! - Export calendrier : plan → événements génériques → fichier `.ics`.
//! - Heures « flottantes » (heure murale locale) ; la date du jour est injectée, jamais lue
//!   depuis l'horloge dans la lib.

/// `tracing::debug!` quand la feature `logging` est active, rien sinon.
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::debug!($($arg)*);
    };
}

pub mod display;
pub mod export;
pub mod io;
pub mod model;
pub mod prompt;
pub mod scheduler;
pub mod sleep_log;
pub mod storage;

pub use display::{render_table, ScheduleRow};
pub use export::{export, to_ics, write_ics, CalendarEvent, ExportError, DEFAULT_ICS_FILE_NAME};
pub use model::{AdjustmentRequest, Direction, RawAdjustmentRequest, ScheduleEntry};
pub use prompt::{prepare_analysis, PromptRenderer, SleepAnalyzer, TextPrompt};
pub use scheduler::{generate, parse_request, SchedError};
pub use sleep_log::{SleepQuality, SleepRecord};
pub use storage::{JsonSleepLogStore, SleepLogStore};
