use crate::sleep_log::SleepRecord;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Journal de sommeil persistant (collaborateur externe du planificateur).
pub trait SleepLogStore {
    /// Charge toutes les nuits ; un journal absent est vide.
    fn load(&self) -> anyhow::Result<Vec<SleepRecord>>;
    /// Sauvegarde de manière atomique.
    fn save(&self, records: &[SleepRecord]) -> anyhow::Result<()>;

    fn append(&self, record: SleepRecord) -> anyhow::Result<usize> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)?;
        Ok(records.len())
    }
}

pub struct JsonSleepLogStore {
    path: PathBuf,
}

impl JsonSleepLogStore {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SleepLogStore for JsonSleepLogStore {
    fn load(&self) -> anyhow::Result<Vec<SleepRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let records: Vec<SleepRecord> =
            serde_json::from_slice(&data).with_context(|| "parsing sleep log")?;
        Ok(records)
    }

    fn save(&self, records: &[SleepRecord]) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        log_debug!(path = %self.path.display(), records = records.len(), "sleep log saved");
        Ok(())
    }
}
