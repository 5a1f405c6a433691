use crate::error::{CloudError, Result};
use crate::models::{MAX_DAYS, WIN_SECONDS, WIN_SLOTS};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grenser for vindu og dagtabell. Default: 3600 s, 120 plasser, 365 dager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub window_secs: u64,
    pub window_slots: usize,
    pub max_days: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            window_secs: WIN_SECONDS,
            window_slots: WIN_SLOTS,
            max_days: MAX_DAYS,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_slots == 0 {
            return Err(CloudError::Config("window_slots must be > 0".into()));
        }
        if self.window_secs == 0 {
            return Err(CloudError::Config("window_secs must be > 0".into()));
        }
        Ok(())
    }
}

/// Leser inn config fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-config.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    if !path.exists() {
        info!("config {} not found, using defaults", path.display());
        return Ok(AnalyzerConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let cfg: AnalyzerConfig = serde_json::from_str(&contents)?;
    cfg.validate()?;
    info!(
        "config loaded from {} (window={}s/{} slots, max_days={})",
        path.display(),
        cfg.window_secs,
        cfg.window_slots,
        cfg.max_days
    );
    Ok(cfg)
}

/// Lagrer config til disk som JSON (pretty-print).
pub fn save_config(cfg: &AnalyzerConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    Ok(())
}
