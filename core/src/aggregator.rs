// core/src/aggregator.rs
use log::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::models::{DayTable, Sample, MAX_HEIGHT};
use crate::window::WindowBuffer;

/// Deler strømmen opp i dager og holder et løpende dagsminimum.
///
/// Hvert vindu bidrar med sin median; dagsminimum synker bare når en
/// median er strengt lavere. En enkelt lav støymåling flytter derfor ikke
/// minimum med mindre den utgjør minst halve vinduet.
#[derive(Debug)]
pub struct DayAggregator {
    table: DayTable,
    window: WindowBuffer,
    cur_date: Option<String>,
    day: Option<usize>, // None => ingen dag, eller dagen ble droppet (full tabell)
    day_min: u32,
    dropped_samples: u64,
    dropped_days: u64,
}

impl Default for DayAggregator {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl DayAggregator {
    pub fn new(cfg: AnalyzerConfig) -> Self {
        Self {
            table: DayTable::with_capacity(cfg.max_days),
            window: WindowBuffer::new(cfg.window_slots, cfg.window_secs),
            cur_date: None,
            day: None,
            day_min: MAX_HEIGHT,
            dropped_samples: 0,
            dropped_days: 0,
        }
    }

    pub fn push(&mut self, sample: &Sample) {
        if self.cur_date.as_deref() != Some(sample.date.as_str()) {
            self.close_day();
            self.open_day(sample);
        }

        let elapsed = self.window.elapsed(sample.timestamp);

        if self.window.is_full() {
            if self.window.is_expired(elapsed) {
                // allerede evaluert da det ble fullt
                self.window.reset(sample.timestamp);
            } else {
                warn!(
                    "window full: dropping sample {} {} ({} slots, {}s elapsed)",
                    sample.date,
                    sample.time,
                    self.window.len(),
                    elapsed
                );
                self.dropped_samples += 1;
                return;
            }
        } else if self.window.is_expired(elapsed) {
            self.evaluate_window();
            self.window.reset(sample.timestamp);
        }

        self.window.push(sample.height_m);
        if self.window.is_full() {
            // evalueres nå, nullstilles først ved neste sample
            self.evaluate_window();
        }
    }

    /// Avslutter siste åpne dag og gir tabellen.
    pub fn finish(mut self) -> DayTable {
        self.close_day();
        self.table
    }

    /// Løpende minimum for dagen som er åpen nå.
    pub fn current_min(&self) -> u32 {
        self.day_min
    }

    pub fn dropped_samples(&self) -> u64 {
        self.dropped_samples
    }

    pub fn dropped_days(&self) -> u64 {
        self.dropped_days
    }

    fn evaluate_window(&mut self) {
        let before = self.day_min;
        self.day_min = self.window.evaluate(self.day_min);
        if self.day_min < before {
            debug!(
                "{}: window@{} ({} slots) lowered day min {} -> {} m",
                self.cur_date.as_deref().unwrap_or("?"),
                self.window.start(),
                self.window.len(),
                before,
                self.day_min
            );
        }
    }

    /// Fullt vindu er allerede evaluert. Utløpt vindu evalueres her, selv om
    /// neste dag starter lenge etter.
    fn close_day(&mut self) {
        let Some(idx) = self.day.take() else {
            return;
        };
        if !self.window.is_full() {
            self.evaluate_window();
        }
        self.table.freeze(idx, self.day_min);
    }

    fn open_day(&mut self, sample: &Sample) {
        self.cur_date = Some(sample.date.clone());
        self.window.reset(sample.timestamp);
        self.day_min = MAX_HEIGHT;

        self.day = self.table.open_day(&sample.date);
        if self.day.is_none() {
            warn!(
                "day table full ({} days): dropping {}",
                self.table.len(),
                sample.date
            );
            self.dropped_days += 1;
        }
    }
}
