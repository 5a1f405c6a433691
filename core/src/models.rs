use serde::{Deserialize, Serialize};

/// Antatt høyde (meter) når målingen mangler ("None").
///
/// Holdes som et vanlig tall og ikke `Option`: verdien taper alle
/// sammenligninger mot ekte lave målinger.
pub const MAX_HEIGHT: u32 = 10000;

/// Vinduslengde i sekunder (60 min).
pub const WIN_SECONDS: u64 = 60 * 60;

/// Antall plasser i et vindu (verste fall 2 målinger pr minutt).
pub const WIN_SLOTS: usize = 60 * 2;

/// Maks antall dager i dagtabellen.
pub const MAX_DAYS: usize = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub date: String,
    pub time: String, // passthrough, brukes ikke i logikken
    pub kind: String, // typ "cloudLowSig"
    pub timestamp: u64,  // sek siden epoch (heltallsdel)
    pub height_m: u32,   // MAX_HEIGHT hvis ukjent
}

impl Sample {
    pub fn is_unknown_height(&self) -> bool {
        self.height_m == MAX_HEIGHT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    pub date: String,
    pub min_height_m: u32,
}

/// Append-only tabell med én rad pr dato, i rekkefølgen de dukker opp.
#[derive(Debug, Clone, Default)]
pub struct DayTable {
    days: Vec<DayResult>,
    capacity: usize,
}

impl DayTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            days: Vec::with_capacity(capacity.min(MAX_DAYS)),
            capacity,
        }
    }

    /// Reserverer en ny rad. `None` når tabellen er full.
    pub fn open_day(&mut self, date: &str) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.days.push(DayResult {
            date: date.to_string(),
            min_height_m: MAX_HEIGHT,
        });
        Some(self.days.len() - 1)
    }

    pub fn freeze(&mut self, idx: usize, min_height_m: u32) {
        if let Some(day) = self.days.get_mut(idx) {
            day.min_height_m = min_height_m;
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.days.len() >= self.capacity
    }

    pub fn days(&self) -> &[DayResult] {
        &self.days
    }

    pub fn into_days(self) -> Vec<DayResult> {
        self.days
    }
}
