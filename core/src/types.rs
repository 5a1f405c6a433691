use serde::{Deserialize, Serialize};

/// Terskler (fot) for tellingen, fra størst til minst.
pub const THRESHOLDS_FT: [u32; 6] = [2000, 1000, 500, 400, 300, 200];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLine {
    pub date: String,
    pub feet: u32,
}

/// Antall dager under hver terskel. Nøstet: en dag under 200 ft telles i alle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThresholdCounts {
    pub below_2000: u32,
    pub below_1000: u32,
    pub below_500: u32,
    pub below_400: u32,
    pub below_300: u32,
    pub below_200: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CloudReport {
    pub days: Vec<DayLine>,
    pub total_days: u32,
    pub thresholds: ThresholdCounts,
    pub dropped_samples: u64,
    pub dropped_days: u64,
}
