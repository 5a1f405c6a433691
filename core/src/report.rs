// core/src/report.rs
use std::io::Write;

use crate::error::Result;
use crate::models::DayResult;
use crate::types::{CloudReport, DayLine, ThresholdCounts, THRESHOLDS_FT};
use crate::units::meters_to_feet;

impl ThresholdCounts {
    /// Teller én dag. Stopper ved første terskel dagen ikke er under.
    pub fn add(&mut self, feet: u32) {
        let buckets = [
            &mut self.below_2000,
            &mut self.below_1000,
            &mut self.below_500,
            &mut self.below_400,
            &mut self.below_300,
            &mut self.below_200,
        ];
        for (limit, count) in THRESHOLDS_FT.iter().zip(buckets) {
            if feet >= *limit {
                break;
            }
            *count += 1;
        }
    }

    pub fn as_array(&self) -> [u32; 6] {
        [
            self.below_2000,
            self.below_1000,
            self.below_500,
            self.below_400,
            self.below_300,
            self.below_200,
        ]
    }
}

/// Konverterer hver dag til fot og teller terskler, i tabellens rekkefølge.
pub fn build_report(days: &[DayResult]) -> CloudReport {
    let mut thresholds = ThresholdCounts::default();
    let mut lines = Vec::with_capacity(days.len());

    for day in days {
        let feet = meters_to_feet(day.min_height_m);
        thresholds.add(feet);
        lines.push(DayLine {
            date: day.date.clone(),
            feet,
        });
    }

    CloudReport {
        total_days: lines.len() as u32,
        days: lines,
        thresholds,
        ..Default::default()
    }
}

/// Tekstformat: én linje pr dag, blank linje, total og terskellinje.
pub fn write_text<W: Write>(report: &CloudReport, out: &mut W) -> Result<()> {
    for day in &report.days {
        writeln!(out, "{} {}", day.date, day.feet)?;
    }

    let t = &report.thresholds;
    writeln!(out, "\n{} days total", report.total_days)?;
    writeln!(
        out,
        "< 2000: {}, < 1000: {}, < 500: {}, < 400: {}, < 300: {}, < 200: {}",
        t.below_2000, t.below_1000, t.below_500, t.below_400, t.below_300, t.below_200
    )?;
    Ok(())
}

pub fn write_json<W: Write>(report: &CloudReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
