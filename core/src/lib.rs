use std::io::BufRead;

use log::info;

pub mod aggregator;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod types;
pub mod units;
pub mod window;

pub use aggregator::DayAggregator;
pub use config::{load_config, save_config, AnalyzerConfig};
pub use error::{CloudError, RecordError};
pub use models::{DayResult, DayTable, Sample, MAX_HEIGHT};
pub use parser::{parse_height, parse_line, SampleSource};
pub use report::{build_report, write_json, write_text};
pub use types::{CloudReport, DayLine, ThresholdCounts};
pub use units::meters_to_feet;

/// Hele løpet: logglinjer inn, rapport ut.
///
/// Første linje med feil form, eller lesefeil, avslutter strømmen (ikke en feil).
/// Dager samlet før det rapporteres alltid. Bare ugyldig config gir `Err`.
pub fn run<R: BufRead>(input: R, cfg: AnalyzerConfig) -> error::Result<CloudReport> {
    cfg.validate()?;

    let mut agg = DayAggregator::new(cfg);
    let mut source = SampleSource::new(input);
    for sample in &mut source {
        agg.push(&sample);
    }
    info!("read {} lines", source.lines_read());

    Ok(finish_report(agg))
}

/// Samme som `run`, men for samples som allerede er tolket.
pub fn analyze_samples<I>(samples: I, cfg: AnalyzerConfig) -> error::Result<CloudReport>
where
    I: IntoIterator<Item = Sample>,
{
    cfg.validate()?;

    let mut agg = DayAggregator::new(cfg);
    for sample in samples {
        agg.push(&sample);
    }
    Ok(finish_report(agg))
}

fn finish_report(agg: DayAggregator) -> CloudReport {
    let dropped_samples = agg.dropped_samples();
    let dropped_days = agg.dropped_days();
    let table = agg.finish();
    if table.is_empty() {
        info!("no samples in input");
    }

    let mut report = build_report(table.days());
    report.dropped_samples = dropped_samples;
    report.dropped_days = dropped_days;
    info!(
        "{} days, {} samples dropped, {} days dropped",
        report.total_days, dropped_samples, dropped_days
    );
    report
}
