// core/tests/test_aggregator.rs
use cloudparse_core::{AnalyzerConfig, DayAggregator, Sample, MAX_HEIGHT};

const T0: u64 = 1_704_067_200; // 2024-01-01 00:00 UTC

fn sample(date: &str, timestamp: u64, height_m: u32) -> Sample {
    Sample {
        date: date.to_string(),
        time: "0000".to_string(),
        kind: "T".to_string(),
        timestamp,
        height_m,
    }
}

fn run_all(samples: &[Sample], cfg: AnalyzerConfig) -> (Vec<(String, u32)>, u64, u64) {
    let mut agg = DayAggregator::new(cfg);
    for s in samples {
        agg.push(s);
    }
    let dropped = (agg.dropped_samples(), agg.dropped_days());
    let days = agg
        .finish()
        .into_days()
        .into_iter()
        .map(|d| (d.date, d.min_height_m))
        .collect();
    (days, dropped.0, dropped.1)
}

#[test]
fn test_day_change_closes_previous_day() {
    let samples = vec![
        sample("20240101", T0, 100),
        sample("20240102", T0 + 60, 200),
    ];
    let (days, _, _) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days, vec![("20240101".into(), 100), ("20240102".into(), 200)]);
}

#[test]
fn test_overnight_gap_keeps_last_window() {
    // neste dag starter et døgn senere; siste vindu skal likevel telle
    let samples = vec![
        sample("20240101", T0, 100),
        sample("20240102", T0 + 86_400, 200),
    ];
    let (days, _, _) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days[0], ("20240101".into(), 100));
}

#[test]
fn test_all_unknown_stays_at_sentinel() {
    let samples: Vec<_> = (0..10)
        .map(|i| sample("20240101", T0 + i * 30, MAX_HEIGHT))
        .collect();
    let (days, _, _) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days, vec![("20240101".into(), MAX_HEIGHT)]);
}

#[test]
fn test_single_outlier_ignored() {
    let mut samples: Vec<_> = (0..9)
        .map(|i| sample("20240101", T0 + i * 30, 500))
        .collect();
    samples.insert(4, sample("20240101", T0 + 125, 20)); // støy
    let (days, _, _) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days[0].1, 500);
}

#[test]
fn test_low_majority_moves_minimum() {
    // 6 av 11 lave => medianen er lav
    let samples: Vec<_> = (0..11)
        .map(|i| sample("20240101", T0 + i * 30, if i % 2 == 0 { 20 } else { 500 }))
        .collect();
    let (days, _, _) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days[0].1, 20);
}

#[test]
fn test_window_rolls_on_time_and_keeps_lowest_median() {
    let mut samples = Vec::new();
    for i in 0..3 {
        samples.push(sample("20240101", T0 + i * 60, 300));
    }
    // > 3600s etter vindusstart => nytt vindu
    for i in 0..3 {
        samples.push(sample("20240101", T0 + 3601 + i * 60, 800));
    }
    for i in 0..3 {
        samples.push(sample("20240101", T0 + 7300 + i * 60, 250));
    }
    let (days, dropped, _) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days, vec![("20240101".into(), 250)]);
    assert_eq!(dropped, 0);
}

#[test]
fn test_full_window_drops_until_time_bound() {
    // 130 samples, 10s mellomrom, 50..179 m
    let mut samples: Vec<_> = (0..130u64)
        .map(|i| sample("20240101", T0 + i * 10, 50 + i as u32))
        .collect();

    let mut agg = DayAggregator::default();
    for s in &samples {
        agg.push(s);
    }
    // fullt ved sample 120: sortert 50..169, index 60 => 110
    assert_eq!(agg.current_min(), 110);
    assert_eq!(agg.dropped_samples(), 10);

    // etter tidsgrensen rulles vinduet og nye data tas inn igjen
    samples.push(sample("20240101", T0 + 3601, 5));
    let (days, dropped, _) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days, vec![("20240101".into(), 5)]);
    assert_eq!(dropped, 10);
}

#[test]
fn test_full_window_is_final_at_end_of_stream() {
    let cfg = AnalyzerConfig { window_slots: 4, ..Default::default() };
    let samples: Vec<_> = [400, 100, 300, 200]
        .iter()
        .enumerate()
        .map(|(i, h)| sample("20240101", T0 + i as u64 * 10, *h))
        .collect();
    let (days, _, _) = run_all(&samples, cfg);
    // sortert 100 200 300 400 => index 2
    assert_eq!(days, vec![("20240101".into(), 300)]);
}

#[test]
fn test_day_table_overflow() {
    let cfg = AnalyzerConfig { max_days: 3, ..Default::default() };
    let samples: Vec<_> = (0..5u64)
        .map(|d| sample(&format!("2024010{}", d + 1), T0 + d * 86_400, 100 + d as u32))
        .collect();
    let (days, _, dropped_days) = run_all(&samples, cfg);
    assert_eq!(days.len(), 3);
    assert_eq!(days[2], ("20240103".into(), 102));
    assert_eq!(dropped_days, 2);
}

#[test]
fn test_default_table_holds_365_days() {
    let samples: Vec<_> = (0..370u64)
        .map(|d| sample(&format!("day{:03}", d), T0 + d * 86_400, 1000))
        .collect();
    let (days, _, dropped_days) = run_all(&samples, AnalyzerConfig::default());
    assert_eq!(days.len(), 365);
    assert_eq!(days.last().unwrap().0, "day364");
    assert_eq!(dropped_days, 5);
}

#[test]
fn test_revisited_date_gets_new_entry() {
    let samples = vec![
        sample("A", T0, 100),
        sample("B", T0 + 10, 200),
        sample("A", T0 + 20, 300),
    ];
    let (days, _, _) = run_all(&samples, AnalyzerConfig::default());
    let dates: Vec<_> = days.iter().map(|d| d.0.as_str()).collect();
    assert_eq!(dates, vec!["A", "B", "A"]);
}

#[test]
fn test_empty_stream() {
    let (days, dropped, dropped_days) = run_all(&[], AnalyzerConfig::default());
    assert!(days.is_empty());
    assert_eq!((dropped, dropped_days), (0, 0));
}
