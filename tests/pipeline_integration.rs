//! End-to-end tests of the parse, aggregate, rank and render pipeline.

use popurank::record::Population;
use popurank::report::{render, render_report};
use popurank::{analyze_lines, analyze_population_file, Aggregator, ReportFormat};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_csv(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("popu-pref.csv");
    fs::write(&path, content).expect("Failed to write test file");
    (temp_dir, path)
}

fn lines_of(content: &str) -> Vec<anyhow::Result<String>> {
    content.lines().map(|l| Ok(l.to_string())).collect()
}

#[test]
fn test_file_report_matches_expected_order() {
    let (_dir, path) = write_csv(
        "集計年,都道府県名,10〜14歳人口,15〜19歳人口\n\
         2010,Tokyo,X,1000\n\
         2010,Osaka,X,2000\n\
         2010,Akita,X,900\n\
         2012,Tokyo,X,1234\n\
         2015,Tokyo,X,1500\n\
         2015,Osaka,X,1800\n\
         2015,Okinawa,X,1400\n",
    );

    let result = analyze_population_file(&path).expect("Analysis should succeed");
    assert_eq!(
        render(&result.ranking),
        vec![
            "Okinawa: 0=>1400 変化率:Infinity",
            "Tokyo: 1000=>1500 変化率:1.5",
            "Osaka: 2000=>1800 変化率:0.9",
            "Akita: 900=>0 変化率:0",
        ]
    );
    assert_eq!(result.counters.lines_seen, 8);
    assert_eq!(result.counters.lines_ignored, 2);
}

#[test]
fn test_repeated_runs_are_identical() {
    let content = "2010,A,x,10\n2015,A,x,20\n2010,B,x,5\n2015,B,x,10\n2010,C,x,3\n2015,C,x,3\n";
    let (_dir, path) = write_csv(content);

    let first = analyze_population_file(&path).unwrap();
    let second = analyze_population_file(&path).unwrap();
    assert_eq!(
        render_report(&first.ranking, ReportFormat::Array),
        render_report(&second.ranking, ReportFormat::Array)
    );
    let names: Vec<&str> = first.ranking.iter().map(|e| e.region.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_malformed_rows_poison_only_their_region() {
    let result = analyze_lines(lines_of(
        "2010,Tokyo,X,1000\n2015,Tokyo,X,1500\n2010,Gifu,X,???\n2015,Gifu,X,20",
    ))
    .unwrap();

    assert_eq!(
        render(&result.ranking),
        vec!["Tokyo: 1000=>1500 変化率:1.5", "Gifu: NaN=>20 変化率:NaN"]
    );
}

#[test]
fn test_byte_order_mark_does_not_drop_first_row() {
    let (_dir, path) = write_csv("\u{feff}2010,Tokyo,X,1000\n2015,Tokyo,X,1500\n");
    let result = analyze_population_file(&path).unwrap();
    assert_eq!(render(&result.ranking), vec!["Tokyo: 1000=>1500 変化率:1.5"]);
}

#[test]
fn test_missing_file_fails_without_report() {
    let temp_dir = TempDir::new().unwrap();
    let err = analyze_population_file(&temp_dir.path().join("popu-pref.csv")).unwrap_err();
    assert!(format!("{:#}", err).contains("popu-pref.csv"));
}

#[test]
fn test_empty_file_yields_empty_report() {
    let (_dir, path) = write_csv("");
    let result = analyze_population_file(&path).unwrap();
    assert!(result.ranking.is_empty());
    assert_eq!(render_report(&result.ranking, ReportFormat::Array), "[]");
}

fn csv_line() -> impl Strategy<Value = (i64, String, i64)> {
    (
        prop_oneof![Just(2010i64), Just(2015i64), 2000i64..2020],
        prop::sample::select(vec!["Tokyo", "Osaka", "Aichi", "Hokkaido", "Fukuoka"]),
        0i64..100_000,
    )
        .prop_map(|(year, region, popu)| (year, region.to_string(), popu))
}

proptest! {
    #[test]
    fn prop_ranking_is_descending(rows in prop::collection::vec(csv_line(), 0..60)) {
        let lines: Vec<anyhow::Result<String>> = rows
            .iter()
            .map(|(year, region, popu)| Ok(format!("{},{},x,{}", year, region, popu)))
            .collect();
        let result = analyze_lines(lines).unwrap();

        for pair in result.ranking.windows(2) {
            let (a, b) = (pair[0].change(), pair[1].change());
            prop_assert!(b.is_nan() || a >= b, "{} ranked above {}", a, b);
        }
        for entry in &result.ranking {
            prop_assert_eq!(entry.change().to_bits(), entry.stat.growth_ratio().to_bits());
        }
    }

    #[test]
    fn prop_other_years_do_not_touch_aggregates(
        rows in prop::collection::vec(csv_line(), 0..40),
        noise_year in 1900i64..2100,
        noise_popu in 0i64..1000,
    ) {
        prop_assume!(noise_year != 2010 && noise_year != 2015);

        let mut clean = Aggregator::new();
        let mut noisy = Aggregator::new();
        for (year, region, popu) in &rows {
            let line = format!("{},{},x,{}", year, region, popu);
            clean.fold(&line);
            noisy.fold(&line);
            noisy.fold(&format!("{},{},x,{}", noise_year, region, noise_popu));
        }

        prop_assert_eq!(clean.finalize(), noisy.finalize());
    }
}

#[test]
fn test_last_write_wins_across_file() {
    let mut aggregator = Aggregator::new();
    for line in ["2010,Tokyo,X,1000", "2015,Tokyo,X,1500", "2010,Tokyo,X,750"] {
        aggregator.fold(line);
    }
    let regions = aggregator.finalize();
    assert_eq!(regions["Tokyo"].popu10, Population::new(750));
    assert_eq!(regions["Tokyo"].popu15, Population::new(1500));
}
