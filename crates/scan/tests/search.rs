use chrono::NaiveDate;
use nerdyversary_expression::{
    Candidate, ConstructConfig, DAYS_PER_YEAR, ExpressionError, Symbol, SymbolPower,
};
use nerdyversary_scan::{Nerdyversary, ScanError, SearchWindow, scan};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn july_2022_window() -> SearchWindow {
    SearchWindow::new(date(2016, 3, 30))
        .with_start(date(2022, 7, 10))
        .with_end(date(2022, 7, 20))
}

fn tight_tuning() -> ConstructConfig {
    ConstructConfig::new().with_max_power(3).with_factor_lim(5)
}

#[test]
fn end_to_end_scenario() {
    let hits = scan(&july_2022_window(), date(2022, 7, 10), &tight_tuning()).unwrap();
    assert_eq!(hits.len(), 2);

    assert_eq!(hits[0].date(), date(2022, 7, 12));
    assert_eq!(hits[0].expression().to_string(), "2*pi");
    assert!((hits[0].expression().value() - 6.2832).abs() < 1e-3);

    assert_eq!(hits[1].date(), date(2022, 7, 16));
    assert_eq!(hits[1].expression().to_string(), "3*pi^3/(2*e^2)");
    assert!((hits[1].expression().value() - 6.2944).abs() < 1e-3);
}

#[test]
fn empty_window_scans_nothing() {
    let window = SearchWindow::new(date(2016, 3, 30))
        .with_start(date(2022, 7, 10))
        .with_end(date(2022, 7, 10));
    let hits = scan(&window, date(2022, 7, 10), &ConstructConfig::new()).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn inverted_window_scans_nothing() {
    let window = SearchWindow::new(date(2016, 3, 30))
        .with_start(date(2022, 7, 20))
        .with_end(date(2022, 7, 10));
    let hits = scan(&window, date(2022, 7, 20), &ConstructConfig::new()).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn window_before_the_special_day_scans_nothing() {
    let window = SearchWindow::new(date(2030, 1, 1))
        .with_start(date(2022, 7, 10))
        .with_end(date(2022, 7, 20));
    let hits = scan(&window, date(2022, 7, 10), &ConstructConfig::new()).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn max_power_zero_finds_nothing() {
    let config = ConstructConfig::new().with_max_power(0);
    let hits = scan(&july_2022_window(), date(2022, 7, 10), &config).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn scan_is_deterministic() {
    let first = scan(&july_2022_window(), date(2022, 7, 10), &tight_tuning()).unwrap();
    let second = scan(&july_2022_window(), date(2022, 7, 10), &tight_tuning()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_window_covers_a_year_from_today() {
    // no explicit bounds: the window is [today, today + 365 days)
    let window = SearchWindow::new(date(2016, 3, 30));
    let config = ConstructConfig::new();
    let hits = scan(&window, date(2022, 7, 10), &config).unwrap();

    let two_pi = Nerdyversary::new(
        date(2022, 7, 12),
        Candidate::new(2, Some(SymbolPower::new(Symbol::Pi, 1).unwrap()), 1, None).unwrap(),
    );
    assert!(hits.contains(&two_pi));

    // sorted by (date, expression), no duplicates
    for pair in hits.windows(2) {
        assert!(pair[0] < pair[1]);
    }

    // every hit respects the tolerance relative to its own day offset
    for hit in &hits {
        let offset = (hit.date() - date(2016, 3, 30)).num_days();
        let target = offset as f64 / DAYS_PER_YEAR;
        let distance_days = (hit.expression().value() - target).abs() * DAYS_PER_YEAR;
        assert!(distance_days < config.tolerance_days());
    }
}

#[test]
fn invalid_tuning_fails_the_scan() {
    let config = ConstructConfig::new().with_factor_lim(0);
    assert_eq!(
        scan(&july_2022_window(), date(2022, 7, 10), &config).unwrap_err(),
        ScanError::Expression(ExpressionError::InvalidFactorLim { factor_lim: 0 })
    );
}
