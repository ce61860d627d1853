use trc_config::AppConfig;
use trc_engine::{reconcile, MatchStatus};
use trc_io::{load_trades, write_results_csv};
use trc_testkit::{buy, sell, write_feed_csv};

#[test]
fn scenario_csv_in_reconcile_csv_out() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let feed_a = write_feed_csv(
        dir.path(),
        "system_a.csv",
        &[
            buy("T1", "IBM", 100.0, 10.0),
            buy("T2", "MSFT", 50.0, 5.0),
            sell("T3", "AAPL", 10.0, 1.0),
        ],
    )?;
    let feed_b = write_feed_csv(
        dir.path(),
        "system_b.csv",
        &[
            buy("T1", "ibm", 100.00005, 10.0),
            buy("T2", "MSFT", 50.01, 5.0),
            sell("T4", "GOOG", 9.0, 2.0),
        ],
    )?;

    let system_a = load_trades(&feed_a)?;
    let system_b = load_trades(&feed_b)?;
    assert_eq!(system_a.len(), 3);
    assert_eq!(system_b.len(), 3);

    let config = AppConfig::default();
    let report = reconcile(&system_a, &system_b, &config.reconcile());

    let by_id = |id: &str| {
        report
            .results
            .iter()
            .find(|r| r.trade_id == id)
            .expect("classified")
    };
    assert_eq!(by_id("T1").status, MatchStatus::Matched);
    assert_eq!(by_id("T2").status, MatchStatus::Mismatched);
    assert_eq!(by_id("T3").status, MatchStatus::MissingInB);
    assert_eq!(by_id("T4").status, MatchStatus::MissingInA);

    let output = dir.path().join("report.csv");
    write_results_csv(&output, &report.results)?;

    let content = std::fs::read_to_string(&output)?;
    assert_eq!(content.lines().count(), 5, "header plus one row per id");
    assert!(content.contains("T2,MISMATCHED"));
    assert!(content.contains("T4,MISSING_IN_A,,,,,GOOG"));

    Ok(())
}

#[test]
fn scenario_config_file_tolerances_flow_through_the_pipeline() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let config_path = dir.path().join("trc.json");
    std::fs::write(&config_path, r#"{ "price_tolerance": 0.05 }"#)?;
    let config = AppConfig::load(&config_path);

    let feed_a = write_feed_csv(dir.path(), "a.csv", &[buy("T2", "MSFT", 50.0, 5.0)])?;
    let feed_b = write_feed_csv(dir.path(), "b.csv", &[buy("T2", "MSFT", 50.01, 5.0)])?;

    let report = reconcile(
        &load_trades(&feed_a)?,
        &load_trades(&feed_b)?,
        &config.reconcile(),
    );

    // The 0.01 drift that mismatches under defaults is inside the widened
    // tolerance.
    assert_eq!(report.results[0].status, MatchStatus::Matched);

    Ok(())
}
