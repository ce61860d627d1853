use chrono::{TimeZone, Utc};
use trc_engine::{MatchResult, TradeAction, TradeRecord};
use trc_io::{write_results_csv, REPORT_HEADER};

fn trade(id: &str, symbol: &str, price: f64, quantity: f64, action: TradeAction) -> TradeRecord {
    TradeRecord::new(
        id,
        symbol,
        price,
        quantity,
        action,
        Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap(),
    )
}

#[test]
fn scenario_report_rows_follow_the_export_contract() {
    let results = vec![
        MatchResult::matched(
            "T1",
            trade("T1", "IBM", 100.0, 10.0, TradeAction::Buy),
            trade("T1", "IBM", 100.0, 10.0, TradeAction::Buy),
        ),
        MatchResult::mismatched(
            "T2",
            trade("T2", "MSFT", 50.0, 5.0, TradeAction::Buy),
            trade("T2", "MSFT", 51.0, 5.0, TradeAction::Buy),
            vec!["Price 50 != 51".to_string()],
        ),
        MatchResult::missing_in_b("T3", trade("T3", "AAPL", 10.0, 1.0, TradeAction::Sell)),
    ];

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.csv");
    write_results_csv(&path, &results).expect("write report");

    let content = std::fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], REPORT_HEADER.join(","));
    assert_eq!(lines[1], "T1,MATCHED,IBM,BUY,100,10,IBM,BUY,100,10,");
    assert_eq!(lines[2], "T2,MISMATCHED,MSFT,BUY,50,5,MSFT,BUY,51,5,Price 50 != 51");

    // Absent side renders as empty fields; the fixed missing block is
    // semicolon-joined into the last column.
    assert_eq!(
        lines[3],
        "T3,MISSING_IN_B,AAPL,SELL,10,1,,,,,\
         Action missing;Symbol missing;Price missing;Quantity missing"
    );
}

#[test]
fn scenario_empty_result_set_writes_header_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.csv");
    write_results_csv(&path, &[]).expect("write report");

    let content = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(content.lines().count(), 1);
}
