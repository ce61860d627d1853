use crate::{ReconcileConfig, TradeRecord};

/// Field-level comparison of two records booked under the same id.
///
/// Checks run in fixed order (action, symbol, price, quantity) so that the
/// difference list is deterministic. Numeric fields mismatch only when the
/// absolute difference is strictly greater than the configured tolerance;
/// a difference exactly equal to the tolerance still matches. `booked_at`
/// is never consulted.
pub fn diff_trades(a: &TradeRecord, b: &TradeRecord, cfg: &ReconcileConfig) -> Vec<String> {
    let mut differences = Vec::new();

    if a.action != b.action {
        differences.push(format!("Action {} != Action {}", a.action, b.action));
    }

    let symbols_equal = if cfg.case_insensitive_symbols {
        a.symbol.eq_ignore_ascii_case(&b.symbol)
    } else {
        a.symbol == b.symbol
    };
    if !symbols_equal {
        differences.push(format!("Symbol {} != Symbol {}", a.symbol, b.symbol));
    }

    if (a.price - b.price).abs() > cfg.price_tolerance {
        differences.push(format!("Price {} != {}", a.price, b.price));
    }

    if (a.quantity - b.quantity).abs() > cfg.quantity_tolerance {
        differences.push(format!("Quantity {} != Quantity {}", a.quantity, b.quantity));
    }

    differences
}

/// Fixed difference block for an id absent on one side.
///
/// Downstream consumers expect all four field lines regardless of what the
/// present side holds; keep the block literal.
pub fn missing_differences() -> Vec<String> {
    vec![
        "Action missing".to_string(),
        "Symbol missing".to_string(),
        "Price missing".to_string(),
        "Quantity missing".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradeAction;
    use chrono::{TimeZone, Utc};

    fn trade(symbol: &str, price: f64, quantity: f64, action: TradeAction) -> TradeRecord {
        TradeRecord::new(
            "T1",
            symbol,
            price,
            quantity,
            action,
            Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap(),
        )
    }

    #[test]
    fn identical_records_have_no_differences() {
        let a = trade("IBM", 100.0, 10.0, TradeAction::Buy);
        let diffs = diff_trades(&a, &a.clone(), &ReconcileConfig::default());
        assert!(diffs.is_empty());
    }

    #[test]
    fn differences_follow_check_order() {
        let a = trade("IBM", 100.0, 10.0, TradeAction::Buy);
        let b = trade("MSFT", 200.0, 20.0, TradeAction::Sell);

        let diffs = diff_trades(&a, &b, &ReconcileConfig::default());

        assert_eq!(
            diffs,
            vec![
                "Action BUY != Action SELL".to_string(),
                "Symbol IBM != Symbol MSFT".to_string(),
                "Price 100 != 200".to_string(),
                "Quantity 10 != Quantity 20".to_string(),
            ]
        );
    }

    #[test]
    fn price_at_exact_tolerance_is_not_a_difference() {
        let cfg = ReconcileConfig {
            price_tolerance: 0.5,
            ..ReconcileConfig::default()
        };
        let a = trade("IBM", 100.0, 10.0, TradeAction::Buy);
        let b = trade("IBM", 100.5, 10.0, TradeAction::Buy);

        assert!(diff_trades(&a, &b, &cfg).is_empty());
    }

    #[test]
    fn price_just_past_tolerance_is_a_difference() {
        let cfg = ReconcileConfig {
            price_tolerance: 0.5,
            ..ReconcileConfig::default()
        };
        let a = trade("IBM", 100.0, 10.0, TradeAction::Buy);
        let b = trade("IBM", 100.51, 10.0, TradeAction::Buy);

        let diffs = diff_trades(&a, &b, &cfg);
        assert_eq!(diffs, vec!["Price 100 != 100.51".to_string()]);
    }

    #[test]
    fn quantity_tolerance_uses_same_strict_rule() {
        let cfg = ReconcileConfig {
            quantity_tolerance: 1.0,
            ..ReconcileConfig::default()
        };
        let a = trade("IBM", 100.0, 10.0, TradeAction::Buy);
        let within = trade("IBM", 100.0, 11.0, TradeAction::Buy);
        let past = trade("IBM", 100.0, 11.1, TradeAction::Buy);

        assert!(diff_trades(&a, &within, &cfg).is_empty());
        assert_eq!(
            diff_trades(&a, &past, &cfg),
            vec!["Quantity 10 != Quantity 11.1".to_string()]
        );
    }

    #[test]
    fn symbol_case_policy_is_configurable() {
        let a = trade("ibm", 100.0, 10.0, TradeAction::Buy);
        let b = trade("IBM", 100.0, 10.0, TradeAction::Buy);

        let insensitive = ReconcileConfig::default();
        assert!(diff_trades(&a, &b, &insensitive).is_empty());

        let sensitive = ReconcileConfig {
            case_insensitive_symbols: false,
            ..ReconcileConfig::default()
        };
        assert_eq!(
            diff_trades(&a, &b, &sensitive),
            vec!["Symbol ibm != Symbol IBM".to_string()]
        );
    }
}
