//! Rendering of a bill result for display, clipboard and JSON output

use super::BillResult;

/// Format a monetary amount with its currency symbol and two decimals
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Three-line summary shown under the result table and copied to the clipboard
pub fn summary_text(result: &BillResult) -> String {
    let c = &result.currency;
    format!(
        "Total Bill: {}\nTip: {}\nGrand Total: {}",
        format_amount(c, result.total_bill),
        format_amount(c, result.tip_amount),
        format_amount(c, result.grand_total)
    )
}

/// (name, formatted amount owed) rows in participant order
pub fn rows(result: &BillResult) -> Vec<(String, String)> {
    result
        .participants
        .iter()
        .map(|p| (p.name.clone(), format_amount(&result.currency, p.final_amount)))
        .collect()
}

/// Machine-readable form of a result
pub fn to_json(result: &BillResult) -> serde_json::Value {
    let participants: Vec<serde_json::Value> = result
        .participants
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name,
                "base_share": p.base_share,
                "amount": p.final_amount,
                "formatted": format_amount(&result.currency, p.final_amount),
            })
        })
        .collect();

    serde_json::json!({
        "split_mode": result.split_mode,
        "currency": result.currency,
        "participants": participants,
        "total_bill": result.total_bill,
        "tip": result.tip_amount,
        "grand_total": result.grand_total,
        "summary": summary_text(result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{compute, BillRequest, Participant, SplitMode};

    fn sample() -> BillResult {
        compute(&BillRequest {
            split_mode: SplitMode::Custom,
            tip_percent: 10.0,
            currency: "₹".to_string(),
            participants: vec![Participant::new("alice", 30.0), Participant::new("bob", 70.0)],
            total_bill_even: None,
        })
        .unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("$", 5.0), "$5.00");
        assert_eq!(format_amount("€", 33.333), "€33.33");
        assert_eq!(format_amount("", 0.0), "0.00");
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(
            summary_text(&sample()),
            "Total Bill: ₹100.00\nTip: ₹10.00\nGrand Total: ₹110.00"
        );
    }

    #[test]
    fn test_rows() {
        let rows = rows(&sample());
        assert_eq!(
            rows,
            vec![
                ("Alice".to_string(), "₹33.00".to_string()),
                ("Bob".to_string(), "₹77.00".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&sample());
        assert_eq!(json["split_mode"], "custom");
        assert_eq!(json["currency"], "₹");
        assert_eq!(json["participants"][1]["name"], "Bob");
        assert_eq!(json["participants"][1]["formatted"], "₹77.00");
        assert_eq!(json["total_bill"], 100.0);
    }
}
