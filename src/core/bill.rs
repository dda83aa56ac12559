//! Bill calculation - even or custom split with a proportional tip
//!
//! The calculator is a pure function over a [`BillRequest`]. The tip is
//! allocated in proportion to each participant's share of the bill, not
//! split per head, and only the final per-participant amount is rounded.

use serde::{Deserialize, Serialize};

use super::parse::{parse_non_negative, parse_positive, title_case};
use super::ValidationError;

/// How the base bill is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Total bill divided equally among participants
    #[default]
    Even,
    /// Each participant states their own base amount
    Custom,
}

impl SplitMode {
    pub fn cli_name(&self) -> &'static str {
        match self {
            SplitMode::Even => "even",
            SplitMode::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SplitMode::Even => "Even",
            SplitMode::Custom => "Custom",
        }
    }
}

impl std::str::FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "even" => Ok(SplitMode::Even),
            "custom" => Ok(SplitMode::Custom),
            _ => Err(format!("Invalid split mode: {}. Use 'even' or 'custom'", s)),
        }
    }
}

impl std::fmt::Display for SplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cli_name())
    }
}

/// A person sharing the bill
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    /// Base amount in custom mode; ignored for even splits
    pub raw_amount: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, raw_amount: f64) -> Self {
        Self {
            name: name.into(),
            raw_amount,
        }
    }

    /// Participant for an even split, where no amount is entered
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0.0)
    }
}

/// Everything needed for one calculation, gathered before `compute` runs
#[derive(Debug, Clone, PartialEq)]
pub struct BillRequest {
    pub split_mode: SplitMode,
    pub tip_percent: f64,
    pub currency: String,
    pub participants: Vec<Participant>,
    /// Required for even splits
    pub total_bill_even: Option<f64>,
}

/// One row of the result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantShare {
    pub name: String,
    /// Share before tip, unrounded
    pub base_share: f64,
    /// Share plus proportional tip, rounded to cents
    pub final_amount: f64,
}

/// Outcome of a successful calculation.
///
/// `grand_total` is exactly `total_bill + tip_amount`. The sum of the
/// rounded `final_amount`s may differ from it by a few cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillResult {
    pub currency: String,
    pub split_mode: SplitMode,
    pub participants: Vec<ParticipantShare>,
    pub total_bill: f64,
    pub tip_amount: f64,
    pub grand_total: f64,
}

impl BillResult {
    /// Sum of the rounded per-participant amounts
    pub fn allocated_total(&self) -> f64 {
        self.participants.iter().map(|p| p.final_amount).sum()
    }

    /// Difference left by per-participant rounding (allocated - grand total)
    pub fn rounding_drift(&self) -> f64 {
        self.allocated_total() - self.grand_total
    }
}

/// Round to two decimal places, ties to even.
///
/// Rounds the exact binary value; scaling by 100 first would itself round
/// and turn values just above a half cent into ties.
pub fn round_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

fn validate_names(participants: &[Participant]) -> Result<(), ValidationError> {
    if participants.is_empty() {
        return Err(ValidationError::NoParticipants);
    }
    match participants.iter().position(|p| p.name.trim().is_empty()) {
        Some(index) => Err(ValidationError::MissingName { index }),
        None => Ok(()),
    }
}

fn validate(request: &BillRequest) -> Result<(), ValidationError> {
    validate_names(&request.participants)?;

    if !request.tip_percent.is_finite() || request.tip_percent < 0.0 {
        return Err(ValidationError::InvalidTip);
    }

    match request.split_mode {
        SplitMode::Even => match request.total_bill_even {
            Some(total) if total.is_finite() && total > 0.0 => {}
            _ => return Err(ValidationError::InvalidTotal),
        },
        SplitMode::Custom => {
            if let Some(index) = request
                .participants
                .iter()
                .position(|p| !p.raw_amount.is_finite() || p.raw_amount < 0.0)
            {
                return Err(ValidationError::InvalidAmount { index });
            }
            if request.participants.iter().all(|p| p.raw_amount == 0.0) {
                return Err(ValidationError::ZeroTotal);
            }
        }
    }

    Ok(())
}

/// Split a bill.
///
/// Fails without computing anything if a name is blank, the tip is not a
/// non-negative number, the even-split total is not positive, a custom
/// amount is negative, all custom amounts are zero, or the totals overflow.
pub fn compute(request: &BillRequest) -> Result<BillResult, ValidationError> {
    validate(request)?;

    let count = request.participants.len();
    let (total_bill, base_shares): (f64, Vec<f64>) = match request.split_mode {
        SplitMode::Even => {
            let total = request.total_bill_even.unwrap_or_default();
            (total, vec![total / count as f64; count])
        }
        SplitMode::Custom => {
            let shares: Vec<f64> = request.participants.iter().map(|p| p.raw_amount).collect();
            (shares.iter().sum(), shares)
        }
    };

    let tip_amount = total_bill * request.tip_percent / 100.0;
    if !total_bill.is_finite() || !(total_bill + tip_amount).is_finite() {
        return Err(ValidationError::TotalTooLarge);
    }
    let grand_total = total_bill + tip_amount;

    let participants = request
        .participants
        .iter()
        .zip(base_shares)
        .map(|(p, base_share)| ParticipantShare {
            name: title_case(p.name.trim()),
            base_share,
            final_amount: round_cents(base_share + (base_share / total_bill) * tip_amount),
        })
        .collect();

    tracing::debug!(
        "Computed {} split for {} people: total={}, tip={}, grand_total={}",
        request.split_mode,
        count,
        total_bill,
        tip_amount,
        grand_total
    );

    Ok(BillResult {
        currency: request.currency.clone(),
        split_mode: request.split_mode,
        participants,
        total_bill,
        tip_amount,
        grand_total,
    })
}

/// Raw text as typed into the form (or passed on the command line).
///
/// Parsing follows the same order the desktop window uses: names and tip
/// are checked before the total bill is asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillForm {
    pub currency: String,
    pub split_mode: SplitMode,
    pub tip: String,
    pub total: String,
    pub names: Vec<String>,
    pub amounts: Vec<String>,
}

impl BillForm {
    /// Validate names and tip, the fields needed before prompting for a total
    pub fn precheck(&self) -> Result<f64, ValidationError> {
        if self.names.is_empty() {
            return Err(ValidationError::NoParticipants);
        }
        if let Some(index) = self.names.iter().position(|n| n.trim().is_empty()) {
            return Err(ValidationError::MissingName { index });
        }
        parse_non_negative(&self.tip).ok_or(ValidationError::InvalidTip)
    }

    /// Parse every field into a typed request
    pub fn to_request(&self) -> Result<BillRequest, ValidationError> {
        let tip_percent = self.precheck()?;

        let (participants, total_bill_even) = match self.split_mode {
            SplitMode::Even => {
                let total = parse_positive(&self.total).ok_or(ValidationError::InvalidTotal)?;
                let participants = self.names.iter().map(Participant::named).collect();
                (participants, Some(total))
            }
            SplitMode::Custom => {
                let participants = self
                    .names
                    .iter()
                    .enumerate()
                    .map(|(index, name)| {
                        self.amounts
                            .get(index)
                            .and_then(|a| parse_non_negative(a))
                            .map(|amount| Participant::new(name.clone(), amount))
                            .ok_or(ValidationError::InvalidAmount { index })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                (participants, None)
            }
        };

        Ok(BillRequest {
            split_mode: self.split_mode,
            tip_percent,
            currency: self.currency.clone(),
            participants,
            total_bill_even,
        })
    }

    /// Parse and compute in one step
    pub fn calculate(&self) -> Result<BillResult, ValidationError> {
        compute(&self.to_request()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn even(names: &[&str], total: f64, tip: f64) -> BillRequest {
        BillRequest {
            split_mode: SplitMode::Even,
            tip_percent: tip,
            currency: "$".to_string(),
            participants: names.iter().map(|n| Participant::named(*n)).collect(),
            total_bill_even: Some(total),
        }
    }

    fn custom(people: &[(&str, f64)], tip: f64) -> BillRequest {
        BillRequest {
            split_mode: SplitMode::Custom,
            tip_percent: tip,
            currency: "$".to_string(),
            participants: people.iter().map(|(n, a)| Participant::new(*n, *a)).collect(),
            total_bill_even: None,
        }
    }

    fn finals(result: &BillResult) -> Vec<f64> {
        result.participants.iter().map(|p| p.final_amount).collect()
    }

    #[test]
    fn test_even_split_with_tip() {
        let result = compute(&even(&["alice", "bob"], 100.0, 10.0)).unwrap();
        assert_eq!(result.total_bill, 100.0);
        assert!((result.tip_amount - 10.0).abs() < EPS);
        assert!((result.grand_total - 110.0).abs() < EPS);
        assert_eq!(finals(&result), vec![55.0, 55.0]);
        assert!(result.participants.iter().all(|p| p.base_share == 50.0));
    }

    #[test]
    fn test_custom_split_with_tip() {
        let result = compute(&custom(&[("alice", 30.0), ("bob", 70.0)], 10.0)).unwrap();
        assert_eq!(result.total_bill, 100.0);
        assert!((result.tip_amount - 10.0).abs() < EPS);
        assert_eq!(finals(&result), vec![33.0, 77.0]);
    }

    #[test]
    fn test_even_base_shares_sum_to_total() {
        let result = compute(&even(&["a", "b", "c"], 100.0, 0.0)).unwrap();
        let sum: f64 = result.participants.iter().map(|p| p.base_share).sum();
        assert!((sum - 100.0).abs() < EPS);
        for p in &result.participants {
            assert!((p.base_share - 100.0 / 3.0).abs() < EPS);
        }
    }

    #[test]
    fn test_grand_total_is_total_plus_tip() {
        let result = compute(&custom(&[("a", 12.34), ("b", 56.78), ("c", 9.1)], 17.5)).unwrap();
        assert_eq!(result.grand_total, result.total_bill + result.tip_amount);
    }

    #[test]
    fn test_equal_shares_get_equal_tip() {
        let result = compute(&custom(&[("a", 25.0), ("b", 50.0), ("c", 25.0)], 18.0)).unwrap();
        let tip_a = result.participants[0].final_amount - result.participants[0].base_share;
        let tip_c = result.participants[2].final_amount - result.participants[2].base_share;
        assert!((tip_a - tip_c).abs() < EPS);
        // Twice the share, twice the tip
        let tip_b = result.participants[1].final_amount - result.participants[1].base_share;
        assert!((tip_b - 2.0 * tip_a).abs() < 0.011);
    }

    #[test]
    fn test_zero_tip_rounds_base_share() {
        let result = compute(&even(&["a", "b", "c"], 100.0, 0.0)).unwrap();
        assert_eq!(result.tip_amount, 0.0);
        for p in &result.participants {
            assert_eq!(p.final_amount, round_cents(p.base_share));
            assert_eq!(p.final_amount, 33.33);
        }
    }

    #[test]
    fn test_rounding_drift_is_not_corrected() {
        let result = compute(&even(&["a", "b", "c"], 100.0, 0.0)).unwrap();
        assert_eq!(result.grand_total, 100.0);
        assert!((result.allocated_total() - 99.99).abs() < EPS);
        assert!((result.rounding_drift() + 0.01).abs() < EPS);
    }

    #[test]
    fn test_custom_all_zero_is_rejected() {
        let err = compute(&custom(&[("a", 0.0), ("b", 0.0)], 10.0)).unwrap_err();
        assert_eq!(err, ValidationError::ZeroTotal);
    }

    #[test]
    fn test_custom_zero_amount_participant_owes_nothing() {
        let result = compute(&custom(&[("a", 0.0), ("b", 40.0)], 25.0)).unwrap();
        assert_eq!(finals(&result), vec![0.0, 50.0]);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = compute(&even(&["alice", "   "], 100.0, 10.0)).unwrap_err();
        assert_eq!(err, ValidationError::MissingName { index: 1 });
        assert_eq!(err.to_string(), "missing name");
    }

    #[test]
    fn test_no_participants_is_rejected() {
        let err = compute(&even(&[], 100.0, 0.0)).unwrap_err();
        assert_eq!(err, ValidationError::NoParticipants);
    }

    #[test]
    fn test_invalid_tip_is_rejected() {
        assert_eq!(
            compute(&even(&["a"], 100.0, -1.0)).unwrap_err(),
            ValidationError::InvalidTip
        );
        assert_eq!(
            compute(&even(&["a"], 100.0, f64::NAN)).unwrap_err(),
            ValidationError::InvalidTip
        );
    }

    #[test]
    fn test_even_total_must_be_positive() {
        assert_eq!(
            compute(&even(&["a"], 0.0, 0.0)).unwrap_err(),
            ValidationError::InvalidTotal
        );
        let mut request = even(&["a"], 10.0, 0.0);
        request.total_bill_even = None;
        assert_eq!(compute(&request).unwrap_err(), ValidationError::InvalidTotal);
    }

    #[test]
    fn test_negative_custom_amount_reports_index() {
        let err = compute(&custom(&[("a", 10.0), ("b", -3.0)], 0.0)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount { index: 1 });
        assert_eq!(err.participant_index(), Some(1));
    }

    #[test]
    fn test_names_are_trimmed_and_title_cased() {
        let result = compute(&even(&["  mary ann  ", "BOB"], 20.0, 0.0)).unwrap();
        assert_eq!(result.participants[0].name, "Mary Ann");
        assert_eq!(result.participants[1].name, "Bob");
    }

    #[test]
    fn test_even_mode_ignores_raw_amounts() {
        let mut request = even(&["a", "b"], 60.0, 0.0);
        request.participants[0].raw_amount = -100.0;
        let result = compute(&request).unwrap();
        assert_eq!(finals(&result), vec![30.0, 30.0]);
    }

    #[test]
    fn test_round_cents_ties_to_even() {
        assert_eq!(round_cents(0.125), 0.12);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_cents(33.333333), 33.33);
    }

    #[test]
    fn test_round_cents_uses_exact_value() {
        // 476.745 and 60.585 sit just above the half cent in binary
        let single = even(&["a"], 462.5, 3.08);
        assert_eq!(compute(&single).unwrap().participants[0].final_amount, 476.75);

        let four = compute(&even(&["a", "b", "c", "d"], 210.0, 15.4)).unwrap();
        assert_eq!(finals(&four), vec![60.59; 4]);
        assert_eq!(round_cents(476.745), 476.75);
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let huge = custom(&[("a", 1e308), ("b", 1e308)], 0.0);
        assert_eq!(compute(&huge).unwrap_err(), ValidationError::TotalTooLarge);

        let huge_tip = even(&["a"], 1e308, 100.0);
        assert_eq!(compute(&huge_tip).unwrap_err(), ValidationError::TotalTooLarge);
    }

    #[test]
    fn test_split_mode_parse() {
        assert_eq!("even".parse::<SplitMode>(), Ok(SplitMode::Even));
        assert_eq!("Custom".parse::<SplitMode>(), Ok(SplitMode::Custom));
        assert!("half".parse::<SplitMode>().is_err());
        assert_eq!(SplitMode::Custom.to_string(), "custom");
    }

    fn form(mode: SplitMode, names: &[&str], amounts: &[&str], tip: &str, total: &str) -> BillForm {
        BillForm {
            currency: "₹".to_string(),
            split_mode: mode,
            tip: tip.to_string(),
            total: total.to_string(),
            names: names.iter().map(|s| s.to_string()).collect(),
            amounts: amounts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_form_even() {
        let result = form(SplitMode::Even, &["a", "b"], &[], "10", "100").calculate().unwrap();
        assert_eq!(result.currency, "₹");
        assert_eq!(finals(&result), vec![55.0, 55.0]);
    }

    #[test]
    fn test_form_custom() {
        let result = form(SplitMode::Custom, &["a", "b"], &["30", " 70 "], "10", "")
            .calculate()
            .unwrap();
        assert_eq!(finals(&result), vec![33.0, 77.0]);
    }

    #[test]
    fn test_form_checks_names_before_tip() {
        let err = form(SplitMode::Even, &["a", ""], &[], "oops", "100").calculate().unwrap_err();
        assert_eq!(err, ValidationError::MissingName { index: 1 });
    }

    #[test]
    fn test_form_invalid_fields() {
        assert_eq!(
            form(SplitMode::Even, &["a"], &[], "-5", "100").calculate().unwrap_err(),
            ValidationError::InvalidTip
        );
        assert_eq!(
            form(SplitMode::Even, &["a"], &[], "0", "abc").calculate().unwrap_err(),
            ValidationError::InvalidTotal
        );
        assert_eq!(
            form(SplitMode::Custom, &["a", "b"], &["5", "x"], "0", "").calculate().unwrap_err(),
            ValidationError::InvalidAmount { index: 1 }
        );
    }

    #[test]
    fn test_form_custom_missing_amount() {
        let err = form(SplitMode::Custom, &["a", "b"], &["5"], "0", "").to_request().unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount { index: 1 });
    }

    #[test]
    fn test_form_precheck_returns_tip() {
        assert_eq!(form(SplitMode::Even, &["a"], &[], "12.5", "").precheck(), Ok(12.5));
    }
}
