//! Parsing of raw text fields collected from the form or command line

use super::ValidationError;

/// Parse a finite, non-negative number. Surrounding whitespace is ignored.
pub fn parse_non_negative(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a finite number strictly greater than zero
pub fn parse_positive(text: &str) -> Option<f64> {
    parse_non_negative(text).filter(|v| *v > 0.0)
}

/// Parse the "number of people" field into a positive count
pub fn parse_people_count(text: &str) -> Result<usize, ValidationError> {
    match text.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::InvalidPeopleCount),
    }
}

/// Title-case a display name: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased ("o'neil SMITH" -> "O'Neil Smith").
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("12.5"), Some(12.5));
        assert_eq!(parse_non_negative("  7 "), Some(7.0));
        assert_eq!(parse_non_negative("0"), Some(0.0));
        assert_eq!(parse_non_negative("1e2"), Some(100.0));
        assert_eq!(parse_non_negative("-1"), None);
        assert_eq!(parse_non_negative("abc"), None);
        assert_eq!(parse_non_negative(""), None);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_non_negative("inf"), None);
        assert_eq!(parse_non_negative("NaN"), None);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("100"), Some(100.0));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-5"), None);
    }

    #[test]
    fn test_parse_people_count() {
        assert_eq!(parse_people_count("3"), Ok(3));
        assert_eq!(parse_people_count(" 1 "), Ok(1));
        assert_eq!(parse_people_count("0"), Err(ValidationError::InvalidPeopleCount));
        assert_eq!(parse_people_count("-2"), Err(ValidationError::InvalidPeopleCount));
        assert_eq!(parse_people_count("2.5"), Err(ValidationError::InvalidPeopleCount));
        assert_eq!(parse_people_count("two"), Err(ValidationError::InvalidPeopleCount));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("bob SMITH"), "Bob Smith");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("anne-marie"), "Anne-Marie");
        assert_eq!(title_case("r2d2"), "R2D2");
    }
}
