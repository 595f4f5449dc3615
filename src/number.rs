/// Accepts `123`, `-123`, `0.5`, `.5`, `-0.5`; rejects empty strings,
/// a bare `-` or `.`, trailing points and exponent notation.
pub fn is_valid_number(text: &str) -> bool {
    let s = text.trim();
    let s = s.strip_prefix('-').unwrap_or(s);
    if s.is_empty() {
        return false;
    }
    match s.split_once('.') {
        None => s.chars().all(|c| c.is_ascii_digit()),
        Some((whole, frac)) => {
            !frac.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && frac.chars().all(|c| c.is_ascii_digit())
        }
    }
}

/// Round half away from zero to two decimal places. The epsilon nudge
/// keeps exact halves like 1.005 from landing below the boundary.
pub fn round_to_two(raw: f64) -> f64 {
    ((raw + f64::EPSILON) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        for s in ["123", "-123", "0.5", ".5", "-0.5", "007", "-.5", " 42 "] {
            assert!(is_valid_number(s), "expected valid: {:?}", s);
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for s in ["", "   ", "-", ".", "1.", "1.2.3", "1e5", "abc", "1 2", "--1"] {
            assert!(!is_valid_number(s), "expected invalid: {:?}", s);
        }
    }

    #[test]
    fn test_round_to_two_thirds() {
        assert_eq!(round_to_two(1.0 / 3.0), 0.33);
        assert_eq!(round_to_two(2.0 / 3.0), 0.67);
    }

    #[test]
    fn test_round_to_two_exact_half() {
        assert_eq!(round_to_two(1.005), 1.01);
    }

    #[test]
    fn test_round_to_two_negative() {
        assert_eq!(round_to_two(-1.0 / 3.0), -0.33);
    }
}
