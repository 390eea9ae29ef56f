/// Groups digits in threes: `2847` → `"2,847"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with grouping: `85000.0` → `"$85,000"`.
pub fn format_currency(amount: f64) -> String {
    format!("${}", group_thousands(amount.max(0.0).round() as u64))
}

/// Thousands of dollars, rounded: `145000.0` → `"$145K"`.
pub fn format_salary_k(amount: f64) -> String {
    format!("${}K", (amount / 1000.0).round() as i64)
}

/// One decimal place: `78.0` → `"78.0%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Compact salary for card headers: `$1.2M`, `$145K` or `$900`.
pub fn format_salary_compact(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("${:.1}M", amount / 1_000_000.0)
    } else if amount >= 1000.0 {
        format_salary_k(amount)
    } else {
        format!("${}", amount.round() as i64)
    }
}

/// `"$60K - $80K"` when both bounds are known and non-zero, otherwise `"Competitive"`.
pub fn format_salary_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if min > 0.0 && max > 0.0 => {
            format!("{} - {}", format_salary_k(min), format_salary_k(max))
        }
        _ => "Competitive".to_string(),
    }
}

/// Upper-cases the first character: `"entry"` → `"Entry"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2847), "2,847");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(100_000), "100,000");
    }

    #[test]
    fn test_mock_headline_formatting() {
        assert_eq!(group_thousands(2847), "2,847");
        assert_eq!(format_salary_k(145000.0), "$145K");
        assert_eq!(format_percent(78.0), "78.0%");
        assert_eq!(format_percent(12.5), "12.5%");
    }

    #[test]
    fn test_salary_k_rounds_to_nearest_thousand() {
        assert_eq!(format_salary_k(145_600.0), "$146K");
        assert_eq!(format_salary_k(98_000.5), "$98K");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(85000.0), "$85,000");
        assert_eq!(format_currency(165000.4), "$165,000");
    }

    #[test]
    fn test_compact_salary_tiers() {
        assert_eq!(format_salary_compact(1_260_000.0), "$1.3M");
        assert_eq!(format_salary_compact(185_000.0), "$185K");
        assert_eq!(format_salary_compact(900.0), "$900");
    }

    #[test]
    fn test_salary_range_needs_both_bounds() {
        assert_eq!(
            format_salary_range(Some(60000.0), Some(80000.0)),
            "$60K - $80K"
        );
        assert_eq!(format_salary_range(Some(60000.0), None), "Competitive");
        assert_eq!(format_salary_range(Some(0.0), Some(80000.0)), "Competitive");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("senior"), "Senior");
        assert_eq!(capitalize(""), "");
    }
}
