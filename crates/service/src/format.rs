/// Format an integer with `,` between groups of three digits: `1234567` -> `1,234,567`.
pub fn format_thousands(value: i64) -> String {
    // unsigned_abs keeps i64::MIN representable
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_have_no_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(50), "50");
        assert_eq!(format_thousands(999), "999");
    }

    #[test]
    fn groups_by_three() {
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(10_000), "10,000");
        assert_eq!(format_thousands(350_000), "350,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_thousands(-500), "-500");
        assert_eq!(format_thousands(-12_500), "-12,500");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }
}
