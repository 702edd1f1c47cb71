//! Money formatting for the Kenyan-shilling price labels.

/// "KES 1,000,000"
pub fn format_kes(amount: u64) -> String {
    format!("KES {}", thousands(amount))
}

/// "KES 1M" / "KES 750K" for the legend and nav chips.
pub fn format_kes_short(amount: u64) -> String {
    if amount >= 1_000_000 && amount % 1_000_000 == 0 {
        format!("KES {}M", amount / 1_000_000)
    } else if amount >= 1_000 && amount % 1_000 == 0 && amount < 1_000_000 {
        format!("KES {}K", amount / 1_000)
    } else {
        format_kes(amount)
    }
}

fn thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
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
    fn test_thousand_separators() {
        assert_eq!(format_kes(0), "KES 0");
        assert_eq!(format_kes(999), "KES 999");
        assert_eq!(format_kes(75_000), "KES 75,000");
        assert_eq!(format_kes(750_000), "KES 750,000");
        assert_eq!(format_kes(1_000_000), "KES 1,000,000");
        assert_eq!(format_kes(1_234_567_890), "KES 1,234,567,890");
    }

    #[test]
    fn test_short_form() {
        assert_eq!(format_kes_short(1_000_000), "KES 1M");
        assert_eq!(format_kes_short(750_000), "KES 750K");
        assert_eq!(format_kes_short(1_234_567), "KES 1,234,567");
    }

    #[test]
    fn test_short_form_never_shows_thousands_of_k() {
        // Not a whole million: fall back to the long form, never "1500K".
        assert_eq!(format_kes_short(1_500_000), "KES 1,500,000");
        assert_eq!(format_kes_short(2_250_000), "KES 2,250,000");
    }
}
