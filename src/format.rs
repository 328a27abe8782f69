//! Display formatting for amounts, dates and percentages (es-CO style).

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Colombian-peso rendering, no decimals: `$ 1.500.000`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}$ {}", sign, group_thousands(amount))
}

/// ISO `yyyy-mm-dd` from the backend becomes `dd/mm/yyyy`; anything else is
/// shown untouched.
pub fn format_date(date: &str) -> String {
    let parts = date.split('-').collect::<Vec<_>>();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => date.to_string(),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_with_dots() {
        assert_eq!(format_currency(0), "$ 0");
        assert_eq!(format_currency(950), "$ 950");
        assert_eq!(format_currency(1_500_000), "$ 1.500.000");
        assert_eq!(format_currency(25_000_000), "$ 25.000.000");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_currency(-1_250_000), "-$ 1.250.000");
    }

    #[test]
    fn iso_dates_become_day_first() {
        assert_eq!(format_date("2024-01-15"), "15/01/2024");
    }

    #[test]
    fn non_iso_dates_pass_through() {
        assert_eq!(format_date("15/01/2024"), "15/01/2024");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(49.65), "49.6%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
