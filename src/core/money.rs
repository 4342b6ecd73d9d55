use rust_decimal::Decimal;

/// Format a dollar amount with thousands separators, e.g. `$1,234,567.89`.
///
/// Whole amounts are shown without cents.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, frac) = match text.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(format!("{:0<2}", f))),
        None => (text, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        Some(f) => format!("{sign}${grouped}.{f}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Format a percentage without trailing zeros, e.g. `3.8%`
pub fn format_pct(pct: Decimal) -> String {
    format!("{}%", pct.normalize())
}
