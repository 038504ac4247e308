//! Display formatting helpers.

/// Format a revenue figure as currency (`₹12,345.60`).
pub fn currency(amount: f64) -> String {
    format!("₹{}", thousands(amount))
}

/// Group the integer part of a number with comma separators.
fn thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let (int_part, frac_part) = (cents / 100, cents % 100);

    let digits = int_part.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        frac_part
    )
}

/// Format a byte count with a binary unit suffix.
pub fn bytes(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Render an ISO-8601 timestamp as its date part (`2026-01-15`).
///
/// The API sends full timestamps; the tables only show the day.
pub fn date_only(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(0.0), "₹0.00");
        assert_eq!(currency(999.5), "₹999.50");
        assert_eq!(currency(12345.6), "₹12,345.60");
        assert_eq!(currency(1234567.0), "₹1,234,567.00");
    }

    #[test]
    fn test_bytes_units() {
        assert_eq!(bytes(512), "512 B");
        assert_eq!(bytes(2048), "2.0 KB");
        assert_eq!(bytes(1048576), "1.0 MB");
        assert_eq!(bytes(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2026-01-15T08:30:00Z"), "2026-01-15");
        assert_eq!(date_only("2026-01-15"), "2026-01-15");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(13), "???");
    }
}
