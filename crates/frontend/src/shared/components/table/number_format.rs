//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_grouped;
/// assert_eq!(format_grouped(1234.567, 2, ','), "1,234.57");
/// assert_eq!(format_grouped(-1234567.0, 0, ' '), "-1 234 567");
/// ```
pub fn format_grouped(value: f64, decimals: u8, separator: char) -> String {
    let formatted = format!("{:.*}", usize::from(decimals), value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    let sign = if is_negative(value, decimals) { "-" } else { "" };
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежный формат: `$`, разделитель `,`, всегда 2 знака; минус перед `$`.
///
/// ```
/// use frontend::shared::components::table::format_currency;
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-12.0), "-$12.00");
/// ```
pub fn format_currency(value: f64) -> String {
    let body = format_grouped(value.abs(), 2, ',');
    if is_negative(value, 2) {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Целое с разделителем `,`
pub fn format_count(value: i64) -> String {
    format_grouped(value as f64, 0, ',')
}

/// `-0.001` округляется до нуля и выводится без знака.
fn is_negative(value: f64, decimals: u8) -> bool {
    let scale = 10f64.powi(i32::from(decimals));
    (value * scale).round() < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1234.567, 0, ' '), "1 235");
        assert_eq!(format_grouped(1234.567, 1, ' '), "1 234.6");
        assert_eq!(format_grouped(123.0, 2, ','), "123.00");
        assert_eq!(format_grouped(123456.0, 0, ','), "123,456");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(-2500000), "-2,500,000");
    }
}
