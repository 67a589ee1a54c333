//! Утилиты форматирования чисел для таблиц

use serde_json::Value;

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// `format_number_with_decimals(1234.567, 2)` → `"1 234.57"`
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Пробел каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Форматирует целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Значение из JSON для ячейки таблицы.
///
/// Целые числа — с разделителем тысяч, дробные — с двумя знаками,
/// строки как есть, отсутствующее значение — прочерк.
pub fn format_json_number(value: &Value) -> String {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            format_number_int(n.as_f64().unwrap_or_default())
        }
        Value::Number(n) => format_number_with_decimals(n.as_f64().unwrap_or_default(), 2),
        other => format_json_plain(other),
    }
}

/// Значение из JSON без форматирования чисел
pub fn format_json_plain(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::String(s) if s.is_empty() => "—".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
