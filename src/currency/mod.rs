//! Yen formatting helpers shared by the value objects and the CLI.

/// Grouping and symbol used for whole-yen amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub grouping_separator: char,
    pub symbol: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            symbol: symbol_for("JPY"),
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

/// Inserts the locale grouping separator every three digits.
pub fn format_number(locale: &LocaleConfig, value: u64) -> String {
    group_digits(&value.to_string(), locale.grouping_separator)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders an amount as `¥150,000`.
pub fn format_currency_value(amount: u64, locale: &LocaleConfig) -> String {
    format!("{}{}", locale.symbol, format_number(locale, amount))
}

/// Renders an amount with the default yen locale.
pub fn format_yen(amount: u64) -> String {
    format_currency_value(amount, &LocaleConfig::default())
}
