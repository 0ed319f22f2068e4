//! Russian phone numbers in E.164 form (`+7XXXXXXXXXX`).

/// Normalize a phone number to `+7` followed by ten digits.
///
/// Accepts the usual spellings (`+7 (999) 123-45-67`, `8 999 123 45 67`,
/// `79991234567`). Returns `None` for empty input or anything that does not
/// reduce to a Russian number.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let mut cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(rest) = cleaned.strip_prefix('8') {
        cleaned = format!("+7{rest}");
    }
    if cleaned.starts_with('7') {
        cleaned.insert(0, '+');
    }

    let digits = cleaned.strip_prefix("+7")?;
    if digits.len() != 10 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(format!("+7{digits}"))
}

pub fn is_valid_phone(raw: &str) -> bool {
    normalize_phone(raw).is_some()
}
