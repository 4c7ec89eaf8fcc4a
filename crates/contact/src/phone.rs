/// Prepends `country_code` unless the number is empty or already `+`-prefixed.
pub fn normalize_phone(phone: &str, country_code: &str) -> String {
    if phone.is_empty() || phone.starts_with('+') {
        return phone.to_owned();
    }

    format!("{country_code}{phone}")
}
