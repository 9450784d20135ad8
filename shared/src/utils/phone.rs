//! Phone number helpers for display and logging

/// Strip spaces, dashes and parentheses, keeping digits and a leading `+`
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for logs (e.g. `081****5678`)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 8 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("0812-3456-7890"), "081234567890");
        assert_eq!(normalize_phone_number("+62 812 3456 7890"), "+6281234567890");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("081234567890"), "081****7890");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
