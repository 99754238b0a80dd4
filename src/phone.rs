//! Phone number display helpers for contact and conversation lists.

use crate::patterns::{JID_SUFFIX_RE, NON_DIGIT_RE};

/// Remove a JID suffix such as `@lid` or `@s.whatsapp.net`.
fn without_jid_suffix(phone: &str) -> &str {
    match JID_SUFFIX_RE.find(phone) {
        Some(suffix) => &phone[..suffix.start()],
        None => phone,
    }
}

/// The digits of a phone number, without any JID suffix.
pub fn phone_digits(phone: &str) -> String {
    NON_DIGIT_RE
        .replace_all(without_jid_suffix(phone), "")
        .into_owned()
}

/// Format a Brazilian number as `+55 (11) 98521-8470`.
///
/// Mobile numbers have 9 digits after the area code, landlines 8. Anything
/// else is returned as given, minus its JID suffix.
pub fn format_brazilian_phone(phone: &str) -> String {
    let digits = phone_digits(phone);

    if digits.starts_with("55") && digits.len() >= 12 {
        let (country, rest) = digits.split_at(2);
        let (area, number) = rest.split_at(2);
        let split = match number.len() {
            9 => Some(5),
            8 => Some(4),
            _ => None,
        };
        if let Some(split) = split {
            let (head, tail) = number.split_at(split);
            return format!("+{country} ({area}) {head}-{tail}");
        }
    }

    without_jid_suffix(phone).to_string()
}
