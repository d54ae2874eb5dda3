/// Formats a ten digit number as `(XXX) XXX-XXXX`, ignoring any
/// punctuation already typed. Anything else comes back unchanged.
pub fn format_phone_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return input.to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// New value for a phone input after an edit, or `None` when the field
/// already shows the formatted text and must not be rewritten.
pub fn reformat(current: &str) -> Option<String> {
    let formatted = format_phone_number(current);
    (formatted != current).then_some(formatted)
}
