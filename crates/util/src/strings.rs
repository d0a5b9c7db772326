//! String helpers.

/// Uppercase the first character and lowercase the rest.
///
/// Case mapping is Unicode aware, so a single character may expand
/// (`'ß'` uppercases to `"SS"`).
///
/// # Examples
///
/// ```
/// use utilkit::strings::capitalize;
///
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
