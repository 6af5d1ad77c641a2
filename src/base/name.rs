//! Property-name helpers.

/// Normalize a property name supplied by a caller.
///
/// If the first character is uppercase it is lowercased, so `"FooBar"` and
/// `"fooBar"` both address the `fooBar` property. No other character changes.
pub fn normalize_property_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => name.to_string(),
    }
}

/// Derive a property name from an accessor-name suffix.
///
/// `"FirstName"` becomes `"firstName"`, but a suffix starting with two
/// uppercase characters is kept as-is (`"URL"` stays `"URL"`).
pub fn decapitalize(suffix: &str) -> String {
    let mut chars = suffix.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let second_upper = chars.next().is_some_and(char::is_uppercase);
    if first.is_uppercase() && second_upper {
        return suffix.to_string();
    }
    first.to_lowercase().chain(suffix.chars().skip(1)).collect()
}
