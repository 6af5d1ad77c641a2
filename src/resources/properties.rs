//! Parser for `.properties` resource files.
//!
//! Supports the usual format: `#`/`!` comment lines, `key=value`,
//! `key: value` and `key value` separators, trailing-backslash line
//! continuations, and `\t \n \r \f \uXXXX` escapes.

use indexmap::IndexMap;

/// Entries parsed from one file, plus per-line problems that were skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedProperties {
    pub entries: IndexMap<String, String>,
    /// `(line, message)` for lines that could not be parsed
    pub errors: Vec<(usize, String)>,
}

/// Parse the contents of a `.properties` file. Later duplicates win.
pub fn parse_properties(text: &str) -> ParsedProperties {
    let mut parsed = ParsedProperties::default();
    let mut lines = text.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line_no = index + 1;
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = String::from(trimmed);
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (raw_key, raw_value) = split_key_value(&logical);
        match (unescape(raw_key), unescape(raw_value)) {
            (Ok(key), Ok(value)) => {
                parsed.entries.insert(key, value);
            }
            (Err(message), _) | (_, Err(message)) => parsed.errors.push((line_no, message)),
        }
    }

    parsed
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches([' ', '\t', '\u{c}']);
    let rest = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .map(|r| r.trim_start_matches([' ', '\t', '\u{c}']))
        .unwrap_or(rest);
    (key, rest)
}

fn unescape(text: &str) -> Result<String, String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let unit = utf16_unit(&mut chars)?;
                if !(0xD800..=0xDBFF).contains(&unit) {
                    out.push(
                        char::from_u32(u32::from(unit))
                            .ok_or_else(|| format!("unpaired surrogate '\\u{unit:04X}'"))?,
                    );
                    continue;
                }
                // High surrogate: the low half must follow as another escape.
                let mut ahead = chars.clone();
                let low = match (ahead.next(), ahead.next()) {
                    (Some('\\'), Some('u')) => utf16_unit(&mut ahead)?,
                    _ => return Err(format!("unpaired surrogate '\\u{unit:04X}'")),
                };
                let decoded = char::decode_utf16([unit, low])
                    .next()
                    .and_then(|r| r.ok())
                    .ok_or_else(|| format!("unpaired surrogate '\\u{unit:04X}'"))?;
                out.push(decoded);
                chars = ahead;
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Four hex digits following `\u`.
fn utf16_unit(chars: &mut std::str::Chars<'_>) -> Result<u16, String> {
    let hex: String = chars.by_ref().take(4).collect();
    u16::from_str_radix(&hex, 16)
        .ok()
        .filter(|_| hex.len() == 4)
        .ok_or_else(|| format!("malformed \\u escape '\\u{hex}'"))
}
