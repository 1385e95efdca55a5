// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Phone number display normalization.

/// Reformats a raw phone string into `(AAA) BBB-CCCC` display form.
///
/// Two raw shapes are recognized: exactly ten ASCII digits, and
/// `AAA-BBB-CCCC`. The hyphenated shape is also recognized after stripping a
/// leading `'+1 ` country-code marker. Anything else passes through so the
/// operator sees exactly what the customer entered; after the marker is
/// stripped, the stripped form is what passes through.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    if let Some(formatted) = format_ten_digit(raw) {
        return formatted;
    }
    let number: &str = strip_country_marker(raw);
    if let Some(formatted) = format_hyphenated(number) {
        return formatted;
    }
    number.to_string()
}

/// Strips a leading `'+1` followed by one whitespace character.
fn strip_country_marker(raw: &str) -> &str {
    raw.strip_prefix("'+1")
        .and_then(|rest| {
            rest.chars()
                .next()
                .filter(|first| first.is_whitespace())
                .map(|first| &rest[first.len_utf8()..])
        })
        .unwrap_or(raw)
}

/// Formats a string of exactly ten ASCII digits.
fn format_ten_digit(number: &str) -> Option<String> {
    if number.len() == 10 && number.bytes().all(|byte| byte.is_ascii_digit()) {
        Some(format!(
            "({}) {}-{}",
            &number[0..3],
            &number[3..6],
            &number[6..10]
        ))
    } else {
        None
    }
}

/// Formats an `AAA-BBB-CCCC` string.
fn format_hyphenated(number: &str) -> Option<String> {
    let mut parts = number.split('-');
    let area: &str = parts.next()?;
    let prefix: &str = parts.next()?;
    let line: &str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let shapes_match: bool = area.len() == 3
        && prefix.len() == 3
        && line.len() == 4
        && area.bytes().all(|byte| byte.is_ascii_digit())
        && prefix.bytes().all(|byte| byte.is_ascii_digit())
        && line.bytes().all(|byte| byte.is_ascii_digit());
    if shapes_match {
        Some(format!("({area}) {prefix}-{line}"))
    } else {
        None
    }
}
