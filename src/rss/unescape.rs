use std::borrow::Cow;

use quick_xml::escape::resolve_html5_entity;

/// Longest reference we look for a terminating `;` in
const MAX_REFERENCE_LEN: usize = 32;

/// Decode HTML entity and character references (`&amp;`, `&eacute;`,
/// `&#39;`, `&#x2014;`).
///
/// Never fails: references that are unknown, malformed or unterminated are
/// copied through untouched, so a bare `&` in "AT&T" survives. Decoded
/// output is not rescanned. Text without references comes back borrowed.
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut changed = false;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        match decode_reference(after, &mut out) {
            Some(consumed) => {
                changed = true;
                rest = &after[consumed..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}

/// Decode the reference at the start of `input` (just past the `&`).
/// Returns how many bytes were consumed, including the `;`.
fn decode_reference(input: &str, out: &mut String) -> Option<usize> {
    let end = input
        .bytes()
        .take(MAX_REFERENCE_LEN)
        .position(|b| b == b';')?;
    let reference = &input[..end];

    if let Some(number) = reference.strip_prefix('#') {
        out.push(decode_char_reference(number)?);
    } else {
        if reference.is_empty() || !reference.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        out.push_str(resolve_html5_entity(reference)?);
    }

    Some(end + 1)
}

fn decode_char_reference(number: &str) -> Option<char> {
    let (digits, radix) = match number.strip_prefix(|c: char| c == 'x' || c == 'X') {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let code = u32::from_str_radix(digits, radix).ok()?;
    match code {
        0 => Some(char::REPLACEMENT_CHARACTER),
        _ => Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)),
    }
}
