use crate::error::DiceError;
use crate::roll::RollRequest;

/// Parse RPG dice notation: `<count>d<sides>` with an optional trailing
/// `+N` or `-N` modifier, e.g. `3d6`, `1d20+5`, `2d8-1`.
///
/// The separator letter is case-insensitive and leading/trailing
/// whitespace is trimmed; the remainder must match the grammar exactly.
/// Anything else, including stacked modifiers (`1d6+1+1`) or multiple
/// dice terms (`1d6+1d4`), is rejected.
pub fn parse(text: &str) -> Result<RollRequest, DiceError> {
    let invalid = || DiceError::InvalidNotation(text.to_string());

    let s = text.trim();
    let sep = s.find(['d', 'D']).ok_or_else(invalid)?;
    let count = parse_number(&s[..sep]).ok_or_else(invalid)?;

    let rest = &s[sep + 1..];
    let (sides_str, modifier) = match rest.find(['+', '-']) {
        Some(pos) => {
            let magnitude = parse_number(&rest[pos + 1..]).ok_or_else(invalid)?;
            let signed = if rest.as_bytes()[pos] == b'-' {
                -magnitude
            } else {
                magnitude
            };
            (&rest[..pos], signed)
        }
        None => (rest, 0),
    };
    let sides = parse_number(sides_str).ok_or_else(invalid)?;

    // `digit+` still admits literal zeros; those are notation errors too.
    if count < 1 || sides < 1 {
        return Err(invalid());
    }
    Ok(RollRequest {
        count,
        sides,
        modifier,
    })
}

/// Digit-only integer scan. Rejects empty fields, signs, and overflow.
fn parse_number(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
