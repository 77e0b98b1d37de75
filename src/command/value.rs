use super::ValuePolicy;
use error::*;

/// Converts the text of a register value into a number.
pub fn parse_value(text: &str, policy: ValuePolicy) -> Result<u64> {
    match policy {
        ValuePolicy::Strict => parse_strict(text),
        ValuePolicy::Lenient => Ok(parse_lenient(text)),
    }
}

fn parse_strict(text: &str) -> Result<u64> {
    let digits = if text.starts_with("0x") || text.starts_with("0X") {
        &text[2..]
    } else {
        text
    };

    // from_str_radix would also take a leading `+`.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!(ErrorKind::InvalidNumber(text.to_owned()));
    }

    u64::from_str_radix(digits, 16).chain_err(|| ErrorKind::InvalidNumber(text.to_owned()))
}

fn parse_lenient(text: &str) -> u64 {
    let mut rest = text.trim_start().trim_start_matches('0');
    if rest.starts_with('x') || rest.starts_with('X') {
        rest = &rest[1..];
    }

    let mut value: u64 = 0;
    for digit in rest.chars().map_while(|c| c.to_digit(16)) {
        if value >> 60 != 0 {
            return u64::max_value();
        }
        value = (value << 4) | u64::from(digit);
    }
    value
}
