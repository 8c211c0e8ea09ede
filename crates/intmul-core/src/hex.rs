use thiserror::Error;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Failures of the digit-string primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    #[error("operand is empty")]
    Empty,
    #[error("operand lengths differ ({left} vs {right} digits)")]
    LengthMismatch { left: usize, right: usize },
    /// A split was requested on an operand whose length cannot be halved.
    #[error("input is not even ({0} digits)")]
    OddLength(usize),
}

/// Decode one hex digit. Accepts both cases.
pub fn digit_value(c: char) -> Result<u8, HexError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(HexError::InvalidDigit(c)),
    }
}

/// Encode a digit value as a lowercase hex character.
///
/// Panics if `v > 15`. Callers only pass values produced by digit arithmetic.
pub fn digit_char(v: u8) -> char {
    char::from(DIGITS[usize::from(v)])
}

/// True for a non-empty string made only of hex digits.
pub fn is_hex_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Multiply two single hex digits.
///
/// The product is at most `0xe1`, so the result has one or two lowercase
/// digits and no leading zero.
pub fn multiply_digits(a: char, b: char) -> Result<String, HexError> {
    let product = u16::from(digit_value(a)?) * u16::from(digit_value(b)?);
    Ok(format!("{product:x}"))
}

/// Schoolbook addition of two hex digit strings.
///
/// Operands may differ in length. The result is as long as the longer operand,
/// plus one digit on a final carry. Leading zeros are kept.
pub fn add_hex(lhs: &str, rhs: &str) -> Result<String, HexError> {
    let mut lhs_digits = lhs.chars().rev();
    let mut rhs_digits = rhs.chars().rev();
    let mut out = Vec::with_capacity(lhs.len().max(rhs.len()) + 1);
    let mut carry = 0u8;

    loop {
        let (l, r) = match (lhs_digits.next(), rhs_digits.next()) {
            (None, None) => break,
            (l, r) => (l, r),
        };
        let l = l.map(digit_value).transpose()?.unwrap_or(0);
        let r = r.map(digit_value).transpose()?.unwrap_or(0);
        let sum = l + r + carry;
        out.push(digit_char(sum & 0xf));
        carry = sum >> 4;
    }

    if carry > 0 {
        out.push(digit_char(carry));
    }

    Ok(out.into_iter().rev().collect())
}

/// Multiply by `16^places` by appending zero digits.
pub fn shift_left(s: &str, places: usize) -> String {
    let mut out = String::with_capacity(s.len() + places);
    out.push_str(s);
    out.extend(std::iter::repeat_n('0', places));
    out
}

/// Prepend a single `0` when the digit count is odd.
pub fn pad_leading_zero(s: &str) -> String {
    if s.len() % 2 == 0 {
        s.to_string()
    } else {
        format!("0{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_value_accepts_both_cases() {
        assert_eq!(digit_value('0'), Ok(0));
        assert_eq!(digit_value('9'), Ok(9));
        assert_eq!(digit_value('a'), Ok(10));
        assert_eq!(digit_value('F'), Ok(15));
        assert_eq!(digit_value('g'), Err(HexError::InvalidDigit('g')));
        assert_eq!(digit_value(' '), Err(HexError::InvalidDigit(' ')));
    }

    #[test]
    fn digit_char_is_lowercase() {
        let all: String = (0..16).map(digit_char).collect();
        assert_eq!(all, "0123456789abcdef");
    }

    #[test]
    fn base_case_table_matches_integer_product() {
        for a in 0u8..16 {
            for b in 0u8..16 {
                let got = multiply_digits(digit_char(a), digit_char(b)).unwrap();
                let expected = format!("{:x}", u16::from(a) * u16::from(b));
                assert_eq!(got, expected, "{a:x} * {b:x}");
            }
        }
        assert_eq!(multiply_digits('f', 'f').unwrap(), "e1");
        assert_eq!(multiply_digits('0', 'F').unwrap(), "0");
    }

    #[test]
    fn add_hex_carries_into_new_digit() {
        assert_eq!(add_hex("ff", "1").unwrap(), "100");
        assert_eq!(add_hex("1", "ff").unwrap(), "100");
        assert_eq!(add_hex("0f", "01").unwrap(), "10");
    }

    #[test]
    fn add_hex_keeps_leading_zeros() {
        assert_eq!(add_hex("000", "00").unwrap(), "000");
        assert_eq!(add_hex("0012", "1").unwrap(), "0013");
    }

    #[test]
    fn add_hex_rejects_bad_digit() {
        assert_eq!(add_hex("1x", "1"), Err(HexError::InvalidDigit('x')));
    }

    #[test]
    fn shift_and_pad() {
        assert_eq!(shift_left("ab", 0), "ab");
        assert_eq!(shift_left("ab", 3), "ab000");
        assert_eq!(pad_leading_zero("629f2ef"), "0629f2ef");
        assert_eq!(pad_leading_zero("e1"), "e1");
    }
}
