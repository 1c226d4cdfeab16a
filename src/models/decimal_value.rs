use std::fmt::{self, Display};

/// Number of fractional digits of ether, i.e. 1 ether = 10^18 wei
pub const ETHER_PRECISION: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum DecimalError {
    #[fail(display = "decimal error - invalid character {:?} at position {}", _0, _1)]
    InvalidDigit(char, usize),
}

/// Balance rendered as a decimal string with a fixed number of fractional digits.
///
/// Conversion from base units is a pure shift of the decimal point over the digits,
/// so it works for any length of input and never rounds. The result always has exactly
/// one `.`, at least one digit before it and exactly `precision` digits after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalValue(String);

impl DecimalValue {
    /// Converts an integer amount of base units (e.g. wei) into a decimal string.
    /// Empty input is treated as zero.
    pub fn from_base_units(raw: &str, precision: usize) -> Result<Self, DecimalError> {
        if let Some((position, c)) = raw.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
            return Err(DecimalError::InvalidDigit(c, position));
        }
        // at least one digit has to stay in the integer part
        let width = precision + 1;
        let mut padded = String::with_capacity(width.max(raw.len()) + 1);
        for _ in raw.len()..width {
            padded.push('0');
        }
        padded.push_str(raw);
        // only ascii digits at this point, so byte offsets are char offsets
        let point = padded.len() - precision;
        padded.insert(point, '.');
        Ok(DecimalValue(padded))
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
