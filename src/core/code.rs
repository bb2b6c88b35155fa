//! Digit code representation
//!
//! A Code is the ordered digit sequence used for both secrets and guesses.
//! Digits are stored by value (0-9) so scoring can index count tables directly.

use super::GameError;
use std::fmt;
use std::str::FromStr;

/// Number of distinct symbols a code can draw from (the digits 0-9)
pub const ALPHABET_SIZE: usize = 10;

/// A non-empty sequence of decimal digits
///
/// Leading zeros are significant: `"0123"` is a four-digit code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    digits: Vec<u8>,
}

impl Code {
    /// Parse a code from text
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - The text is empty
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Code;
    ///
    /// let code = Code::new("0123").unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.to_string(), "0123");
    ///
    /// assert!(Code::new("12a4").is_err());
    /// assert!(Code::new("").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, GameError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(GameError::EmptyCode);
        }

        let digits = text
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(GameError::InvalidSymbol(c))
            })
            .collect::<Result<Vec<u8>, GameError>>()?;

        Ok(Self { digits })
    }

    /// Build a code from digit values already known to be in 0-9
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty(), "codes hold at least one digit");
        debug_assert!(digits.iter().all(|&d| usize::from(d) < ALPHABET_SIZE));
        Self { digits }
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; codes hold at least one digit
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit values in order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Check whether every digit appears at most once
    #[must_use]
    pub fn has_distinct_digits(&self) -> bool {
        self.digit_counts().iter().all(|&count| count <= 1)
    }

    /// Occurrence count of each digit value
    #[must_use]
    pub fn digit_counts(&self) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0; ALPHABET_SIZE];
        for &d in &self.digits {
            counts[usize::from(d)] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("1234").unwrap();
        assert_eq!(code.digits(), &[1, 2, 3, 4]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn code_keeps_leading_zeros() {
        let code = Code::new("0070").unwrap();
        assert_eq!(code.digits(), &[0, 0, 7, 0]);
        assert_eq!(code.to_string(), "0070");
    }

    #[test]
    fn code_trims_whitespace() {
        assert_eq!(Code::new("  42 \n").unwrap().to_string(), "42");
    }

    #[test]
    fn code_creation_invalid() {
        assert_eq!(Code::new(""), Err(GameError::EmptyCode));
        assert_eq!(Code::new("   "), Err(GameError::EmptyCode));
        assert_eq!(Code::new("12a4"), Err(GameError::InvalidSymbol('a')));
        assert_eq!(Code::new("1 2"), Err(GameError::InvalidSymbol(' ')));
        assert_eq!(Code::new("-12"), Err(GameError::InvalidSymbol('-')));
    }

    #[test]
    fn code_rejects_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(matches!(
            Code::new("12\u{0663}"),
            Err(GameError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn code_from_digits() {
        let code = Code::from_digits(vec![9, 0, 1]);
        assert_eq!(code.to_string(), "901");
        assert_eq!(code, Code::new("901").unwrap());
    }

    #[test]
    fn code_digit_counts() {
        let code = Code::new("1123").unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts[1], 2);
        assert_eq!(counts[2], 1);
        assert_eq!(counts[3], 1);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }

    #[test]
    fn code_distinct_digits() {
        assert!(Code::new("0123456789").unwrap().has_distinct_digits());
        assert!(!Code::new("1123").unwrap().has_distinct_digits());
    }

    #[test]
    fn code_parse_via_from_str() {
        let code: Code = "5678".parse().unwrap();
        assert_eq!(code, Code::new("5678").unwrap());
    }
}
