//! Customer details collected by the order form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CustomerName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The input is empty after trimming.
    #[error("name cannot be empty")]
    Empty,
    /// The input contains something other than a supported letter.
    #[error("name must contain only letters, found {0:?}")]
    InvalidCharacter(char),
}

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input contains a non-digit character.
    #[error("phone number must contain only digits, found {0:?}")]
    NonDigit(char),
    /// The input has the wrong number of digits.
    #[error("phone number must have exactly {expected} digits, got {actual}")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Digits actually supplied.
        actual: usize,
    },
}

/// A customer's name as typed into the order form.
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed
/// - At least one character
/// - Only Latin (`A-Z`, `a-z`) or Cyrillic (`А-Я`, `а-я`, `Ё`, `ё`) letters;
///   no digits, punctuation or inner whitespace
///
/// ## Examples
///
/// ```
/// use teztayor_core::CustomerName;
///
/// assert!(CustomerName::parse("Alice").is_ok());
/// assert!(CustomerName::parse("Алиса").is_ok());
///
/// assert!(CustomerName::parse("").is_err());
/// assert!(CustomerName::parse("Alice1").is_err());
/// assert!(CustomerName::parse("Алиса Петрова").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Parse a `CustomerName` from form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or contains any
    /// character outside the supported alphabets.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NameError::Empty);
        }

        if let Some(bad) = s.chars().find(|c| !is_name_letter(*c)) {
            return Err(NameError::InvalidCharacter(bad));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

// U+0410..=U+044F is exactly А-Я followed by а-я; Ё/ё sit outside that block.
const fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A local subscriber number, without the country prefix.
///
/// The country prefix is a storefront setting and is only attached for
/// display and hand-off via [`PhoneNumber::international`].
///
/// ```
/// use teztayor_core::PhoneNumber;
///
/// let phone = PhoneNumber::parse("123456789").unwrap();
/// assert_eq!(phone.international("+992"), "+992 123456789");
///
/// assert!(PhoneNumber::parse("12345678").is_err());
/// assert!(PhoneNumber::parse("12a456789").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Number of digits in a local subscriber number.
    pub const DIGITS: usize = 9;

    /// Parse a `PhoneNumber` from form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input contains a non-digit or does
    /// not have exactly [`Self::DIGITS`] digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let s = s.trim();

        if let Some(bad) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(PhoneError::NonDigit(bad));
        }

        if s.len() != Self::DIGITS {
            return Err(PhoneError::WrongLength {
                expected: Self::DIGITS,
                actual: s.len(),
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the local number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format with a country prefix, e.g. `+992 123456789`.
    #[must_use]
    pub fn international(&self, country_prefix: &str) -> String {
        format!("{country_prefix} {}", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
