//! Nigerian phone-number normalization.
//!
//! Three input shapes are accepted: international `+234…`, bare `234…`, and
//! local `0…`. Everything is normalized to the canonical local form
//! (`0` + 10 digits), which is the resident lookup key; the canonical
//! international form (`+234` + 10 digits) is derived from it for outbound
//! messaging. Any other input is rejected.

use std::fmt;
use std::str::FromStr;

/// The input string is not a recognizable Nigerian phone number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid phone number format")]
pub struct InvalidPhoneFormat;

/// A normalized Nigerian phone number.
///
/// Internally stored in canonical local form, so two numbers entered in
/// different shapes compare equal:
///
/// ```
/// use gatepass_auth_types::phone::PhoneNumber;
///
/// let a = PhoneNumber::parse("08012345678").unwrap();
/// let b = PhoneNumber::parse("+2348012345678").unwrap();
/// let c = PhoneNumber::parse("2348012345678").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// assert_eq!(a.local(), "08012345678");
/// assert_eq!(a.international(), "+2348012345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    local: String,
}

impl PhoneNumber {
    /// Parse any accepted shape into a canonical phone number.
    ///
    /// The remainder after the prefix must be exactly 10 ASCII digits.
    pub fn parse(input: &str) -> Result<Self, InvalidPhoneFormat> {
        let input = input.trim();
        let rest = if let Some(rest) = input.strip_prefix("+234") {
            rest
        } else if let Some(rest) = input.strip_prefix("234") {
            rest
        } else if let Some(rest) = input.strip_prefix('0') {
            rest
        } else {
            return Err(InvalidPhoneFormat);
        };

        if rest.len() != 10 || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidPhoneFormat);
        }

        Ok(Self {
            local: format!("0{rest}"),
        })
    }

    /// Canonical local form (`0` + 10 digits) — the storage and lookup key.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Canonical international form (`+234` + 10 digits) — the wire form for
    /// outbound messaging channels.
    pub fn international(&self) -> String {
        format!("+234{}", &self.local[1..])
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.local)
    }
}

impl FromStr for PhoneNumber {
    type Err = InvalidPhoneFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
