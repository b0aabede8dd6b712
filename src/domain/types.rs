//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the field rules of a client record (non-blank
//! names, digit-only identity and mobile numbers) so that once a value
//! reaches the domain layer it can be treated as trusted. Values are kept
//! exactly as supplied; a blank check never rewrites the input.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateLength;

/// Required length of a national identity number.
pub const ID_NUMBER_LENGTH: u64 = 13;

/// Errors produced when attempting to construct a constrained value object.
///
/// The display strings are user facing and returned verbatim in API error
/// bodies.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum TypeConstraintError {
    #[error("Firstname cannot be null or empty")]
    EmptyFirstName,
    #[error("Lastname cannot be null or empty")]
    EmptyLastName,
    #[error("ID Number cannot be null or empty")]
    EmptyIdNumber,
    #[error("ID Number cannot contain alpha numerics")]
    NonDigitIdNumber,
    #[error("ID Number length should be 13")]
    InvalidIdNumberLength,
    #[error("Mobile Number cannot be null or empty")]
    EmptyMobileNumber,
    #[error("Mobile Number cannot contain alpha numerics")]
    NonDigitMobileNumber,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Macro to generate newtypes for names that must contain a non-blank value.
macro_rules! non_blank_string_newtype {
    ($name:ident, $err:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Wraps the value, rejecting missing or whitespace-only input.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if is_blank(&value) {
                    return Err($err);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_blank_string_newtype!(
    FirstName,
    TypeConstraintError::EmptyFirstName,
    "Client first name enforcing non-blank values."
);

non_blank_string_newtype!(
    LastName,
    TypeConstraintError::EmptyLastName,
    "Client last name enforcing non-blank values."
);

/// Thirteen digit national identity number.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IdNumber(String);

impl IdNumber {
    /// Checks presence, then digits, then length.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(TypeConstraintError::EmptyIdNumber);
        }
        if !is_ascii_digits(&value) {
            return Err(TypeConstraintError::NonDigitIdNumber);
        }
        if !value.validate_length(None, None, Some(ID_NUMBER_LENGTH)) {
            return Err(TypeConstraintError::InvalidIdNumberLength);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for IdNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for IdNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for IdNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdNumber> for String {
    fn from(value: IdNumber) -> Self {
        value.0
    }
}

/// Digit-only mobile number of any length.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Checks presence, then digits.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(TypeConstraintError::EmptyMobileNumber);
        }
        if !is_ascii_digits(&value) {
            return Err(TypeConstraintError::NonDigitMobileNumber);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for MobileNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MobileNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for MobileNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MobileNumber> for String {
    fn from(value: MobileNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_reject_blank_values() {
        assert_eq!(FirstName::new(""), Err(TypeConstraintError::EmptyFirstName));
        assert_eq!(FirstName::new("  \t"), Err(TypeConstraintError::EmptyFirstName));
        assert_eq!(LastName::new(" "), Err(TypeConstraintError::EmptyLastName));
    }

    #[test]
    fn names_keep_value_as_supplied() {
        let name = FirstName::new(" John ").expect("valid name");
        assert_eq!(name.as_str(), " John ");
    }

    #[test]
    fn id_number_checks_run_in_order() {
        assert_eq!(IdNumber::new(" "), Err(TypeConstraintError::EmptyIdNumber));
        // Non-digit input with the wrong length reports the digit rule first.
        assert_eq!(IdNumber::new("12A"), Err(TypeConstraintError::NonDigitIdNumber));
        assert_eq!(
            IdNumber::new("111111111111A"),
            Err(TypeConstraintError::NonDigitIdNumber)
        );
        assert_eq!(
            IdNumber::new("111111111111"),
            Err(TypeConstraintError::InvalidIdNumberLength)
        );
        assert_eq!(
            IdNumber::new("11111111111111"),
            Err(TypeConstraintError::InvalidIdNumberLength)
        );
        assert_eq!(
            IdNumber::new("1111111111111").map(IdNumber::into_inner),
            Ok("1111111111111".to_string())
        );
    }

    #[test]
    fn id_number_rejects_non_ascii_digits() {
        assert_eq!(
            IdNumber::new("١١١١١١١١١١١١١"),
            Err(TypeConstraintError::NonDigitIdNumber)
        );
    }

    #[test]
    fn mobile_number_has_no_length_rule() {
        assert!(MobileNumber::new("0").is_ok());
        assert!(MobileNumber::new("000000000000000000000").is_ok());
        assert_eq!(
            MobileNumber::new("00000000A"),
            Err(TypeConstraintError::NonDigitMobileNumber)
        );
        assert_eq!(
            MobileNumber::new("+27000000"),
            Err(TypeConstraintError::NonDigitMobileNumber)
        );
        assert_eq!(MobileNumber::new(""), Err(TypeConstraintError::EmptyMobileNumber));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            TypeConstraintError::InvalidIdNumberLength.to_string(),
            "ID Number length should be 13"
        );
        assert_eq!(
            TypeConstraintError::NonDigitMobileNumber.to_string(),
            "Mobile Number cannot contain alpha numerics"
        );
    }
}
