// SPDX-License-Identifier: MPL-2.0
//! Validation failures raised by portal operations.

use std::fmt;

/// Every variant is a user error: the operation that produced it left the
/// credential store, session and catalog untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalError {
    /// Brand name or password was left blank.
    EmptyFields,

    /// A brand with this name is already registered.
    BrandAlreadyRegistered,

    /// Unknown brand or wrong password.
    InvalidCredentials,

    /// The operation needs an active session.
    NotLoggedIn,

    /// Save was requested before an image was chosen.
    NoImageSelected,
}

impl PortalError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PortalError::EmptyFields => "error-empty-fields",
            PortalError::BrandAlreadyRegistered => "error-brand-already-registered",
            PortalError::InvalidCredentials => "error-invalid-credentials",
            PortalError::NotLoggedIn => "error-not-logged-in",
            PortalError::NoImageSelected => "error-no-image-selected",
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::EmptyFields => write!(f, "Brand name and password are required"),
            PortalError::BrandAlreadyRegistered => write!(f, "Brand already registered"),
            PortalError::InvalidCredentials => write!(f, "Invalid credentials"),
            PortalError::NotLoggedIn => write!(f, "No brand is logged in"),
            PortalError::NoImageSelected => write!(f, "No earring image selected"),
        }
    }
}

impl std::error::Error for PortalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            PortalError::EmptyFields.i18n_key(),
            PortalError::BrandAlreadyRegistered.i18n_key(),
            PortalError::InvalidCredentials.i18n_key(),
            PortalError::NotLoggedIn.i18n_key(),
            PortalError::NoImageSelected.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            assert!(a.starts_with("error-"));
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(
            PortalError::BrandAlreadyRegistered.to_string(),
            "Brand already registered"
        );
    }
}
