// SPDX-License-Identifier: MPL-2.0
//! In-memory credential store keyed by brand name.
//!
//! Passwords are kept as plaintext and compared byte for byte. The store lives
//! for the process lifetime only.

use crate::domain::error::PortalError;
use std::collections::HashMap;

/// Brand name reserved for the administrator account.
pub const ADMIN_BRAND: &str = "admin";

/// Password seeded for the administrator account at startup.
pub const ADMIN_PASSWORD: &str = "password";

/// Mapping from brand name to password.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    entries: HashMap<String, String>,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore {
    /// Creates a store seeded with the administrator account.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(ADMIN_BRAND.to_string(), ADMIN_PASSWORD.to_string());
        Self { entries }
    }

    /// Inserts a new brand.
    ///
    /// # Errors
    ///
    /// - [`PortalError::EmptyFields`] if either value is empty
    /// - [`PortalError::BrandAlreadyRegistered`] if the brand exists; the stored
    ///   password is left as it was
    pub fn register(&mut self, brand: &str, password: &str) -> Result<(), PortalError> {
        if brand.is_empty() || password.is_empty() {
            return Err(PortalError::EmptyFields);
        }
        if self.entries.contains_key(brand) {
            return Err(PortalError::BrandAlreadyRegistered);
        }
        self.entries.insert(brand.to_string(), password.to_string());
        Ok(())
    }

    /// Returns true when `brand` exists and `password` matches exactly.
    #[must_use]
    pub fn verify(&self, brand: &str, password: &str) -> bool {
        self.entries
            .get(brand)
            .is_some_and(|stored| stored == password)
    }

    #[must_use]
    pub fn contains(&self, brand: &str) -> bool {
        self.entries.contains_key(brand)
    }

    /// Number of registered brands, administrator included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
