// SPDX-License-Identifier: MPL-2.0
//! The single currently-authenticated brand.

use super::credentials::ADMIN_BRAND;

/// What a logged-in brand is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The reserved administrator account.
    Administrator,
    /// Any other registered brand.
    Brand,
}

impl Role {
    #[must_use]
    pub fn for_brand(brand: &str) -> Self {
        if brand == ADMIN_BRAND {
            Role::Administrator
        } else {
            Role::Brand
        }
    }
}

/// At most one logged-in brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    brand: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `brand`, replacing any previous one.
    pub fn start(&mut self, brand: impl Into<String>) -> Role {
        let brand = brand.into();
        let role = Role::for_brand(&brand);
        self.brand = Some(brand);
        role
    }

    /// Ends the session and returns the brand that was logged in.
    pub fn end(&mut self) -> Option<String> {
        self.brand.take()
    }

    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.brand.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.brand.as_deref().map(Role::for_brand)
    }
}
