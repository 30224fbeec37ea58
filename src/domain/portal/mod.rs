// SPDX-License-Identifier: MPL-2.0
//! Brand portal state: credentials, session and the earring catalog.
//!
//! [`Portal`] owns all mutable domain state and exposes one method per user
//! action. Every method either applies its whole effect or returns a
//! [`PortalError`] and leaves the state untouched.
//!
//! # Example
//!
//! ```
//! use brand_portal::domain::portal::{Portal, Role};
//! use brand_portal::domain::error::PortalError;
//!
//! let mut portal = Portal::new();
//! portal.register("acme", "pw1").unwrap();
//! assert_eq!(portal.register("acme", "pw2"), Err(PortalError::BrandAlreadyRegistered));
//! assert_eq!(portal.login("acme", "pw1"), Ok(Role::Brand));
//! assert_eq!(portal.login("acme", "pw2"), Err(PortalError::InvalidCredentials));
//! ```

mod catalog;
mod credentials;
mod session;

pub use catalog::{Catalog, EarringRecord};
pub use credentials::{CredentialStore, ADMIN_BRAND, ADMIN_PASSWORD};
pub use session::{Role, Session};

use crate::domain::error::PortalError;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Portal {
    credentials: CredentialStore,
    session: Session,
    catalog: Catalog,
}

impl Portal {
    /// Creates a portal with only the administrator registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new brand.
    ///
    /// # Errors
    ///
    /// See [`CredentialStore::register`].
    pub fn register(&mut self, brand: &str, password: &str) -> Result<(), PortalError> {
        self.credentials.register(brand, password)
    }

    /// Authenticates `brand` and makes it the active session.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidCredentials`] if the brand is unknown or
    /// the password does not match exactly. The current session is kept.
    pub fn login(&mut self, brand: &str, password: &str) -> Result<Role, PortalError> {
        if !self.credentials.verify(brand, password) {
            return Err(PortalError::InvalidCredentials);
        }
        Ok(self.session.start(brand))
    }

    /// Ends the active session and returns the brand that was logged in.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::NotLoggedIn`] when there is no session.
    pub fn logout(&mut self) -> Result<String, PortalError> {
        self.session.end().ok_or(PortalError::NotLoggedIn)
    }

    /// Appends an earring for the logged-in brand.
    ///
    /// The session is checked before the image, so a logged-out save reports
    /// [`PortalError::NotLoggedIn`] even when no image was chosen either.
    ///
    /// # Errors
    ///
    /// - [`PortalError::NotLoggedIn`] without an active session
    /// - [`PortalError::NoImageSelected`] when `image_path` is `None`
    pub fn save_earring(
        &mut self,
        description: &str,
        image_path: Option<PathBuf>,
    ) -> Result<&EarringRecord, PortalError> {
        let brand = self.session.brand().ok_or(PortalError::NotLoggedIn)?;
        let image_path = image_path.ok_or(PortalError::NoImageSelected)?;
        let record = EarringRecord::new(brand, description, image_path);
        Ok(self.catalog.push(record))
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn logged_in(brand: &str) -> Portal {
        let mut portal = Portal::new();
        portal.register(brand, "pw").expect("registration succeeds");
        portal.login(brand, "pw").expect("login succeeds");
        portal
    }

    #[test]
    fn admin_login_reports_administrator_role() {
        let mut portal = Portal::new();
        assert_eq!(
            portal.login(ADMIN_BRAND, ADMIN_PASSWORD),
            Ok(Role::Administrator)
        );
        assert_eq!(portal.session().brand(), Some(ADMIN_BRAND));
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let mut portal = logged_in("acme");
        assert_eq!(
            portal.login("acme", "wrong"),
            Err(PortalError::InvalidCredentials)
        );
        assert_eq!(portal.session().brand(), Some("acme"));
    }

    #[test]
    fn login_with_misspelled_brand_fails() {
        let mut portal = Portal::new();
        portal.register("acme", "pw").expect("registration succeeds");
        assert_eq!(
            portal.login("acm", "pw"),
            Err(PortalError::InvalidCredentials)
        );
        assert!(!portal.session().is_active());
    }

    #[test]
    fn save_appends_record_for_session_brand() {
        let mut portal = logged_in("acme");
        let record = portal
            .save_earring("gold hoops", Some(PathBuf::from("/tmp/hoops.png")))
            .expect("save succeeds");

        assert_eq!(record.brand(), "acme");
        assert_eq!(record.description(), "gold hoops");
        assert_eq!(record.image_path(), Path::new("/tmp/hoops.png"));
        assert_eq!(portal.catalog().len(), 1);
        assert!(portal.session().is_active());
    }

    #[test]
    fn save_without_image_adds_nothing() {
        let mut portal = logged_in("acme");
        assert_eq!(
            portal.save_earring("hoops", None).map(|_| ()),
            Err(PortalError::NoImageSelected)
        );
        assert!(portal.catalog().is_empty());
    }

    #[test]
    fn save_without_session_adds_nothing() {
        let mut portal = Portal::new();
        assert_eq!(
            portal
                .save_earring("hoops", Some(PathBuf::from("/tmp/a.png")))
                .map(|_| ()),
            Err(PortalError::NotLoggedIn)
        );
        assert_eq!(
            portal.save_earring("hoops", None).map(|_| ()),
            Err(PortalError::NotLoggedIn)
        );
        assert!(portal.catalog().is_empty());
    }

    #[test]
    fn logout_twice_is_a_no_op_the_second_time() {
        let mut portal = logged_in("acme");
        assert_eq!(portal.logout(), Ok("acme".to_string()));
        assert_eq!(portal.logout(), Err(PortalError::NotLoggedIn));
        assert!(!portal.session().is_active());
    }

    #[test]
    fn catalog_survives_logout() {
        let mut portal = logged_in("acme");
        portal
            .save_earring("studs", Some(PathBuf::from("/tmp/s.jpg")))
            .expect("save succeeds");
        portal.logout().expect("logout succeeds");

        assert_eq!(portal.catalog().len(), 1);
    }
}
