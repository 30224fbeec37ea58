// SPDX-License-Identifier: MPL-2.0
use brand_portal::app::config;
use brand_portal::domain::error::PortalError;
use brand_portal::domain::portal::{Portal, Role, ADMIN_BRAND, ADMIN_PASSWORD};
use brand_portal::i18n::fluent::I18n;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn logged_in(brand: &str, password: &str) -> Portal {
    let mut portal = Portal::new();
    portal
        .register(brand, password)
        .expect("fresh brand should register");
    portal.login(brand, password).expect("login should succeed");
    portal
}

#[test]
fn registered_brand_can_log_in_with_its_password() {
    for (brand, password) in [("acme", "pw1"), ("Zeta Jewels", "s3cret"), ("ü", "ö")] {
        let mut portal = Portal::new();
        assert_eq!(portal.register(brand, password), Ok(()));
        assert_eq!(portal.login(brand, password), Ok(Role::Brand));
    }
}

#[test]
fn duplicate_registration_never_overwrites_password() {
    let mut portal = Portal::new();
    portal.register("acme", "pw1").expect("first registration");

    assert_eq!(
        portal.register("acme", "pw2"),
        Err(PortalError::BrandAlreadyRegistered)
    );
    assert_eq!(
        portal.login("acme", "pw2"),
        Err(PortalError::InvalidCredentials)
    );
    assert_eq!(portal.login("acme", "pw1"), Ok(Role::Brand));
}

#[test]
fn administrator_cannot_be_re_registered() {
    let mut portal = Portal::new();
    assert_eq!(
        portal.register(ADMIN_BRAND, "hijack"),
        Err(PortalError::BrandAlreadyRegistered)
    );
    assert_eq!(
        portal.login(ADMIN_BRAND, ADMIN_PASSWORD),
        Ok(Role::Administrator)
    );
}

#[test]
fn correct_password_for_unknown_or_misspelled_brand_fails() {
    let mut portal = Portal::new();
    portal.register("acme", "pw1").expect("registration");

    for brand in ["acm", "ACME", "acme ", "unknown"] {
        assert_eq!(
            portal.login(brand, "pw1"),
            Err(PortalError::InvalidCredentials)
        );
    }
    assert!(!portal.session().is_active());
}

#[test]
fn save_without_image_never_adds_a_record() {
    let mut anonymous = Portal::new();
    assert!(anonymous.save_earring("hoops", None).is_err());
    assert!(anonymous.catalog().is_empty());

    let mut portal = logged_in("acme", "pw1");
    assert_eq!(
        portal.save_earring("hoops", None).err(),
        Some(PortalError::NoImageSelected)
    );
    assert!(portal.catalog().is_empty());
}

#[test]
fn save_without_session_never_adds_a_record() {
    let mut portal = Portal::new();
    assert_eq!(
        portal
            .save_earring("hoops", Some(PathBuf::from("/tmp/hoops.png")))
            .err(),
        Some(PortalError::NotLoggedIn)
    );
    assert!(portal.catalog().is_empty());
}

#[test]
fn saved_records_keep_brand_and_order() {
    let mut portal = logged_in("acme", "pw1");
    portal
        .save_earring("hoops", Some(PathBuf::from("/tmp/hoops.png")))
        .expect("first save");
    portal
        .save_earring("", Some(PathBuf::from("/tmp/studs.jpg")))
        .expect("empty description is allowed");

    let descriptions: Vec<_> = portal
        .catalog()
        .records()
        .map(|record| record.description().to_string())
        .collect();
    assert_eq!(descriptions, ["hoops", ""]);
    assert!(portal
        .catalog()
        .records()
        .all(|record| record.brand() == "acme"));
}

#[test]
fn second_logout_changes_nothing() {
    let mut portal = logged_in("acme", "pw1");
    assert_eq!(portal.logout(), Ok("acme".to_string()));
    assert!(!portal.session().is_active());

    assert_eq!(portal.logout(), Err(PortalError::NotLoggedIn));
    assert!(!portal.session().is_active());
    assert!(portal.credentials().verify("acme", "pw1"));
}

#[test]
fn language_follows_settings_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let settings = dir.path().join("settings.toml");

    fs::write(&settings, "[general]\nlanguage = \"en-US\"\n").expect("write settings");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    fs::write(&settings, "[general]\nlanguage = \"fr\"\n").expect("write settings");
    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("login-login-button"), "Se connecter");
}

#[test]
fn cli_language_beats_settings_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n",
    )
    .expect("write settings");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_error_key_is_translated() {
    let errors = [
        PortalError::EmptyFields,
        PortalError::BrandAlreadyRegistered,
        PortalError::InvalidCredentials,
        PortalError::NotLoggedIn,
        PortalError::NoImageSelected,
    ];
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &config::Config::default());
        for error in errors {
            let text = i18n.tr(error.i18n_key());
            assert!(!text.starts_with("MISSING"), "{locale}: {text}");
        }
    }
}
