// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every portal mutation happens here, on the iced update loop. Image
//! decoding and the file picker run through [`Task::perform`] and report back
//! as top-level messages.

use super::config::UploadConfig;
use super::{Message, Screen};
use crate::domain::portal::{Portal, Role};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData, ImageSize};
use crate::ui::admin::{self, Event as AdminEvent};
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::upload::{self, Event as UploadEvent};
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub portal: &'a mut Portal,
    pub login: &'a mut login::State,
    pub upload: &'a mut upload::State,
    pub admin: &'a mut admin::State,
    pub upload_config: &'a UploadConfig,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles login screen messages.
pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match ctx.login.update(message) {
        LoginEvent::None => {}
        LoginEvent::Register { brand, password } => handle_register(ctx, &brand, &password),
        LoginEvent::Login { brand, password } => handle_login(ctx, &brand, &password),
    }
    Task::none()
}

fn handle_register(ctx: &mut UpdateContext<'_>, brand: &str, password: &str) {
    match ctx.portal.register(brand, password) {
        Ok(()) => {
            tracing::info!(brand, "brand registered");
            ctx.login.clear();
            ctx.notifications.push(
                Notification::success("notification-register-success").with_arg("brand", brand),
            );
        }
        Err(err) => {
            tracing::debug!(brand, error = %err, "registration rejected");
            ctx.notifications.push(Notification::rejected(err));
        }
    }
}

fn handle_login(ctx: &mut UpdateContext<'_>, brand: &str, password: &str) {
    match ctx.portal.login(brand, password) {
        Ok(role) => {
            tracing::info!(brand, ?role, "brand logged in");
            ctx.login.clear();
            *ctx.screen = match role {
                Role::Administrator => Screen::Admin,
                Role::Brand => {
                    ctx.upload.enable_controls();
                    Screen::Upload
                }
            };
            ctx.notifications.push(
                Notification::success("notification-login-success").with_arg("brand", brand),
            );
        }
        Err(err) => {
            tracing::warn!(brand, "login rejected");
            ctx.notifications.push(Notification::rejected(err));
        }
    }
}

/// Handles upload screen messages.
pub fn handle_upload_message(
    ctx: &mut UpdateContext<'_>,
    message: upload::Message,
) -> Task<Message> {
    match ctx.upload.update(message) {
        UploadEvent::None => Task::none(),
        UploadEvent::OpenImageDialog => match ctx.portal.session().brand() {
            Some(brand) => open_image_dialog(ctx.i18n, brand.to_string()),
            None => Task::none(),
        },
        UploadEvent::Save {
            description,
            image_path,
        } => handle_save(ctx, &description, image_path),
        UploadEvent::Logout => {
            handle_logout(ctx);
            Task::none()
        }
    }
}

/// Handles admin screen messages.
pub fn handle_admin_message(ctx: &mut UpdateContext<'_>, message: admin::Message) -> Task<Message> {
    match ctx.admin.update(message) {
        AdminEvent::Logout => handle_logout(ctx),
    }
    Task::none()
}

/// Opens the native image picker filtered to the supported extensions. The
/// result is tagged with `brand` so it cannot land in a later session.
fn open_image_dialog(i18n: &I18n, brand: String) -> Task<Message> {
    let title = i18n.tr("dialog-select-image-title");
    let filter_name = i18n.tr("dialog-image-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::ImageDialogResult { brand, path },
    )
}

/// Records the chosen image and starts decoding its preview.
pub fn handle_image_dialog_result(
    ctx: &mut UpdateContext<'_>,
    brand: &str,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    // A dialog left open across a logout belongs to a finished session
    if !ctx.upload.controls_enabled() || ctx.portal.session().brand() != Some(brand) {
        tracing::debug!(brand, "dropping image chosen in an earlier session");
        return Task::none();
    }
    if !media::is_supported_image(&path) {
        tracing::warn!(path = %path.display(), "selected file has an unexpected extension");
    }

    ctx.upload.set_image(path.clone());
    load_preview(path, ImageSize::PREVIEW)
}

fn load_preview(path: PathBuf, size: ImageSize) -> Task<Message> {
    Task::perform(
        async move {
            let result = media::load_scaled(&path, size);
            (path, result)
        },
        |(path, result)| Message::PreviewLoaded { path, result },
    )
}

/// Applies a decoded preview, ignoring results for an image that is no
/// longer selected.
pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(preview) => {
            ctx.upload.set_preview(&path, preview);
        }
        Err(_) => {
            // The path stays selected; saving it is still allowed
            if ctx.upload.selected_image() == Some(path.as_path()) {
                ctx.notifications
                    .push(Notification::warning("notification-preview-error"));
            }
        }
    }
    Task::none()
}

fn handle_save(
    ctx: &mut UpdateContext<'_>,
    description: &str,
    image_path: Option<PathBuf>,
) -> Task<Message> {
    let record = match ctx.portal.save_earring(description, image_path) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(error = %err, "save rejected");
            ctx.notifications.push(Notification::rejected(err));
            return Task::none();
        }
    };

    tracing::info!(
        brand = record.brand(),
        path = %record.image_path().display(),
        "earring saved"
    );
    let path = record.image_path().to_path_buf();
    let row = ctx
        .admin
        .push_row(record.brand(), record.description(), path.clone());

    ctx.upload.clear_form();
    ctx.notifications
        .push(Notification::success("notification-save-success"));

    load_thumbnail(row, path, ctx.upload_config.thumbnail_size())
}

fn load_thumbnail(row: usize, path: PathBuf, size: ImageSize) -> Task<Message> {
    Task::perform(
        async move { media::load_scaled(&path, size) },
        move |result| Message::ThumbnailLoaded { row, result },
    )
}

/// Stores a decoded admin thumbnail, or a placeholder when decoding failed.
pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    row: usize,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    ctx.admin.set_thumbnail(row, result.ok());
    Task::none()
}

fn handle_logout(ctx: &mut UpdateContext<'_>) {
    match ctx.portal.logout() {
        Ok(brand) => {
            tracing::info!(brand = %brand, "brand logged out");
            ctx.upload.disable_controls();
            ctx.upload.clear_form();
            *ctx.screen = Screen::Login;
            ctx.notifications.push(
                Notification::success("notification-logout-success").with_arg("brand", brand),
            );
        }
        Err(_) => {
            ctx.notifications
                .push(Notification::info("notification-logout-no-session"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    struct Fixture {
        i18n: I18n,
        screen: Screen,
        portal: Portal,
        login: login::State,
        upload: upload::State,
        admin: admin::State,
        upload_config: UploadConfig,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::new(Some("en-US".into()), &Config::default()),
                screen: Screen::Login,
                portal: Portal::new(),
                login: login::State::new(),
                upload: upload::State::new(),
                admin: admin::State::new(),
                upload_config: UploadConfig::default(),
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                screen: &mut self.screen,
                portal: &mut self.portal,
                login: &mut self.login,
                upload: &mut self.upload,
                admin: &mut self.admin,
                upload_config: &self.upload_config,
                notifications: &mut self.notifications,
            }
        }

        fn submit(&mut self, brand: &str, password: &str, pressed: login::Message) {
            let mut ctx = self.ctx();
            let _ = handle_login_message(
                &mut ctx,
                login::Message::BrandNameChanged(brand.into()),
            );
            let _ = handle_login_message(
                &mut ctx,
                login::Message::PasswordChanged(password.into()),
            );
            let _ = handle_login_message(&mut ctx, pressed);
        }

        fn newest_toast(&self) -> Option<(notifications::Severity, String)> {
            self.notifications
                .visible()
                .next()
                .map(|n| (n.severity(), n.message_key().to_string()))
        }
    }

    #[test]
    fn successful_registration_clears_the_form() {
        let mut fx = Fixture::new();
        fx.submit("acme", "pw1", login::Message::RegisterPressed);

        assert!(fx.portal.credentials().verify("acme", "pw1"));
        assert!(fx.login.brand_name().is_empty());
        assert!(fx.login.password().is_empty());
        assert_eq!(fx.screen, Screen::Login);
    }

    #[test]
    fn rejected_registration_keeps_the_form() {
        let mut fx = Fixture::new();
        fx.submit("admin", "other", login::Message::RegisterPressed);

        assert_eq!(fx.login.brand_name(), "admin");
        assert_eq!(
            fx.newest_toast(),
            Some((
                notifications::Severity::Error,
                "error-brand-already-registered".to_string()
            ))
        );
    }

    #[test]
    fn brand_login_enables_upload_controls() {
        let mut fx = Fixture::new();
        fx.submit("acme", "pw1", login::Message::RegisterPressed);
        fx.submit("acme", "pw1", login::Message::LoginPressed);

        assert_eq!(fx.screen, Screen::Upload);
        assert!(fx.upload.controls_enabled());
    }

    #[test]
    fn admin_login_leaves_upload_controls_disabled() {
        let mut fx = Fixture::new();
        fx.submit("admin", "password", login::Message::LoginPressed);

        assert_eq!(fx.screen, Screen::Admin);
        assert!(!fx.upload.controls_enabled());
    }

    #[test]
    fn dialog_result_is_ignored_after_logout() {
        let mut fx = Fixture::new();
        let _ = handle_image_dialog_result(
            &mut fx.ctx(),
            "acme",
            Some(PathBuf::from("/tmp/a.png")),
        );
        assert!(fx.upload.selected_image().is_none());
    }

    #[test]
    fn dialog_result_from_previous_brand_is_not_applied() {
        let mut fx = Fixture::new();
        fx.submit("acme", "pw1", login::Message::RegisterPressed);
        fx.submit("zeta", "pw2", login::Message::RegisterPressed);
        fx.submit("acme", "pw1", login::Message::LoginPressed);
        let _ = handle_upload_message(&mut fx.ctx(), upload::Message::LogoutPressed);
        fx.submit("zeta", "pw2", login::Message::LoginPressed);

        // acme's picker closes only now, while zeta is logged in
        let _ = handle_image_dialog_result(
            &mut fx.ctx(),
            "acme",
            Some(PathBuf::from("/tmp/acme.png")),
        );
        assert!(fx.upload.selected_image().is_none());

        let _ = handle_image_dialog_result(
            &mut fx.ctx(),
            "zeta",
            Some(PathBuf::from("/tmp/zeta.png")),
        );
        assert_eq!(
            fx.upload.selected_image(),
            Some(PathBuf::from("/tmp/zeta.png").as_path())
        );
    }

    #[test]
    fn cancelled_dialog_changes_nothing() {
        let mut fx = Fixture::new();
        fx.submit("acme", "pw1", login::Message::RegisterPressed);
        fx.submit("acme", "pw1", login::Message::LoginPressed);

        let _ = handle_image_dialog_result(&mut fx.ctx(), "acme", None);
        assert!(fx.upload.selected_image().is_none());
    }

    #[test]
    fn failed_preview_keeps_selection_and_warns() {
        let mut fx = Fixture::new();
        fx.submit("acme", "pw1", login::Message::RegisterPressed);
        fx.submit("acme", "pw1", login::Message::LoginPressed);
        let path = PathBuf::from("/tmp/broken.png");
        let _ = handle_image_dialog_result(&mut fx.ctx(), "acme", Some(path.clone()));

        let _ = handle_preview_loaded(
            &mut fx.ctx(),
            path.clone(),
            Err(Error::Image("bad data".into())),
        );

        assert_eq!(fx.upload.selected_image(), Some(path.as_path()));
        assert_eq!(
            fx.newest_toast(),
            Some((
                notifications::Severity::Warning,
                "notification-preview-error".to_string()
            ))
        );
    }

    #[test]
    fn save_appends_row_and_clears_form() {
        let mut fx = Fixture::new();
        fx.submit("acme", "pw1", login::Message::RegisterPressed);
        fx.submit("acme", "pw1", login::Message::LoginPressed);
        let _ = handle_image_dialog_result(
            &mut fx.ctx(),
            "acme",
            Some(PathBuf::from("/tmp/hoops.png")),
        );
        let _ = handle_upload_message(
            &mut fx.ctx(),
            upload::Message::DescriptionChanged("hoops".into()),
        );
        let _ = handle_upload_message(&mut fx.ctx(), upload::Message::SavePressed);

        assert_eq!(fx.portal.catalog().len(), 1);
        assert_eq!(fx.admin.rows().len(), 1);
        assert_eq!(fx.admin.rows()[0].brand(), "acme");
        assert!(fx.upload.selected_image().is_none());
        assert!(fx.upload.description().is_empty());
        assert!(fx.portal.session().is_active());
    }

    #[test]
    fn thumbnail_failure_shows_placeholder() {
        let mut fx = Fixture::new();
        let row = fx.admin.push_row("acme", "", "/tmp/missing.png");
        let _ = handle_thumbnail_loaded(&mut fx.ctx(), row, Err(Error::Io("gone".into())));

        assert!(matches!(
            fx.admin.rows()[row].thumbnail(),
            admin::Thumbnail::Unavailable
        ));
    }

    #[test]
    fn logout_without_session_is_informational() {
        let mut fx = Fixture::new();
        handle_logout(&mut fx.ctx());

        assert_eq!(fx.screen, Screen::Login);
        assert_eq!(
            fx.newest_toast(),
            Some((
                notifications::Severity::Info,
                "notification-logout-no-session".to_string()
            ))
        );
    }
}
