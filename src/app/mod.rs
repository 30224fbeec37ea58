// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three portal screens.
//!
//! The `App` struct wires together the domain state ([`Portal`]), the screen
//! components, localization and notifications, and translates messages into
//! side effects like opening the image picker or decoding previews.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::portal::Portal;
use crate::i18n::fluent::I18n;
use crate::ui::admin;
use crate::ui::login;
use crate::ui::notifications;
use crate::ui::upload;
use config::UploadConfig;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Credentials, session and catalog.
    portal: Portal,
    login: login::State,
    upload: upload::State,
    admin: admin::State,
    /// Resolved once at startup; `System` mode is not re-detected per frame.
    theme: Theme,
    upload_config: UploadConfig,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("session", &self.portal.session().brand())
            .field("records", &self.portal.catalog().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 500;
pub const WINDOW_DEFAULT_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Login,
            portal: Portal::new(),
            login: login::State::new(),
            upload: upload::State::new(),
            admin: admin::State::new(),
            theme: Theme::Dark,
            upload_config: UploadConfig::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the preferences and `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            config_warning,
        } = flags;
        let i18n = I18n::new(lang, &config);
        let theme = config.general.theme_mode.to_theme();
        tracing::debug!(locale = %i18n.current_locale(), ?theme, "localization ready");

        let mut app = App {
            i18n,
            theme,
            upload_config: config.upload,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.portal.session().brand() {
            Some(brand) => self
                .i18n
                .tr_with_args("window-title-logged-in", &[("brand", brand)]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            portal: &mut self.portal,
            login: &mut self.login,
            upload: &mut self.upload,
            admin: &mut self.admin,
            upload_config: &self.upload_config,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Login(login_message) => update::handle_login_message(&mut ctx, login_message),
            Message::Upload(upload_message) => {
                update::handle_upload_message(&mut ctx, upload_message)
            }
            Message::Admin(admin_message) => update::handle_admin_message(&mut ctx, admin_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImageDialogResult { brand, path } => {
                update::handle_image_dialog_result(&mut ctx, &brand, path)
            }
            Message::PreviewLoaded { path, result } => {
                update::handle_preview_loaded(&mut ctx, path, result)
            }
            Message::ThumbnailLoaded { row, result } => {
                update::handle_thumbnail_loaded(&mut ctx, row, result)
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            portal: &self.portal,
            login: &self.login,
            upload: &self.upload,
            admin: &self.admin,
            thumbnail_size: self.upload_config.thumbnail_size(),
            notifications: &self.notifications,
        })
    }
}
