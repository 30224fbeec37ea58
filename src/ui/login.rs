// SPDX-License-Identifier: MPL-2.0
//! Login screen: brand name and password form with Register and Login actions.
//!
//! The screen only collects input. Registration and authentication happen in
//! the application, which clears the form through [`State::clear`] on success.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, text, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the login screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    BrandNameChanged(String),
    PasswordChanged(String),
    RegisterPressed,
    LoginPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Register { brand: String, password: String },
    Login { brand: String, password: String },
}

#[derive(Debug, Clone, Default)]
pub struct State {
    brand_name: String,
    password: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BrandNameChanged(value) => {
                self.brand_name = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::RegisterPressed => Event::Register {
                brand: self.brand_name.clone(),
                password: self.password.clone(),
            },
            Message::LoginPressed => Event::Login {
                brand: self.brand_name.clone(),
                password: self.password.clone(),
            },
        }
    }

    /// Empties both fields.
    pub fn clear(&mut self) {
        self.brand_name.clear();
        self.password.clear();
    }

    #[must_use]
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_LG);

        let brand_input = text_input(&i18n.tr("login-brand-placeholder"), &self.brand_name)
            .on_input(Message::BrandNameChanged)
            .on_submit(Message::LoginPressed)
            .padding(spacing::XS)
            .size(typography::BODY);

        let password_input = text_input(&i18n.tr("login-password-placeholder"), &self.password)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::LoginPressed)
            .secure(true)
            .padding(spacing::XS)
            .size(typography::BODY);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(i18n.tr("login-register-button")).size(typography::BODY))
                    .on_press(Message::RegisterPressed)
                    .style(styles::button::secondary),
            )
            .push(
                button(text(i18n.tr("login-login-button")).size(typography::BODY))
                    .on_press(Message::LoginPressed)
                    .style(styles::button::primary),
            );

        let form = Column::new()
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .spacing(spacing::SM)
            .push(title)
            .push(Text::new(i18n.tr("login-brand-label")).size(typography::CAPTION))
            .push(brand_input)
            .push(Text::new(i18n.tr("login-password-label")).size(typography::CAPTION))
            .push(password_input)
            .push(actions);

        Container::new(
            Container::new(form)
                .padding(spacing::LG)
                .style(styles::container::panel),
        )
        .center(Length::Fill)
        .into()
    }
}
