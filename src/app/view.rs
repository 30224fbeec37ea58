// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with toast notifications stacked on top.

use super::{Message, Screen};
use crate::domain::portal::Portal;
use crate::i18n::fluent::I18n;
use crate::media::ImageSize;
use crate::ui::admin;
use crate::ui::login;
use crate::ui::notifications::{self, Toast};
use crate::ui::upload;
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub portal: &'a Portal,
    pub login: &'a login::State,
    pub upload: &'a upload::State,
    pub admin: &'a admin::State,
    pub thumbnail_size: ImageSize,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => ctx
            .login
            .view(login::ViewContext { i18n: ctx.i18n })
            .map(Message::Login),
        Screen::Upload => view_upload(&ctx),
        Screen::Admin => ctx
            .admin
            .view(admin::ViewContext {
                i18n: ctx.i18n,
                thumbnail_size: ctx.thumbnail_size,
            })
            .map(Message::Admin),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_upload<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ctx.upload
        .view(upload::ViewContext {
            i18n: ctx.i18n,
            brand: ctx.portal.session().brand(),
            saved_count: saved_count(ctx.portal),
        })
        .map(Message::Upload)
}

/// Records saved by the logged-in brand over all of its sessions.
fn saved_count(portal: &Portal) -> usize {
    portal
        .session()
        .brand()
        .map_or(0, |brand| portal.catalog().by_brand(brand).count())
}
