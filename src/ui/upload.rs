// SPDX-License-Identifier: MPL-2.0
//! Upload screen: description, image selection with preview, save and logout.
//!
//! The controls carry an explicit enabled flag. They start disabled, are
//! enabled when a brand logs in, and are disabled again on logout. Disabled
//! buttons have no press handler.

use crate::i18n::fluent::I18n;
use crate::media::{ImageData, ImageSize};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, image, text, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::path::{Path, PathBuf};

/// Contextual data needed to render the upload screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Brand of the active session, shown in the heading.
    pub brand: Option<&'a str>,
    /// Number of records the brand has saved, counting every session.
    pub saved_count: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    DescriptionChanged(String),
    ChooseImagePressed,
    SavePressed,
    LogoutPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenImageDialog,
    Save {
        description: String,
        image_path: Option<PathBuf>,
    },
    Logout,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    description: String,
    selected_image: Option<PathBuf>,
    preview: Option<ImageData>,
    controls_enabled: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DescriptionChanged(value) => {
                self.description = value;
                Event::None
            }
            Message::ChooseImagePressed if self.controls_enabled => Event::OpenImageDialog,
            Message::SavePressed if self.controls_enabled => Event::Save {
                description: self.description.clone(),
                image_path: self.selected_image.clone(),
            },
            Message::LogoutPressed if self.controls_enabled => Event::Logout,
            Message::ChooseImagePressed | Message::SavePressed | Message::LogoutPressed => {
                Event::None
            }
        }
    }

    /// Records a newly chosen image. Any previous preview is dropped until
    /// the new one is decoded.
    pub fn set_image(&mut self, path: PathBuf) {
        self.selected_image = Some(path);
        self.preview = None;
    }

    /// Installs a decoded preview if it belongs to the currently selected
    /// image. Returns `false` for stale results.
    pub fn set_preview(&mut self, path: &Path, preview: ImageData) -> bool {
        if self.selected_image.as_deref() == Some(path) {
            self.preview = Some(preview);
            true
        } else {
            false
        }
    }

    /// Clears description, selected image and preview.
    pub fn clear_form(&mut self) {
        self.description.clear();
        self.selected_image = None;
        self.preview = None;
    }

    pub fn enable_controls(&mut self) {
        self.controls_enabled = true;
    }

    /// Disables the controls and drops the preview.
    pub fn disable_controls(&mut self) {
        self.controls_enabled = false;
        self.preview = None;
    }

    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&Path> {
        self.selected_image.as_deref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&ImageData> {
        self.preview.as_ref()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let enabled = self.controls_enabled;

        let brand = ctx.brand.unwrap_or_default();
        let title = Text::new(i18n.tr_with_args("upload-title", &[("brand", brand)]))
            .size(typography::TITLE_LG);

        let saved_count = ctx.saved_count.to_string();
        let saved = Text::new(
            i18n.tr_with_args("upload-saved-count", &[("count", saved_count.as_str())]),
        )
        .size(typography::CAPTION);

        let description = text_input(&i18n.tr("upload-description-placeholder"), &self.description)
            .on_input_maybe(enabled.then_some(Message::DescriptionChanged))
            .padding(spacing::XS)
            .size(typography::BODY);

        let selection_label = match self.selected_image.as_deref() {
            Some(path) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                i18n.tr_with_args("upload-selected-image", &[("file", file_name.as_str())])
            }
            None => i18n.tr("upload-no-image"),
        };

        let preview_edge = ImageSize::PREVIEW.as_f32();
        let preview: Element<'a, Message> = match &self.preview {
            Some(data) => image(data.handle.clone())
                .width(Length::Fixed(preview_edge))
                .height(Length::Fixed(preview_edge))
                .into(),
            None => Container::new(text(""))
                .width(Length::Fixed(preview_edge))
                .height(Length::Fixed(preview_edge))
                .style(styles::container::image_placeholder)
                .into(),
        };

        let choose = button(text(i18n.tr("upload-choose-button")).size(typography::BODY))
            .on_press_maybe(enabled.then_some(Message::ChooseImagePressed))
            .style(styles::button::secondary);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(i18n.tr("upload-save-button")).size(typography::BODY))
                    .on_press_maybe(enabled.then_some(Message::SavePressed))
                    .style(styles::button::primary),
            )
            .push(
                button(text(i18n.tr("upload-logout-button")).size(typography::BODY))
                    .on_press_maybe(enabled.then_some(Message::LogoutPressed))
                    .style(styles::button::secondary),
            );

        let form = Column::new()
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .spacing(spacing::SM)
            .push(title)
            .push(saved)
            .push(Text::new(i18n.tr("upload-description-label")).size(typography::CAPTION))
            .push(description)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(choose)
                    .push(Text::new(selection_label).size(typography::CAPTION)),
            )
            .push(preview)
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
