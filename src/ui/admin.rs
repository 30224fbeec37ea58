// SPDX-License-Identifier: MPL-2.0
//! Administrator screen: a read-only table of every saved earring record.
//!
//! Rows mirror the catalog in insertion order and are never removed, so a
//! row index stays valid for the lifetime of the application. Thumbnails are
//! decoded asynchronously and filled in through [`State::set_thumbnail`].

use crate::i18n::fluent::I18n;
use crate::media::{ImageData, ImageSize};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, image, scrollable, text, Column, Container, Row, Text},
    Element, Length,
};
use std::path::{Path, PathBuf};

/// Contextual data needed to render the admin table.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnail_size: ImageSize,
}

#[derive(Debug, Clone)]
pub enum Message {
    LogoutPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Logout,
}

/// Decoding state of a row's thumbnail.
#[derive(Debug, Clone, Default)]
pub enum Thumbnail {
    #[default]
    Loading,
    Ready(ImageData),
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct TableRow {
    brand: String,
    description: String,
    image_path: PathBuf,
    thumbnail: Thumbnail,
}

impl TableRow {
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    #[must_use]
    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    rows: Vec<TableRow>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LogoutPressed => Event::Logout,
        }
    }

    /// Appends a row with a pending thumbnail and returns its index.
    pub fn push_row(
        &mut self,
        brand: impl Into<String>,
        description: impl Into<String>,
        image_path: impl Into<PathBuf>,
    ) -> usize {
        self.rows.push(TableRow {
            brand: brand.into(),
            description: description.into(),
            image_path: image_path.into(),
            thumbnail: Thumbnail::Loading,
        });
        self.rows.len() - 1
    }

    /// Stores the decoded thumbnail, or a placeholder when decoding failed.
    pub fn set_thumbnail(&mut self, row: usize, thumbnail: Option<ImageData>) {
        if let Some(entry) = self.rows.get_mut(row) {
            entry.thumbnail = match thumbnail {
                Some(data) => Thumbnail::Ready(data),
                None => Thumbnail::Unavailable,
            };
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let edge = ctx.thumbnail_size.as_f32();

        let header = Container::new(
            Row::new()
                .spacing(spacing::SM)
                .push(header_cell(
                    i18n.tr("admin-column-brand"),
                    Length::Fixed(sizing::COLUMN_BRAND),
                ))
                .push(header_cell(i18n.tr("admin-column-description"), Length::Fill))
                .push(header_cell(
                    i18n.tr("admin-column-path"),
                    Length::Fixed(sizing::COLUMN_PATH),
                ))
                .push(header_cell(
                    i18n.tr("admin-column-preview"),
                    Length::Fixed(preview_column(edge)),
                )),
        )
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::table_header);

        let body: Element<'a, Message> = if self.rows.is_empty() {
            Container::new(Text::new(i18n.tr("admin-empty")).size(typography::BODY))
                .padding(spacing::MD)
                .into()
        } else {
            let rows = self.rows.iter().fold(
                Column::new().spacing(spacing::XS),
                |column, row| column.push(row_view(row, i18n, edge)),
            );
            scrollable(rows).height(Length::Fill).into()
        };

        let logout = button(text(i18n.tr("admin-logout-button")).size(typography::BODY))
            .on_press(Message::LogoutPressed)
            .style(styles::button::secondary);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(
                        Text::new(i18n.tr("admin-title"))
                            .size(typography::TITLE_LG)
                            .width(Length::Fill),
                    )
                    .push(logout),
            )
            .push(header)
            .push(body);

        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn header_cell<'a>(label: String, width: Length) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::TITLE_SM)
        .width(width)
        .into()
}

fn body_cell<'a>(value: String, width: Length) -> Element<'a, Message> {
    Text::new(value)
        .size(typography::BODY)
        .width(width)
        .into()
}

fn row_view<'a>(row: &'a TableRow, i18n: &'a I18n, edge: f32) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match &row.thumbnail {
        Thumbnail::Ready(data) => image(data.handle.clone())
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .into(),
        Thumbnail::Loading => Container::new(text(""))
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .style(styles::container::image_placeholder)
            .into(),
        Thumbnail::Unavailable => Container::new(
            Text::new(i18n.tr("admin-preview-unavailable")).size(typography::CAPTION),
        )
        .padding(spacing::XXS)
        .height(Length::Fixed(edge))
        .style(styles::container::image_placeholder)
        .into(),
    };

    Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .push(body_cell(row.brand.clone(), Length::Fixed(sizing::COLUMN_BRAND)))
        .push(body_cell(row.description.clone(), Length::Fill))
        .push(body_cell(
            row.image_path.display().to_string(),
            Length::Fixed(sizing::COLUMN_PATH),
        ))
        .push(Container::new(preview).width(Length::Fixed(preview_column(edge))))
        .into()
}

/// Preview column is never narrower than the brand column so the header fits.
fn preview_column(edge: f32) -> f32 {
    edge.max(sizing::COLUMN_BRAND)
}
