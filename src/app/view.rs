// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The masonry is drawn as a row of fixed-width columns. Boxes already carry
//! their column from the layout pass and are stacked with the gutter as row
//! spacing, which reproduces the computed top offsets exactly.

use super::Message;
use crate::gallery::{BoxId, Gallery, GalleryBox, Pagination, Resolution};
use crate::layout::Placeable;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, mouse_area, Button, Column, Container, Id, Image, Row, Scrollable, Stack, Text,
};
use iced::{Background, Color, ContentFit, Element, Length, Theme};
use std::collections::HashMap;

/// Identifier of the gallery scrollable, used to reset the offset on navigation.
pub const SCROLLABLE_ID: &str = "masonry-gallery-scrollable";

/// Height reserved for the page link bar.
pub const PAGINATION_BAR_HEIGHT: f32 = 48.0;

const PLACEHOLDER_COLOR: Color = Color::from_rgb(0.16, 0.16, 0.18);
const OVERLAY_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.9);

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub pagination: &'a Pagination,
    pub thumbnails: &'a HashMap<BoxId, Handle>,
    pub preview_image: Option<&'a Handle>,
    pub status: Option<&'a str>,
}

/// Renders the gallery, the page bar and, when open, the preview overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .push(view_masonry(ctx.gallery, ctx.thumbnails))
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.pagination.total_pages() > 1 {
        content = content.push(view_pagination(ctx.gallery));
    }

    let base: Element<'_, Message> = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    if !ctx.gallery.preview().is_open() {
        return base;
    }

    Stack::new()
        .push(base)
        .push(view_preview(ctx.preview_image, ctx.status))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_masonry<'a>(
    gallery: &'a Gallery,
    thumbnails: &'a HashMap<BoxId, Handle>,
) -> Element<'a, Message> {
    let Some(summary) = gallery.summary().filter(|_| !gallery.boxes().is_empty()) else {
        let message = if gallery.is_ready() {
            "No images"
        } else {
            "Loading..."
        };
        return Container::new(Text::new(message))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    };

    let gap = gallery.settings().spacing.value();
    let mut columns: Vec<Vec<&GalleryBox>> = vec![Vec::new(); summary.columns];
    for item in gallery.boxes() {
        if let Some(column) = item.column().and_then(|c| columns.get_mut(c)) {
            column.push(item);
        }
    }

    let row = columns
        .into_iter()
        .fold(Row::new().spacing(gap), |row, boxes| {
            let column = boxes.into_iter().fold(
                Column::new()
                    .spacing(gap)
                    .width(Length::Fixed(summary.column_width)),
                |column, item| column.push(view_box(item, thumbnails.get(&item.id()))),
            );
            row.push(column)
        });

    Scrollable::new(row)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        })
        .into()
}

fn view_box<'a>(item: &'a GalleryBox, thumbnail: Option<&'a Handle>) -> Element<'a, Message> {
    let width = Length::Fixed(item.width());
    let height = Length::Fixed(item.height());

    match (item.resolution(), thumbnail) {
        (Resolution::Decoded(_), Some(handle)) => mouse_area(
            Image::new(handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Cover),
        )
        .on_press(Message::OpenPreview(item.id()))
        .into(),
        (Resolution::Broken, _) => mouse_area(
            Container::new(Text::new(item.item().id().to_string()).size(12))
                .width(width)
                .height(height)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(placeholder_style),
        )
        .on_press(Message::OpenPreview(item.id()))
        .into(),
        _ => Container::new(Text::new(""))
            .width(width)
            .height(height)
            .style(placeholder_style)
            .into(),
    }
}

fn view_pagination(gallery: &Gallery) -> Element<'_, Message> {
    let links = gallery.links().links().iter().enumerate().fold(
        Row::new().spacing(6),
        |row, (index, link)| {
            let style: fn(&Theme, button::Status) -> button::Style = if link.current {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                Button::new(Text::new(link.page.to_string()))
                    .on_press(Message::PageClicked(index))
                    .style(style),
            )
        },
    );

    Container::new(links)
        .width(Length::Fill)
        .height(Length::Fixed(PAGINATION_BAR_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn view_preview<'a>(image: Option<&'a Handle>, status: Option<&'a str>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match image {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(Text::new("Loading..."))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let mut actions = Row::new()
        .spacing(12)
        .align_y(Vertical::Center)
        .push(Button::new(Text::new("Download")).on_press(Message::DownloadOriginal))
        .push(
            Button::new(Text::new("Close"))
                .on_press(Message::ClosePreview)
                .style(button::secondary),
        );
    if let Some(status) = status {
        actions = actions.push(Text::new(status).size(14));
    }

    let overlay = Column::new()
        .spacing(12)
        .padding(24)
        .push(body)
        .push(actions)
        .width(Length::Fill)
        .height(Length::Fill);

    // Clicking anywhere outside the buttons closes the overlay and keeps
    // presses from reaching the grid underneath.
    mouse_area(
        Container::new(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(OVERLAY_COLOR)),
                ..Default::default()
            }),
    )
    .on_press(Message::ClosePreview)
    .into()
}

fn placeholder_style(_theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(PLACEHOLDER_COLOR)),
        ..Default::default()
    }
}
