// SPDX-License-Identifier: MPL-2.0
//! Gallery grid and lightbox overlay.
//!
//! The gallery shows a thumbnail grid of a fixed image list captured at
//! initialization. Clicking a thumbnail opens the lightbox overlay at that
//! index; next/previous navigation wraps around the list. An empty image
//! list disables the feature entirely: the grid shows an empty state and
//! every lightbox operation is a no-op.

use crate::gallery_scanner::ImageList;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, image, mouse_area, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::path::PathBuf;

/// Thumbnails per gallery row.
const GRID_COLUMNS: usize = 3;

/// One gallery entry: the source path and its decoded handle.
#[derive(Debug, Clone)]
struct GalleryImage {
    path: PathBuf,
    handle: image::Handle,
}

/// Lightbox state over a fixed list of gallery images.
#[derive(Debug, Clone, Default)]
pub struct State {
    images: Vec<GalleryImage>,
    current: usize,
    open: bool,
}

impl State {
    /// Creates a disabled lightbox with no images.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the image list at initialization. The list is fixed for the
    /// lifetime of this state.
    pub fn from_image_list(list: &ImageList) -> Self {
        let images = list
            .iter()
            .map(|path| GalleryImage {
                path: path.to_path_buf(),
                handle: image::Handle::from_path(path),
            })
            .collect();
        Self {
            images,
            current: 0,
            open: false,
        }
    }

    /// Returns the number of gallery images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the gallery has no images (feature disabled).
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current image index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Opens the overlay at the given index. Ignored when the gallery is
    /// empty or the index is out of range.
    pub fn open(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = index;
            self.open = true;
        }
    }

    /// Advances to the next image, wrapping to the first.
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    /// Retreats to the previous image, wrapping to the last.
    pub fn previous(&mut self) {
        if !self.images.is_empty() {
            let len = self.images.len();
            self.current = (self.current + len - 1) % len;
        }
    }

    /// Hides the overlay. The current index is kept.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Messages emitted by the gallery grid and lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(usize),
    Next,
    Previous,
    Close,
}

/// Processes a lightbox message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Open(index) => state.open(index),
        Message::Next => state.next(),
        Message::Previous => state.previous(),
        Message::Close => state.close(),
    }
}

/// Renders the gallery thumbnail grid.
pub fn view_gallery(state: &State) -> Element<'_, Message> {
    if state.is_empty() {
        let empty = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Gallery").size(typography::TITLE))
            .push(Text::new("No images found.").size(typography::BODY));
        return Container::new(empty)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    }

    let mut grid = Column::new().spacing(spacing::SM);
    for (row_index, chunk) in state.images.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::SM);
        for (col_index, entry) in chunk.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col_index;
            let thumbnail = image(entry.handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL_SIZE))
                .height(Length::Fixed(sizing::THUMBNAIL_SIZE));
            row = row.push(
                button(thumbnail)
                    .on_press(Message::Open(index))
                    .padding(0)
                    .style(button::text),
            );
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Gallery").size(typography::TITLE))
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

/// Renders the lightbox overlay for the current image.
///
/// Only meaningful while the overlay is open; callers gate on `is_open`.
pub fn view_overlay(state: &State) -> Element<'_, Message> {
    let Some(entry) = state.images.get(state.current) else {
        return Container::new(Text::new("")).into();
    };

    let current_image = image(entry.handle.clone())
        .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
        .height(Length::Fill);

    let prev_button = button(Text::new("‹").size(typography::TITLE))
        .on_press(Message::Previous)
        .style(nav_button_style);
    let next_button = button(Text::new("›").size(typography::TITLE))
        .on_press(Message::Next)
        .style(nav_button_style);
    let close_button = button(Text::new("×").size(typography::SUBTITLE))
        .on_press(Message::Close)
        .style(nav_button_style);

    let file_name = entry
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    let caption = Text::new(format!(
        "{} ({}/{})",
        file_name,
        state.current + 1,
        state.len()
    ))
    .size(typography::CAPTION);

    let viewer_row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(prev_button)
        .push(current_image)
        .push(next_button);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Container::new(close_button)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        )
        .push(viewer_row)
        .push(caption);

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .style(backdrop_style);

    // Click on the backdrop (anything that is not a button) closes.
    mouse_area(backdrop).on_press(Message::Close).into()
}

/// Style function for the translucent overlay backdrop.
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(iced::Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(iced::Color::WHITE),
        ..Default::default()
    }
}

/// Style function for the overlay navigation buttons.
fn nav_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(iced::Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: iced::Color::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}
