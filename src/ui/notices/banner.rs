// SPDX-License-Identifier: MPL-2.0
//! Banner widget for rendering the attached notice.
//!
//! The banner spans the overlay width at the top edge. While sliding, only
//! the part below the top edge is visible: the outer container is clipped
//! to `frame height + offset` and the banner hangs from its bottom.

use super::surface::AttachedBanner;
use super::Message;
use crate::domain::notice::{layout_banner, ImageSource, NoticeImage, Rect, Rgb};
use crate::ui::design_tokens::{palette, shadow, typography};
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, text, Container, Row, Space};
use iced::{alignment, Background, Color, Element, Length, Padding, Theme};

/// Converts a notice color into an iced color.
#[must_use]
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Height of the banner part that is currently on screen.
#[must_use]
pub fn visible_height(frame: Rect, offset: f32) -> f32 {
    (frame.size.height + offset).clamp(0.0, frame.size.height)
}

/// Renders `banner` slid to `offset` (0 is resting, `-height` hidden).
pub fn view(banner: &AttachedBanner, offset: f32) -> Element<'_, Message> {
    let notice = &banner.notice;
    let frame = banner.frame;
    let layout = layout_banner(notice, frame.size);
    let background = to_color(notice.color());

    let mut content = Row::new().height(Length::Fill);

    if let (Some(image_frame), Some(source)) = (layout.image, notice.image()) {
        let insets = notice.image_insets();
        content = content.push(
            Container::new(
                image(image_handle(source))
                    .width(Length::Fixed(image_frame.size.width))
                    .height(Length::Fixed(image_frame.size.height)),
            )
            .padding(Padding {
                top: insets.top,
                right: insets.right,
                bottom: insets.bottom,
                left: insets.left,
            }),
        );
    }

    if let (Some(text_frame), Some(message)) = (layout.text, notice.message()) {
        let insets = notice.text_insets();
        content = content.push(
            Container::new(
                text(message)
                    .size(typography::BODY)
                    .width(Length::Fixed(text_frame.size.width)),
            )
            .padding(Padding {
                top: insets.top,
                right: insets.right,
                bottom: insets.bottom,
                left: insets.left,
            })
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
        );
    } else {
        content = content.push(Space::new().width(Length::Fill));
    }

    let body = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(frame.size.height))
        .style(move |theme: &Theme| banner_style(theme, background));

    let interactive = mouse_area(body)
        .on_press(Message::Pressed)
        .on_release(Message::Released)
        .on_move(|point| Message::Moved(crate::domain::notice::Point::new(point.x, point.y)))
        .on_exit(Message::Exited);

    Container::new(interactive)
        .width(Length::Fill)
        .height(Length::Fixed(visible_height(frame, offset)))
        .align_y(alignment::Vertical::Bottom)
        .clip(true)
        .into()
}

fn image_handle(source: &NoticeImage) -> Handle {
    match source.source() {
        ImageSource::Path(path) => Handle::from_path(path),
        ImageSource::Bytes(bytes) => Handle::from_bytes(bytes.to_vec()),
    }
}

/// Style function for the banner body.
fn banner_style(_theme: &Theme, background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette::WHITE),
        shadow: shadow::MD,
        ..Default::default()
    }
}
