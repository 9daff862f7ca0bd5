// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo.
//!
//! The control panel fills the window; the banner layer is stacked on top
//! so it overlaps the panel instead of pushing it down.

use super::{Message, DURATION_SLIDER_RANGE};
use crate::domain::notice::NoticeCategory;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notices::{banner, NoticeCenter};
use crate::ui::styles;
use iced::widget::{button, slider, text, text_input, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub notices: &'a NoticeCenter,
    pub draft: &'a str,
    pub duration_secs: f32,
}

/// Renders the panel with the banner layer on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = Container::new(controls(&ctx))
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .style(styles::container::panel);

    let content = Container::new(panel)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    Stack::new()
        .push(content)
        .push(ctx.notices.view().map(Message::Notices))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let title = text("Notices").size(typography::TITLE_MD);

    let draft = text_input("Notice text", ctx.draft)
        .on_input(Message::MessageChanged)
        .size(typography::BODY)
        .padding(spacing::XS);

    let duration = Column::new()
        .spacing(spacing::XXS)
        .push(text(format!("Duration: {:.1} s", ctx.duration_secs)).size(typography::CAPTION))
        .push(slider(DURATION_SLIDER_RANGE, ctx.duration_secs, Message::DurationChanged).step(0.5));

    let categories = NoticeCategory::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, category| {
            row.push(
                button(text(category.label()).size(typography::BODY))
                    .on_press(Message::Add(category))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .width(Length::Fill)
                    .style(styles::button_category(banner::to_color(category.color()))),
            )
        });

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text("Fire").size(typography::BODY))
                .on_press(Message::Fire)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button_primary),
        )
        .push(
            button(text("From thread").size(typography::BODY))
                .on_press(Message::SendFromThread)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::secondary),
        )
        .push(
            button(text("Clear").size(typography::BODY))
                .on_press_maybe((ctx.notices.pending() > 0).then_some(Message::ClearPending))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::secondary),
        )
        .push(
            button(text("Dismiss").size(typography::BODY))
                .on_press_maybe(ctx.notices.attached().map(|_| Message::DismissCurrent))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::secondary),
        );

    let status = text(format!(
        "State: {}, queued: {}",
        ctx.notices.state(),
        ctx.notices.pending()
    ))
    .size(typography::CAPTION);

    Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(draft)
        .push(duration)
        .push(categories)
        .push(actions)
        .push(status)
}
