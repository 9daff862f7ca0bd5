// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.
//!
//! Banner ticks and resizes come from the notice center. `Enter` fires the
//! next notice and `Escape` dismisses the current one, unless a widget
//! (the text input) already captured the key.

use super::Message;
use crate::ui::notices::NoticeCenter;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

pub fn subscription(notices: &NoticeCenter) -> Subscription<Message> {
    let shortcuts = event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(named),
                ..
            }) => shortcut(named),
            _ => None,
        }
    });

    Subscription::batch([notices.subscription().map(Message::Notices), shortcuts])
}

fn shortcut(key: Named) -> Option<Message> {
    match key {
        Named::Enter => Some(Message::Fire),
        Named::Escape => Some(Message::DismissCurrent),
        _ => None,
    }
}
