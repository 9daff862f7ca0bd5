// SPDX-License-Identifier: MPL-2.0
//! Demo application: a control panel that queues and fires banner notices.
//!
//! The `App` owns a [`NoticeCenter`] and translates panel buttons into
//! coordinator calls. Banners are stacked on top of the panel.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::domain::notice::{duration_bounds, NoticeCategory, Size};
use crate::ui::notices::NoticeCenter;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    notices: NoticeCenter,
    draft: String,
    duration_secs: f32,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.notices.state())
            .field("pending", &self.notices.pending())
            .field("duration_secs", &self.duration_secs)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Range of the duration slider, in seconds.
pub const DURATION_SLIDER_RANGE: std::ops::RangeInclusive<f32> = 0.5..=10.0;

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

    // iced 0.14 requires `Fn` for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Clamps a slider value into the slider range.
fn clamp_duration(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*DURATION_SLIDER_RANGE.start(), *DURATION_SLIDER_RANGE.end())
    } else {
        *DURATION_SLIDER_RANGE.start()
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            config,
            config_warning,
        } = flags;
        let mut app = Self::with_config(&config);

        if let Some(warning) = config_warning {
            app.notices.fire_notice(
                duration_bounds::DEFAULT_SECS,
                NoticeCategory::Warning,
                warning,
                None,
            );
        }

        (app, Task::none())
    }

    fn with_config(config: &Config) -> Self {
        let window = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        Self {
            notices: NoticeCenter::new(
                window,
                config.banner_metrics(),
                config.coordinator_settings(),
            ),
            draft: String::new(),
            duration_secs: clamp_duration(config.default_duration_secs() as f32),
            theme_mode: config.general.theme_mode,
        }
    }

    fn title(&self) -> String {
        match self.notices.pending() {
            0 => "Iced Notice".to_string(),
            pending => format!("Iced Notice ({pending} queued)"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(&self.notices)
    }

    /// Text of the next notice: the draft, or a category placeholder.
    fn notice_text(&self, category: NoticeCategory) -> String {
        let draft = self.draft.trim();
        if draft.is_empty() {
            format!("This is a {} notice", category.label())
        } else {
            draft.to_string()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MessageChanged(draft) => self.draft = draft,
            Message::DurationChanged(value) => self.duration_secs = clamp_duration(value),
            Message::Add(category) => {
                let text = self.notice_text(category);
                self.notices.enqueue_with(
                    f64::from(self.duration_secs),
                    category,
                    text,
                    None,
                );
                tracing::debug!(
                    category = category.label(),
                    pending = self.notices.pending(),
                    "notice queued"
                );
            }
            Message::Fire => self.notices.fire(),
            Message::SendFromThread => {
                let sender = self.notices.sender();
                let duration = f64::from(self.duration_secs);
                let text = self.notice_text(NoticeCategory::Info);
                std::thread::spawn(move || {
                    sender.fire_notice(duration, NoticeCategory::Info, text, None);
                });
            }
            Message::ClearPending => {
                let cleared = self.notices.clear_pending();
                tracing::debug!(cleared, "pending notices cleared");
            }
            Message::DismissCurrent => {
                if !self.notices.dismiss_current() {
                    tracing::trace!("nothing to dismiss");
                }
            }
            Message::Notices(message) => self.notices.update(message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notices: &self.notices,
            draft: &self.draft,
            duration_secs: self.duration_secs,
        })
    }
}
