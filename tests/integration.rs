// SPDX-License-Identifier: MPL-2.0
use iced_notice::app::config::{self, Config};
use iced_notice::application::coordinator::State;
use iced_notice::domain::notice::{Notice, NoticeCategory, Size};
use iced_notice::ui::notices::{Message, NoticeCenter};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn center_from(config: &Config) -> NoticeCenter {
    NoticeCenter::new(
        Size::new(400.0, 700.0),
        config.banner_metrics(),
        config.coordinator_settings(),
    )
}

#[test]
fn config_on_disk_drives_the_notice_center() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut written = Config::default();
    written.layout.status_bar_height = Some(24.0);
    written.queue.max_pending = Some(2);
    written.animation.entry_ms = Some(100);
    written.animation.exit_ms = Some(100);
    config::save_with_override(&written, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, written);

    let mut center = center_from(&loaded);
    for index in 0..3 {
        center.enqueue_with(1.0, NoticeCategory::Info, format!("notice {index}"), None);
    }
    assert_eq!(center.pending(), 2, "third notice is dropped by max_pending");

    center.fire();
    let banner = center.attached().expect("banner attached");
    assert_eq!(banner.notice.message(), Some("notice 0"));
    assert!(banner.frame.size.height >= 24.0 + 44.0);
}

#[test]
fn queue_drains_in_order_on_frame_ticks() {
    let mut center = center_from(&Config::default());
    let t0 = Instant::now();
    let categories = [
        NoticeCategory::Success,
        NoticeCategory::Warning,
        NoticeCategory::Error,
    ];
    for category in categories {
        center.enqueue(Notice::from_parts(0.5, category, category.label(), None));
    }
    center.fire();

    let mut seen = Vec::new();
    let mut now = t0;
    while now < t0 + Duration::from_secs(10) {
        if let Some(banner) = center.attached() {
            if seen.last() != Some(&banner.notice.id()) {
                seen.push(banner.notice.id());
                assert_eq!(
                    banner.notice.message(),
                    Some(categories[seen.len() - 1].label())
                );
            }
        }
        now += ms(16);
        center.update(Message::Tick(now));
    }

    assert_eq!(seen.len(), 3);
    assert_eq!(center.state(), State::Idle);
    assert!(!center.needs_frames());
}

#[test]
fn tap_during_entry_slides_the_banner_back_out() {
    let mut center = center_from(&Config::default());
    let t0 = Instant::now();
    center.fire_notice(30.0, NoticeCategory::Info, "tap early", None);

    center.update(Message::Tick(t0 + ms(100)));
    center.update(Message::Moved(iced_notice::domain::notice::Point::new(10.0, 10.0)));
    center.update(Message::Pressed);
    center.update(Message::Released);
    assert_eq!(center.state(), State::Dismissing);

    // a second tap is ignored while leaving
    center.update(Message::Pressed);
    center.update(Message::Released);
    assert_eq!(center.state(), State::Dismissing);

    center.update(Message::Tick(t0 + ms(1000)));
    assert_eq!(center.state(), State::Idle);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn notices_posted_from_tasks_are_shown_one_at_a_time() {
    let mut center = center_from(&Config::default());

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let sender = center.sender();
            tokio::spawn(async move {
                sender.enqueue_with(0.5, NoticeCategory::Info, format!("task {index}"), None);
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("task panicked");
    }
    center.sender().fire();

    let t0 = Instant::now();
    center.update(Message::Tick(t0));
    assert_eq!(center.state(), State::Showing);
    assert_eq!(center.pending(), 3);

    let mut now = t0;
    let mut shown = 1;
    let mut current = center.attached().map(|banner| banner.notice.id());
    while now < t0 + Duration::from_secs(10) {
        now += ms(16);
        center.update(Message::Tick(now));
        let attached = center.attached().map(|banner| banner.notice.id());
        if attached.is_some() && attached != current {
            shown += 1;
        }
        current = attached;
    }

    assert_eq!(shown, 4);
    assert_eq!(center.state(), State::Idle);
}
