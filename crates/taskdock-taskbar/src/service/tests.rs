use std::rc::Rc;
use std::sync::mpsc;
use std::time::Instant;

use taskdock_common::events::{Event, EventBus};
use taskdock_common::types::{GroupIcon, GroupId, GroupSummary, Point};
use taskdock_config::TaskdockConfig;
use taskdock_platform::{FakeAdapter, NativeHandle, PlatformEvent};

use super::*;
use crate::popup::recording::RecordingPopout;
use crate::store::MemoryGroupStore;

struct Fixture {
    fake: Rc<FakeAdapter>,
    store: Rc<MemoryGroupStore>,
    popout: RecordingPopout,
    service: TaskbarService,
}

fn fixture() -> Fixture {
    let fake = Rc::new(FakeAdapter::new());
    let store = Rc::new(MemoryGroupStore::new(vec![
        GroupSummary::new("a", "Alpha").with_item_count(2),
        GroupSummary::new("b", "Beta").with_item_count(5),
    ]));
    let popout = RecordingPopout::new();
    let mut service = TaskbarService::new(
        fake.clone(),
        store.clone(),
        Box::new(popout.clone()),
        &TaskdockConfig::default(),
    );
    service.attach().unwrap();
    service.resync();
    Fixture {
        fake,
        store,
        popout,
        service,
    }
}

fn handle_of(f: &Fixture, id: &str) -> NativeHandle {
    f.service.registry().get(&GroupId::from(id)).unwrap().handle
}

#[test]
fn resync_creates_one_window_per_group() {
    let f = fixture();
    assert_eq!(f.fake.live_windows().len(), 2);
    assert!(f.fake.window_titled("Alpha").is_some());
    assert!(f.fake.window_titled("Beta").is_some());
}

#[test]
fn store_failure_keeps_current_windows() {
    let mut f = fixture();
    f.store.fail_reads(true);
    f.service.resync();
    assert_eq!(f.fake.live_windows().len(), 2);
}

#[test]
fn click_through_platform_events_opens_popup_at_hook_sample() {
    let mut f = fixture();
    let a = handle_of(&f, "a");
    f.fake.click(a, Point::new(300.0, 1065.0));
    f.service.drain_platform_events();

    let opens = f.popout.opens();
    assert_eq!(opens.len(), 1);
    assert_eq!(opens[0].anchor, Some(Point::new(300.0, 1040.0)));
    assert_eq!(opens[0].bounds.x, 145.0);
    assert_eq!(f.fake.window(a).unwrap().minimize_count, 1);
}

#[test]
fn focus_return_after_close_is_swallowed() {
    let mut f = fixture();
    let a = handle_of(&f, "a");
    f.fake.click(a, Point::new(300.0, 1065.0));
    f.service.drain_platform_events();

    // renderer closes, focus bounces back to the proxy window
    f.service.handle(UiMessage::PopoutClosed);
    f.fake.emit(PlatformEvent::Restored { window: a });
    f.service.drain_platform_events();

    assert_eq!(f.popout.opens().len(), 1);
    assert!(!f.service.popup().is_visible());
}

#[test]
fn group_events_update_windows() {
    let mut f = fixture();
    let control = f.service.handle(UiMessage::Group(Event::GroupCreated(
        GroupSummary::new("c", "Gamma"),
    )));
    assert_eq!(control, LoopControl::Continue);
    assert_eq!(f.fake.live_windows().len(), 3);

    f.service
        .handle(UiMessage::Group(Event::GroupUpdated(GroupSummary::new(
            "c", "Gamma 2",
        ))));
    assert!(f.fake.window_titled("Gamma 2").is_some());

    f.service
        .handle(UiMessage::Group(Event::GroupDeleted(GroupId::from("c"))));
    assert_eq!(f.fake.live_windows().len(), 2);
    assert!(f.fake.window_titled("Gamma 2").is_none());
}

#[test]
fn deleting_the_active_group_closes_its_popup() {
    let mut f = fixture();
    let b = GroupId::from("b");
    f.service.open_group_at_cursor(&b);
    assert!(f.service.popup().is_visible());

    f.service
        .handle(UiMessage::Group(Event::GroupDeleted(b.clone())));
    assert!(!f.service.popup().is_visible());
    assert!(f.service.registry().get(&b).is_none());
}

#[test]
fn updating_the_active_group_refreshes_popup() {
    let mut f = fixture();
    let a = GroupId::from("a");
    f.service.open_group_at_cursor(&a);
    f.popout.clear();

    f.service
        .handle(UiMessage::Group(Event::GroupUpdated(GroupSummary::new(
            "a", "Alpha",
        ))));
    assert_eq!(
        f.popout.calls(),
        vec![crate::popup::recording::PopoutCall::Refresh]
    );
}

#[test]
fn resync_drops_windows_and_popup_of_vanished_groups() {
    let mut f = fixture();
    let a = GroupId::from("a");
    let handle = handle_of(&f, "a");
    f.fake.emit(PlatformEvent::Activated {
        window: handle,
        cursor: Point::new(1.0, 1.0),
        at: Instant::now(),
    });
    f.service.drain_platform_events();
    assert_eq!(f.service.tracker().len(), 1);
    f.service.open_group_at_cursor(&a);

    f.store.remove(&a);
    f.service.handle(UiMessage::Resync);

    assert_eq!(f.fake.live_windows().len(), 1);
    assert!(!f.service.popup().is_visible());
    assert!(f.service.tracker().is_empty());
}

#[test]
fn resync_keeps_popup_of_live_group_without_window() {
    let fake = Rc::new(FakeAdapter::new());
    fake.fail_create(true);
    let store = Rc::new(MemoryGroupStore::new(vec![
        GroupSummary::new("a", "Alpha").with_item_count(2),
    ]));
    let mut service = TaskbarService::new(
        fake.clone(),
        store.clone(),
        Box::new(RecordingPopout::new()),
        &TaskdockConfig::default(),
    );
    service.attach().unwrap();
    service.resync();
    assert!(service.registry().is_empty());

    let a = GroupId::from("a");
    service.open_group_at_cursor(&a);
    assert!(service.popup().is_visible());

    service.resync();
    assert!(service.popup().is_visible());
    assert_eq!(service.popup().active_group(), Some(&a));

    store.remove(&a);
    service.resync();
    assert!(!service.popup().is_visible());
}

#[test]
fn activation_for_foreign_window_is_not_recorded() {
    let mut f = fixture();
    f.fake.emit(PlatformEvent::Activated {
        window: NativeHandle(0x9999),
        cursor: Point::new(1.0, 1.0),
        at: Instant::now(),
    });
    f.service.drain_platform_events();
    assert!(f.service.tracker().is_empty());
}

#[test]
fn close_request_reminimizes_instead_of_closing() {
    let mut f = fixture();
    let a = handle_of(&f, "a");
    f.fake.emit(PlatformEvent::CloseRequested { window: a });
    f.service.drain_platform_events();
    let window = f.fake.window(a).unwrap();
    assert_eq!(window.minimize_count, 1);
    assert_eq!(f.fake.live_windows().len(), 2);
}

#[test]
fn shutdown_messages_exit_the_loop() {
    let mut f = fixture();
    assert_eq!(f.service.handle(UiMessage::Shutdown), LoopControl::Exit);
    assert_eq!(
        f.service.handle(UiMessage::Group(Event::Shutdown)),
        LoopControl::Exit
    );
}

#[test]
fn drain_messages_stops_at_shutdown() {
    let mut f = fixture();
    let (tx, rx) = mpsc::channel();
    tx.send(UiMessage::Resync).unwrap();
    tx.send(UiMessage::Shutdown).unwrap();
    tx.send(UiMessage::Resync).unwrap();
    assert_eq!(f.service.drain_messages(&rx), LoopControl::Exit);
    // the message after shutdown is still queued
    assert!(rx.try_recv().is_ok());
}

#[test]
fn drain_messages_reports_closed_channel() {
    let mut f = fixture();
    let (tx, rx) = mpsc::channel::<UiMessage>();
    tx.send(UiMessage::Resync).unwrap();
    drop(tx);
    assert_eq!(f.service.drain_messages(&rx), LoopControl::Exit);
}

#[test]
fn lagged_bus_triggers_resync() {
    let mut f = fixture();
    let bus = EventBus::new(2);
    let mut rx = bus.subscribe();
    for i in 0..5 {
        bus.publish(Event::GroupCreated(GroupSummary::new(
            format!("bus-{i}"),
            format!("Bus {i}"),
        )));
    }
    f.store.insert(GroupSummary::new("from-store", "From store"));

    assert_eq!(f.service.drain_group_events(&mut rx), LoopControl::Continue);
    // resync reconciles against the store, dropping bus-only groups
    let ids = f.service.registry().group_ids();
    assert!(ids.contains(&GroupId::from("from-store")));
    assert!(!ids.iter().any(|id| id.as_str().starts_with("bus-")));
}

#[test]
fn bus_events_apply_in_order() {
    let mut f = fixture();
    let bus = EventBus::default();
    let mut rx = bus.subscribe();
    bus.publish(Event::GroupCreated(GroupSummary::new("c", "Gamma")));
    bus.publish(Event::GroupDeleted(GroupId::from("a")));

    f.service.drain_group_events(&mut rx);
    assert_eq!(
        f.service.registry().group_ids(),
        vec![GroupId::from("b"), GroupId::from("c")]
    );
}

#[test]
fn general_popup_counts_groups() {
    let mut f = fixture();
    let PopupAction::Opened(placement) = f.service.show_general() else {
        panic!("expected open");
    };
    assert!(placement.group.is_none());
    assert!(placement.anchor.is_none());
}

#[test]
fn shutdown_destroys_everything_and_is_idempotent() {
    let mut f = fixture();
    f.service.open_group_at_cursor(&GroupId::from("a"));
    f.service.shutdown();
    assert!(f.fake.live_windows().is_empty());
    assert!(!f.service.popup().is_visible());
    assert!(f.service.registry().is_empty());

    f.service.shutdown();
    assert_eq!(f.fake.destroyed().len(), 2);
}

#[test]
fn icon_changes_reach_the_window() {
    let mut f = fixture();
    let icon = GroupIcon {
        glyph: Some("\u{E7FC}".into()),
        ..Default::default()
    };
    f.service
        .handle(UiMessage::Group(Event::GroupUpdated(
            GroupSummary::new("a", "Alpha").with_icon(icon.clone()),
        )));
    assert_eq!(f.fake.window_titled("Alpha").unwrap().icon, icon);
}
