use buoysense_storage::{
    AlertStore, BuoyStore, InMemoryAlertStore, InMemoryBuoyStore, InMemoryNotificationStore,
    NotificationStore, StoreEvent,
};
use domain::{Buoy, BuoyStatus};
use std::sync::Arc;

fn new_buoy(id: &str) -> Buoy {
    Buoy {
        id: id.to_string(),
        name: "Test Station".to_string(),
        river: "Agno River".to_string(),
        latitude: 15.7,
        longitude: 120.5,
        status: BuoyStatus::Normal,
        battery_level: 90,
        signal_strength: 85,
        water_level: 2.0,
        temperature: 28.0,
        turbulence: 10,
        tilt: 0.0,
        last_transmission: "2026-08-06T00:00:00.000Z".to_string(),
        solar_charging: 50,
        lora_channel: 7,
        notes: None,
    }
}

#[tokio::test]
async fn add_buoy_appends_and_rejects_duplicates() {
    let store = InMemoryBuoyStore::with_fixtures();
    store.add_buoy(new_buoy("B007")).await.expect("add");
    assert_eq!(store.list_buoys().await.expect("list").len(), 7);
    assert!(store.find_buoy("B007").await.expect("find").is_some());

    let err = store.add_buoy(new_buoy("B001")).await.expect_err("dup");
    assert!(err.to_string().contains("B001"));
    assert_eq!(store.list_buoys().await.expect("list").len(), 7);
}

// 单实例共享：同一个 Arc 的两个句柄观察同一份数据。
#[tokio::test]
async fn resolution_is_visible_to_every_handle() {
    let store = Arc::new(InMemoryAlertStore::with_fixtures());
    let other = store.clone();

    let resolved = store.resolve_alert("A001").await.expect("resolve");
    assert!(resolved.expect("known id").resolved);

    let alerts = other.list_alerts().await.expect("list");
    let a001 = alerts.iter().find(|alert| alert.id == "A001").expect("A001");
    assert!(a001.resolved);

    assert!(store.resolve_alert("A999").await.expect("query").is_none());
}

#[tokio::test]
async fn mark_all_read_counts_unread_only() {
    let store = InMemoryNotificationStore::with_fixtures();
    // fixture 中两条未读
    assert_eq!(store.mark_all_read().await.expect("mark"), 2);
    assert_eq!(store.mark_all_read().await.expect("mark again"), 0);
    let notifications = store.list_notifications().await.expect("list");
    assert!(notifications.iter().all(|notification| notification.read));
}

#[tokio::test]
async fn mutations_are_broadcast_to_subscribers() {
    let buoys = InMemoryBuoyStore::with_fixtures();
    let mut buoy_events = buoys.subscribe();
    buoys.add_buoy(new_buoy("B008")).await.expect("add");
    assert_eq!(
        buoy_events.recv().await.expect("event"),
        StoreEvent::BuoyAdded("B008".to_string())
    );

    let alerts = InMemoryAlertStore::with_fixtures();
    let mut alert_events = alerts.subscribe();
    alerts.resolve_alert("A002").await.expect("resolve");
    assert_eq!(
        alert_events.recv().await.expect("event"),
        StoreEvent::AlertResolved("A002".to_string())
    );

    let notifications = InMemoryNotificationStore::with_fixtures();
    let mut notification_events = notifications.subscribe();
    notifications.mark_read("N001").await.expect("read");
    assert_eq!(
        notification_events.recv().await.expect("event"),
        StoreEvent::NotificationRead("N001".to_string())
    );
}
