//! In-memory mock dataset.
//!
//! Timestamps are generated relative to the current time so the "today"
//! queries stay meaningful whenever the dashboard runs.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::model::{
    Cat, Device, DeviceState, EventKind, HealthEvent, Notification, NotificationKind,
    ScreeningResult,
};

fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(hours)
}

fn birthday(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn mock_cats() -> Vec<Cat> {
    vec![
        Cat {
            id: "1".into(),
            name: "Whiskers".into(),
            breed: Some("Persian".into()),
            date_of_birth: birthday(2020, 5, 15),
            weight_kg: Some(4.5),
            photo: "🐱".into(),
            created_at: hours_ago(24 * 300),
        },
        Cat {
            id: "2".into(),
            name: "Luna".into(),
            breed: Some("Siamese".into()),
            date_of_birth: birthday(2021, 3, 20),
            weight_kg: Some(3.8),
            photo: "🐈".into(),
            created_at: hours_ago(24 * 300),
        },
    ]
}

pub fn mock_devices() -> Vec<Device> {
    vec![
        Device {
            id: "device-1".into(),
            name: "Living Room Litter Box".into(),
            status: DeviceState::Online,
            firmware_version: "2.1.0".into(),
            litter_level: 75,
            waste_level: 45,
            last_cleaned: Some(hours_ago(5)),
            battery_level: None,
        },
        Device {
            id: "device-2".into(),
            name: "Bedroom Litter Box".into(),
            status: DeviceState::Offline,
            firmware_version: "2.0.4".into(),
            litter_level: 30,
            waste_level: 80,
            last_cleaned: Some(hours_ago(30)),
            battery_level: Some(40),
        },
    ]
}

fn normal_screening() -> ScreeningResult {
    ScreeningResult {
        color: "brown".into(),
        consistency: "normal".into(),
        size: "medium".into(),
        shape: "formed".into(),
        anomalies: vec![],
        confidence: 0.92,
    }
}

fn soft_screening() -> ScreeningResult {
    ScreeningResult {
        color: "dark brown".into(),
        consistency: "slightly soft".into(),
        size: "medium".into(),
        shape: "formed".into(),
        anomalies: vec!["slightly soft consistency".into()],
        confidence: 0.88,
    }
}

pub fn mock_health_events() -> Vec<HealthEvent> {
    vec![
        HealthEvent {
            id: "event-1".into(),
            cat_id: "1".into(),
            timestamp: hours_ago(2),
            kind: EventKind::Defecation,
            has_image: true,
            screening: Some(normal_screening()),
            notes: Some("Normal event".into()),
        },
        HealthEvent {
            id: "event-2".into(),
            cat_id: "1".into(),
            timestamp: hours_ago(4),
            kind: EventKind::Urination,
            has_image: false,
            screening: None,
            notes: Some("Normal".into()),
        },
        HealthEvent {
            id: "event-3".into(),
            cat_id: "2".into(),
            timestamp: hours_ago(5),
            kind: EventKind::Defecation,
            has_image: true,
            screening: Some(soft_screening()),
            notes: None,
        },
        HealthEvent {
            id: "event-4".into(),
            cat_id: "1".into(),
            timestamp: hours_ago(26),
            kind: EventKind::Defecation,
            has_image: false,
            screening: Some(normal_screening()),
            notes: None,
        },
        HealthEvent {
            id: "event-5".into(),
            cat_id: "2".into(),
            timestamp: hours_ago(28),
            kind: EventKind::Urination,
            has_image: false,
            screening: None,
            notes: None,
        },
    ]
}

pub fn mock_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "notif-1".into(),
            title: "Anomaly Detected".into(),
            message: "Unusual consistency detected for Whiskers. Review recommended.".into(),
            kind: NotificationKind::Warning,
            timestamp: hours_ago(3),
            read: false,
        },
        Notification {
            id: "notif-2".into(),
            title: "Cleaning Complete".into(),
            message: "Living Room Litter Box has been cleaned successfully.".into(),
            kind: NotificationKind::Success,
            timestamp: hours_ago(5),
            read: false,
        },
        Notification {
            id: "notif-3".into(),
            title: "Litter Level Low".into(),
            message: "Litter level at 75%. Consider refilling soon.".into(),
            kind: NotificationKind::Info,
            timestamp: hours_ago(6),
            read: true,
        },
    ]
}

pub fn cat_by_id(id: &str) -> Option<Cat> {
    mock_cats().into_iter().find(|cat| cat.id == id)
}

pub fn today_events() -> Vec<HealthEvent> {
    let today = Utc::now().date_naive();
    mock_health_events()
        .into_iter()
        .filter(|event| event.timestamp.date_naive() == today)
        .collect()
}

pub fn unread_notifications() -> Vec<Notification> {
    mock_notifications().into_iter().filter(|n| !n.read).collect()
}

/// Most recent events first.
pub fn recent_events(limit: usize) -> Vec<HealthEvent> {
    let mut events = mock_health_events();
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events.truncate(limit);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_events_are_sorted_and_limited() {
        let events = recent_events(3);
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(events[0].id, "event-1");
    }

    #[test]
    fn cat_lookup() {
        assert_eq!(cat_by_id("2").map(|c| c.name), Some("Luna".to_string()));
        assert!(cat_by_id("missing").is_none());
    }

    #[test]
    fn unread_notifications_excludes_read_ones() {
        let unread = unread_notifications();
        assert_eq!(unread.len(), 2);
        assert!(unread.iter().all(|n| !n.read));
    }

    #[test]
    fn anomaly_detection_reads_screening() {
        let events = mock_health_events();
        let flagged: Vec<_> = events.iter().filter(|e| e.has_anomaly()).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id, "event-3");
    }
}
