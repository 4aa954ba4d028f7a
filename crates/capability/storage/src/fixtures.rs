//! Fixture 集合构造。
//!
//! 六个菲律宾河流浮标（B001–B006）、五条通知、四条告警、六个四小时
//! 时间桶的水位趋势。最后传输时间按"距今偏移"在播种时刻计算，
//! 与真实遥测的新鲜度语义一致。
//!
//! 不变式：`water_level_samples()` 的每一行对 `buoys()` 的每个 ID
//! 都有取值（无稀疏行）。

use chrono::{Duration, SecondsFormat, Utc};
use domain::{
    Alert, AlertKind, AlertSeverity, Buoy, BuoyStatus, Notification, NotificationKind,
    WaterLevelSample,
};
use std::collections::BTreeMap;

fn minutes_ago(minutes: i64) -> String {
    (Utc::now() - Duration::minutes(minutes)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 浮标 fixture。
pub fn buoys() -> Vec<Buoy> {
    vec![
        Buoy {
            id: "B001".to_string(),
            name: "Pasig River North".to_string(),
            river: "Pasig River".to_string(),
            latitude: 14.6349,
            longitude: 121.5563,
            status: BuoyStatus::Normal,
            battery_level: 85,
            signal_strength: 95,
            water_level: 2.3,
            temperature: 28.5,
            turbulence: 12,
            tilt: 2.0,
            last_transmission: minutes_ago(5),
            solar_charging: 45,
            lora_channel: 7,
            notes: Some("Operational, stable readings".to_string()),
        },
        Buoy {
            id: "B002".to_string(),
            name: "Pasig River South".to_string(),
            river: "Pasig River".to_string(),
            latitude: 14.5771,
            longitude: 121.5932,
            status: BuoyStatus::Rising,
            battery_level: 72,
            signal_strength: 78,
            water_level: 3.1,
            temperature: 29.2,
            turbulence: 18,
            tilt: 3.0,
            last_transmission: minutes_ago(15),
            solar_charging: 38,
            lora_channel: 7,
            notes: Some("Water level rising - monitoring closely".to_string()),
        },
        Buoy {
            id: "B003".to_string(),
            name: "Laguna de Bay".to_string(),
            river: "Laguna de Bay".to_string(),
            latitude: 14.3469,
            longitude: 121.3869,
            status: BuoyStatus::Normal,
            battery_level: 91,
            signal_strength: 88,
            water_level: 1.8,
            temperature: 27.8,
            turbulence: 8,
            tilt: 1.0,
            last_transmission: minutes_ago(2),
            solar_charging: 52,
            lora_channel: 7,
            notes: Some("Optimal performance".to_string()),
        },
        Buoy {
            id: "B004".to_string(),
            name: "Cagayan River".to_string(),
            river: "Cagayan River".to_string(),
            latitude: 17.6386,
            longitude: 121.7301,
            status: BuoyStatus::Offline,
            battery_level: 15,
            signal_strength: 0,
            water_level: 4.2,
            temperature: 26.1,
            turbulence: 45,
            tilt: 8.0,
            last_transmission: minutes_ago(120),
            solar_charging: 0,
            lora_channel: 8,
            notes: Some("Communication loss - requires attention".to_string()),
        },
        Buoy {
            id: "B005".to_string(),
            name: "Marikina River".to_string(),
            river: "Marikina River".to_string(),
            latitude: 14.6421,
            longitude: 121.6192,
            status: BuoyStatus::Alert,
            battery_level: 58,
            signal_strength: 82,
            water_level: 3.8,
            temperature: 30.1,
            turbulence: 35,
            tilt: 5.0,
            last_transmission: minutes_ago(10),
            solar_charging: 28,
            lora_channel: 7,
            notes: Some("Flood alert level - evacuation recommended".to_string()),
        },
        Buoy {
            id: "B006".to_string(),
            name: "Angat River".to_string(),
            river: "Angat River".to_string(),
            latitude: 14.8,
            longitude: 121.3,
            status: BuoyStatus::Normal,
            battery_level: 88,
            signal_strength: 91,
            water_level: 2.5,
            temperature: 28.9,
            turbulence: 14,
            tilt: 2.0,
            last_transmission: minutes_ago(8),
            solar_charging: 48,
            lora_channel: 8,
            notes: Some("Steady readings throughout day".to_string()),
        },
    ]
}

/// 通知 fixture。
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "N001".to_string(),
            title: "Critical: Flood Alert".to_string(),
            message: "Water level on Marikina River (B005) has exceeded critical threshold at 3.8m"
                .to_string(),
            kind: NotificationKind::Alert,
            timestamp: minutes_ago(5),
            read: false,
            buoy_id: Some("B005".to_string()),
        },
        Notification {
            id: "N002".to_string(),
            title: "Warning: Rising Water".to_string(),
            message: "Pasig River South (B002) water level rising at 3.1m - monitor closely"
                .to_string(),
            kind: NotificationKind::Alert,
            timestamp: minutes_ago(25),
            read: false,
            buoy_id: Some("B002".to_string()),
        },
        Notification {
            id: "N003".to_string(),
            title: "System: New Buoy Added".to_string(),
            message: "Angat River monitoring station (B006) is now online".to_string(),
            kind: NotificationKind::System,
            timestamp: minutes_ago(120),
            read: true,
            buoy_id: None,
        },
        Notification {
            id: "N004".to_string(),
            title: "Warning: Low Battery".to_string(),
            message: "Cagayan River buoy (B004) battery critical at 15%".to_string(),
            kind: NotificationKind::Battery,
            timestamp: minutes_ago(240),
            read: true,
            buoy_id: Some("B004".to_string()),
        },
        Notification {
            id: "N005".to_string(),
            title: "Info: Communication Loss".to_string(),
            message: "Cagayan River buoy (B004) - no transmission for 2 hours".to_string(),
            kind: NotificationKind::Alert,
            timestamp: minutes_ago(300),
            read: true,
            buoy_id: Some("B004".to_string()),
        },
    ]
}

/// 告警 fixture。
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "A001".to_string(),
            buoy_id: "B005".to_string(),
            kind: AlertKind::WaterLevel,
            severity: AlertSeverity::Critical,
            message: "Water level critical - Flood alert issued".to_string(),
            timestamp: minutes_ago(5),
            resolved: false,
        },
        Alert {
            id: "A002".to_string(),
            buoy_id: "B002".to_string(),
            kind: AlertKind::WaterLevel,
            severity: AlertSeverity::Warning,
            message: "Water level rising rapidly".to_string(),
            timestamp: minutes_ago(25),
            resolved: false,
        },
        Alert {
            id: "A003".to_string(),
            buoy_id: "B004".to_string(),
            kind: AlertKind::Communication,
            severity: AlertSeverity::Warning,
            message: "No transmission for 2 hours".to_string(),
            timestamp: minutes_ago(120),
            resolved: false,
        },
        Alert {
            id: "A004".to_string(),
            buoy_id: "B004".to_string(),
            kind: AlertKind::Battery,
            severity: AlertSeverity::Critical,
            message: "Battery critically low".to_string(),
            timestamp: minutes_ago(240),
            resolved: false,
        },
    ]
}

/// 水位趋势 fixture：六个四小时时间桶，每桶覆盖全部浮标。
pub fn water_level_samples() -> Vec<WaterLevelSample> {
    let rows: [(&str, [f64; 6]); 6] = [
        ("00:00", [2.1, 2.9, 1.6, 4.0, 2.8, 2.3]),
        ("04:00", [2.2, 3.0, 1.7, 4.1, 3.1, 2.4]),
        ("08:00", [2.3, 3.1, 1.8, 4.2, 3.4, 2.5]),
        ("12:00", [2.4, 3.3, 1.9, 4.5, 3.8, 2.6]),
        ("16:00", [2.2, 3.2, 1.7, 4.3, 3.6, 2.4]),
        ("20:00", [2.1, 3.0, 1.6, 4.0, 3.2, 2.3]),
    ];
    let ids = ["B001", "B002", "B003", "B004", "B005", "B006"];
    rows.iter()
        .map(|(time, levels)| {
            let levels: BTreeMap<String, f64> = ids
                .iter()
                .zip(levels.iter())
                .map(|(id, level)| ((*id).to_string(), *level))
                .collect();
            WaterLevelSample {
                time: (*time).to_string(),
                levels,
            }
        })
        .collect()
}
