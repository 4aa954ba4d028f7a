//! 浮标创建表单校验。
//!
//! 失败汇总为"字段名 → 消息"表（消息文案是对外契约），
//! 全部通过后按默认传感器读数合成完整浮标记录。

use api_contract::CreateBuoyRequest;
use chrono::{SecondsFormat, Utc};
use domain::{Buoy, BuoyStatus};
use std::collections::BTreeMap;

fn required_text(value: Option<&String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 校验创建请求：Ok(完整记录) / Err(逐字段消息表)。
pub fn validate_new_buoy(request: &CreateBuoyRequest) -> Result<Buoy, BTreeMap<String, String>> {
    let mut errors = BTreeMap::new();

    let name = required_text(request.name.as_ref());
    if name.is_none() {
        errors.insert("name".to_string(), "Buoy name is required".to_string());
    }
    let id = required_text(request.id.as_ref());
    if id.is_none() {
        errors.insert("id".to_string(), "Buoy ID is required".to_string());
    }
    let river = required_text(request.river.as_ref());
    if river.is_none() {
        errors.insert("river".to_string(), "River name is required".to_string());
    }

    let latitude = match required_text(request.latitude.as_ref()) {
        None => {
            errors.insert("latitude".to_string(), "Latitude is required".to_string());
            None
        }
        Some(value) => match value.parse::<f64>() {
            Ok(latitude) => Some(latitude),
            Err(_) => {
                errors.insert(
                    "latitude".to_string(),
                    "Latitude must be a number".to_string(),
                );
                None
            }
        },
    };
    let longitude = match required_text(request.longitude.as_ref()) {
        None => {
            errors.insert("longitude".to_string(), "Longitude is required".to_string());
            None
        }
        Some(value) => match value.parse::<f64>() {
            Ok(longitude) => Some(longitude),
            Err(_) => {
                errors.insert(
                    "longitude".to_string(),
                    "Longitude must be a number".to_string(),
                );
                None
            }
        },
    };
    let battery = match required_text(request.battery.as_ref()) {
        None => {
            errors.insert(
                "battery".to_string(),
                "Battery level is required".to_string(),
            );
            None
        }
        Some(value) => match value.parse::<i64>() {
            Ok(battery) if (0..=100).contains(&battery) => Some(battery as u8),
            _ => {
                errors.insert(
                    "battery".to_string(),
                    "Battery must be between 0-100%".to_string(),
                );
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // 未填字段按默认传感器读数补齐
    let lora_channel = required_text(request.lora_channel.as_ref())
        .and_then(|value| value.parse::<u8>().ok())
        .unwrap_or(7);
    let status = required_text(request.status.as_ref())
        .and_then(|value| BuoyStatus::parse(&value))
        .unwrap_or(BuoyStatus::Normal);
    let notes = required_text(request.notes.as_ref());

    Ok(Buoy {
        id: id.unwrap_or_default(),
        name: name.unwrap_or_default(),
        river: river.unwrap_or_default(),
        latitude: latitude.unwrap_or_default(),
        longitude: longitude.unwrap_or_default(),
        status,
        battery_level: battery.unwrap_or_default(),
        signal_strength: 85,
        water_level: 2.0,
        temperature: 28.0,
        turbulence: 10,
        tilt: 0.0,
        last_transmission: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        solar_charging: 50,
        lora_channel,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateBuoyRequest {
        CreateBuoyRequest {
            id: Some("B007".to_string()),
            name: Some("Agno River Station".to_string()),
            river: Some("Agno River".to_string()),
            latitude: Some("15.73".to_string()),
            longitude: Some("120.57".to_string()),
            battery: Some("92".to_string()),
            lora_channel: Some("8".to_string()),
            status: Some("normal".to_string()),
            notes: Some("Installed this week".to_string()),
        }
    }

    #[test]
    fn valid_request_fills_sensor_defaults() {
        let buoy = validate_new_buoy(&full_request()).expect("valid");
        assert_eq!(buoy.id, "B007");
        assert_eq!(buoy.latitude, 15.73);
        assert_eq!(buoy.battery_level, 92);
        assert_eq!(buoy.lora_channel, 8);
        assert_eq!(buoy.signal_strength, 85);
        assert_eq!(buoy.water_level, 2.0);
        assert_eq!(buoy.tilt, 0.0);
    }

    #[test]
    fn missing_required_fields_collect_messages() {
        let request = CreateBuoyRequest::default();
        let errors = validate_new_buoy(&request).expect_err("invalid");
        assert_eq!(errors["name"], "Buoy name is required");
        assert_eq!(errors["id"], "Buoy ID is required");
        assert_eq!(errors["river"], "River name is required");
        assert_eq!(errors["latitude"], "Latitude is required");
        assert_eq!(errors["longitude"], "Longitude is required");
        assert_eq!(errors["battery"], "Battery level is required");
    }

    #[test]
    fn numeric_fields_are_validated() {
        let mut request = full_request();
        request.latitude = Some("north".to_string());
        request.battery = Some("140".to_string());
        let errors = validate_new_buoy(&request).expect_err("invalid");
        assert_eq!(errors["latitude"], "Latitude must be a number");
        assert_eq!(errors["battery"], "Battery must be between 0-100%");
        assert!(!errors.contains_key("longitude"));
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut request = full_request();
        request.name = Some("   ".to_string());
        let errors = validate_new_buoy(&request).expect_err("invalid");
        assert_eq!(errors["name"], "Buoy name is required");
    }
}
