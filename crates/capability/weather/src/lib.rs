//! 天气查询能力（可选外部依赖）。
//!
//! 未配置 API 密钥时返回随机化的模拟读数；配置密钥则调用
//! OpenWeatherMap，任何请求/解析失败都记一条 warn 日志并降级为
//! 模拟读数，从不向调用方暴露为错误。不重试，超时沿用客户端默认值。

use rand_core::{OsRng, RngCore};
use serde::Deserialize;

/// 天气读数。
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temp: f64,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub source: WeatherSource,
}

/// 读数来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherSource {
    Live,
    Mock,
}

impl WeatherSource {
    pub fn code(&self) -> &'static str {
        match self {
            WeatherSource::Live => "live",
            WeatherSource::Mock => "mock",
        }
    }
}

/// 天气查询错误（仅内部使用；对外统一降级）。
#[derive(Debug, thiserror::Error)]
enum WeatherError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// OpenWeatherMap 响应体（仅取用到的字段）。
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

/// 天气客户端。
pub struct WeatherClient {
    api_key: Option<String>,
    http: reqwest::Client,
}

impl WeatherClient {
    /// 创建客户端；api_key 为 None 时全部走模拟读数。
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            http: reqwest::Client::new(),
        }
    }

    /// 查询坐标处的当前天气；永不失败。
    pub async fn current(&self, latitude: f64, longitude: f64) -> WeatherReading {
        let Some(api_key) = self.api_key.as_deref() else {
            buoysense_telemetry::record_weather_mock();
            return mock_reading();
        };
        match self.fetch(latitude, longitude, api_key).await {
            Ok(reading) => {
                buoysense_telemetry::record_weather_live();
                reading
            }
            Err(err) => {
                tracing::warn!(error = %err, latitude, longitude, "weather fetch failed, serving mock reading");
                buoysense_telemetry::record_weather_fetch_failure();
                buoysense_telemetry::record_weather_mock();
                mock_reading()
            }
        }
    }

    /// 是否配置了外部服务密钥。
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        api_key: &str,
    ) -> Result<WeatherReading, WeatherError> {
        let url = format!(
            "https://api.openweathermap.org/data/2.5/weather?lat={latitude}&lon={longitude}&units=metric&appid={api_key}"
        );
        let response = self.http.get(url).send().await?.error_for_status()?;
        let payload: OwmResponse = response.json().await?;
        Ok(parse_reading(payload))
    }
}

fn parse_reading(payload: OwmResponse) -> WeatherReading {
    let description = payload
        .weather
        .first()
        .map(|condition| condition.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    WeatherReading {
        temp: payload.main.temp,
        description,
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
        source: WeatherSource::Live,
    }
}

/// 模拟读数：温度 28–32 ℃、湿度 65–85 %、风速 10–15 km/h。
pub fn mock_reading() -> WeatherReading {
    WeatherReading {
        temp: 28.0 + jitter() * 4.0,
        description: "Partly Cloudy".to_string(),
        humidity: 65.0 + jitter() * 20.0,
        wind_speed: 10.0 + jitter() * 5.0,
        source: WeatherSource::Mock,
    }
}

/// [0, 1) 均匀抖动。
fn jitter() -> f64 {
    OsRng.next_u32() as f64 / (u32::MAX as f64 + 1.0)
}
