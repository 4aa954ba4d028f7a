//! 水位趋势内存存储实现
//!
//! 趋势集合是只读 fixture，不提供变更接口。

use crate::error::StorageError;
use crate::fixtures;
use crate::traits::WaterLevelStore;
use domain::WaterLevelSample;

/// 水位趋势内存存储
pub struct InMemoryWaterLevelStore {
    samples: Vec<WaterLevelSample>,
}

impl InMemoryWaterLevelStore {
    /// 创建播种 fixture 的存储。
    pub fn with_fixtures() -> Self {
        Self {
            samples: fixtures::water_level_samples(),
        }
    }
}

#[async_trait::async_trait]
impl WaterLevelStore for InMemoryWaterLevelStore {
    async fn list_samples(&self) -> Result<Vec<WaterLevelSample>, StorageError> {
        Ok(self.samples.clone())
    }

    async fn samples_for_buoy(
        &self,
        buoy_id: &str,
    ) -> Result<Vec<(String, f64)>, StorageError> {
        Ok(self
            .samples
            .iter()
            .filter_map(|sample| {
                sample
                    .levels
                    .get(buoy_id)
                    .map(|level| (sample.time.clone(), *level))
            })
            .collect())
    }
}
