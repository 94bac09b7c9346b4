//! Infrastructure metrics domain models.
//!
//! Passive records updated by external collaborators. Values are
//! accepted unclamped; consumers render what they are given.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::chat::Department;

/// Gauges for one GPU resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuMetrics {
    pub id: String,
    pub name: String,
    /// Memory usage percentage.
    pub memory_usage: f64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Workload percentage.
    pub workload: f64,
    /// Throughput in tokens per second.
    pub throughput: f64,
}

impl GpuMetrics {
    /// A zeroed entry for a resource first seen through a partial update.
    pub fn named(key: &str) -> Self {
        Self {
            id: key.to_string(),
            name: key.to_string(),
            memory_usage: 0.0,
            temperature: 0.0,
            workload: 0.0,
            throughput: 0.0,
        }
    }
}

/// Partial GPU reading merged into an existing entry field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GpuMetricsPatch {
    pub memory_usage: Option<f64>,
    pub temperature: Option<f64>,
    pub workload: Option<f64>,
    pub throughput: Option<f64>,
}

impl GpuMetricsPatch {
    /// Merges the present fields into `target`, leaving the rest alone.
    pub fn apply(&self, target: &mut GpuMetrics) {
        if let Some(memory_usage) = self.memory_usage {
            target.memory_usage = memory_usage;
        }
        if let Some(temperature) = self.temperature {
            target.temperature = temperature;
        }
        if let Some(workload) = self.workload {
            target.workload = workload;
        }
        if let Some(throughput) = self.throughput {
            target.throughput = throughput;
        }
    }
}

/// The global processing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    /// Average processing time in seconds.
    pub avg_processing_time: f64,
    /// Number of queued jobs.
    pub job_queue: u32,
    /// Per-department model usage percentages.
    pub model_usage: HashMap<Department, f64>,
}

/// Snapshot of all infrastructure readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// GPU gauges keyed by resource display name.
    pub gpus: HashMap<String, GpuMetrics>,
    pub system: SystemMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut gpu = GpuMetrics {
            id: "gpu1".to_string(),
            name: "RTX 6000 Ada".to_string(),
            memory_usage: 75.0,
            temperature: 68.0,
            workload: 82.0,
            throughput: 1250.0,
        };
        let patch = GpuMetricsPatch {
            temperature: Some(90.0),
            ..Default::default()
        };
        patch.apply(&mut gpu);
        assert_eq!(gpu.temperature, 90.0);
        assert_eq!(gpu.memory_usage, 75.0);
        assert_eq!(gpu.workload, 82.0);
        assert_eq!(gpu.throughput, 1250.0);
    }

    #[test]
    fn test_named_entry_starts_zeroed() {
        let gpu = GpuMetrics::named("H100");
        assert_eq!(gpu.name, "H100");
        assert_eq!(gpu.memory_usage, 0.0);
        assert_eq!(gpu.throughput, 0.0);
    }
}
