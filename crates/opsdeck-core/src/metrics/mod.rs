//! Infrastructure metrics domain module.

mod model;

pub use model::{GpuMetrics, GpuMetricsPatch, MetricsSnapshot, SystemMetrics};
