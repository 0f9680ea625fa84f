use serde::{Deserialize, Serialize};

/// Workload policy with tunable threshold multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadThresholds {
    /// Weekly hours above planned × this ratio raise a warning.
    pub warning_ratio: f64,

    /// Weekly hours above planned × this ratio signal burnout risk.
    pub risk_ratio: f64,

    /// How many trailing weeks the classifier window holds.
    pub window_weeks: usize,
}

impl Default for WorkloadThresholds {
    fn default() -> Self {
        Self {
            warning_ratio: 1.10,
            risk_ratio: 1.25,
            window_weeks: 12,
        }
    }
}
