//! OpsDeck Summary - Overview Figures
//!
//! Figures for the dashboard landing page, derived from the sample store plus
//! a static traffic series.
//!
//! Key Features:
//! - Project, resource, running EC2 and alert counts
//! - Resource-type series for the bar chart
//! - Fixed six-point traffic series
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::store::SampleStore;
use crate::types::{ResourceStatus, ResourceType};

/// Placeholder alert count; there is no alert source.
pub const MOCK_ALERT_COUNT: usize = 3;

/// One bar or point of a named series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: u32,
}

/// Stat cards and chart series of the overview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub project_count: usize,
    pub resource_count: usize,
    pub running_ec2: usize,
    pub alerts: usize,
    pub resources_by_type: Vec<SeriesPoint>,
    pub traffic: Vec<SeriesPoint>,
}

impl DashboardSummary {
    pub fn from_store(store: &SampleStore) -> Self {
        let resources = store.resources();
        let count = |ty: ResourceType| resources.iter().filter(|r| r.resource_type == ty).count() as u32;

        Self {
            project_count: store.projects().len(),
            resource_count: resources.len(),
            running_ec2: resources
                .iter()
                .filter(|r| r.resource_type == ResourceType::Ec2 && r.status == ResourceStatus::Running)
                .count(),
            alerts: MOCK_ALERT_COUNT,
            resources_by_type: vec![
                SeriesPoint { label: "EC2", value: count(ResourceType::Ec2) },
                SeriesPoint { label: "RDS", value: count(ResourceType::Rds) },
                SeriesPoint { label: "Redis", value: count(ResourceType::Redis) },
            ],
            traffic: traffic_series(),
        }
    }
}

fn traffic_series() -> Vec<SeriesPoint> {
    [
        ("00:00", 400),
        ("04:00", 300),
        ("08:00", 1200),
        ("12:00", 2400),
        ("16:00", 1800),
        ("20:00", 900),
    ]
    .into_iter()
    .map(|(label, value)| SeriesPoint { label, value })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_sample_store() {
        let summary = DashboardSummary::from_store(&SampleStore::default());
        assert_eq!(summary.project_count, 3);
        assert_eq!(summary.resource_count, 5);
        assert_eq!(summary.running_ec2, 1);
        assert_eq!(summary.alerts, 3);

        let bars: Vec<_> = summary.resources_by_type.iter().map(|p| (p.label, p.value)).collect();
        assert_eq!(bars, vec![("EC2", 2), ("RDS", 2), ("Redis", 1)]);
        assert_eq!(summary.traffic.len(), 6);
        assert_eq!(summary.traffic[3].value, 2400);
    }
}
