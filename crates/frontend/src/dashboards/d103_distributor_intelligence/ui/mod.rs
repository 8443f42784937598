mod dashboard;

pub use dashboard::DistributorIntelligenceDashboard;
