mod dashboard;

pub use dashboard::CustomerIntelligenceDashboard;
