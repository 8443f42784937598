mod dashboard;

pub use dashboard::ProcurementDashboard;
