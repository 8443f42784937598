mod dashboard;

pub use dashboard::EpidemiologyDashboard;
