pub mod d100_epidemiology;
pub mod d101_procurement;
pub mod d102_customer_intelligence;
pub mod d103_distributor_intelligence;

pub use d100_epidemiology::ui::EpidemiologyDashboard;
pub use d101_procurement::ui::ProcurementDashboard;
pub use d102_customer_intelligence::ui::CustomerIntelligenceDashboard;
pub use d103_distributor_intelligence::ui::DistributorIntelligenceDashboard;
