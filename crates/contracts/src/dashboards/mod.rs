pub mod common;
pub mod d100_epidemiology;
pub mod d101_procurement;
pub mod d102_customer_intelligence;
pub mod d103_distributor_intelligence;
