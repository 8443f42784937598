pub mod chart_panel;
pub mod dataset_filters;
pub mod multi_select;
pub mod pagination_controls;
pub mod record_table;
pub mod region_tabs;
pub mod stat_card;
