pub mod a001_dealer_config;
pub mod a002_order;
pub mod a003_spec_plan;
pub mod a004_date_track;
