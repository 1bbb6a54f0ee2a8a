pub mod aggregate;

pub use aggregate::{dealer_config_from_value, dealer_configs_from_value, DealerConfig, DealerConfigs};
