mod monitoring;

pub use monitoring::{EnvFilterConfig, LogFormat, MonitoringConfig};
