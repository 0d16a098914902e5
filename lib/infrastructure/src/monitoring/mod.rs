use anyhow::Context as _;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MonitoringConfig {
    pub logs: EnvFilterConfig,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct EnvFilterConfig {
    pub default_level: String,
    #[serde(default)]
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl TryInto<EnvFilter> for EnvFilterConfig {
    type Error = tracing_subscriber::filter::ParseError;

    fn try_into(self) -> Result<EnvFilter, Self::Error> {
        EnvFilter::builder()
            .with_default_directive(self.default_level.parse()?)
            .parse(self.filters.join(","))
    }
}

impl MonitoringConfig {
    pub fn init(&self) -> anyhow::Result<()> {
        let logging_filter: EnvFilter = self
            .logs
            .clone()
            .try_into()
            .with_context(|| format!("Invalid log filter configuration {:?}", self.logs))?;

        let registry = tracing_subscriber::registry().with(logging_filter);

        match self.format {
            LogFormat::Plain => registry.with(tracing_subscriber::fmt::layer()).try_init(),
            LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        }
        .context("Error initializing tracing subscriber")
    }
}
