use settings::Settings;

use crate::survivor::AgentRunner;

mod settings;
mod survivor;

#[tokio::main(flavor = "multi_thread")]
pub async fn main() {
    let settings = Settings::new().expect("Error reading configuration");
    settings.monitoring.init().expect("Error initializing monitoring");

    let runner = AgentRunner::new(settings.agent, settings.planner);

    tracing::info!("Starting agent loop");
    let report = runner.run().await;

    match serde_json::to_string_pretty(&report) {
        Ok(json) => tracing::info!("Agent stopped:\n{}", json),
        Err(e) => tracing::error!("Error serializing agent report: {:?}", e),
    }
}
