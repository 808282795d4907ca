use task_chain::{GatewayConfig, HttpGateway, Pipeline, Runner};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = GatewayConfig::from_env();
    tracing::info!(endpoint = %config.endpoint(), "using agent gateway");

    let pipeline = Pipeline::new("world-analysis")
        .add_with_agent(
            "summarize",
            "Summarize the key themes of the BlackRoad world ecosystem",
            "lucidia",
        )
        .add_with_agent(
            "critique",
            "Critique and suggest improvements to the summary",
            "octavia",
        );

    let mut runner = Runner::new(pipeline, HttpGateway::new(config)).with_tracing();
    let results = runner.run(
        "BlackRoad is an AI-first platform with 30k agents and live world generation",
    );

    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
