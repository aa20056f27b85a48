use tracing_subscriber::EnvFilter;

use wanikani::client::Client;
use wanikani::config::ClientConfig;
use wanikani::spaced_repetition_system::SpacedRepetitionSystemListParams;

#[tokio::main]
async fn main() -> wanikani::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::with_config(ClientConfig::from_env()?)?;

    let systems = client
        .spaced_repetition_system_list(SpacedRepetitionSystemListParams::new())
        .await?;

    for srs in systems {
        println!("{} (passing at stage {})", srs.data.name, srs.data.passing_stage_position);
        for stage in &srs.data.stages {
            match stage.duration() {
                Some(d) => println!("  stage {}: {} hours", stage.position, d.as_secs() / 3600),
                None => println!("  stage {}: -", stage.position),
            }
        }
    }

    Ok(())
}
