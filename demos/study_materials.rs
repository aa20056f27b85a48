use tracing_subscriber::EnvFilter;

use wanikani::client::Client;
use wanikani::config::ClientConfig;
use wanikani::study_material::StudyMaterialListParams;

#[tokio::main]
async fn main() -> wanikani::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::with_config(ClientConfig::from_env()?)?;

    println!("Your study materials:");

    let mut params = StudyMaterialListParams::new().hidden(false);
    loop {
        let page = client.study_material_list(params.clone()).await?;
        let next = page.next_cursor();

        for material in page {
            println!(
                "- subject #{} ({}): {}",
                material.data.subject_id,
                material.data.subject_type,
                material.data.meaning_note.as_deref().unwrap_or("<no note>")
            );
        }

        match next {
            Some(cursor) => params = params.page(cursor),
            None => break,
        }
    }

    Ok(())
}
