use crate::ai::client::ChatClient;
use crate::ai::spec::generate_spec;
use crate::cli::OutputFormat;
use crate::config::Config;

/// Run one generation and print the three sections.
pub async fn run(prompt: &str, model: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client = ChatClient::with_base_url(
        config.openai.api_key.clone(),
        config.openai.base_url.clone(),
    );
    let model = model.unwrap_or(&config.openai.model);

    let spec = generate_spec(&client, model, prompt).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
        OutputFormat::Text => {
            println!("## Database schema\n");
            println!("{}\n", spec.db_schema.trim_end());
            println!("## User stories\n");
            for story in &spec.user_stories {
                println!("- {story}");
            }
            println!("\n## ER diagram\n");
            println!("{}", spec.mermaid_diagram.trim_end());
        }
    }

    Ok(())
}
