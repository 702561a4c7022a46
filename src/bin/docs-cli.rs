use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "docs-cli")]
#[command(about = "Fetch and check API documents served by docs-server", long_about = None)]
struct Cli {
    /// Base URL of the server.
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// JSON definition path.
    #[arg(long, default_value = "/swagger-json")]
    json_path: String,

    /// YAML definition path.
    #[arg(long, default_value = "/swagger-yaml")]
    yaml_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JSON definition
    Json,
    /// Print the YAML definition
    Yaml,
    /// Check that the JSON and YAML definitions describe the same document
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Json => {
            let body = fetch(&client, &cli.url, &cli.json_path).await?;
            let value: Value = serde_json::from_str(&body)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Yaml => {
            print!("{}", fetch(&client, &cli.url, &cli.yaml_path).await?);
        }
        Commands::Check => {
            let json: Value = serde_json::from_str(&fetch(&client, &cli.url, &cli.json_path).await?)?;
            let yaml: Value = serde_yaml::from_str(&fetch(&client, &cli.url, &cli.yaml_path).await?)?;
            if json == yaml {
                println!("OK: JSON and YAML definitions match");
            } else {
                eprintln!("MISMATCH: JSON and YAML definitions differ");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn fetch(client: &reqwest::Client, base: &str, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let url = format!("{}{}", base.trim_end_matches('/'), path);
    let res = client.get(&url).send().await?;
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(format!("GET {} returned {}: {}", url, status, body).into());
    }
    Ok(body)
}
