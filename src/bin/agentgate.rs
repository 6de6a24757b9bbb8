use agentgate::utils::LoggingConfig;
use agentgate::{ApiClient, ApiConfig, ChatRequest, EnvSettings};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agentgate", version, about = "Agent backend API client", author)]
struct Cli {
    /// Deployment origin requests are resolved against.
    #[arg(long, default_value = "http://localhost:8000")]
    origin: String,
    /// Force the gateway profile regardless of the environment.
    #[arg(long)]
    production: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check backend health.
    Health,
    /// Fetch agent details.
    Agent,
    /// Send one chat message and print the raw response.
    Chat {
        #[arg(long)]
        message: String,
    },
    /// Fetch the chat history for the current session.
    History,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingConfig::init();

    let cli = Cli::parse();
    let mut settings = EnvSettings::from_env();
    if cli.production {
        settings.production = true;
    }
    let config = ApiConfig::select(&settings, &cli.origin);
    let client = ApiClient::new(config);

    let response = match cli.command {
        Command::Health => client.health().await?,
        Command::Agent => client.agent().await?,
        Command::Chat { message } => client.chat(&ChatRequest { message }).await?,
        Command::History => client.chat_history().await?,
    };

    let status = response.status();
    let body = response.text().await?;
    println!("{}", status);
    if !body.is_empty() {
        println!("{}", body);
    }
    Ok(())
}
