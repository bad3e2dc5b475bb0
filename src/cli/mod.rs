pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "canticle")]
#[command(about = "Canticle CLI - offline maintenance for the media catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Populate catalog tables with fixture data")]
    Seed {
        #[arg(long, help = "Seed even when catalog rows already exist")]
        force: bool,
    },

    #[command(about = "Check a running server's health endpoint")]
    Health {
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        base_url: String,
    },

    #[command(about = "Mint a development bearer token for a user id")]
    Token {
        #[arg(help = "User id (UUID); generated when omitted")]
        user_id: Option<uuid::Uuid>,

        #[arg(long, help = "Email claim to embed")]
        email: Option<String>,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Seed { force } => commands::seed::handle(force).await,
        Commands::Health { base_url } => commands::health::handle(&base_url).await,
        Commands::Token { user_id, email } => commands::token::handle(user_id, email),
    }
}
