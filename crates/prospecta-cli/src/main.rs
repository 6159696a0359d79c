mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prospecta_core::{Channel, OutreachTemplate, ReplyTone};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prospecta-cli")]
#[command(about = "Lead scoring, niche matching and AI outreach from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a places result read from a JSON file
    Score {
        /// Path to a JSON place snapshot
        #[arg(long)]
        file: PathBuf,
    },
    /// Resolve a business category to its niche profile
    Niche {
        /// Free-text category, e.g. "Peluquería y Spa"
        category: Option<String>,
    },
    /// Generate a cold outreach message for a lead
    Compose {
        /// Path to a JSON lead
        #[arg(long)]
        lead: PathBuf,
        /// presentacion, seguimiento or sin_web
        #[arg(long)]
        template: OutreachTemplate,
        /// whatsapp or email
        #[arg(long)]
        channel: Channel,
        /// Extra context for the message
        #[arg(long)]
        context: Option<String>,
    },
    /// Generate a reply to the pending messages of a conversation
    Reply {
        /// Path to a JSON lead
        #[arg(long)]
        lead: PathBuf,
        /// Path to a JSON array of conversation messages
        #[arg(long)]
        conversation: PathBuf,
        /// amigable, profesional or cerrar_cita
        #[arg(long)]
        tone: ReplyTone,
        /// whatsapp or email
        #[arg(long)]
        channel: Channel,
        /// Extra context for the message
        #[arg(long)]
        context: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = prospecta_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Score { file }) => commands::run_score(&file)?,
        Some(Commands::Niche { category }) => commands::run_niche(category.as_deref())?,
        Some(Commands::Compose {
            lead,
            template,
            channel,
            context,
        }) => commands::run_compose(&config, &lead, template, channel, context).await?,
        Some(Commands::Reply {
            lead,
            conversation,
            tone,
            channel,
            context,
        }) => {
            commands::run_reply(&config, &lead, &conversation, tone, channel, context).await?;
        }
        None => println!("prospecta-cli ready; run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
