//! SnapSimp CLI
//!
//! Thin wrapper around snapsimp-core renderers for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show a conversation as seen by one participant
//! snapsimp show conversation.json --as nathan
//!
//! # Only the last 20 messages
//! snapsimp show conversation.json --as nathan --limit 20
//!
//! # Name the counterpart from the first message only
//! snapsimp show conversation.json --as nathan --first-message-header
//!
//! # List participants
//! snapsimp participants conversation.json
//!
//! # Descriptive statistics
//! snapsimp stats conversation.json --as nathan
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use snapsimp_core::render::{derive_header, first_message_counterpart};
use snapsimp_core::{
    render_list, Alignment, ConversationHeader, ConversationSource, ConversationStats,
    JsonFileSource,
};

/// SnapSimp - Snapchat export viewer
#[derive(Parser)]
#[command(name = "snapsimp")]
#[command(version = "0.1.0")]
#[command(about = "SnapSimp - view exported Snapchat chat history")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a conversation as chat bubbles
    Show {
        /// Conversation JSON file
        file: PathBuf,
        /// Viewing user (messages they sent are outgoing)
        #[arg(long = "as")]
        viewer: String,
        /// Only show the last N messages
        #[arg(short, long)]
        limit: Option<usize>,
        /// Take the header from the first message instead of all participants
        #[arg(long)]
        first_message_header: bool,
    },

    /// List everyone appearing in a conversation
    Participants {
        /// Conversation JSON file
        file: PathBuf,
    },

    /// Show conversation statistics
    Stats {
        /// Conversation JSON file
        file: PathBuf,
        /// Also show sent/received counts for this user
        #[arg(long = "as")]
        viewer: Option<String>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load(file: &Path) -> Result<snapsimp_core::Conversation> {
    let conversation = JsonFileSource::new(file)
        .load()
        .with_context(|| format!("Failed to load conversation from {}", file.display()))?;
    tracing::debug!(path = %file.display(), messages = conversation.len(), "Loaded conversation");
    Ok(conversation)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Show {
            file,
            viewer,
            limit,
            first_message_header,
        } => {
            let conversation = load(&file)?;
            let messages = conversation.messages();
            let to_show: &[_] = if let Some(n) = limit {
                let start = messages.len().saturating_sub(n);
                if start > 0 {
                    tracing::debug!(skipped = start, shown = n, "Truncating to last messages");
                }
                &messages[start..]
            } else {
                messages
            };

            // Header comes from the whole conversation, not just the shown tail
            let header = if first_message_header {
                first_message_counterpart(messages, &viewer)
                    .map(|name| ConversationHeader::Counterpart(name.to_string()))
                    .unwrap_or(ConversationHeader::Empty)
            } else {
                derive_header(messages, &viewer)
            };
            let view = render_list(to_show, &viewer, Utc::now());

            match header {
                ConversationHeader::Empty => println!("Empty conversation"),
                ref other => println!("Conversation with {}", other.label()),
            }
            println!("Messages: {}", conversation.len());
            println!();

            if view.is_empty() {
                println!("  (no messages)");
            } else {
                for bubble in &view.bubbles {
                    let marker = match bubble.alignment() {
                        Alignment::Trailing => ">>",
                        Alignment::Leading => "<<",
                    };
                    println!("  {} {}", marker, bubble.content.label());
                    println!("     {}", bubble.time_label);
                }
            }
        }

        Commands::Participants { file } => {
            let conversation = load(&file)?;
            let participants = conversation.participants();

            println!("Participants ({}):", participants.len());
            for user in participants {
                println!("  {}", user);
            }
        }

        Commands::Stats { file, viewer } => {
            let conversation = load(&file)?;
            let stats = ConversationStats::compute(&conversation)?;

            println!("Messages: {}", stats.total);
            println!("  Text:  {}", stats.text_count);
            println!("  Media: {}", stats.media_count);
            println!("First message: {}", stats.earliest.to_rfc3339());
            println!("Last message:  {}", stats.latest.to_rfc3339());
            println!(
                "Duration: {} days, {} hours",
                stats.duration().num_days(),
                stats.duration().num_hours() % 24
            );
            println!("Dominant sender: {}", stats.dominant_sender);
            println!("Dominant receiver: {}", stats.dominant_receiver);

            if let Some(user) = viewer {
                println!();
                println!("{}:", user);
                println!("  Sent:     {}", stats.sent_by(&user)?);
                println!("  Received: {}", stats.received_by(&user)?);
            }
        }
    }

    Ok(())
}
