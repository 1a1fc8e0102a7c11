#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use snapsimp_core::JsonFileSource;

use crate::context::ViewerContext;

/// SnapSimp - Snapchat export viewer
#[derive(Parser, Debug)]
#[command(name = "snapsimp-desktop")]
#[command(about = "SnapSimp - browse exported Snapchat chat history")]
struct Args {
    /// Conversation JSON file (default: <data dir>/snapsimp/conversation.json)
    #[arg(short, long)]
    conversation: Option<PathBuf>,

    /// Viewing user; their messages are shown as outgoing
    #[arg(short, long)]
    user: Option<String>,
}

fn default_conversation_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snapsimp")
        .join("conversation.json")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let conversation_path = args.conversation.unwrap_or_else(default_conversation_path);
    tracing::info!("Starting with conversation file: {:?}", conversation_path);

    let viewer_context = ViewerContext::load(&JsonFileSource::new(&conversation_path), args.user);

    let window_width = 900.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SnapSimp")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(viewer_context)
        .launch(app::App);
}
