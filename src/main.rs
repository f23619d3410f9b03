use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use deskmate::app::App;
use deskmate::config;
use deskmate::dispatch::QueryDispatcher;
use deskmate::engine::AssistEngine;
use deskmate::error::DeskmateError;
use deskmate::provider::memory::{MemoryKnowledgeStore, MemoryTemplateStore};
use deskmate::provider::{GenerativeService, KnowledgeStore, OpenAiClient, TemplateStore};
use deskmate::session::Message;

/// Customer-service composer with real-time suggestions
#[derive(Parser)]
#[command(name = "deskmate", version, about)]
struct Args {
    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;

    let generative: Arc<dyn GenerativeService> = Arc::new(
        OpenAiClient::from_config(&config.openai, config.assist.fallback_entries)
            .map_err(|_| DeskmateError::NotConfigured)?,
    );
    let templates: Arc<dyn TemplateStore> = Arc::new(MemoryTemplateStore::seeded());
    let knowledge: Arc<dyn KnowledgeStore> = Arc::new(MemoryKnowledgeStore::seeded());
    let dispatcher = Arc::new(QueryDispatcher::new(
        templates,
        knowledge.clone(),
        generative.clone(),
        &config.assist,
    ));

    let (tx, rx) = mpsc::unbounded_channel();
    let mut engine = AssistEngine::new(dispatcher, generative, knowledge, &config.assist, tx);
    // Seed the conversation so contextual suggestions have something to work
    // with right away
    engine.message_sent(Message::customer(
        "Hi, I was charged twice for my last order. Can you help?",
    ));

    let terminal = ratatui::init();
    let result = run(terminal, App::new(engine), rx).await;
    ratatui::restore();
    result
}

async fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    mut assist_rx: mpsc::UnboundedReceiver<deskmate::engine::AssistEvent>,
) -> Result<()> {
    let mut input_events = EventStream::new();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            maybe_event = input_events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            Some(event) = assist_rx.recv() => {
                app.handle_assist(event);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
