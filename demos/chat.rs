//! Terminal chat with the financial co-pilot.
//!
//! ```text
//! GOOGLE_API_KEY=... cargo run --example chat -- --data financial_data.json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use aadi_copilot::config::{DATA_PATH_VAR, DEFAULT_DATA_PATH, MODEL_VAR};
use aadi_copilot::{
    ConversationSession, Copilot, CopilotConfig, DatasetCache, GeminiClient, Role,
};
use anyhow::Context;
use clap::Parser;
use log::{debug, info};

const RULE: &str = "------------------------------------------------------------------";

/// Project Aadi: your conversational financial co-pilot.
#[derive(Parser, Debug)]
#[command(name = "chat", version, about)]
struct Cli {
    /// JSON dataset of user records (array of objects with a `UserID` field)
    #[arg(long, short, env = DATA_PATH_VAR, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Gemini model to ask
    #[arg(long, short, env = MODEL_VAR)]
    model: Option<String>,

    /// API key; falls back to GOOGLE_API_KEY / GEMINI_API_KEY
    #[arg(long, hide_env_values = true)]
    api_key: Option<String>,
}

fn load_config(cli: &Cli) -> aadi_copilot::Result<CopilotConfig> {
    let config = match cli.api_key.as_deref() {
        Some(key) => CopilotConfig::new(key)?,
        None => CopilotConfig::from_env()?,
    };
    let config = config.with_data_path(cli.data.clone());
    Ok(match cli.model.as_deref() {
        Some(model) => config.with_model(model),
        None => config,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The only place `.env` is read; clap's `env` fallbacks below depend on it.
    dotenv::dotenv().ok();
    env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli).context("Error configuring Google AI API")?;
    info!("starting with {:?}", config);

    let datasets = DatasetCache::new();
    let store = datasets
        .load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    debug!("dataset holds {} users", store.len());

    let client = GeminiClient::new(config.api_key.clone()).with_model(config.model.clone());
    let copilot = Copilot::new(store, client);
    let mut session = ConversationSession::new();

    println!("💬 Project Aadi: Your Conversational Financial Co-Pilot");
    println!("Now with memory and holistic reasoning capabilities. (type 'quit' to exit)");
    println!("{}", RULE);
    for message in session.messages() {
        print_message(message.role, &message.content);
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let prompt = input.trim();

        if prompt.eq_ignore_ascii_case("quit") || prompt.eq_ignore_ascii_case("exit") {
            break;
        }

        if prompt.is_empty() {
            continue;
        }

        println!("\nAadi is thinking...");

        match copilot.handle_turn(&mut session, prompt).await {
            Ok(reply) => {
                print_message(Role::Assistant, reply.text());
                println!("{}", RULE);
            }
            Err(e) if e.is_turn_recoverable() => {
                eprintln!("❌ {}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!("session ended after {} messages", session.len());
    Ok(())
}

fn print_message(role: Role, content: &str) {
    let label = match role {
        Role::User => "🧑 You",
        Role::Assistant => "🤖 Aadi",
    };
    println!("\n{}:\n{}\n", label, content);
}
