//! # Aadi Copilot
//!
//! A conversational financial co-pilot. Each chat turn pulls a `UserID` out of
//! the user's question (or reuses the one from an earlier turn), looks up that
//! user's full financial record, and asks an LLM to answer with the whole
//! conversation and record as context.
//!
//! ## Core Concepts
//!
//! - **Record Store**: the dataset, a JSON array of records keyed by `UserID`, loaded once and shared read-only
//! - **Identifier**: `AADI-<digits>`, matched case-insensitively anywhere in the question
//! - **Session**: append-only message log plus the last identifier used
//! - **Generator**: any text-in/text-out backend; Gemini by default
//!
//! ## Example
//!
//! ```rust,ignore
//! use aadi_copilot::*;
//! use std::sync::Arc;
//!
//! let config = CopilotConfig::from_env()?;
//! let store = Arc::new(RecordStore::load(&config.data_path)?);
//! let client = GeminiClient::new(config.api_key.clone()).with_model(&config.model);
//! let copilot = Copilot::new(store, client);
//!
//! let mut session = ConversationSession::new();
//! let reply = copilot
//!     .handle_turn(&mut session, "What is my net worth? AADI-001")
//!     .await?;
//! println!("{}", reply.text());
//! ```

pub mod config;
pub mod copilot;
pub mod error;
pub mod identifier;
pub mod llm;
pub mod prompts;
pub mod schema;
pub mod session;
pub mod store;

pub use config::CopilotConfig;
pub use copilot::{Copilot, Reply};
pub use error::{CopilotError, Result};
pub use identifier::find_user_id;
pub use llm::TextGenerator;
pub use prompts::{build_prompt, format_history};
pub use schema::*;
pub use session::ConversationSession;
pub use store::{DatasetCache, RecordStore};

#[cfg(feature = "gemini")]
pub use llm::GeminiClient;
