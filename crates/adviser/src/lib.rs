//! WealthMate Adviser - conversational financial guidance.
//!
//! # Architecture
//!
//! - `service`: conversation state and the single-outstanding-request rule
//! - `providers`: the completion provider trait, the OpenAI-compatible HTTP
//!   provider and the offline simulated adviser
//! - `tips`: the built-in financial tips
//! - `config`: environment-driven settings
//!
//! # Example
//!
//! ```ignore
//! use wealthmate_adviser::{providers, AdviserConfig, AdviserService};
//!
//! let config = AdviserConfig::from_env();
//! let service = AdviserService::new(providers::from_config(&config));
//!
//! if let Some(reply) = service.send("How should I pay off my car loan?").await? {
//!     println!("{}", reply.content);
//! }
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod service;
pub mod tips;
pub mod types;

pub use config::AdviserConfig;
pub use error::AdviserError;
pub use providers::{ChatCompletionProvider, OpenAiChatProvider, SimulatedAdviser};
pub use service::AdviserService;
pub use tips::{FinancialTip, FINANCIAL_TIPS};
pub use types::{ChatMessage, ChatRole};
