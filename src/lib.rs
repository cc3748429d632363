//! CrossQuest (workspace facade crate).
//!
//! This package exposes `crossquest::{core,term,input,types}` while the
//! implementation lives in dedicated crates under `crates/`. The runner-only
//! pieces (environment config and screen effects) live here.

pub mod config;
pub mod effects;

pub use crossquest_core as core;
pub use crossquest_input as input;
pub use crossquest_term as term;
pub use crossquest_types as types;

pub use config::Config;
pub use effects::ScreenEffects;
