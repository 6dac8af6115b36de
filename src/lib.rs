//! Lexaid Library
//!
//! Keyword-matched answers to common legal questions, a conversation model
//! with deferred replies, and a terminal chat front end.

pub mod chat;
pub mod config;
pub mod legal;
pub mod runner;

#[cfg(feature = "tui")]
pub mod tui;
