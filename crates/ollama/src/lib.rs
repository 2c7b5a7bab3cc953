//! HTTP client for a local Ollama-compatible inference server.
//!
//! The chat relay forwards raw user text to `POST {base}/api/generate`
//! and returns the model's text response verbatim. No streaming, no
//! conversation state; each call is independent.

mod client;

pub use client::{OllamaClient, OllamaError};
