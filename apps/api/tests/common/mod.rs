//! Common test utilities for API integration tests
//!
//! Builds the real router against wiremock-backed Ollama and catalog servers.

#![allow(unused_imports)]

pub mod helpers;

pub use helpers::*;
