//! Extracts agent records from OpenClaw-style workspace folders.
//!
//! A scan lists `workspace-*` directories, filters them by name, reads each
//! agent's `IDENTITY.md` and `SOUL.md`, classifies role and team by keyword,
//! detects capabilities from the workspace layout and writes the collected
//! records as one JSON array.

pub mod assembler;
pub mod capabilities;
pub mod classify;
pub mod config;
pub mod filter;
pub mod layout;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod parser;
pub mod report;
