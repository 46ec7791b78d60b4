//! Elg - release helper for the energy-line-gauge card
//!
//! Elg is a CLI tool and library for preparing energy-line-gauge releases.
//! It audits every locale file for missing or extra translation keys against
//! the reference locale, then copies fresh `dist` output into the deployment
//! directory, stamping the build timestamp into the JavaScript bundle as it
//! copies.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Audit and synchronization engines

pub mod cli;
pub mod config;
pub mod core;
