// Busplit - BU Spreadsheet Splitter & Mailer
// Copyright (c) 2026 Busplit Contributors
// Licensed under the MIT License

//! # Busplit - BU spreadsheet splitter & mailer
//!
//! Busplit reads a billing spreadsheet, partitions its rows by the `BU`
//! (billing unit) column, and either writes the partitions out as files -
//! optionally bundled into one zip archive - or emails them as attachments
//! over authenticated SMTP.
//!
//! ## Architecture
//!
//! Busplit follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and thin orchestration
//! - [`core`] - The split-and-deliver pipeline (planner, filter, assembler, composer)
//! - [`adapters`] - External collaborators (spreadsheet codecs, zip writer, SMTP notifier)
//! - [`domain`] - Core domain types and the error taxonomy
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use busplit::adapters::codec::codec_for_path;
//! use busplit::config::load_config;
//! use busplit::core::{planner, ExportAssembler};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("busplit.toml")?;
//!
//!     let input = Path::new("billing.xlsx");
//!     let codec = codec_for_path(input, config.input.header_row)?;
//!     let table = codec.decode(&std::fs::read(input)?)?;
//!
//!     let specs = planner::plan_fixed(&config.export.groups)?;
//!     let assembler = ExportAssembler::new(
//!         codec.as_ref(),
//!         &config.input.key_column,
//!         &config.export.archive_name,
//!     );
//!     let bundle = assembler.assemble(&table, &specs, config.export.bundle)?;
//!
//!     println!("Produced {} output file(s)", bundle.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with the
//! [`domain::BusplitError`] taxonomy; the CLI layer renders errors and maps
//! them to process exit codes. No partial output is ever surfaced: a codec
//! or transport failure aborts the whole request.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
