//! # Devbelt
//!
//! A single-binary toolbox of everyday developer utilities: formatters,
//! codecs, generators, converters, text tools, and a passport-photo
//! compositor. Paste-into-a-website tools, minus the website.
//!
//! # Architecture: Router and Leaf Tools
//!
//! The binary is a router dispatching to independent leaf tools. Each tool
//! module exposes pure transform functions — owned inputs in, `Result` out —
//! and performs no I/O of its own. All stdin/file/stdout plumbing lives in
//! `main.rs`, and the process-wide [`config::AppConfig`] is loaded once at
//! startup and passed explicitly to the tools that consume it.
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: every transform is a pure function exercised by unit
//!   tests without touching the filesystem or a terminal.
//! - **Independence**: tools share no state and no data model; deleting one
//!   touches exactly one module and one router arm.
//! - **Predictability**: a failed operation aborts that one subcommand with
//!   an error. Nothing is retried, nothing escalates.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `devbelt.toml` loading, validation, stock config generation |
//! | [`text`] | Case conversion, counting, lorem ipsum, diffing, regex testing |
//! | [`codec`] | Base64, percent-encoding, HTML entities, JWT decoding |
//! | [`format`] | JSON, YAML, XML, SQL, and Markdown formatters |
//! | [`convert`] | Number bases, colors, timestamps, dates, CSV↔JSON |
//! | [`generate`] | Hash digests, UUIDs, cron expressions |
//! | [`imaging`] | Passport-photo compositor and background remover |
//! | [`output`] | CLI output formatting — pure `format_*` fns + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Pure Transforms Over Shared Services
//!
//! The tools deliberately do not share helpers for "common" concerns like
//! input validation or result shaping. Each one is small enough that a shared
//! abstraction would couple modules that are otherwise independent, and that
//! coupling is exactly what this codebase avoids.
//!
//! ## Maud Over Template Engines
//!
//! The Markdown preview page is generated with
//! [Maud](https://maud.lambda.xyz/): compile-time checked, type-safe, and
//! XSS-safe by default, with no template files to ship.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate end to end — decode, pixel
//! transforms, encode — so the binary has zero system dependencies. Whole-
//! image pixel passes are parallelized with rayon.

pub mod codec;
pub mod config;
pub mod convert;
pub mod format;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod text;
