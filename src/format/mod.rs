//! Formatters: JSON, YAML, XML, SQL, Markdown.
//!
//! Each formatter parses first and renders second, so malformed input is
//! always reported as a parse error rather than silently mangled output.

pub mod json;
pub mod markdown;
pub mod sql;
pub mod xml;
pub mod yaml;
