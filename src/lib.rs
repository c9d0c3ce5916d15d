//! autotestid-mcp: MCP server for AI-assisted test-locator annotation of HTML
//!
//! This library analyses HTML markup for interactive elements and
//! suggests test-locator attributes: either accessibility attributes
//! (`aria-label`, `role`) or `data-testid` values, according to a
//! caller-chosen strategy.
//!
//! # Architecture
//!
//! The analysis is deliberately pattern-based, not DOM-based: a fixed
//! set of tag patterns is applied to the raw markup, and the results
//! are ordered by source offset. This keeps suggestion generation a
//! pure function of the input text and makes the tool a first-pass
//! authoring aid rather than an HTML validator.
//!
//! - **Element Scanner**: finds interactive elements, extracts
//!   attributes and text, precomputes a `data-testid` suggestion
//! - **Strategy Engine**: decides per element whether to add ARIA
//!   attributes, a test id, or nothing, and renders the report
//!
//! # Modules
//!
//! - [`analysis`] — element scanner and strategy engine (the core)
//! - [`config`] — configuration loading and validation
//! - [`error`] — error types
//! - [`mcp`] — MCP protocol implementation
//! - [`template`] — workflow template lookup

pub mod analysis;
pub mod config;
pub mod error;
pub mod mcp;
pub mod template;
