//! Interactive-element analysis and locator suggestion.
//!
//! This is the core of the server: a regex-driven scanner that finds
//! interactive HTML elements and a strategy engine that proposes either
//! ARIA attributes or a `data-testid` value for each one.
//!
//! # Pipeline
//!
//! ```text
//! caller HTML ──▶ scanner ──▶ ordered element list ──▶ strategy engine ──▶ report
//! ```
//!
//! Each analysis call receives fresh input and returns a fresh report;
//! nothing is cached or retained between calls.

pub mod element;
pub mod scanner;
pub mod strategy;

pub use element::{ElementKind, InteractiveElement};
pub use scanner::scan;
pub use strategy::{Strategy, StrategySelection};

/// Guidance returned when the caller supplies no HTML.
const NO_HTML_GUIDANCE: &str =
    "No HTML content provided. Pass the markup to analyse as the html_content argument.";

/// Runs one analysis call: scan the HTML and render the report for the
/// selected strategy.
///
/// Blank input yields a plain guidance message. An unset or
/// unrecognised strategy yields the Phase-1 selection prompt without
/// any element evaluation. This function performs no I/O and never
/// fails on malformed HTML.
#[must_use]
pub fn run_workflow(html: &str, selection: &StrategySelection) -> String {
    if html.trim().is_empty() {
        return NO_HTML_GUIDANCE.to_string();
    }

    match selection {
        StrategySelection::Unset => strategy::selection_prompt(html),
        StrategySelection::Unrecognised(raw) => strategy::invalid_strategy_prompt(raw, html),
        StrategySelection::Chosen(chosen) => {
            let elements = scanner::scan(html);
            match chosen {
                Strategy::AriaFirst => strategy::aria_first_report(&elements),
                Strategy::TestAttributeFirst => strategy::test_attribute_report(&elements),
            }
        }
    }
}
