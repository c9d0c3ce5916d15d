//! Locator-suggestion strategy engine.
//!
//! Given scanned elements and a strategy selection, decides per element
//! whether it needs generated ARIA attributes, a generated
//! `data-testid`, or no change, and renders a report plus a
//! before/after code preview. The engine performs no I/O and holds no
//! state between invocations.

use std::fmt::Write;

use crate::analysis::element::InteractiveElement;
use crate::analysis::scanner::attribute_value;

/// Maximum number of elements rendered in the code preview.
const PREVIEW_LIMIT: usize = 5;

/// Caller-selected policy for locator suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Prefer accessibility attributes; add a test id only where ARIA
    /// cannot identify the element.
    AriaFirst,
    /// Add a `data-testid` to every element that lacks one.
    TestAttributeFirst,
}

impl Strategy {
    /// The canonical strategy token as accepted from callers.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::AriaFirst => "aria-first",
            Self::TestAttributeFirst => "test-attribute-first",
        }
    }
}

/// Result of parsing the caller's strategy argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategySelection {
    /// No strategy argument, or a blank one.
    Unset,
    /// A non-blank string naming no known strategy.
    Unrecognised(String),
    /// A recognised strategy.
    Chosen(Strategy),
}

impl StrategySelection {
    /// Parses a raw strategy string.
    ///
    /// Matching is case-insensitive on the exact strategy tokens. Blank
    /// input is [`Self::Unset`]; any other unknown string is
    /// [`Self::Unrecognised`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        if token.is_empty() {
            return Self::Unset;
        }

        match token.to_lowercase().as_str() {
            "aria-first" => Self::Chosen(Strategy::AriaFirst),
            "test-attribute-first" => Self::Chosen(Strategy::TestAttributeFirst),
            _ => Self::Unrecognised(token.to_string()),
        }
    }
}

/// Decision buckets for the aria-first strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaOutcome {
    /// Existing ARIA or semantic text already identifies the element.
    Sufficient,
    /// Generated ARIA attributes will be added; no test id.
    AddAria,
    /// ARIA cannot identify the element; a test id is required.
    NeedsTestId,
}

/// Per-element result of the aria-first decision order.
///
/// An evaluation never carries both a non-blank suggested ARIA label
/// and `needs_test_id = true`.
#[derive(Debug, Clone)]
pub struct AriaEvaluation {
    /// The decision bucket.
    pub outcome: AriaOutcome,
    /// Whether a `data-testid` must be generated.
    pub needs_test_id: bool,
    /// Human-readable justification for the decision.
    pub reason: String,
    /// Suggested `aria-label`; empty unless the outcome is [`AriaOutcome::AddAria`].
    pub suggested_aria_label: String,
    /// Suggested `role`; empty unless the outcome is [`AriaOutcome::AddAria`].
    pub suggested_aria_role: String,
}

/// Applies the aria-first decision order to one element.
///
/// First matching rule wins: existing `aria-label`, role with text,
/// role alone, usable text (generated ARIA), otherwise a test id.
#[must_use]
pub fn evaluate_aria_first(element: &InteractiveElement) -> AriaEvaluation {
    let text = element.inner_text.trim();

    if element.has_aria_label && !element.aria_label.trim().is_empty() {
        return AriaEvaluation {
            outcome: AriaOutcome::Sufficient,
            needs_test_id: false,
            reason: format!(
                "existing aria-label \"{}\" already identifies this element",
                element.aria_label
            ),
            suggested_aria_label: String::new(),
            suggested_aria_role: String::new(),
        };
    }

    if element.has_aria_role && !element.aria_role.trim().is_empty() {
        let reason = if text.is_empty() {
            format!("role \"{}\" is sufficient for locating", element.aria_role)
        } else {
            format!(
                "role \"{}\" with text \"{text}\" is sufficient for locating",
                element.aria_role
            )
        };
        return AriaEvaluation {
            outcome: AriaOutcome::Sufficient,
            needs_test_id: false,
            reason,
            suggested_aria_label: String::new(),
            suggested_aria_role: String::new(),
        };
    }

    if text.chars().count() > 2 {
        return AriaEvaluation {
            outcome: AriaOutcome::AddAria,
            needs_test_id: false,
            reason: "no ARIA present; aria-label and role will be added instead of a test id"
                .to_string(),
            suggested_aria_label: suggested_aria_label(element),
            suggested_aria_role: element.kind.aria_role().to_string(),
        };
    }

    AriaEvaluation {
        outcome: AriaOutcome::NeedsTestId,
        needs_test_id: true,
        reason: "insufficient ARIA and no usable text; a data-testid is required".to_string(),
        suggested_aria_label: String::new(),
        suggested_aria_role: String::new(),
    }
}

/// Builds the suggested `aria-label` for an element that will receive
/// generated ARIA.
///
/// Tag-body text yields `{text} {category}`. Inputs derive from their
/// `placeholder` (`Enter {placeholder}`), then `value`, then `name`
/// with underscores as spaces, then the category label alone.
fn suggested_aria_label(element: &InteractiveElement) -> String {
    let label = element.kind.label();
    let text = element.inner_text.trim();

    if !text.is_empty() && !element.kind.text_from_attributes() {
        return format!("{text} {label}");
    }
    if let Some(placeholder) = non_blank(attribute_value(&element.attributes, "placeholder")) {
        return format!("Enter {placeholder}");
    }
    if let Some(value) = non_blank(attribute_value(&element.attributes, "value")) {
        return format!("{value} {label}");
    }
    if let Some(name) = non_blank(attribute_value(&element.attributes, "name")) {
        return format!("{} {label}", name.replace('_', " "));
    }
    label.to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Renders the Phase-1 strategy selection prompt.
///
/// Names both strategies with one-line effect summaries and echoes the
/// caller's HTML back verbatim. No element evaluation happens here.
#[must_use]
pub fn selection_prompt(html: &str) -> String {
    format!(
        "# AutoTestID Workflow — Phase 1: choose a locator strategy\n\
         \n\
         Call the tool again with one of the following strategies:\n\
         \n\
         1. aria-first — prefer accessibility attributes; elements with\n\
         \x20  sufficient ARIA or semantic text are left untouched, and a\n\
         \x20  data-testid is only added where ARIA cannot identify the element.\n\
         2. test-attribute-first — add a data-testid attribute to every\n\
         \x20  interactive element that does not already carry one.\n\
         \n\
         ## Your HTML\n\
         \n\
         ```html\n\
         {html}\n\
         ```\n"
    )
}

/// Renders the selection prompt prefixed with an invalid-strategy
/// notice naming the rejected string.
#[must_use]
pub fn invalid_strategy_prompt(raw: &str, html: &str) -> String {
    format!(
        "Unrecognised strategy \"{raw}\". Choose one of the strategies below.\n\n{}",
        selection_prompt(html)
    )
}

/// Renders the test-attribute-first report.
///
/// Every element is classified as already covered (existing
/// `data-testid` preserved) or needing a generated test id.
#[must_use]
pub fn test_attribute_report(elements: &[InteractiveElement]) -> String {
    let (covered, needing): (Vec<&InteractiveElement>, Vec<&InteractiveElement>) = elements
        .iter()
        .partition(|element| element.has_existing_test_id);

    let mut report = String::new();
    let _ = writeln!(report, "# Locator Analysis — test-attribute-first\n");
    let _ = writeln!(report, "Scanned {} interactive element(s).", elements.len());

    let _ = writeln!(report, "\n## Existing data-testid preserved ({})\n", covered.len());
    for element in covered {
        let _ = writeln!(
            report,
            "- #{} {}{}: existing data-testid preserved",
            element.position,
            element.kind,
            quoted_text(element)
        );
    }

    let _ = writeln!(report, "\n## Needing a data-testid ({})\n", needing.len());
    for element in needing {
        let _ = writeln!(
            report,
            "- #{} {}{}: add data-testid=\"{}\"",
            element.position,
            element.kind,
            quoted_text(element),
            element.suggested_test_id
        );
    }

    let insertions: Vec<Option<String>> = elements
        .iter()
        .map(|element| {
            if element.has_existing_test_id {
                None
            } else {
                Some(format!("data-testid=\"{}\"", element.suggested_test_id))
            }
        })
        .collect();
    report.push_str(&code_preview(elements, &insertions));

    report.push_str(
        "\n## Next step\n\n\
         Apply the suggested data-testid attributes, then re-run the\n\
         analysis to confirm every interactive element is covered.\n",
    );

    report
}

/// Renders the aria-first report.
///
/// Elements fall into three buckets: sufficient ARIA/semantic markup,
/// generated ARIA attributes, and elements needing a `data-testid`.
#[must_use]
pub fn aria_first_report(elements: &[InteractiveElement]) -> String {
    let evaluations: Vec<AriaEvaluation> = elements.iter().map(evaluate_aria_first).collect();

    let bucket = |outcome: AriaOutcome| {
        elements
            .iter()
            .zip(&evaluations)
            .filter(move |(_, evaluation)| evaluation.outcome == outcome)
    };

    let mut report = String::new();
    let _ = writeln!(report, "# Locator Analysis — aria-first\n");
    let _ = writeln!(report, "Scanned {} interactive element(s).", elements.len());

    let sufficient = bucket(AriaOutcome::Sufficient).count();
    let _ = writeln!(report, "\n## Sufficient ARIA or semantic markup ({sufficient})\n");
    for (element, evaluation) in bucket(AriaOutcome::Sufficient) {
        let _ = writeln!(
            report,
            "- #{} {}: {}",
            element.position, element.kind, evaluation.reason
        );
    }

    let added = bucket(AriaOutcome::AddAria).count();
    let _ = writeln!(report, "\n## ARIA attributes to add ({added})\n");
    for (element, evaluation) in bucket(AriaOutcome::AddAria) {
        let _ = writeln!(
            report,
            "- #{} {}{}: aria-label=\"{}\", role=\"{}\"",
            element.position,
            element.kind,
            quoted_text(element),
            evaluation.suggested_aria_label,
            evaluation.suggested_aria_role
        );
    }

    let needing = bucket(AriaOutcome::NeedsTestId).count();
    let _ = writeln!(report, "\n## Needing a data-testid ({needing})\n");
    for (element, evaluation) in bucket(AriaOutcome::NeedsTestId) {
        let _ = writeln!(
            report,
            "- #{} {}: {}; add data-testid=\"{}\"",
            element.position, element.kind, evaluation.reason, element.suggested_test_id
        );
    }

    let insertions: Vec<Option<String>> = evaluations
        .iter()
        .zip(elements)
        .map(|(evaluation, element)| match evaluation.outcome {
            AriaOutcome::Sufficient => None,
            AriaOutcome::AddAria => Some(format!(
                "aria-label=\"{}\" role=\"{}\"",
                evaluation.suggested_aria_label, evaluation.suggested_aria_role
            )),
            AriaOutcome::NeedsTestId => {
                Some(format!("data-testid=\"{}\"", element.suggested_test_id))
            }
        })
        .collect();
    report.push_str(&code_preview(elements, &insertions));

    report.push_str(
        "\n## Recommendation\n\n\
         Prefer the ARIA additions above. An element never receives both\n\
         a generated ARIA attribute and a generated data-testid.\n",
    );

    report
}

/// Formats an element's inner text as ` "text"`, or nothing when blank.
fn quoted_text(element: &InteractiveElement) -> String {
    let text = element.inner_text.trim();
    if text.is_empty() {
        String::new()
    } else {
        format!(" \"{text}\"")
    }
}

/// Renders the before/after code preview shared by both strategies.
///
/// Shows up to [`PREVIEW_LIMIT`] elements in document order; when more
/// exist, notes the remaining count without rendering them. `insertions`
/// pairs each element with the attribute text to splice into its
/// opening tag, or `None` to leave it unchanged.
fn code_preview(elements: &[InteractiveElement], insertions: &[Option<String>]) -> String {
    let mut preview = String::new();
    let _ = writeln!(preview, "\n## Code preview");

    for (element, insertion) in elements.iter().zip(insertions).take(PREVIEW_LIMIT) {
        let after = insertion.as_deref().map_or_else(
            || element.full_element.clone(),
            |attributes| insert_into_opening_tag(&element.full_element, attributes),
        );

        let _ = writeln!(preview, "\n### Element #{} — {}", element.position, element.kind);
        let _ = writeln!(preview, "Before:\n```html\n{}\n```", element.full_element);
        let _ = writeln!(preview, "After:\n```html\n{after}\n```");
    }

    if elements.len() > PREVIEW_LIMIT {
        let _ = writeln!(
            preview,
            "\n... and {} more element(s) not shown.",
            elements.len() - PREVIEW_LIMIT
        );
    }

    preview
}

/// Splices attribute text into an element's opening tag, immediately
/// before the `>` that closes it (before the `/` on self-closing tags).
fn insert_into_opening_tag(full_element: &str, attributes: &str) -> String {
    let Some(close) = full_element.find('>') else {
        return full_element.to_string();
    };

    let head = &full_element[..close];
    let (head, tail) = head.strip_suffix('/').map_or_else(
        || (head, &full_element[close..]),
        |stripped| (stripped, &full_element[close - 1..]),
    );

    format!("{} {attributes}{tail}", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scanner::scan;

    fn single(html: &str) -> InteractiveElement {
        let mut elements = scan(html);
        assert_eq!(elements.len(), 1, "expected exactly one element in {html}");
        elements.remove(0)
    }

    #[test]
    fn parse_recognises_both_strategies() {
        assert_eq!(
            StrategySelection::parse("aria-first"),
            StrategySelection::Chosen(Strategy::AriaFirst)
        );
        assert_eq!(
            StrategySelection::parse("Test-Attribute-First"),
            StrategySelection::Chosen(Strategy::TestAttributeFirst)
        );
    }

    #[test]
    fn parse_blank_is_unset() {
        assert_eq!(StrategySelection::parse(""), StrategySelection::Unset);
        assert_eq!(StrategySelection::parse("   "), StrategySelection::Unset);
    }

    #[test]
    fn parse_unknown_is_unrecognised() {
        assert_eq!(
            StrategySelection::parse("foo"),
            StrategySelection::Unrecognised("foo".to_string())
        );
    }

    #[test]
    fn existing_aria_label_wins() {
        let element = single(r#"<button aria-label="Submit form">Go</button>"#);
        let evaluation = evaluate_aria_first(&element);
        assert_eq!(evaluation.outcome, AriaOutcome::Sufficient);
        assert!(!evaluation.needs_test_id);
        assert!(evaluation.reason.contains("Submit form"));
        assert!(evaluation.suggested_aria_label.is_empty());
        assert!(evaluation.suggested_aria_role.is_empty());
    }

    #[test]
    fn role_with_text_is_sufficient() {
        let element = single(r#"<a role="link" href="/x">Read more</a>"#);
        let evaluation = evaluate_aria_first(&element);
        assert_eq!(evaluation.outcome, AriaOutcome::Sufficient);
        assert!(evaluation.reason.contains("link"));
        assert!(evaluation.reason.contains("Read more"));
    }

    #[test]
    fn role_alone_is_sufficient() {
        let element = single(r#"<input type="checkbox" role="switch">"#);
        let evaluation = evaluate_aria_first(&element);
        assert_eq!(evaluation.outcome, AriaOutcome::Sufficient);
        assert!(evaluation.reason.contains("switch"));
    }

    #[test]
    fn usable_text_gets_generated_aria() {
        let element = single("<button>Save changes</button>");
        let evaluation = evaluate_aria_first(&element);
        assert_eq!(evaluation.outcome, AriaOutcome::AddAria);
        assert!(!evaluation.needs_test_id);
        assert_eq!(evaluation.suggested_aria_label, "Save changes button");
        assert_eq!(evaluation.suggested_aria_role, "button");
    }

    #[test]
    fn placeholder_text_gets_enter_prefix() {
        let element = single(r#"<input type="text" placeholder="Search">"#);
        let evaluation = evaluate_aria_first(&element);
        assert_eq!(evaluation.outcome, AriaOutcome::AddAria);
        assert_eq!(evaluation.suggested_aria_label, "Enter Search");
        assert_eq!(evaluation.suggested_aria_role, "textbox");
    }

    #[test]
    fn short_text_needs_test_id() {
        let element = single("<button>Go</button>");
        let evaluation = evaluate_aria_first(&element);
        assert_eq!(evaluation.outcome, AriaOutcome::NeedsTestId);
        assert!(evaluation.needs_test_id);
        assert!(evaluation.suggested_aria_label.is_empty());
    }

    #[test]
    fn never_both_aria_and_test_id() {
        let html = r#"
            <button>Save changes</button>
            <button>Go</button>
            <input type="email">
            <a href="/about">About this site</a>
            <input type="text" placeholder="Search">
        "#;
        for element in scan(html) {
            let evaluation = evaluate_aria_first(&element);
            assert!(
                !(evaluation.needs_test_id && !evaluation.suggested_aria_label.is_empty()),
                "element #{} has both a test id and generated ARIA",
                element.position
            );
        }
    }

    #[test]
    fn selection_prompt_names_both_strategies() {
        let prompt = selection_prompt("<button>Go</button>");
        assert!(prompt.contains("aria-first"));
        assert!(prompt.contains("test-attribute-first"));
        assert!(prompt.contains("<button>Go</button>"));
    }

    #[test]
    fn invalid_strategy_prompt_names_the_rejected_token() {
        let prompt = invalid_strategy_prompt("foo", "<button>Go</button>");
        assert!(prompt.starts_with("Unrecognised strategy \"foo\""));
        assert!(prompt.contains("aria-first"));
        assert!(prompt.contains("<button>Go</button>"));
    }

    #[test]
    fn test_attribute_report_buckets_and_counts() {
        let html = r#"<button data-testid="save">Save</button><button>Load file</button>"#;
        let report = test_attribute_report(&scan(html));
        assert!(report.contains("Scanned 2 interactive element(s)."));
        assert!(report.contains("## Existing data-testid preserved (1)"));
        assert!(report.contains("## Needing a data-testid (1)"));
        assert!(report.contains("add data-testid=\"load-file-button\""));
        assert!(report.contains("## Next step"));
    }

    #[test]
    fn aria_report_has_three_buckets() {
        let html = r#"
            <button aria-label="Submit form">Go</button>
            <button>Save changes</button>
            <input type="email">
        "#;
        let report = aria_first_report(&scan(html));
        assert!(report.contains("## Sufficient ARIA or semantic markup (1)"));
        assert!(report.contains("## ARIA attributes to add (1)"));
        assert!(report.contains("## Needing a data-testid (1)"));
        assert!(report.contains("never receives both"));
    }

    #[test]
    fn preview_inserts_before_tag_close() {
        assert_eq!(
            insert_into_opening_tag("<button>Go</button>", "data-testid=\"go-button\""),
            "<button data-testid=\"go-button\">Go</button>"
        );
        assert_eq!(
            insert_into_opening_tag(r#"<input type="text"/>"#, "data-testid=\"text-input\""),
            r#"<input type="text" data-testid="text-input"/>"#
        );
        assert_eq!(
            insert_into_opening_tag("no markup here", "x"),
            "no markup here"
        );
    }

    #[test]
    fn preview_caps_at_five_elements() {
        let html: String = (0..7)
            .map(|i| format!("<button>Element number {i}</button>"))
            .collect();
        let report = test_attribute_report(&scan(&html));
        assert!(report.contains("### Element #5"));
        assert!(!report.contains("### Element #6"));
        assert!(report.contains("... and 2 more element(s) not shown."));
    }
}
