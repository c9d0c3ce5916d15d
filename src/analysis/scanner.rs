//! Regex-driven interactive-element scanner.
//!
//! The scanner works over flat text, one tag pattern per element
//! category. There is no DOM tree and no nesting awareness; irregular
//! markup can produce overlapping matches, which are kept as-is and
//! sorted by source offset. Pattern scanning over flat text keeps
//! suggested-id generation and ordering a pure function of the raw
//! markup.
//!
//! Scanning never fails: empty input yields an empty result with a
//! warning, and a category whose pattern cannot be applied is logged
//! and contributes no matches.

use regex::Regex;
use tracing::{error, warn};

use crate::analysis::element::{ElementKind, InteractiveElement};

/// Scans raw HTML text for interactive elements.
///
/// Returns elements in document order (ascending source offset), with
/// `position` renumbered 1..N after the sort. The input does not have
/// to be well-formed HTML.
#[must_use]
pub fn scan(html: &str) -> Vec<InteractiveElement> {
    if html.trim().is_empty() {
        warn!("scan called with empty HTML input");
        return Vec::new();
    }

    let mut elements = Vec::new();

    for kind in ElementKind::ALL {
        let regex = match Regex::new(kind.pattern()) {
            Ok(regex) => regex,
            Err(e) => {
                error!(kind = kind.label(), error = %e, "tag pattern failed to apply");
                continue;
            }
        };

        for caps in regex.captures_iter(html) {
            let Some(full) = caps.get(0) else { continue };

            let attributes = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            let body = caps.get(2).map_or("", |m| m.as_str());
            let inner_text = extract_inner_text(kind, &attributes, body);

            let full_element = full.as_str().to_string();
            let lowered_full = full_element.to_lowercase();
            let lowered_attributes = attributes.to_lowercase();

            let suggested_test_id = suggested_test_id(kind, &inner_text, &attributes);

            elements.push(InteractiveElement {
                position: 0, // renumbered below, after the document-order sort
                offset: full.start(),
                kind,
                inner_text,
                aria_label: attribute_value(&attributes, "aria-label").unwrap_or_default(),
                aria_role: attribute_value(&attributes, "role").unwrap_or_default(),
                has_existing_test_id: lowered_full.contains("data-testid"),
                has_aria_label: lowered_attributes.contains("aria-label="),
                has_aria_role: lowered_attributes.contains("role="),
                attributes,
                full_element,
                suggested_test_id,
            });
        }
    }

    elements.sort_by_key(|element| element.offset);
    for (index, element) in elements.iter_mut().enumerate() {
        element.position = index + 1;
    }

    elements
}

/// Extracts the inner text for one matched element.
///
/// Input-family categories take `placeholder`, else `value`, else
/// empty. Paired tags take the first text run after the opening `>` up
/// to the next `<`, trimmed.
fn extract_inner_text(kind: ElementKind, attributes: &str, body: &str) -> String {
    if kind.text_from_attributes() {
        return attribute_value(attributes, "placeholder")
            .or_else(|| attribute_value(attributes, "value"))
            .unwrap_or_default();
    }

    body.split('<').next().unwrap_or_default().trim().to_string()
}

/// Extracts a quoted attribute value from a raw attribute substring.
///
/// Returns `None` when the attribute is absent or unquoted.
pub(crate) fn attribute_value(attributes: &str, name: &str) -> Option<String> {
    let pattern = format!(r#"(?i){}\s*=\s*["']([^"']*)["']"#, regex::escape(name));
    let regex = Regex::new(&pattern).ok()?;

    regex
        .captures(attributes)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Computes the kebab-case test-id suggestion for one element.
///
/// The base name comes from the first non-blank of inner text, `name`
/// attribute, `id` attribute. A usable base yields
/// `{base}-{category suffix}`; otherwise the id is the hyphenated
/// category label, which for single-word categories is the bare suffix.
fn suggested_test_id(kind: ElementKind, inner_text: &str, attributes: &str) -> String {
    let candidate = [
        inner_text.to_string(),
        attribute_value(attributes, "name").unwrap_or_default(),
        attribute_value(attributes, "id").unwrap_or_default(),
    ]
    .into_iter()
    .find(|value| !value.trim().is_empty());

    candidate.and_then(|value| normalise_base(&value)).map_or_else(
        || kind.label().replace(' ', "-"),
        |base| format!("{base}-{}", kind.test_id_suffix()),
    )
}

/// Normalises a base-name candidate to kebab-case.
///
/// Lowercases, maps spaces and underscores to hyphens, strips anything
/// outside `[a-z0-9-]`, collapses hyphen runs and trims hyphens at both
/// ends. Returns `None` when nothing usable remains.
fn normalise_base(raw: &str) -> Option<String> {
    let mut cleaned = String::with_capacity(raw.len());

    for ch in raw.trim().to_lowercase().chars() {
        let mapped = match ch {
            ' ' | '_' | '-' => '-',
            'a'..='z' | '0'..='9' => ch,
            _ => continue,
        };
        if mapped == '-' && (cleaned.is_empty() || cleaned.ends_with('-')) {
            continue;
        }
        cleaned.push(mapped);
    }

    while cleaned.ends_with('-') {
        cleaned.pop();
    }

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
