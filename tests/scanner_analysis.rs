//! Integration tests for the element scanner.
//!
//! These tests exercise the scanner over realistic form markup and
//! verify the ordering, id-format and idempotence properties the
//! analysis relies on.

use autotestid_mcp::analysis::{scan, ElementKind};

/// A realistic login form covering most element categories.
const LOGIN_FORM: &str = r#"
<form action="/login" method="post">
  <input type="text" name="username" placeholder="Username">
  <input type="password" name="password" placeholder="Password">
  <input type="checkbox" name="remember_me" value="yes">
  <select name="language">
    <option value="en">English</option>
  </select>
  <textarea name="notes">Optional notes</textarea>
  <button type="submit">Sign in</button>
  <a href="/reset">Forgot your password?</a>
</form>
"#;

#[test]
fn test_scan_finds_all_categories_in_login_form() {
    let elements = scan(LOGIN_FORM);
    let kinds: Vec<ElementKind> = elements.iter().map(|e| e.kind).collect();

    assert_eq!(
        kinds,
        vec![
            ElementKind::TextInput,
            ElementKind::PasswordInput,
            ElementKind::Checkbox,
            ElementKind::Select,
            ElementKind::Textarea,
            ElementKind::Button,
            ElementKind::Link,
        ]
    );
}

#[test]
fn test_scan_positions_are_contiguous_and_offsets_increase() {
    let elements = scan(LOGIN_FORM);
    assert!(!elements.is_empty());

    for (index, element) in elements.iter().enumerate() {
        assert_eq!(element.position, index + 1);
    }
    for pair in elements.windows(2) {
        assert!(
            pair[0].offset < pair[1].offset,
            "elements must be in strictly increasing document order"
        );
    }
}

#[test]
fn test_scan_is_idempotent() {
    assert_eq!(scan(LOGIN_FORM), scan(LOGIN_FORM));
}

#[test]
fn test_suggested_ids_match_the_locator_format() {
    let suffix_alternatives = [
        "button", "input", "checkbox", "radio", "select", "textarea", "link",
    ];

    for element in scan(LOGIN_FORM) {
        let id = &element.suggested_test_id;

        if suffix_alternatives.contains(&id.as_str()) {
            continue; // bare suffix: no base name was derivable
        }

        let mut parts = id.split('-').collect::<Vec<_>>();
        let suffix = parts.pop().unwrap();
        assert!(
            suffix_alternatives.contains(&suffix),
            "id {id} must end with a category suffix"
        );
        assert!(!parts.is_empty(), "id {id} must have a base name");
        for part in parts {
            assert!(
                !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "id {id} must be kebab-case alphanumeric"
            );
        }
    }
}

#[test]
fn test_scenario_button_with_text() {
    let elements = scan("<button>Save</button>");
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].kind, ElementKind::Button);
    assert_eq!(elements[0].inner_text, "Save");
    assert_eq!(elements[0].suggested_test_id, "save-button");
}

#[test]
fn test_scenario_bare_email_input() {
    let elements = scan(r#"<input type="email">"#);
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].kind, ElementKind::EmailInput);
    assert!(elements[0].inner_text.is_empty());
    assert_eq!(elements[0].suggested_test_id, "email-input");
}

#[test]
fn test_scenario_empty_input() {
    assert!(scan("").is_empty());
}

#[test]
fn test_scan_tolerates_malformed_markup() {
    // Unclosed tags, stray brackets, nothing interactive
    let elements = scan("<div><p>hello<<< <buttonish> </div>");
    assert!(elements.is_empty());

    // Unclosed button never matches (no closing tag)
    let elements = scan("<button>Save");
    assert!(elements.is_empty());
}

#[test]
fn test_scan_matches_case_insensitively() {
    let elements = scan(r#"<BUTTON CLASS="big">Go home</BUTTON><INPUT TYPE="EMAIL">"#);
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].kind, ElementKind::Button);
    assert_eq!(elements[1].kind, ElementKind::EmailInput);
}

#[test]
fn test_submit_input_and_button_are_distinct_categories() {
    let html = r#"<button>Save</button><input type="submit" value="Send">"#;
    let elements = scan(html);
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].kind, ElementKind::Button);
    assert_eq!(elements[1].kind, ElementKind::SubmitButton);
    assert_eq!(elements[1].suggested_test_id, "submit-button");
}

#[test]
fn test_existing_locator_attributes_are_surfaced() {
    let html = r#"
        <button data-testid="save-btn">Save</button>
        <a href="/x" aria-label="Home page" role="link">Home</a>
    "#;
    let elements = scan(html);
    assert_eq!(elements.len(), 2);

    assert!(elements[0].has_existing_test_id);
    assert!(!elements[0].has_aria_label);

    assert!(!elements[1].has_existing_test_id);
    assert!(elements[1].has_aria_label);
    assert!(elements[1].has_aria_role);
    assert_eq!(elements[1].aria_label, "Home page");
    assert_eq!(elements[1].aria_role, "link");
}

#[test]
fn test_radio_group_ids_derive_from_value() {
    let html = r#"
        <input type="radio" name="size" value="small">
        <input type="radio" name="size" value="large">
    "#;
    let elements = scan(html);
    assert_eq!(elements.len(), 2);
    // placeholder is absent, so value drives the inner text
    assert_eq!(elements[0].inner_text, "small");
    assert_eq!(elements[0].suggested_test_id, "small-radio");
    assert_eq!(elements[1].suggested_test_id, "large-radio");
}

#[test]
fn test_multiline_textarea_attributes() {
    let html = "<textarea\n  name=\"comments\"\n  rows=\"4\">Leave a comment</textarea>";
    let elements = scan(html);
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].kind, ElementKind::Textarea);
    assert_eq!(elements[0].inner_text, "Leave a comment");
    assert_eq!(elements[0].suggested_test_id, "leave-a-comment-textarea");
}
