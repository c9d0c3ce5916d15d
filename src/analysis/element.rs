//! Scanned interactive-element records.
//!
//! The scanner recognises a fixed set of element categories, each with
//! its own tag pattern, report label, test-id suffix and suggested ARIA
//! role. Markup that matches no category is ignored.

use serde::Serialize;

/// Categories of interactive HTML element recognised by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// A `<button>...</button>` pair.
    Button,
    /// An `<input type="text">` tag.
    TextInput,
    /// An `<input type="password">` tag.
    PasswordInput,
    /// An `<input type="email">` tag.
    EmailInput,
    /// An `<input type="checkbox">` tag.
    Checkbox,
    /// An `<input type="radio">` tag.
    RadioButton,
    /// An `<input type="submit">` tag.
    SubmitButton,
    /// A `<select>...</select>` pair.
    Select,
    /// A `<textarea>...</textarea>` pair.
    Textarea,
    /// An `<a>...</a>` pair.
    Link,
}

impl ElementKind {
    /// All categories, in the order their patterns are applied.
    pub const ALL: [Self; 10] = [
        Self::Button,
        Self::TextInput,
        Self::PasswordInput,
        Self::EmailInput,
        Self::Checkbox,
        Self::RadioButton,
        Self::SubmitButton,
        Self::Select,
        Self::Textarea,
        Self::Link,
    ];

    /// Human-readable category label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::TextInput => "text input",
            Self::PasswordInput => "password input",
            Self::EmailInput => "email input",
            Self::Checkbox => "checkbox",
            Self::RadioButton => "radio button",
            Self::SubmitButton => "submit button",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Link => "link",
        }
    }

    /// Fixed per-category token appended to generated test ids.
    #[must_use]
    pub const fn test_id_suffix(self) -> &'static str {
        match self {
            Self::Button | Self::SubmitButton => "button",
            Self::TextInput | Self::PasswordInput | Self::EmailInput => "input",
            Self::Checkbox => "checkbox",
            Self::RadioButton => "radio",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Link => "link",
        }
    }

    /// Suggested ARIA role for this category.
    #[must_use]
    pub const fn aria_role(self) -> &'static str {
        match self {
            Self::Button | Self::SubmitButton => "button",
            Self::TextInput | Self::PasswordInput | Self::EmailInput | Self::Textarea => "textbox",
            Self::Checkbox => "checkbox",
            Self::RadioButton => "radio",
            Self::Select => "combobox",
            Self::Link => "link",
        }
    }

    /// The tag pattern for this category.
    ///
    /// Patterns are case-insensitive and match across line breaks.
    /// Paired tags match non-greedily, so the first closing tag ends the
    /// match. Capture group 1 is the raw attribute substring; group 2
    /// (paired tags only) is the tag body.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Button => r"(?is)<button\b([^>]*)>(.*?)</button>",
            Self::TextInput => r#"(?is)<input\b([^>]*\btype\s*=\s*["']text["'][^>]*?)\s*/?>"#,
            Self::PasswordInput => {
                r#"(?is)<input\b([^>]*\btype\s*=\s*["']password["'][^>]*?)\s*/?>"#
            }
            Self::EmailInput => r#"(?is)<input\b([^>]*\btype\s*=\s*["']email["'][^>]*?)\s*/?>"#,
            Self::Checkbox => r#"(?is)<input\b([^>]*\btype\s*=\s*["']checkbox["'][^>]*?)\s*/?>"#,
            Self::RadioButton => r#"(?is)<input\b([^>]*\btype\s*=\s*["']radio["'][^>]*?)\s*/?>"#,
            Self::SubmitButton => r#"(?is)<input\b([^>]*\btype\s*=\s*["']submit["'][^>]*?)\s*/?>"#,
            Self::Select => r"(?is)<select\b([^>]*)>(.*?)</select>",
            Self::Textarea => r"(?is)<textarea\b([^>]*)>(.*?)</textarea>",
            Self::Link => r"(?is)<a\b([^>]*)>(.*?)</a>",
        }
    }

    /// Whether inner text is taken from the `placeholder`/`value`
    /// attributes instead of the tag body.
    ///
    /// Submit buttons are matched as `<input type="submit">` tags but are
    /// not in this group; they have no tag body either, so their inner
    /// text is always empty.
    #[must_use]
    pub const fn text_from_attributes(self) -> bool {
        matches!(
            self,
            Self::TextInput
                | Self::PasswordInput
                | Self::EmailInput
                | Self::Checkbox
                | Self::RadioButton
        )
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One scanned tag instance.
///
/// Elements are immutable value records produced fresh per analysis
/// call; there is no identity across calls. Strategy evaluation results
/// live on [`crate::analysis::strategy::AriaEvaluation`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveElement {
    /// 1-based position, assigned by document order after scanning.
    pub position: usize,
    /// Byte offset of the match in the source text; the sort key for
    /// document order.
    pub offset: usize,
    /// Element category.
    pub kind: ElementKind,
    /// Text content between the open/close tags, or for inputs the
    /// `placeholder`/`value` attribute content. Empty if none found.
    pub inner_text: String,
    /// Raw attribute substring from the opening tag, trimmed.
    pub attributes: String,
    /// The complete matched markup span.
    pub full_element: String,
    /// Whether `full_element` contains `data-testid` (case-insensitive).
    pub has_existing_test_id: bool,
    /// Whether `attributes` contains `aria-label=` (case-insensitive).
    pub has_aria_label: bool,
    /// Whether `attributes` contains `role=` (case-insensitive).
    pub has_aria_role: bool,
    /// Extracted `aria-label` value, or empty.
    pub aria_label: String,
    /// Extracted `role` value, or empty.
    pub aria_role: String,
    /// Precomputed kebab-case test-id suggestion.
    pub suggested_test_id: String,
}
