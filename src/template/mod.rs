//! Workflow template lookup.
//!
//! The full two-phase workflow instructions can be shipped as a text
//! file alongside the binary. When present, its content replaces the
//! strategy engine's built-in Phase-1 selection prompt. Absence of the
//! file is not an error: the server falls back to the built-in prompt.
//!
//! # Search Order
//!
//! Candidate locations are tried in order, first readable match wins:
//!
//! 1. Configured override path (`template_path` / `--template`)
//! 2. `prompts/autotestid_workflow.md` next to the executable
//! 3. `../prompts/autotestid_workflow.md` relative to the executable
//! 4. `prompts/autotestid_workflow.md` under the current directory
//! 5. `autotestid_workflow.md` under the current directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Default template file name.
const TEMPLATE_FILE: &str = "autotestid_workflow.md";

/// Ordered, first-match-wins lookup for the workflow template file.
///
/// The candidate list is fixed at construction time, so the analysis
/// engine and tests stay independent of any specific filesystem layout.
#[derive(Debug, Clone)]
pub struct TemplateLocator {
    candidates: Vec<PathBuf>,
}

impl TemplateLocator {
    /// Builds the standard candidate list from the process environment.
    ///
    /// An override path, when given, is tried before the standard
    /// locations.
    #[must_use]
    pub fn from_environment(override_path: Option<&Path>) -> Self {
        let mut candidates = Vec::new();

        if let Some(path) = override_path {
            candidates.push(path.to_path_buf());
        }

        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("prompts").join(TEMPLATE_FILE));
                candidates.push(dir.join("..").join("prompts").join(TEMPLATE_FILE));
            }
        }

        candidates.push(PathBuf::from("prompts").join(TEMPLATE_FILE));
        candidates.push(PathBuf::from(TEMPLATE_FILE));

        Self { candidates }
    }

    /// Builds a locator over an explicit candidate list.
    #[must_use]
    pub const fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Returns the content of the first readable candidate, or `None`.
    ///
    /// A read fault on one candidate is logged and the search
    /// continues; no fault ever propagates to the caller.
    #[must_use]
    pub fn locate(&self) -> Option<String> {
        for path in &self.candidates {
            match std::fs::read_to_string(path) {
                Ok(content) => {
                    debug!(path = %path.display(), "workflow template found");
                    return Some(content);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read workflow template");
                }
            }
        }

        debug!("no workflow template found, using built-in prompt");
        None
    }
}
