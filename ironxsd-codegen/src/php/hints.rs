//! Constructor `@param` doc lines.
//!
//! Hints accumulate per class and are aligned in one pass: the type and
//! variable columns are padded to the widest entry.

/// Shown when a hint has no trailing text.
pub const MISSING_DOC_PLACEHOLDER: &str = "No Comment...sorry.";

const HINT_INDENT: &str = "     ";

/// One `@param` doc line before alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHint {
    /// Type column (`string`, `Address[]`, ...).
    pub type_token: String,
    /// Variable column (`$name`).
    pub field_token: String,
    /// Remaining text: bounds, pattern, flags, documentation.
    pub tail: String,
}

impl TypeHint {
    /// Creates a type hint.
    #[must_use]
    pub fn new(
        type_token: impl Into<String>,
        field_token: impl Into<String>,
        tail: impl Into<String>,
    ) -> Self {
        Self {
            type_token: type_token.into(),
            field_token: field_token.into(),
            tail: tail.into(),
        }
    }

    fn rest(&self) -> &str {
        if self.tail.trim().is_empty() {
            MISSING_DOC_PLACEHOLDER
        } else {
            self.tail.trim_end()
        }
    }
}

/// Aligns accumulated hints into doc-block lines.
///
/// Returns `None` when there are no hints, so the caller omits the block.
#[must_use]
pub fn align_type_hints(hints: &[TypeHint]) -> Option<String> {
    if hints.is_empty() {
        return None;
    }

    let type_width = hints.iter().map(|h| h.type_token.len()).max().unwrap_or(0);
    let field_width = hints.iter().map(|h| h.field_token.len()).max().unwrap_or(0);

    let mut output = String::new();
    for hint in hints {
        output.push_str(&format!(
            "{}* @param {} {} {}\n",
            HINT_INDENT,
            pad(&hint.type_token, type_width),
            pad(&hint.field_token, field_width),
            hint.rest()
        ));
    }

    Some(output)
}

/// Right-pads with spaces to a byte width.
fn pad(s: &str, width: usize) -> String {
    let mut padded = String::with_capacity(width.max(s.len()));
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(s.len())));
    padded
}
