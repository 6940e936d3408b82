pub mod board;
pub mod column;
pub mod export;
pub mod task;

use crate::output;

/// Trimmed title, or a validation error if nothing is left.
pub fn required_title(raw: &str, entity: &str) -> String {
    let title = raw.trim();
    if title.is_empty() {
        output::output_error(&format!("{} title cannot be empty", entity));
    }
    title.to_string()
}
