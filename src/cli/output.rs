//! Output formatting for the CLI
//!
//! stdout carries nothing but the qualifying path list, so it stays pipeable;
//! styled messages go to stderr.

use console::style;

/// Render qualifying paths as report text: entries joined with a newline and
/// terminated with one, or the empty string when nothing qualified.
pub fn render(paths: &[String]) -> String {
    if paths.is_empty() {
        return String::new();
    }

    let mut text = paths.join("\n");
    text.push('\n');
    text
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✖").red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty_set_is_empty_string() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn render_joins_with_newline_and_terminates() {
        let paths = vec!["a".to_string(), "b/c".to_string()];
        assert_eq!(render(&paths), "a\nb/c\n");
    }

    #[test]
    fn render_single_entry_has_trailing_newline() {
        assert_eq!(render(&["only".to_string()]), "only\n");
    }
}
