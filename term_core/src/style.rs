//! Inline styling markers
//!
//! The game UI renders log entries as rich text, so output lines may
//! carry HTML-ish color spans. Nothing in the core ever parses these
//! back; this module is the only place that knows the syntax, everything
//! else treats styled lines as opaque strings.

/// Terminal green, the default text color.
pub const PRIMARY: &str = "#33de5e";
/// Orange, used for command names and highlights.
pub const SECONDARY: &str = "#ff9933";
/// Blue used by the welcome note.
pub const NOTE_BLUE: &str = "#3366FF";
/// Grey for plain file names.
pub const LIGHT: &str = "#cccccc";

/// Wraps text in a color span.
pub fn colored(color: &str, text: &str) -> String {
    format!("<span style=\"color: {};\">{}</span>", color, text)
}

/// Highlighted text, for command names and the prompt sigil.
pub fn accent(text: &str) -> String {
    colored(SECONDARY, text)
}

/// Primary-colored text, for directory names.
pub fn primary(text: &str) -> String {
    colored(PRIMARY, text)
}

/// De-emphasized text, for file names.
pub fn light(text: &str) -> String {
    colored(LIGHT, text)
}

/// The blue advisory used in the welcome banner.
pub fn note(text: &str) -> String {
    colored(NOTE_BLUE, text)
}

/// Enlarged banner headline.
pub fn title(text: &str) -> String {
    format!(
        "<span style=\"color: {}; font-size: 1.2em;\">{}</span>",
        SECONDARY, text
    )
}

/// Bold success announcement.
pub fn success(text: &str) -> String {
    format!(
        "<span style=\"color: {}; font-weight: bold;\">{}</span>",
        PRIMARY, text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_marker() {
        assert_eq!(
            accent("help"),
            "<span style=\"color: #ff9933;\">help</span>"
        );
    }

    #[test]
    fn test_primary_marker() {
        assert_eq!(
            primary("documentos/"),
            "<span style=\"color: #33de5e;\">documentos/</span>"
        );
    }

    #[test]
    fn test_title_marker() {
        assert_eq!(
            title("Terminal de PixxelOps v1.0.0"),
            "<span style=\"color: #ff9933; font-size: 1.2em;\">Terminal de PixxelOps v1.0.0</span>"
        );
    }

    #[test]
    fn test_success_marker() {
        assert_eq!(
            success("hecho"),
            "<span style=\"color: #33de5e; font-weight: bold;\">hecho</span>"
        );
    }
}
