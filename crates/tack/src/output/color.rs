//! Color and styling helpers for board output.
//!
//! Semantic Color Theme:
//!   - Done:          green   (completed tickets, successful actions)
//!   - In progress:   yellow  (active work, High priority)
//!   - Cancelled:     red     (abandoned tickets, Urgent priority)
//!   - Info/Reference: cyan   (ticket IDs)
//!   - Accent:        magenta (tags)
//!   - Muted:         dimmed  (counts, field labels, Backlog, No priority)
//!   - Emphasis:      bold    (column headers, Urgent)

use crate::domain::{Grouping, TicketStatus};
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Colorize a ticket ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Colorize a ticket's tags (magenta).
pub(crate) fn colorize_tags(tags: &[String], config: &OutputConfig) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let text = tags.join(", ");
    if !config.use_colors {
        return text;
    }
    text.magenta().to_string()
}

/// Apply color to a priority label.
pub(crate) fn colorize_priority_label(label: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return label.to_string();
    }
    match label {
        "Urgent" => label.red().bold().to_string(),
        "High" => label.yellow().to_string(),
        "No priority" => label.dimmed().to_string(),
        _ => label.to_string(),
    }
}

/// Get the glyph for a ticket status, with ASCII fallback support.
pub(crate) fn status_glyph(status: TicketStatus, config: &OutputConfig) -> &'static str {
    if config.use_ascii {
        match status {
            TicketStatus::Backlog => ".",
            TicketStatus::Todo => "o",
            TicketStatus::InProgress => ">",
            TicketStatus::Done => "+",
            TicketStatus::Cancelled => "x",
            TicketStatus::Unknown => "?",
        }
    } else {
        match status {
            TicketStatus::Backlog => "◌",
            TicketStatus::Todo => "○",
            TicketStatus::InProgress => "◐",
            TicketStatus::Done => "●",
            TicketStatus::Cancelled => "✗",
            TicketStatus::Unknown => "?",
        }
    }
}

/// Get a colored status icon.
pub(crate) fn colored_status_icon(status: TicketStatus, config: &OutputConfig) -> String {
    let icon = status_glyph(status, config);
    if !config.use_colors {
        return icon.to_string();
    }
    match status {
        TicketStatus::Backlog | TicketStatus::Unknown => icon.dimmed().to_string(),
        TicketStatus::Todo => icon.white().to_string(),
        TicketStatus::InProgress => icon.yellow().to_string(),
        TicketStatus::Done => icon.green().to_string(),
        TicketStatus::Cancelled => icon.red().to_string(),
    }
}

/// Get a colored status icon for a column keyed by a status label.
///
/// Unrecognized labels fall back to the Unknown icon; a column always gets
/// some icon rather than an error.
pub(crate) fn status_icon_for_label(label: &str, config: &OutputConfig) -> String {
    let status = match label {
        "Backlog" => TicketStatus::Backlog,
        "Todo" => TicketStatus::Todo,
        "In progress" => TicketStatus::InProgress,
        "Done" => TicketStatus::Done,
        "Cancelled" => TicketStatus::Cancelled,
        _ => TicketStatus::Unknown,
    };
    colored_status_icon(status, config)
}

/// Get a colored priority icon for a column keyed by a priority label.
///
/// As with status icons, unrecognized labels get the fallback icon.
pub(crate) fn priority_icon_for_label(label: &str, config: &OutputConfig) -> String {
    let icon = if config.use_ascii {
        match label {
            "Urgent" => "!!",
            "High" => "^",
            "Medium" => "=",
            "Low" => "v",
            "No priority" => "-",
            _ => "?",
        }
    } else {
        match label {
            "Urgent" => "‼",
            "High" => "▲",
            "Medium" => "■",
            "Low" => "▽",
            "No priority" => "—",
            _ => "?",
        }
    };

    if !config.use_colors {
        return icon.to_string();
    }
    match label {
        "Urgent" => icon.red().bold().to_string(),
        "High" => icon.yellow().to_string(),
        "No priority" => icon.dimmed().to_string(),
        _ => icon.to_string(),
    }
}

/// Get the icon for a column header under the given grouping.
pub(crate) fn column_icon(grouping: Grouping, key: &str, config: &OutputConfig) -> String {
    match grouping {
        Grouping::Status => status_icon_for_label(key, config),
        Grouping::Priority => priority_icon_for_label(key, config),
        Grouping::User => {
            let icon = if config.use_ascii { "@" } else { "◉" };
            if config.use_colors {
                icon.cyan().to_string()
            } else {
                icon.to_string()
            }
        }
    }
}

/// Apply dimmed style to text (for counts and field labels).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for column headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control::set_override;
    use std::sync::{Mutex, MutexGuard};

    // colored's set_override is process-global; tests that enable colors
    // must not run concurrently with each other.
    static COLOR_OVERRIDE_MUTEX: Mutex<()> = Mutex::new(());

    struct ColorGuard<'a> {
        _guard: MutexGuard<'a, ()>,
    }

    impl<'a> ColorGuard<'a> {
        fn new() -> Self {
            let guard = COLOR_OVERRIDE_MUTEX.lock().unwrap();
            set_override(true);
            Self { _guard: guard }
        }
    }

    impl Drop for ColorGuard<'_> {
        fn drop(&mut self) {
            set_override(false);
        }
    }

    fn with_colors_enabled<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ColorGuard::new();
        f()
    }

    #[test]
    fn test_status_glyphs() {
        let config = OutputConfig::default();
        assert_eq!(status_glyph(TicketStatus::Backlog, &config), "◌");
        assert_eq!(status_glyph(TicketStatus::Todo, &config), "○");
        assert_eq!(status_glyph(TicketStatus::InProgress, &config), "◐");
        assert_eq!(status_glyph(TicketStatus::Done, &config), "●");
        assert_eq!(status_glyph(TicketStatus::Cancelled, &config), "✗");
    }

    #[test]
    fn test_ascii_fallback_glyphs() {
        let config = OutputConfig::new(80, true, false);
        assert_eq!(status_glyph(TicketStatus::Backlog, &config), ".");
        assert_eq!(status_glyph(TicketStatus::Todo, &config), "o");
        assert_eq!(status_glyph(TicketStatus::InProgress, &config), ">");
        assert_eq!(status_glyph(TicketStatus::Done, &config), "+");
        assert_eq!(status_glyph(TicketStatus::Cancelled, &config), "x");
        assert_eq!(priority_icon_for_label("Urgent", &config), "!!");
        assert_eq!(priority_icon_for_label("No priority", &config), "-");
    }

    #[test]
    fn test_unrecognized_labels_fall_back_to_default_icons() {
        let config = OutputConfig::new(80, false, false);
        assert_eq!(status_icon_for_label("Triage", &config), "?");
        assert_eq!(priority_icon_for_label("Sev0", &config), "?");
    }

    #[test]
    fn test_colorize_priority_label_with_colors() {
        with_colors_enabled(|| {
            let config = OutputConfig::new(80, false, true);
            assert!(colorize_priority_label("Urgent", &config).contains("\x1b["));
            assert!(colorize_priority_label("High", &config).contains("\x1b["));
            // Medium carries no color styling.
            assert!(!colorize_priority_label("Medium", &config).contains("\x1b["));
        });
    }

    #[test]
    fn test_colors_disabled_produce_plain_text() {
        let config = OutputConfig::new(80, false, false);
        assert_eq!(colorize_id("CAM-1", &config), "CAM-1");
        assert_eq!(colorize_priority_label("Urgent", &config), "Urgent");
        assert_eq!(
            colorize_tags(&["Feature Request".to_string()], &config),
            "Feature Request"
        );
        assert_eq!(success("done", &config), "done");
        assert_eq!(error("fail", &config), "fail");
        assert_eq!(warning("careful", &config), "careful");
        assert_eq!(info("note", &config), "note");
    }

    #[test]
    fn test_colorize_tags_empty_is_empty() {
        let config = OutputConfig::default();
        assert_eq!(colorize_tags(&[], &config), "");
    }

    #[test]
    fn test_column_icons_per_grouping() {
        let config = OutputConfig::new(80, false, false);
        assert_eq!(column_icon(Grouping::Status, "Todo", &config), "○");
        assert_eq!(column_icon(Grouping::Priority, "Urgent", &config), "‼");
        assert_eq!(column_icon(Grouping::User, "Alice", &config), "◉");
    }

    #[test]
    fn test_colored_status_icon_has_ansi_codes_when_enabled() {
        with_colors_enabled(|| {
            let config = OutputConfig::new(80, false, true);
            assert!(colored_status_icon(TicketStatus::Done, &config).contains("\x1b["));
            assert!(colored_status_icon(TicketStatus::Cancelled, &config).contains("\x1b["));
        });
    }
}
