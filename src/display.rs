//! Report line layout and terminal styling

use unicode_width::UnicodeWidthStr;

pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Labels are right-aligned to this many columns so values line up
pub const LABEL_WIDTH: usize = 10;

/// Token printed in place of a value that could not be collected
pub const ERROR_TOKEN: &str = "Error!";

const TITLE: &str = "Ferrofetch";

/// `<label> - <value>` with the label in bold cyan and the value in magenta
pub fn format_line(label: &str, value: &str) -> String {
    styled_line(label, MAGENTA, value)
}

/// Same layout as [`format_line`] with a red `Error!` as the value
pub fn format_error(label: &str) -> String {
    styled_line(label, RED, ERROR_TOKEN)
}

fn styled_line(label: &str, value_color: &str, value: &str) -> String {
    format!(
        "{}{}{}{} - {}{}{}",
        BOLD,
        CYAN,
        pad_label(label),
        RESET,
        value_color,
        value,
        RESET
    )
}

fn pad_label(label: &str) -> String {
    let width = UnicodeWidthStr::width(label);
    format!("{}{}", " ".repeat(LABEL_WIDTH.saturating_sub(width)), label)
}

/// Banner printed above the report, followed by a blank line
pub fn header() -> String {
    format!("{:>7} {}{}{}{} -\n", "-", CYAN, BOLD, TITLE, RESET)
}

/// Banner printed below the report, preceded by a blank line
pub fn footer() -> String {
    format!("\n{:>10} {}{}-{} -", "-", CYAN, BOLD, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_layout() {
        assert_eq!(
            format_line("CPU", "16x AMD Ryzen 7 5800X"),
            "\x1b[1m\x1b[36m       CPU\x1b[0m - \x1b[35m16x AMD Ryzen 7 5800X\x1b[0m"
        );
    }

    #[test]
    fn test_format_error_layout() {
        assert_eq!(
            format_error("Memory"),
            "\x1b[1m\x1b[36m    Memory\x1b[0m - \x1b[31mError!\x1b[0m"
        );
    }

    #[test]
    fn test_values_align_across_labels() {
        let short = format_line("OS", "x");
        let long = format_error("Uptime");
        assert_eq!(short.find(" - "), long.find(" - "));
    }

    #[test]
    fn test_long_label_is_not_truncated() {
        let line = format_line("VeryLongLabel", "v");
        assert!(line.contains("VeryLongLabel\x1b[0m - "));
    }

    #[test]
    fn test_banners() {
        assert_eq!(header(), "      - \x1b[36m\x1b[1mFerrofetch\x1b[0m -\n");
        assert_eq!(footer(), "\n         - \x1b[36m\x1b[1m-\x1b[0m -");
    }
}
