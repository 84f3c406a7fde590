/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Missing frames color:
/// 0 → green
/// \>0 → red
pub fn color_for_missing(missing: u64) -> &'static str {
    if missing == 0 { GREEN } else { RED }
}

/// Coverage color: green when complete, yellow above 90%, red below.
pub fn color_for_coverage(percent: f64) -> &'static str {
    if percent >= 100.0 {
        GREEN
    } else if percent >= 90.0 {
        YELLOW
    } else {
        RED
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
