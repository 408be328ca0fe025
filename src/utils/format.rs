// src/utils/format.rs

/// Draw a text progress bar, `cells` wide, filled to `percent`.
pub fn render_bar(percent: u8, cells: usize) -> String {
    let filled = (usize::from(percent.min(100)) * cells + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}

// Describe a password for logs without revealing it
pub fn redact(password: &str) -> String {
    format!("<{} chars>", password.chars().count())
}
