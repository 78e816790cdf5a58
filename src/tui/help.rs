//! Help text content for the help modal

/// Key bindings and operation syntax.
pub fn get_help_text() -> Vec<String> {
    vec![
        "Matrix input:",
        "  Enter            Set matrix (clears history and log)",
        "  Shift/Alt+Enter  New row",
        "  Rows on lines, numbers separated by spaces",
        "",
        "Operations:",
        "  R1 <> R2         Swap rows",
        "  R1 = R1 * -2     Multiply a row",
        "  R1 = R1 / 3      Divide a row (inexact cells become a/b)",
        "  R2 = R2 - 3R1    Add/subtract a multiple of a row",
        "  R2 = R2 + R1     Coefficient defaults to 1",
        "  Rows are R1..R9",
        "",
        "Keys:",
        "  Tab              Switch input",
        "  Ctrl+Z           Undo",
        "  Ctrl+R           Reset",
        "  F1               This help",
        "  Esc / Ctrl+C     Quit",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub fn status_hint() -> &'static str {
    "Enter:apply  Tab:switch  C-z:undo  C-r:reset  F1:help  Esc:quit"
}
