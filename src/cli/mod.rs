pub mod commands;

pub use commands::Cli;

/// Leading paragraph of a clap error, flattened onto one line
///
/// Plugin output must stay on one line, so usage errors are reduced to the
/// sentence that names the problem, without the `error: ` prefix or usage text.
pub fn usage_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let summary = rendered
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let summary = summary.strip_prefix("error: ").unwrap_or(&summary);
    if summary.is_empty() {
        "invalid arguments".to_string()
    } else {
        summary.to_string()
    }
}
