use restitch_protocol::{Parser, SearchStatus, SearchValues};

/// Immutable projection of panel state handed to the presentation layer each
/// render cycle. All derived display rules live here so renderers stay
/// mechanical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelViewModel {
    pub find: String,
    pub replace: String,
    pub include: String,
    pub exclude: String,
    pub parser: Parser,
    pub prettier: bool,

    pub running: bool,
    pub show_details: bool,
    /// Replace-all is actionable only when the host is idle and reported at
    /// least one file that would change.
    pub replace_all_enabled: bool,
    pub progress_visible: bool,
    /// Progress bar width, e.g. `"37.5%"`. `total == 0` yields `"0.0%"`.
    pub progress_width: String,
    pub match_summary: Option<String>,
    pub error_summary: Option<String>,
}

impl PanelViewModel {
    pub(crate) fn project(
        values: &SearchValues,
        status: &SearchStatus,
        show_details: bool,
    ) -> Self {
        Self {
            find: values.find.clone(),
            replace: values.replace.clone(),
            include: values.include.clone(),
            exclude: values.exclude.clone(),
            parser: values.parser,
            prettier: values.prettier,
            running: status.running,
            show_details,
            replace_all_enabled: !status.running && status.num_files_that_will_change > 0,
            progress_visible: status.running,
            progress_width: progress_width(status.completed, status.total),
            match_summary: match_summary(status),
            error_summary: error_summary(status),
        }
    }
}

// The max(1) guard keeps `total == 0` at 0% instead of a division by zero.
fn progress_width(completed: u64, total: u64) -> String {
    let percent = completed as f64 * 100.0 / total.max(1) as f64;
    format!("{percent:.1}%")
}

fn match_summary(status: &SearchStatus) -> Option<String> {
    if status.num_matches == 0 {
        return None;
    }
    Some(format!(
        "Found {} {} in {} {}",
        status.num_matches,
        plural(status.num_matches, "match", "matches"),
        status.num_files_with_matches,
        plural(status.num_files_with_matches, "file", "files"),
    ))
}

fn error_summary(status: &SearchStatus) -> Option<String> {
    if status.num_files_with_errors == 0 {
        return None;
    }
    Some(format!(
        "{} {} had errors",
        status.num_files_with_errors,
        plural(status.num_files_with_errors, "file", "files"),
    ))
}

fn plural(count: u64, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
