/*
[INPUT]:  Screen modules and shared rendering helpers
[OUTPUT]: Screen trait, form summary rendering, NAME=VALUE edit parsing
[POS]:    Presentation layer - the four task screens
[UPDATE]: When adding a screen or changing shared rendering
*/

pub mod add;
pub mod edit;
pub mod list;
pub mod view;

pub use add::AddScreen;
pub use edit::EditScreen;
pub use list::ListScreen;
pub use view::ViewScreen;

use console::style;
use mytasks_adapter::{FormError, FormField, TaskForm};

use crate::theme::{self, FALLBACK};

/// Something that can be printed once its requests have settled
pub trait Screen {
    /// Lines to print, top to bottom
    fn render(&self) -> Vec<String>;

    /// Whether the screen reached its success state
    fn succeeded(&self) -> bool;
}

/// Parse a `NAME=VALUE` edit as given to `--set`
pub fn parse_assignment(raw: &str) -> Result<FormField, FormError> {
    let (name, value) = raw.split_once('=').ok_or_else(|| FormError::InvalidValue {
        field: "--set",
        value: raw.to_string(),
    })?;
    FormField::parse(name.trim(), value)
}

/// Validate a form before it is sent.
///
/// The missing-pattern error also names the flags that supply one.
pub(crate) fn check_form(form: &TaskForm) -> Result<(), String> {
    match form.to_payload() {
        Ok(_) => Ok(()),
        Err(err @ FormError::MissingRecurrencePattern) => Err(format!(
            "{}; pass --repeat <daily|weekly|monthly> or --set recurrencePattern=<pattern>",
            err
        )),
        Err(err) => Err(err.to_string()),
    }
}

/// `label   value`, with "Not set" for blank values
pub(crate) fn info_row(label: &str, value: &str) -> String {
    let value = value.trim();
    let shown = if value.is_empty() {
        style("Not set").fg(FALLBACK.color()).to_string()
    } else {
        value.to_string()
    };
    format!("  {} {}", label_cell(label), shown)
}

fn label_cell(label: &str) -> String {
    style(format!("{:<12}", label)).fg(FALLBACK.color()).to_string()
}

pub(crate) fn section(title: &str) -> String {
    style(title).bold().to_string()
}

/// Summary of a form as it would be submitted
pub(crate) fn form_lines(form: &TaskForm) -> Vec<String> {
    let recurrence = match (form.is_recurring(), form.recurrence_pattern()) {
        (false, _) => "no".to_string(),
        (true, Some(pattern)) => pattern.to_string(),
        (true, None) => "yes".to_string(),
    };

    vec![
        info_row("Title", form.title()),
        info_row("Description", form.description()),
        format!(
            "  {} {} {}",
            label_cell("Badges"),
            theme::badge(form.status().as_str(), theme::status_swatch(form.status())),
            theme::badge(
                form.priority().as_str(),
                theme::priority_swatch(form.priority())
            ),
        ),
        info_row("Due Date", form.due_date()),
        info_row("Category", form.category()),
        info_row("Tags", form.tags()),
        info_row("Assigned To", form.assigned_to()),
        info_row("Created By", form.created_by()),
        info_row("Estimated", form.estimated_minutes()),
        info_row("Actual", form.actual_minutes()),
        info_row("Recurring", &recurrence),
    ]
}
