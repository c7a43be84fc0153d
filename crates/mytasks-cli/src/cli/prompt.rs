/*
[INPUT]:  Current task form and user input via terminal prompts
[OUTPUT]: Form edits for the add/edit screens
[POS]:    CLI interactive flow
[UPDATE]: When form fields or their prompts change
*/

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use mytasks_adapter::{DueDate, FormField, Priority, RecurrencePattern, TaskForm, TaskStatus};

/// Walk every form field, pre-filled from `form`, and return the fields
/// the user changed. `createdBy` is only offered when `allow_created_by`.
pub fn prompt_form(form: &TaskForm, allow_created_by: bool) -> Result<Vec<FormField>> {
    let theme = ColorfulTheme::default();
    let mut edits = Vec::new();

    let title = text(&theme, "Title", form.title(), false)?;
    push_if_changed(&mut edits, form.title(), title, FormField::Title);

    let description = text(&theme, "Description", form.description(), true)?;
    push_if_changed(&mut edits, form.description(), description, FormField::Description);

    let status = choose(&theme, "Status", &TaskStatus::ALL, form.status(), TaskStatus::as_str)?;
    if status != form.status() {
        edits.push(FormField::Status(status));
    }

    let priority = choose(
        &theme,
        "Priority",
        &Priority::ALL,
        form.priority(),
        Priority::as_str,
    )?;
    if priority != form.priority() {
        edits.push(FormField::Priority(priority));
    }

    let due_date = due_date(&theme, form.due_date())?;
    push_if_changed(&mut edits, form.due_date(), due_date, FormField::DueDate);

    let category = text(&theme, "Category", form.category(), true)?;
    push_if_changed(&mut edits, form.category(), category, FormField::Category);

    let tags = text(&theme, "Tags (comma separated)", form.tags(), true)?;
    push_if_changed(&mut edits, form.tags(), tags, FormField::Tags);

    let assigned_to = text(&theme, "Assigned to", form.assigned_to(), true)?;
    push_if_changed(&mut edits, form.assigned_to(), assigned_to, FormField::AssignedTo);

    if allow_created_by {
        let created_by = text(&theme, "Created by", form.created_by(), true)?;
        push_if_changed(&mut edits, form.created_by(), created_by, FormField::CreatedBy);
    } else {
        println!(
            "{} {}",
            style("Created by:").dim(),
            style(form.created_by()).dim()
        );
    }

    let estimated = text(&theme, "Estimated minutes", form.estimated_minutes(), true)?;
    push_if_changed(
        &mut edits,
        form.estimated_minutes(),
        estimated,
        FormField::EstimatedMinutes,
    );

    let actual = text(&theme, "Actual minutes", form.actual_minutes(), true)?;
    push_if_changed(&mut edits, form.actual_minutes(), actual, FormField::ActualMinutes);

    let recurring = Confirm::with_theme(&theme)
        .with_prompt("Recurring task?")
        .default(form.is_recurring())
        .interact()?;
    if recurring != form.is_recurring() {
        edits.push(FormField::IsRecurring(recurring));
    }

    if recurring {
        let current = form.recurrence_pattern().unwrap_or(RecurrencePattern::Daily);
        let pattern = choose(
            &theme,
            "Repeat",
            &RecurrencePattern::ALL,
            current,
            RecurrencePattern::as_str,
        )?;
        if Some(pattern) != form.recurrence_pattern() {
            edits.push(FormField::RecurrencePattern(Some(pattern)));
        }
    }

    Ok(edits)
}

fn push_if_changed(
    edits: &mut Vec<FormField>,
    current: &str,
    next: String,
    field: fn(String) -> FormField,
) {
    if next != current {
        edits.push(field(next));
    }
}

fn text(theme: &ColorfulTheme, prompt: &str, current: &str, allow_empty: bool) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(allow_empty);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

fn choose<T: Copy + PartialEq>(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[T],
    current: T,
    label: fn(&T) -> &'static str,
) -> Result<T> {
    let items: Vec<&str> = options.iter().map(label).collect();
    let default = options
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;
    Ok(options[index])
}

/// Presets plus, for an existing free-form value, an option to keep it
fn due_date(theme: &ColorfulTheme, current: &str) -> Result<String> {
    let preset = current.parse::<DueDate>().ok();
    let mut items: Vec<String> = DueDate::ALL
        .iter()
        .map(|due| due.label().to_string())
        .collect();
    if preset.is_none() && !current.is_empty() {
        items.push(format!("Keep {}", current));
    }

    let default = match preset {
        Some(due) => DueDate::ALL.iter().position(|d| *d == due).unwrap_or(0),
        None if !current.is_empty() => DueDate::ALL.len(),
        None => 0,
    };
    let index = Select::with_theme(theme)
        .with_prompt("Due date")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(match DueDate::ALL.get(index) {
        Some(due) => due.as_str().to_string(),
        None => current.to_string(),
    })
}
