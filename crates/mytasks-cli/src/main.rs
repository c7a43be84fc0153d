/*
[INPUT]:  CLI arguments, optional YAML configuration file, OS shutdown signals
[OUTPUT]: One rendered task screen and a process exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mytasks_adapter::{FormError, FormField, TaskClient, TaskForm};
use mytasks_cli::{
    AddScreen, AppConfig, EditScreen, ListScreen, Screen, ViewScope, ViewScreen, parse_assignment,
};

const EXIT_CANCELLED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "mytasks", version, about = "List, view, add and edit tasks")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", env = "MYTASKS_BASE_URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every task
    List,
    /// Show one task
    View { id: u64 },
    /// Create a task
    Add {
        #[command(flatten)]
        fields: FieldArgs,
        /// Prompt for each field
        #[arg(short, long)]
        interactive: bool,
    },
    /// Change an existing task
    Edit {
        id: u64,
        #[command(flatten)]
        fields: FieldArgs,
        /// Prompt for each field
        #[arg(short, long)]
        interactive: bool,
    },
}

#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// todo, in_progress, completed or cancelled
    #[arg(long)]
    status: Option<String>,
    /// low, medium, high or urgent
    #[arg(long)]
    priority: Option<String>,
    /// today, tomorrow or this_week
    #[arg(long = "due", value_name = "DUE")]
    due_date: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Comma separated
    #[arg(long)]
    tags: Option<String>,
    #[arg(long)]
    assigned_to: Option<String>,
    #[arg(long)]
    created_by: Option<String>,
    #[arg(long, value_name = "MINUTES")]
    estimated_minutes: Option<String>,
    #[arg(long, value_name = "MINUTES")]
    actual_minutes: Option<String>,
    /// true or false
    #[arg(long, value_name = "BOOL")]
    recurring: Option<String>,
    /// daily, weekly, monthly or none
    #[arg(long, value_name = "PATTERN")]
    repeat: Option<String>,
    /// Any field as NAME=VALUE, applied after the typed flags
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

impl FieldArgs {
    fn into_edits(self) -> Result<Vec<FormField>, FormError> {
        let typed = [
            ("title", self.title),
            ("description", self.description),
            ("status", self.status),
            ("priority", self.priority),
            ("dueDate", self.due_date),
            ("category", self.category),
            ("tags", self.tags),
            ("assignedTo", self.assigned_to),
            ("createdBy", self.created_by),
            ("estimatedMinutes", self.estimated_minutes),
            ("actualMinutes", self.actual_minutes),
            ("isRecurring", self.recurring.clone()),
            ("recurrencePattern", self.repeat.clone()),
        ];

        let mut edits = typed
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| FormField::parse(name, &value)))
            .collect::<Result<Vec<_>, _>>()?;

        // --repeat without --recurring turns repetition on
        if self.recurring.is_none()
            && edits
                .iter()
                .any(|edit| matches!(edit, FormField::RecurrencePattern(Some(_))))
        {
            edits.push(FormField::IsRecurring(true));
        }

        for raw in &self.set {
            edits.push(parse_assignment(raw)?);
        }
        Ok(edits)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(args.config_path.as_deref())
        .context("load config")?
        .with_base_url(args.base_url);
    info!(base_url = %config.base_url, "starting mytasks");

    let client = TaskClient::with_config(config.client_config()).context("create task client")?;

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());
    let scope = ViewScope::child_of(&shutdown);

    let screen: Box<dyn Screen> = match args.command {
        Command::List => {
            let mut screen = ListScreen::new();
            screen.mount(&client, &scope).await;
            Box::new(screen)
        }
        Command::View { id } => {
            let mut screen = ViewScreen::new(id);
            screen.mount(&client, &scope).await;
            Box::new(screen)
        }
        Command::Add {
            fields,
            interactive,
        } => {
            let mut screen = AddScreen::new(config.created_by.clone())
                .with_edits(fields.into_edits().context("invalid task fields")?);
            if interactive {
                let edits = prompt(screen.form().clone(), true).await?;
                screen = screen.with_edits(edits);
            }
            screen.submit(&client, &scope).await;
            Box::new(screen)
        }
        Command::Edit {
            id,
            fields,
            interactive,
        } => {
            let mut screen = EditScreen::new(id);
            screen.mount(&client, &scope).await;
            if let Some(form) = screen.form().cloned() {
                let mut edits = fields.into_edits().context("invalid task fields")?;
                if interactive {
                    let current = edits
                        .iter()
                        .filter(|edit| !matches!(edit, FormField::CreatedBy(_)))
                        .cloned()
                        .fold(form, TaskForm::with_field);
                    edits.extend(prompt(current, false).await?);
                }
                screen.submit(&client, &scope, edits).await;
            }
            Box::new(screen)
        }
    };

    if scope.is_cancelled() {
        warn!("request cancelled before completion");
        eprintln!("{}", style("cancelled").yellow());
        return Ok(ExitCode::from(EXIT_CANCELLED));
    }

    for line in screen.render() {
        println!("{}", line);
    }

    Ok(if screen.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run the blocking terminal prompts off the async runtime
async fn prompt(form: TaskForm, allow_created_by: bool) -> Result<Vec<FormField>> {
    tokio::task::spawn_blocking(move || cli::prompt::prompt_form(&form, allow_created_by))
        .await
        .context("join prompt")?
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mytasks_adapter::{Priority, RecurrencePattern};

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_field_args_become_edits() {
        let cli = Cli::try_parse_from([
            "mytasks",
            "add",
            "--title",
            "Water plants",
            "--priority",
            "high",
            "--repeat",
            "weekly",
            "--set",
            "estimatedMinutes=15",
        ])
        .expect("parse");

        let Command::Add { fields, .. } = cli.command else {
            panic!("expected add");
        };
        let edits = fields.into_edits().expect("edits");
        assert_eq!(
            edits,
            vec![
                FormField::Title("Water plants".to_string()),
                FormField::Priority(Priority::High),
                FormField::RecurrencePattern(Some(RecurrencePattern::Weekly)),
                FormField::IsRecurring(true),
                FormField::EstimatedMinutes("15".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let fields = FieldArgs {
            priority: Some("asap".to_string()),
            ..FieldArgs::default()
        };
        assert!(matches!(
            fields.into_edits(),
            Err(FormError::InvalidValue {
                field: "priority",
                ..
            })
        ));
    }

    #[test]
    fn test_base_url_reads_environment() {
        use clap::CommandFactory;
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "base_url")
            .expect("base-url argument");
        assert_eq!(
            arg.get_env(),
            Some(std::ffi::OsStr::new("MYTASKS_BASE_URL"))
        );
        assert!(arg.is_global_set());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["mytasks", "view", "7", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::View { id: 7 }));
    }
}
