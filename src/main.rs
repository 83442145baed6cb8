/*!
# moodlog - An Emotion Journal

moodlog is a command-line tool for reviewing an emotion journal: diary entries
tagged with one of eight emotions, with self-esteem and worthlessness scores
for worthlessness entries and an optional comment from a counselor.

This file contains the main application flow, coordinating the various components
to implement the journal functionality.

## Usage

```
moodlog [OPTIONS] [COMMAND]

Commands:
  status    Shows the current user, entry count and sync state
  recent    Lists the five most recently dated entries
  search    Searches entries by keyword, date range or emotion
  show      Shows one entry in full, including any counselor memo
  edit      Edits fields of an entry and saves it
  delete    Deletes an entry after confirmation
  calendar  Prints the date-picker grid for a month

Options:
  -v, --verbose            Print verbose output
      --log-format <FMT>   Log output format (text or json)
  -h, --help               Print help information
  -V, --version            Print version information
```

## Configuration

- `MOODLOG_DIR`: The directory holding the journal data (defaults to "~/Documents/moodlog")
- `MOODLOG_USER` or `USER`: The name shown by `status` (defaults to "guest")
- `RUST_LOG`: Log filter (defaults to "info", or "debug" with `--verbose`)
*/

use chrono::{Local, NaiveDate};
use moodlog::cli::output::{render_entry, render_status, render_view};
use moodlog::cli::{parse_cli_date, parse_month, CliArgs, Commands};
use moodlog::config::Config;
use moodlog::constants::{
    DEFAULT_LOG_LEVEL, ENV_VAR_CI, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use moodlog::errors::{AppResult, SessionError};
use moodlog::identity::ConfiguredIdentity;
use moodlog::interaction::{AutoConfirm, Confirm, NotificationLog, TerminalPrompt};
use moodlog::journal_core::calendar;
use moodlog::journal_core::display::render_calendar;
use moodlog::journal_core::EntryId;
use moodlog::ops::{DeleteOutcome, Workspace};
use moodlog::store::file::ensure_data_directory_exists;
use moodlog::store::{EntryStore, FileBlobStore};
use std::env;
use std::io;
use std::process;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Installs the global tracing subscriber.
///
/// JSON lines are written when `--log-format json` is given, or when no
/// format is given and `CI` is set. All log output goes to stderr.
fn init_tracing(args: &CliArgs) {
    let filter = if args.verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let use_json = match args.log_format.as_deref() {
        Some(format) => format == LOG_FORMAT_JSON,
        None => env::var(ENV_VAR_CI).is_ok(),
    };

    let registry = tracing_subscriber::registry().with(filter);
    if use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .init();
    }
}

/// The main entry point for moodlog.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging under a root span carrying a correlation id
/// 3. Runs the requested command, reporting any error on stderr
fn main() {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    debug!("CLI arguments: {:?}", args);
    let today = Local::now().date_naive();

    if let Err(e) = run(args, today) {
        error!(error = %e, "Application error");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Loads configuration and the journal, then dispatches the command.
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (invalid data directory)
/// - I/O errors (the data directory cannot be created)
/// - Journal logic errors (invalid date, month or emotion arguments)
/// - Edit errors (unknown entry id, scores on a non-worthlessness entry)
/// - Storage errors (the journal could not be written)
fn run(args: CliArgs, today: NaiveDate) -> AppResult<()> {
    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    ensure_data_directory_exists(&config.data_dir)?;

    let store = EntryStore::new(FileBlobStore::new(&config.data_dir));
    let identity = ConfiguredIdentity::from_config(&config);
    let mut workspace = Workspace::open(store, &identity, today);

    match args.command.unwrap_or(Commands::Recent) {
        Commands::Status => print!("{}", render_status(&workspace.status())),
        Commands::Recent => print!("{}", render_view(&workspace.view(), workspace.search())),
        Commands::Search(search) => {
            *workspace.search_mut() = search.to_spec()?;
            print!("{}", render_view(&workspace.view(), workspace.search()));
        }
        Commands::Show { id } => {
            let id = EntryId::from(id);
            let entry = workspace
                .store()
                .get(&id)
                .ok_or_else(|| SessionError::UnknownEntry(id.to_string()))?;
            print!("{}", render_entry(entry));
        }
        Commands::Edit(edit) => {
            workspace.begin_edit(&EntryId::from(edit.id.as_str()))?;
            for (field, value) in edit.fields() {
                if let Err(e) = workspace.session_mut().set_field(field, value) {
                    workspace.cancel_edit()?;
                    return Err(e.into());
                }
            }

            let mut log = NotificationLog::new();
            let result = workspace.commit_edit(&mut log);
            print_notifications(&log);
            print!("{}", render_entry(&result?));
        }
        Commands::Delete { id, yes } => {
            let mut confirm: Box<dyn Confirm> = if yes {
                Box::new(AutoConfirm(true))
            } else {
                Box::new(TerminalPrompt::stdio(false))
            };
            let mut log = NotificationLog::new();
            let result = workspace.delete_entry(&EntryId::from(id), confirm.as_mut(), &mut log);
            print_notifications(&log);
            if result? == DeleteOutcome::Declined {
                println!("Nothing was deleted.");
            }
        }
        Commands::Calendar { month, selected } => {
            let reference = month.as_deref().map(parse_month).transpose()?.unwrap_or(today);
            let selected = selected.as_deref().map(parse_cli_date).transpose()?;
            let cells = calendar::generate(reference, selected, today);
            print!("{}", render_calendar(reference, &cells));
        }
    }

    Ok(())
}

fn print_notifications(log: &NotificationLog) {
    for notification in log.entries() {
        if notification.is_success() {
            println!("{}", notification);
        } else {
            eprintln!("{}", notification);
        }
    }
}
