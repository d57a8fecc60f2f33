//! Interactive console front-end for the task board.
//!
//! Usage:
//!
//! ```text
//! TASKDESK_API_URL=https://tasks.example.test/api taskdesk
//! ```
//!
//! On startup the full collection is loaded once, then commands are read
//! from standard input until `quit` or end of input:
//!
//! ```text
//! list                       render the collection
//! add <title> :: <desc>      create a task (status starts pending)
//! edit <n>                   load row n into the form
//! title <text>               set the form title
//! desc <text>                set the form description
//! status <value>             set the form status (pending|in_progress|done)
//! save                       submit the form (create or update)
//! cancel                     clear the form and the edit selection
//! advance <n>                advance row n along the status chain
//! delete <n>                 delete row n
//! quit                       exit
//! ```
//!
//! Operation failures are logged through tracing and reported as a single
//! console line; nothing retries.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use taskdesk::config::{ApiConfig, ConfigError};
use taskdesk::task::adapters::http::HttpTaskCollaborator;
use taskdesk::task::domain::{TaskFields, TaskStatus};
use taskdesk::task::services::{OperationOutcome, TaskBoard, TaskCommand};
use taskdesk::ui::{TaskForm, TaskRow, rows};

/// Errors that abort the console front-end.
#[derive(Debug, Error)]
enum CliError {
    /// The collaborator endpoint is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading from or writing to the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whether the command loop should keep running.
enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::from_env()?;
    let collaborator = HttpTaskCollaborator::new(&config);
    let mut board = TaskBoard::new(Arc::new(collaborator));
    let mut form = TaskForm::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let initial = board.load_tasks().await;
    report(&mut out, &initial)?;
    render(&mut out, &board)?;

    let stdin = io::stdin();
    for read in stdin.lock().lines() {
        let line = read?;
        match dispatch(&mut out, &mut board, &mut form, line.trim()).await? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}

async fn dispatch(
    out: &mut impl Write,
    board: &mut TaskBoard<HttpTaskCollaborator>,
    form: &mut TaskForm,
    line: &str,
) -> Result<Flow, CliError> {
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match verb {
        "" => {}
        "quit" | "exit" => return Ok(Flow::Quit),
        "list" => render(out, board)?,
        "add" => add_task(out, board, rest).await?,
        "edit" => edit_row(out, board, form, rest)?,
        "title" => form.set_title(rest),
        "desc" => form.set_description(rest),
        "status" => set_form_status(out, form, rest)?,
        "save" => save_form(out, board, form).await?,
        "cancel" => {
            board.cancel_editing();
            form.clear();
        }
        "advance" => advance_row(out, board, rest).await?,
        "delete" => delete_row(out, board, rest).await?,
        _ => writeln!(out, "unknown command: {verb} (try: list, add, edit, save, advance, delete, quit)")?,
    }
    Ok(Flow::Continue)
}

/// One-shot create: `add <title> :: <description>`.
async fn add_task(
    out: &mut impl Write,
    board: &mut TaskBoard<HttpTaskCollaborator>,
    rest: &str,
) -> Result<(), CliError> {
    let Some((title, description)) = rest.split_once("::") else {
        writeln!(out, "usage: add <title> :: <description>")?;
        return Ok(());
    };
    match TaskFields::new(title, description, TaskStatus::Pending) {
        Ok(task_fields) => {
            let outcome = board.submit(TaskCommand::Create(task_fields)).await;
            report(out, &outcome)?;
            render(out, board)?;
        }
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn edit_row(
    out: &mut impl Write,
    board: &mut TaskBoard<HttpTaskCollaborator>,
    form: &mut TaskForm,
    rest: &str,
) -> Result<(), CliError> {
    let Some(row) = resolve_row(board, rest) else {
        writeln!(out, "no such row: {rest}")?;
        return Ok(());
    };
    board.begin_editing(row.id().clone());
    if let Some(task) = board.editing_task() {
        *form = TaskForm::for_task(task);
        writeln!(out, "editing '{}'", form.title())?;
    }
    Ok(())
}

fn set_form_status(
    out: &mut impl Write,
    form: &mut TaskForm,
    rest: &str,
) -> Result<(), CliError> {
    match TaskStatus::try_from(rest) {
        Ok(status) => form.set_status(status),
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

async fn save_form(
    out: &mut impl Write,
    board: &mut TaskBoard<HttpTaskCollaborator>,
    form: &mut TaskForm,
) -> Result<(), CliError> {
    match form.submit() {
        Ok(command) => {
            let outcome = board.submit(command).await;
            if outcome.is_completed() {
                form.clear();
            }
            report(out, &outcome)?;
            render(out, board)?;
        }
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

async fn advance_row(
    out: &mut impl Write,
    board: &mut TaskBoard<HttpTaskCollaborator>,
    rest: &str,
) -> Result<(), CliError> {
    let Some(row) = resolve_row(board, rest) else {
        writeln!(out, "no such row: {rest}")?;
        return Ok(());
    };
    // The advance action is offered only for the two non-terminal states.
    let Some(command) = row.advance_command() else {
        writeln!(out, "'{}' is already done", row.title())?;
        return Ok(());
    };
    let outcome = board.submit(command).await;
    report(out, &outcome)?;
    render(out, board)?;
    Ok(())
}

async fn delete_row(
    out: &mut impl Write,
    board: &mut TaskBoard<HttpTaskCollaborator>,
    rest: &str,
) -> Result<(), CliError> {
    let Some(row) = resolve_row(board, rest) else {
        writeln!(out, "no such row: {rest}")?;
        return Ok(());
    };
    let outcome = board.submit(row.delete_command()).await;
    report(out, &outcome)?;
    render(out, board)?;
    Ok(())
}

/// Resolves a one-based row number against the current collection.
fn resolve_row(board: &TaskBoard<HttpTaskCollaborator>, rest: &str) -> Option<TaskRow> {
    let number: usize = rest.parse().ok()?;
    let index = number.checked_sub(1)?;
    rows(board.tasks()).get(index).cloned()
}

fn render(out: &mut impl Write, board: &TaskBoard<HttpTaskCollaborator>) -> io::Result<()> {
    let listed = rows(board.tasks());
    if listed.is_empty() {
        writeln!(out, "(no tasks)")?;
        return Ok(());
    }
    for (position, row) in listed.iter().enumerate() {
        let actions = match row.advance_label() {
            Some(label) => format!("{label}, Delete"),
            None => "Delete".to_owned(),
        };
        writeln!(
            out,
            "{}. [{}] {} - {} ({})",
            position + 1,
            row.status(),
            row.title(),
            row.description(),
            actions
        )?;
    }
    Ok(())
}

fn report(out: &mut impl Write, outcome: &OperationOutcome) -> io::Result<()> {
    match outcome {
        OperationOutcome::Completed => Ok(()),
        OperationOutcome::Skipped => writeln!(out, "nothing to do"),
        OperationOutcome::Failed(err) => writeln!(out, "operation failed: {err}"),
    }
}
