//! Task list rows: display data and per-row actions.
//!
//! Row construction is pure and preserves collaborator order. Each row
//! exposes an advance action for the two non-terminal statuses and a
//! delete action unconditionally.

use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::task::services::TaskCommand;

/// Advance-action label shown for a pending task.
pub const START_LABEL: &str = "Start";

/// Advance-action label shown for a task in progress.
pub const COMPLETE_LABEL: &str = "Complete";

/// Returns the advance-action label for a status, or `None` for the
/// terminal status where no advance action is offered.
#[must_use]
pub const fn advance_label(status: TaskStatus) -> Option<&'static str> {
    match status {
        TaskStatus::Pending => Some(START_LABEL),
        TaskStatus::InProgress => Some(COMPLETE_LABEL),
        TaskStatus::Done => None,
    }
}

/// Display row for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
}

impl TaskRow {
    /// Builds the row for a task.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
        }
    }

    /// Returns the task identifier backing this row.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the displayed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the displayed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the displayed status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the advance-action label, absent for a finished task.
    #[must_use]
    pub const fn advance_label(&self) -> Option<&'static str> {
        advance_label(self.status)
    }

    /// Returns the advance command, absent for a finished task.
    #[must_use]
    pub fn advance_command(&self) -> Option<TaskCommand> {
        if self.status.is_terminal() {
            return None;
        }
        Some(TaskCommand::AdvanceStatus(self.id.clone()))
    }

    /// Returns the delete command. Deletion is available in any state.
    #[must_use]
    pub fn delete_command(&self) -> TaskCommand {
        TaskCommand::Delete(self.id.clone())
    }
}

/// Builds one row per task, preserving collaborator order.
#[must_use]
pub fn rows(tasks: &[Task]) -> Vec<TaskRow> {
    tasks.iter().map(TaskRow::for_task).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{COMPLETE_LABEL, START_LABEL, TaskRow, advance_label, rows};
    use crate::task::domain::{Task, TaskFields, TaskId, TaskStatus};
    use crate::task::services::TaskCommand;

    fn task(id: &str, title: &str, status: TaskStatus) -> Task {
        let fields = TaskFields::new(title, "details", status).expect("valid fields");
        Task::new(TaskId::new(id).expect("valid identifier"), fields)
    }

    #[rstest]
    #[case(TaskStatus::Pending, Some(START_LABEL))]
    #[case(TaskStatus::InProgress, Some(COMPLETE_LABEL))]
    #[case(TaskStatus::Done, None)]
    fn advance_label_matches_status(
        #[case] status: TaskStatus,
        #[case] expected: Option<&'static str>,
    ) {
        assert_eq!(advance_label(status), expected);
    }

    #[rstest]
    fn rows_preserve_collaborator_order() {
        let tasks = [
            task("a", "first", TaskStatus::Pending),
            task("b", "second", TaskStatus::Done),
            task("c", "third", TaskStatus::InProgress),
        ];

        let built = rows(&tasks);

        let titles: Vec<&str> = built.iter().map(TaskRow::title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[rstest]
    fn finished_task_offers_no_advance_action() {
        let row = TaskRow::for_task(&task("a", "done already", TaskStatus::Done));

        assert_eq!(row.advance_label(), None);
        assert_eq!(row.advance_command(), None);
    }

    #[rstest]
    #[case(TaskStatus::Pending)]
    #[case(TaskStatus::InProgress)]
    #[case(TaskStatus::Done)]
    fn delete_action_is_available_in_any_state(#[case] status: TaskStatus) {
        let row = TaskRow::for_task(&task("a", "any", status));

        assert_eq!(
            row.delete_command(),
            TaskCommand::Delete(row.id().clone())
        );
    }

    #[rstest]
    fn advance_command_carries_the_row_identifier() {
        let row = TaskRow::for_task(&task("a", "pending", TaskStatus::Pending));

        assert_eq!(
            row.advance_command(),
            Some(TaskCommand::AdvanceStatus(row.id().clone()))
        );
    }
}
