//! Unit tests for the forward-only status chain.

use rstest::rstest;

use crate::task::domain::TaskStatus;

#[rstest]
#[case(TaskStatus::Pending, Some(TaskStatus::InProgress))]
#[case(TaskStatus::InProgress, Some(TaskStatus::Done))]
#[case(TaskStatus::Done, None)]
fn successor_follows_the_chain(
    #[case] from: TaskStatus,
    #[case] expected: Option<TaskStatus>,
) {
    assert_eq!(from.successor(), expected);
}

#[rstest]
#[case(TaskStatus::Pending, false)]
#[case(TaskStatus::InProgress, false)]
#[case(TaskStatus::Done, true)]
fn only_done_is_terminal(#[case] status: TaskStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
fn default_status_is_pending() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}

#[rstest]
fn the_chain_ends_after_two_steps() {
    let mut status = TaskStatus::Pending;
    let mut steps = 0;
    while let Some(next) = status.successor() {
        status = next;
        steps += 1;
    }

    assert_eq!(steps, 2);
    assert_eq!(status, TaskStatus::Done);
}

#[rstest]
#[case(TaskStatus::Pending)]
#[case(TaskStatus::InProgress)]
#[case(TaskStatus::Done)]
fn canonical_string_round_trips(#[case] status: TaskStatus) {
    assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
}
