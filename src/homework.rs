//! Response validation and message formatting

use crate::client::{Homework, StatusesResponse};
use crate::status::ReviewStatus;

/// Pick the homework entry to act on, if any.
///
/// Only the first entry is ever inspected. The upstream API is assumed to
/// return at most one relevant change per poll window; this limitation is
/// deliberate and documented rather than silently generalized.
pub fn actionable_homework(response: &StatusesResponse) -> crate::Result<Option<&Homework>> {
    let Some(first) = response.homeworks.first() else {
        tracing::debug!("No homework changes since last poll");
        return Ok(None);
    };

    if ReviewStatus::from_code(&first.status).is_none() {
        return Err(crate::WatchError::UnknownStatus(first.status.clone()));
    }

    Ok(Some(first))
}

/// Format the notification text for a homework status change
pub fn status_message(homework: &Homework) -> crate::Result<String> {
    if homework.homework_name.is_empty() {
        return Err(crate::WatchError::MissingField("homework_name"));
    }

    // The validator runs first, so an unknown status here is defensive.
    let status = ReviewStatus::from_code(&homework.status)
        .ok_or(crate::WatchError::MissingField("status"))?;

    Ok(format!(
        "Changed review status for \"{}\". {}",
        homework.homework_name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(homeworks: Vec<Homework>) -> StatusesResponse {
        StatusesResponse {
            homeworks,
            current_date: 1000,
        }
    }

    fn homework(name: &str, status: &str) -> Homework {
        Homework {
            homework_name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn empty_homeworks_is_not_actionable() {
        let response = response_with(vec![]);
        assert!(actionable_homework(&response).unwrap().is_none());
    }

    #[test]
    fn known_status_is_actionable() {
        let response = response_with(vec![homework("hw1", "approved")]);
        let picked = actionable_homework(&response).unwrap().unwrap();
        assert_eq!(picked.homework_name, "hw1");
    }

    #[test]
    fn unknown_status_is_an_error() {
        let response = response_with(vec![homework("hw2", "in_progress")]);
        let err = actionable_homework(&response).unwrap_err();
        match &err {
            crate::WatchError::UnknownStatus(status) => assert_eq!(status, "in_progress"),
            other => panic!("expected WatchError::UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn only_the_first_entry_is_inspected() {
        // The second entry has an undocumented status but is never reached.
        let response = response_with(vec![
            homework("hw1", "reviewing"),
            homework("hw2", "in_progress"),
        ]);
        let picked = actionable_homework(&response).unwrap().unwrap();
        assert_eq!(picked.homework_name, "hw1");
    }

    #[test]
    fn message_contains_name_and_verdict_for_all_statuses() {
        for status in [
            ReviewStatus::Approved,
            ReviewStatus::Reviewing,
            ReviewStatus::Rejected,
        ] {
            let message = status_message(&homework("hw1", &status.to_string())).unwrap();
            assert!(message.contains("hw1"), "{message}");
            assert!(message.contains(status.verdict()), "{message}");
        }
    }

    #[test]
    fn message_matches_expected_format() {
        let message = status_message(&homework("hw1", "approved")).unwrap();
        assert_eq!(
            message,
            "Changed review status for \"hw1\". \
             Work reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = status_message(&homework("", "approved")).unwrap_err();
        assert!(matches!(
            err,
            crate::WatchError::MissingField("homework_name")
        ));
    }

    #[test]
    fn unknown_status_in_formatter_is_an_error() {
        let err = status_message(&homework("hw1", "bogus")).unwrap_err();
        assert!(matches!(err, crate::WatchError::MissingField("status")));
    }
}
