//! crates/learnsolve_core/src/sync.rs
//!
//! The contract for keeping a local copy of backend records in step with the
//! store: fetches may be pending, ready or failed, and change notifications
//! are applied by replacing records by identifier. No ordering between
//! notifications and in-flight fetches is assumed.

use uuid::Uuid;

use crate::domain::{Doubt, UserProgress, Video};

/// Records that carry a stable identifier.
pub trait Identified {
    fn id(&self) -> Uuid;
}

impl Identified for Video {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for UserProgress {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Doubt {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// A change notification for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    Inserted(T),
    Updated(T),
    Deleted(Uuid),
}

/// Applies a change to a newest-first list.
///
/// Inserts and updates both upsert: an existing record with the same id is
/// replaced in place, otherwise the record goes to the front. Deleting an
/// unknown id is a no-op.
pub fn apply_change<T: Identified>(items: &mut Vec<T>, change: Change<T>) {
    match change {
        Change::Inserted(record) | Change::Updated(record) => {
            match items.iter_mut().find(|item| item.id() == record.id()) {
                Some(slot) => *slot = record,
                None => items.insert(0, record),
            }
        }
        Change::Deleted(id) => items.retain(|item| item.id() != id),
    }
}

/// The state of a request whose result a view renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The fetched value; `None` while pending or after a failure.
    pub fn into_ready(self) -> Option<T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DoubtStatus;
    use chrono::Utc;

    fn doubt(id: Uuid, text: &str) -> Doubt {
        Doubt {
            id,
            student_id: Uuid::nil(),
            video_id: Uuid::nil(),
            doubt_text: text.to_string(),
            ai_explanation: None,
            instructor_reply: None,
            status: DoubtStatus::Pending,
            created_at: Utc::now(),
            resolved_at: None,
        }
    }

    #[test]
    fn insert_prepends_and_update_replaces_in_place() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut items = vec![doubt(a, "a")];
        apply_change(&mut items, Change::Inserted(doubt(b, "b")));
        assert_eq!(items[0].id, b);

        apply_change(&mut items, Change::Updated(doubt(a, "a2")));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].doubt_text, "a2");
    }

    #[test]
    fn update_before_insert_is_not_lost() {
        let id = Uuid::new_v4();
        let mut items = Vec::new();
        apply_change(&mut items, Change::Updated(doubt(id, "late")));
        apply_change(&mut items, Change::Inserted(doubt(id, "late")));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn delete_of_unknown_id_is_noop() {
        let id = Uuid::new_v4();
        let mut items = vec![doubt(id, "x")];
        apply_change(&mut items, Change::Deleted(Uuid::new_v4()));
        assert_eq!(items.len(), 1);
        apply_change(&mut items, Change::Deleted(id));
        assert!(items.is_empty());
    }

    #[test]
    fn fetch_state_from_result() {
        let ok: FetchState<u8> = FetchState::from_result(Ok::<u8, String>(3));
        assert_eq!(ok.ready(), Some(&3));
        let failed: FetchState<u8> = FetchState::from_result(Err("offline"));
        assert_eq!(failed, FetchState::Failed("offline".into()));
        assert_eq!(failed.into_ready(), None);
        assert_eq!(FetchState::<u8>::default(), FetchState::Pending);
    }
}
