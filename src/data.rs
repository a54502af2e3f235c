use time::OffsetDateTime;
use uuid::Uuid;

use crate::owner_id::OwnerId;

/// A single note. `archived` and `deleted` are independent flags;
/// `deleted` wins when deciding which view the note shows up in.
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub owner: OwnerId,
    pub title: String,
    pub content: String,
    pub color: String,
    pub archived: bool,
    pub deleted: bool,
    pub reminder: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Input for note creation. Missing or blank fields are defaulted by
/// the store, never rejected.
#[derive(Clone, Debug, Default)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
}

/// Partial update. `None` leaves a field unchanged; the nested option on
/// `reminder` distinguishes "leave alone" from "clear".
#[derive(Clone, Debug, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
    pub archived: Option<bool>,
    pub reminder: Option<Option<OffsetDateTime>>,
}
