use quicknotes::data::{Note, NoteDraft, NotePatch};
use quicknotes::owner_id::OwnerId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl From<CreateNoteRequest> for NoteDraft {
    fn from(value: CreateNoteRequest) -> Self {
        NoteDraft {
            title: value.title,
            content: value.content,
            color: value.color,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    // absent key leaves the reminder alone, an explicit null clears it
    #[serde(
        default,
        deserialize_with = "deserialize_reminder_patch",
        skip_serializing_if = "Option::is_none",
    )]
    pub reminder: Option<Option<OffsetDateTime>>,
}

/// Double-option deserializer for the PUT `reminder` field that parses the
/// inner timestamp as RFC 3339: absent key stays `None`, `null` becomes
/// `Some(None)` (clear), a timestamp `Some(Some(_))`.
fn deserialize_reminder_patch<'de, D>(
    deserializer: D,
) -> Result<Option<Option<OffsetDateTime>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    time::serde::rfc3339::option::deserialize(deserializer).map(Some)
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(value: UpdateNoteRequest) -> Self {
        NotePatch {
            title: value.title,
            content: value.content,
            color: value.color,
            archived: value.archived,
            reminder: value.reminder,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: Uuid,
    pub owner: OwnerId,
    pub title: String,
    pub content: String,
    pub color: String,
    pub archived: bool,
    pub deleted: bool,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
    )]
    pub reminder: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Note> for NoteResponse {
    fn from(value: Note) -> Self {
        NoteResponse {
            id: value.id,
            owner: value.owner,
            title: value.title,
            content: value.content,
            color: value.color,
            archived: value.archived,
            deleted: value.deleted,
            reminder: value.reminder,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Ack and error bodies share one shape.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        MessageResponse { msg: msg.into() }
    }
}
