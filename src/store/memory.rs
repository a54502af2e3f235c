use std::collections::HashMap;

use async_trait::async_trait;
use log::info;
use time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::app_config::AppConfig;
use crate::data::{Note, NoteDraft, NotePatch};
use crate::lifecycle::{NoteView, is_in_view, view_ordering};
use crate::owner_id::OwnerId;
use crate::store::{NoteStore, StoreError};
use crate::util::StrExt;

use io_trait::{NoteStoreIo, ProductionNoteStoreIo};

pub mod io_trait;
#[cfg(test)] mod tests;

const UNTITLED_TITLE: &str = "Untitled";

pub type MemoryNoteStore = MemoryNoteStoreImpl<ProductionNoteStoreIo>;

/// Reference backend: a single guarded map. Every mutation runs as one
/// step under the write lock, so no partial update is observable and
/// read-modify-write cannot interleave between requests.
pub struct MemoryNoteStoreImpl<Io: NoteStoreIo> {
    state: RwLock<HashMap<Uuid, Note>>,
    default_color: String,
    io: Io,
}

impl MemoryNoteStore {
    pub fn new(config: &AppConfig) -> MemoryNoteStore {
        Self::new_internal(config, ProductionNoteStoreIo)
    }
}

impl<Io: NoteStoreIo> MemoryNoteStoreImpl<Io> {
    fn new_internal(config: &AppConfig, io: Io) -> MemoryNoteStoreImpl<Io> {
        MemoryNoteStoreImpl {
            state: RwLock::new(HashMap::new()),
            default_color: config.default_color.clone(),
            io,
        }
    }

    /// Sample notes for demo installations, one per lifecycle corner.
    pub async fn seed_demo_notes(&self, owner: &OwnerId) {
        let base = self.io.now();
        let samples: [(&str, &str, &str, bool, bool, Option<Duration>); 5] = [
            (
                "Welcome to QuickNotes!",
                "This is a sample note. You can create, edit, and \
                    organize your notes here.",
                "#f9d5e5",
                false, false, None,
            ),
            (
                "Shopping List",
                "- Milk\n- Eggs\n- Bread\n- Fruits",
                "#d5f9e5",
                false, false, None,
            ),
            (
                "Archived Note",
                "This is an archived note for testing.",
                "#e5d5f9",
                true, false, None,
            ),
            (
                "Deleted Note",
                "This is a deleted note for testing.",
                "#f9e5d5",
                false, true, None,
            ),
            (
                "Note with Reminder",
                "Don't forget to check this!",
                "#d5e5f9",
                false, false, Some(Duration::days(2)),
            ),
        ];
        let sample_count = samples.len();
        let mut state = self.state.write().await;
        for (position, (title, content, color, archived, deleted, reminder))
            in samples.into_iter().enumerate()
        {
            let at = base - Duration::hours((sample_count - position) as i64);
            let note = Note {
                id: self.io.generate_id(),
                owner: owner.clone(),
                title: title.to_owned(),
                content: content.to_owned(),
                color: color.to_owned(),
                archived,
                deleted,
                reminder: reminder.map(|offset| base + offset),
                created_at: at,
                updated_at: at,
            };
            state.insert(note.id, note);
        }
        info!("seeded {sample_count} demo notes for owner \"{owner}\"");
    }

    fn coerced_title(title: Option<String>) -> String {
        title
            .and_then(|t| t.nonblank_to_some())
            .unwrap_or_else(|| UNTITLED_TITLE.to_owned())
    }

    fn coerced_color(&self, color: Option<String>) -> String {
        color
            .and_then(|c| c.nonblank_to_some())
            .unwrap_or_else(|| self.default_color.clone())
    }
}

fn authorized<'a>(
    notes: &'a mut HashMap<Uuid, Note>,
    owner: &OwnerId,
    id: Uuid,
) -> Result<&'a mut Note, StoreError> {
    let note = notes.get_mut(&id).ok_or(StoreError::NotFound)?;
    if note.owner != *owner {
        return Err(StoreError::Unauthorized);
    }
    Ok(note)
}

#[async_trait]
impl<Io: NoteStoreIo> NoteStore for MemoryNoteStoreImpl<Io> {
    async fn list(
        &self,
        owner: &OwnerId,
        view: NoteView,
    ) -> Result<Vec<Note>, StoreError> {
        let state = self.state.read().await;
        let mut notes: Vec<Note> = state.values()
            .filter(|note| note.owner == *owner && is_in_view(note, view))
            .cloned()
            .collect();
        notes.sort_by(view_ordering(view));
        Ok(notes)
    }

    async fn get(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, StoreError> {
        let state = self.state.read().await;
        let note = state.get(&id).ok_or(StoreError::NotFound)?;
        if note.owner != *owner {
            return Err(StoreError::Unauthorized);
        }
        Ok(note.clone())
    }

    async fn create(
        &self,
        owner: &OwnerId,
        draft: NoteDraft,
    ) -> Result<Note, StoreError> {
        let now = self.io.now();
        let note = Note {
            id: self.io.generate_id(),
            owner: owner.clone(),
            title: Self::coerced_title(draft.title),
            content: draft.content.unwrap_or_default(),
            color: self.coerced_color(draft.color),
            archived: false,
            deleted: false,
            reminder: None,
            created_at: now,
            updated_at: now,
        };
        let mut state = self.state.write().await;
        let previous = state.insert(note.id, note.clone());
        debug_assert!(previous.is_none(), "identifier collision on create");
        Ok(note)
    }

    async fn update(
        &self,
        owner: &OwnerId,
        id: Uuid,
        patch: NotePatch,
    ) -> Result<Note, StoreError> {
        let mut state = self.state.write().await;
        let note = authorized(&mut state, owner, id)?;
        if let Some(title) = patch.title {
            note.title = Self::coerced_title(Some(title));
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(color) = patch.color {
            note.color = self.coerced_color(Some(color));
        }
        if let Some(archived) = patch.archived {
            note.archived = archived;
        }
        if let Some(reminder) = patch.reminder {
            note.reminder = reminder;
        }
        note.updated_at = self.io.now();
        Ok(note.clone())
    }

    async fn trash(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, StoreError> {
        let mut state = self.state.write().await;
        let note = authorized(&mut state, owner, id)?;
        if !note.deleted {
            note.deleted = true;
            note.updated_at = self.io.now();
        }
        Ok(note.clone())
    }

    async fn restore(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, StoreError> {
        let mut state = self.state.write().await;
        let note = authorized(&mut state, owner, id)?;
        note.deleted = false;
        note.updated_at = self.io.now();
        Ok(note.clone())
    }

    async fn destroy(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        authorized(&mut state, owner, id)?;
        state.remove(&id);
        Ok(())
    }
}
