use log::{debug, info, warn};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::data::{Note, NoteDraft, NotePatch};
use crate::lifecycle::NoteView;
use crate::owner_id::OwnerId;
use crate::store::{NoteStore, StoreError};

mod errors;

pub use errors::NoteServiceError;

/// Lifecycle controller: one store call per user intent. The one hard
/// state-machine rule lives here — permanent destruction is reachable
/// only through the trash, never straight from active or archived.
pub struct NoteService {
    store: Box<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Box<dyn NoteStore>) -> Self {
        NoteService { store }
    }

    pub async fn list_notes(
        &self,
        owner: &OwnerId,
        view: NoteView,
    ) -> Result<Vec<Note>, NoteServiceError> {
        debug!("listing {view} notes for owner \"{owner}\"");
        Ok(self.store.list(owner, view).await?)
    }

    pub async fn create_note(
        &self,
        owner: &OwnerId,
        draft: NoteDraft,
    ) -> Result<Note, NoteServiceError> {
        debug!("creating a note for owner \"{owner}\"");
        let note = self.store.create(owner, draft).await?;
        info!("owner \"{owner}\" created note {}", note.id);
        Ok(note)
    }

    pub async fn edit_note(
        &self,
        owner: &OwnerId,
        id: Uuid,
        patch: NotePatch,
    ) -> Result<Note, NoteServiceError> {
        debug!("editing note {id} for owner \"{owner}\"");
        let note = self.store.update(owner, id, patch).await?;
        info!("owner \"{owner}\" edited note {id}");
        Ok(note)
    }

    pub async fn archive_note(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, NoteServiceError> {
        self.set_archived(owner, id, true).await
    }

    pub async fn unarchive_note(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, NoteServiceError> {
        self.set_archived(owner, id, false).await
    }

    async fn set_archived(
        &self,
        owner: &OwnerId,
        id: Uuid,
        archived: bool,
    ) -> Result<Note, NoteServiceError> {
        debug!("setting archived={archived} on note {id} for owner \"{owner}\"");
        let note = self.store
            .update(
                owner,
                id,
                NotePatch {
                    archived: Some(archived),
                    ..NotePatch::default()
                },
            )
            .await?;
        info!(
            "owner \"{owner}\" moved note {id} to the {} view",
            crate::lifecycle::view_of(&note),
        );
        Ok(note)
    }

    pub async fn set_reminder(
        &self,
        owner: &OwnerId,
        id: Uuid,
        at: OffsetDateTime,
    ) -> Result<Note, NoteServiceError> {
        debug!("setting a reminder on note {id} for owner \"{owner}\"");
        let note = self.store
            .update(
                owner,
                id,
                NotePatch {
                    reminder: Some(Some(at)),
                    ..NotePatch::default()
                },
            )
            .await?;
        info!("owner \"{owner}\" set a reminder at {at} on note {id}");
        Ok(note)
    }

    pub async fn clear_reminder(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, NoteServiceError> {
        debug!("clearing the reminder on note {id} for owner \"{owner}\"");
        let note = self.store
            .update(
                owner,
                id,
                NotePatch {
                    reminder: Some(None),
                    ..NotePatch::default()
                },
            )
            .await?;
        info!("owner \"{owner}\" cleared the reminder on note {id}");
        Ok(note)
    }

    pub async fn trash_note(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, NoteServiceError> {
        debug!("trashing note {id} for owner \"{owner}\"");
        let note = self.store.trash(owner, id).await?;
        info!("owner \"{owner}\" moved note {id} to the trash");
        Ok(note)
    }

    pub async fn restore_note(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, NoteServiceError> {
        debug!("restoring note {id} for owner \"{owner}\"");
        let note = self.store.restore(owner, id).await?;
        info!(
            "owner \"{owner}\" restored note {id} to the {} view",
            crate::lifecycle::view_of(&note),
        );
        Ok(note)
    }

    pub async fn destroy_note(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<(), NoteServiceError> {
        debug!("destroying note {id} for owner \"{owner}\"");
        let note = self.store.get(owner, id).await?;
        if !note.deleted {
            warn!(
                "owner \"{owner}\" attempted to destroy note {id} \
                    outside the trash"
            );
            return Err(StoreError::NotFound.into());
        }
        self.store.destroy(owner, id).await?;
        info!("owner \"{owner}\" permanently destroyed note {id}");
        Ok(())
    }
}
