use async_trait::async_trait;
use uuid::Uuid;

use crate::data::{Note, NoteDraft, NotePatch};
use crate::lifecycle::NoteView;
use crate::owner_id::OwnerId;

pub mod errors;
pub mod memory;

pub use errors::StoreError;
pub use memory::MemoryNoteStore;

/// Owner-scoped note persistence, partitioned by lifecycle view. Every
/// mutation is atomic with respect to concurrent requests on the same
/// identifier. The store applies input defaulting but knows nothing of
/// the view transition rules; those live in the service layer.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Notes of `owner` projecting into `view`, in the view's order
    /// (reminders soonest first, everything else most recently updated
    /// first). Empty when nothing matches.
    async fn list(
        &self,
        owner: &OwnerId,
        view: NoteView,
    ) -> Result<Vec<Note>, StoreError>;

    async fn get(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, StoreError>;

    async fn create(
        &self,
        owner: &OwnerId,
        draft: NoteDraft,
    ) -> Result<Note, StoreError>;

    /// Applies exactly the fields present in `patch` and refreshes
    /// `updated_at`.
    async fn update(
        &self,
        owner: &OwnerId,
        id: Uuid,
        patch: NotePatch,
    ) -> Result<Note, StoreError>;

    /// Soft delete. Leaves `archived` untouched so a later restore can
    /// put the note back where it was. Trashing an already-trashed note
    /// is a no-op success.
    async fn trash(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, StoreError>;

    async fn restore(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<Note, StoreError>;

    /// Permanent removal. The trashed-only precondition is enforced by
    /// the service, not here.
    async fn destroy(
        &self,
        owner: &OwnerId,
        id: Uuid,
    ) -> Result<(), StoreError>;
}
