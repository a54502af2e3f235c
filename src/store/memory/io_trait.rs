use time::OffsetDateTime;
use uuid::Uuid;

/// Environment seam for the in-memory backend: wall clock and
/// identifier generation, swapped for deterministic doubles in tests.
pub trait NoteStoreIo: Send + Sync {
    fn now(&self) -> OffsetDateTime;

    fn generate_id(&self) -> Uuid;
}

pub struct ProductionNoteStoreIo;

impl NoteStoreIo for ProductionNoteStoreIo {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
