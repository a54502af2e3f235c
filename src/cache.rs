use std::collections::HashMap;

use uuid::Uuid;

use crate::data::Note;
use crate::lifecycle::{NoteView, is_in_view, view_ordering};

/// Client-side mirror of the server's note set: one normalized map from
/// identifier to note, with the four views computed on demand. After a
/// mutation returns the authoritative note, a single [upsert] moves it
/// out of every stale view and into the one its flags imply; there is
/// no per-view bookkeeping to drift.
#[derive(Debug, Default)]
pub struct NoteCache {
    notes: HashMap<Uuid, Note>,
}

impl NoteCache {
    pub fn new() -> Self {
        NoteCache::default()
    }

    /// Reconcile one note after a mutation. Replaces any cached copy.
    pub fn upsert(&mut self, note: Note) {
        self.notes.insert(note.id, note);
    }

    /// Reconcile a permanent destruction. Removing an identifier the
    /// cache never held (or already dropped) is a no-op, not an error —
    /// a stale cache must not turn into a failure.
    pub fn remove(&mut self, id: Uuid) {
        self.notes.remove(&id);
    }

    /// Reconcile a full fetch of one view: whatever the cache currently
    /// projects into that view is superseded by the server's answer.
    pub fn ingest(&mut self, view: NoteView, notes: Vec<Note>) {
        let stale: Vec<Uuid> = self.notes.values()
            .filter(|note| is_in_view(note, view))
            .map(|note| note.id)
            .collect();
        for id in stale {
            self.notes.remove(&id);
        }
        for note in notes {
            self.upsert(note);
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.notes.get(&id)
    }

    /// The cached notes projecting into `view`, in the server's order.
    pub fn view(&self, view: NoteView) -> Vec<&Note> {
        let ordering = view_ordering(view);
        let mut notes: Vec<&Note> = self.notes.values()
            .filter(|note| is_in_view(note, view))
            .collect();
        notes.sort_by(|a, b| ordering(a, b));
        notes
    }
}
