use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::data::Note;

/// The four projections a note can show up under.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoteView {
    Active,
    Archived,
    Trashed,
    Reminders,
}

impl Display for NoteView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            match self {
                NoteView::Active => "active",
                NoteView::Archived => "archived",
                NoteView::Trashed => "trashed",
                NoteView::Reminders => "reminders",
            }
        )
    }
}

/// The single exclusive view a note's flags place it in. Exactly one of
/// active/archived/trashed holds for every note; deletion overrides
/// archival.
pub fn view_of(note: &Note) -> NoteView {
    if note.deleted {
        NoteView::Trashed
    } else if note.archived {
        NoteView::Archived
    } else {
        NoteView::Active
    }
}

/// Whether the note projects into `view`. Reminders membership is
/// independent of the exclusive three and holds for any undeleted note
/// with a reminder set.
pub fn is_in_view(note: &Note, view: NoteView) -> bool {
    match view {
        NoteView::Reminders => note.reminder.is_some() && !note.deleted,
        exclusive => view_of(note) == exclusive,
    }
}

/// Ordering contract per view: reminders soonest first, everything else
/// most recently updated first.
pub fn view_ordering(view: NoteView) -> fn(&Note, &Note) -> Ordering {
    match view {
        NoteView::Reminders => |a, b| a.reminder.cmp(&b.reminder),
        _ => |a, b| b.updated_at.cmp(&a.updated_at),
    }
}
