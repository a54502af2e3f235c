use std::str::FromStr;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use time::OffsetDateTime;

use super::*;

const CLOCK_EPOCH: i64 = 1_700_000_000;

/// Deterministic environment: every `now` call advances the clock by
/// one second, identifiers count up from one.
struct TestNoteStoreIo {
    clock: AtomicI64,
    next_id: AtomicU64,
}

impl TestNoteStoreIo {
    fn new() -> Self {
        TestNoteStoreIo {
            clock: AtomicI64::new(CLOCK_EPOCH),
            next_id: AtomicU64::new(1),
        }
    }
}

impl NoteStoreIo for TestNoteStoreIo {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(
            self.clock.fetch_add(1, Ordering::Relaxed),
        )
            .expect("test clock out of range")
    }

    fn generate_id(&self) -> Uuid {
        Uuid::from_u128(self.next_id.fetch_add(1, Ordering::Relaxed) as u128)
    }
}

fn make_store() -> MemoryNoteStoreImpl<TestNoteStoreIo> {
    MemoryNoteStoreImpl::new_internal(
        &AppConfig::default(),
        TestNoteStoreIo::new(),
    )
}

fn owner(name: &str) -> OwnerId {
    OwnerId::from_str(name).expect("invalid test owner")
}

fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft {
        title: Some(title.to_owned()),
        content: Some(content.to_owned()),
        color: None,
    }
}

#[tokio::test]
async fn create_applies_defaults() {
    let store = make_store();
    let note = store.create(&owner("abc"), NoteDraft::default())
        .await.expect("create failed");
    assert_eq!(note.title, "Untitled");
    assert_eq!(note.content, "");
    assert_eq!(note.color, "#ffffff");
    assert!(!note.archived);
    assert!(!note.deleted);
    assert_eq!(note.reminder, None);
    assert_eq!(note.created_at, note.updated_at);
}

#[tokio::test]
async fn create_coerces_blank_title_and_color() {
    let store = make_store();
    let note = store.create(
        &owner("abc"),
        NoteDraft {
            title: Some("   ".to_owned()),
            content: None,
            color: Some(String::new()),
        },
    ).await.expect("create failed");
    assert_eq!(note.title, "Untitled");
    assert_eq!(note.color, "#ffffff");
}

#[tokio::test]
async fn create_keeps_provided_fields() {
    let store = make_store();
    let note = store.create(
        &owner("abc"),
        NoteDraft {
            title: Some("Groceries".to_owned()),
            content: Some("milk, eggs".to_owned()),
            color: Some("#d5f9e5".to_owned()),
        },
    ).await.expect("create failed");
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "milk, eggs");
    assert_eq!(note.color, "#d5f9e5");
}

#[tokio::test]
async fn list_is_empty_when_nothing_matches() {
    let store = make_store();
    store.create(&owner("abc"), draft("a", ""))
        .await.expect("create failed");
    let notes = store.list(&owner("abc"), NoteView::Archived)
        .await.expect("list failed");
    assert!(notes.is_empty());
    let notes = store.list(&owner("nobody"), NoteView::Active)
        .await.expect("list failed");
    assert!(notes.is_empty());
}

#[tokio::test]
async fn list_scopes_to_owner() {
    let store = make_store();
    store.create(&owner("abc"), draft("mine", ""))
        .await.expect("create failed");
    store.create(&owner("xyz"), draft("theirs", ""))
        .await.expect("create failed");
    let notes = store.list(&owner("abc"), NoteView::Active)
        .await.expect("list failed");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "mine");
}

#[tokio::test]
async fn list_active_orders_most_recently_updated_first() {
    let store = make_store();
    let abc = owner("abc");
    let first = store.create(&abc, draft("first", ""))
        .await.expect("create failed");
    store.create(&abc, draft("second", ""))
        .await.expect("create failed");
    store.update(
        &abc,
        first.id,
        NotePatch {
            content: Some("bumped".to_owned()),
            ..NotePatch::default()
        },
    ).await.expect("update failed");

    let titles: Vec<String> = store.list(&abc, NoteView::Active)
        .await.expect("list failed")
        .into_iter()
        .map(|note| note.title)
        .collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[tokio::test]
async fn list_reminders_orders_soonest_first_and_skips_deleted() {
    let store = make_store();
    let abc = owner("abc");
    let later = store.create(&abc, draft("later", "")).await.unwrap();
    let sooner = store.create(&abc, draft("sooner", "")).await.unwrap();
    let gone = store.create(&abc, draft("gone", "")).await.unwrap();

    let base = OffsetDateTime::from_unix_timestamp(CLOCK_EPOCH).unwrap();
    for (id, offset) in [(later.id, 9_000), (sooner.id, 4_000), (gone.id, 1)] {
        store.update(
            &abc,
            id,
            NotePatch {
                reminder: Some(Some(base + time::Duration::seconds(offset))),
                ..NotePatch::default()
            },
        ).await.expect("update failed");
    }
    store.trash(&abc, gone.id).await.expect("trash failed");

    let titles: Vec<String> = store.list(&abc, NoteView::Reminders)
        .await.expect("list failed")
        .into_iter()
        .map(|note| note.title)
        .collect();
    assert_eq!(titles, vec!["sooner", "later"]);
}

#[tokio::test]
async fn list_reminders_includes_archived_notes() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("pinned", "")).await.unwrap();
    store.update(
        &abc,
        note.id,
        NotePatch {
            archived: Some(true),
            reminder: Some(Some(
                OffsetDateTime::from_unix_timestamp(CLOCK_EPOCH + 60).unwrap(),
            )),
            ..NotePatch::default()
        },
    ).await.expect("update failed");

    assert_eq!(store.list(&abc, NoteView::Reminders).await.unwrap().len(), 1);
    assert_eq!(store.list(&abc, NoteView::Archived).await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_unknown_id_not_found() {
    let store = make_store();
    let err = store.get(&owner("abc"), Uuid::from_u128(404))
        .await.expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn update_unknown_id_not_found() {
    let store = make_store();
    let err = store.update(&owner("abc"), Uuid::from_u128(404), NotePatch::default())
        .await.expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn update_foreign_owner_unauthorized_and_unchanged() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("mine", "before")).await.unwrap();

    let err = store.update(
        &owner("xyz"),
        note.id,
        NotePatch {
            content: Some("tampered".to_owned()),
            ..NotePatch::default()
        },
    ).await.expect_err("should fail");
    assert!(matches!(err, StoreError::Unauthorized), "wrong error type: {err:#?}");

    let unchanged = store.get(&abc, note.id).await.expect("get failed");
    assert_eq!(unchanged, note);
}

#[tokio::test]
async fn update_applies_only_present_fields() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("keep me", "old")).await.unwrap();

    let updated = store.update(
        &abc,
        note.id,
        NotePatch {
            content: Some("new".to_owned()),
            ..NotePatch::default()
        },
    ).await.expect("update failed");
    assert_eq!(updated.title, "keep me");
    assert_eq!(updated.content, "new");
    assert_eq!(updated.color, note.color);
    assert!(updated.updated_at > note.updated_at);
    assert_eq!(updated.created_at, note.created_at);
}

#[tokio::test]
async fn update_coerces_blank_title() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("named", "")).await.unwrap();
    let updated = store.update(
        &abc,
        note.id,
        NotePatch {
            title: Some("  ".to_owned()),
            ..NotePatch::default()
        },
    ).await.expect("update failed");
    assert_eq!(updated.title, "Untitled");
}

#[tokio::test]
async fn update_reminder_tri_state() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("pinned", "")).await.unwrap();
    let at = OffsetDateTime::from_unix_timestamp(CLOCK_EPOCH + 3_600).unwrap();

    let with_reminder = store.update(
        &abc,
        note.id,
        NotePatch {
            reminder: Some(Some(at)),
            ..NotePatch::default()
        },
    ).await.expect("update failed");
    assert_eq!(with_reminder.reminder, Some(at));

    // absent field leaves the reminder alone
    let untouched = store.update(
        &abc,
        note.id,
        NotePatch {
            content: Some("still pinned".to_owned()),
            ..NotePatch::default()
        },
    ).await.expect("update failed");
    assert_eq!(untouched.reminder, Some(at));

    // explicit null clears it
    let cleared = store.update(
        &abc,
        note.id,
        NotePatch {
            reminder: Some(None),
            ..NotePatch::default()
        },
    ).await.expect("update failed");
    assert_eq!(cleared.reminder, None);
}

#[tokio::test]
async fn trash_preserves_archived_flag() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("filed", "")).await.unwrap();
    store.update(
        &abc,
        note.id,
        NotePatch {
            archived: Some(true),
            ..NotePatch::default()
        },
    ).await.expect("update failed");

    let trashed = store.trash(&abc, note.id).await.expect("trash failed");
    assert!(trashed.deleted);
    assert!(trashed.archived);
    assert!(store.list(&abc, NoteView::Archived).await.unwrap().is_empty());
    assert_eq!(store.list(&abc, NoteView::Trashed).await.unwrap().len(), 1);
}

#[tokio::test]
async fn trash_twice_is_a_no_op_success() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("doomed", "")).await.unwrap();
    let once = store.trash(&abc, note.id).await.expect("trash failed");
    let twice = store.trash(&abc, note.id).await.expect("second trash failed");
    assert_eq!(twice, once);
    assert_eq!(twice.updated_at, once.updated_at);
}

#[tokio::test]
async fn restore_returns_note_to_preserved_view() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("filed", "")).await.unwrap();
    store.update(
        &abc,
        note.id,
        NotePatch {
            archived: Some(true),
            ..NotePatch::default()
        },
    ).await.expect("update failed");

    let trashed = store.trash(&abc, note.id).await.expect("trash failed");
    let restored = store.restore(&abc, note.id).await.expect("restore failed");
    assert!(!restored.deleted);
    assert!(restored.archived);
    assert!(restored.updated_at > trashed.updated_at);
    assert_eq!(store.list(&abc, NoteView::Archived).await.unwrap().len(), 1);
    assert!(store.list(&abc, NoteView::Active).await.unwrap().is_empty());
    assert!(store.list(&abc, NoteView::Trashed).await.unwrap().is_empty());
}

#[tokio::test]
async fn destroy_removes_permanently() {
    let store = make_store();
    let abc = owner("abc");
    let note = store.create(&abc, draft("doomed", "")).await.unwrap();
    store.trash(&abc, note.id).await.expect("trash failed");
    store.destroy(&abc, note.id).await.expect("destroy failed");

    for view in [
        NoteView::Active,
        NoteView::Archived,
        NoteView::Trashed,
        NoteView::Reminders,
    ] {
        assert!(store.list(&abc, view).await.unwrap().is_empty(), "{view}");
    }
    let err = store.get(&abc, note.id).await.expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error type: {err:#?}");
    let err = store.update(&abc, note.id, NotePatch::default())
        .await.expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn destroy_foreign_owner_unauthorized() {
    let store = make_store();
    let note = store.create(&owner("abc"), draft("mine", "")).await.unwrap();
    let err = store.destroy(&owner("xyz"), note.id)
        .await.expect_err("should fail");
    assert!(matches!(err, StoreError::Unauthorized), "wrong error type: {err:#?}");
    assert!(store.get(&owner("abc"), note.id).await.is_ok());
}

#[tokio::test]
async fn seed_demo_notes_covers_every_view() {
    let store = make_store();
    let demo = owner("demo");
    store.seed_demo_notes(&demo).await;

    assert_eq!(store.list(&demo, NoteView::Active).await.unwrap().len(), 3);
    assert_eq!(store.list(&demo, NoteView::Archived).await.unwrap().len(), 1);
    assert_eq!(store.list(&demo, NoteView::Trashed).await.unwrap().len(), 1);
    assert_eq!(store.list(&demo, NoteView::Reminders).await.unwrap().len(), 1);
}
