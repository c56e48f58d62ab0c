use tempfile::tempdir;
use tokio::fs;

use quillnote_core::config::StoreConfig;
use quillnote_core::storage::{Error, NoteStore, PLACEHOLDER_TITLE};

// Two stores over one configuration stand in for the two independent
// processes (host app and picker) that share the container.
fn two_stores(base: &std::path::Path) -> (NoteStore, NoteStore) {
    let config = StoreConfig::with_base_dir(base);
    (NoteStore::new(config.clone()), NoteStore::new(config))
}

#[tokio::test]
async fn integration_processes_agree_on_locations() {
    let dir = tempdir().unwrap();
    let (app, picker) = two_stores(dir.path());

    for title in ["Groceries", "", "meeting notes", "Untitled"] {
        let from_app = app.path_for_title(title).await.unwrap();
        let from_picker = picker.path_for_title(title).await.unwrap();
        assert_eq!(
            from_app, from_picker,
            "processes diverged on title {title:?}"
        );
    }
}

#[tokio::test]
async fn integration_note_saved_by_one_process_is_visible_to_the_other() {
    let dir = tempdir().unwrap();
    let (app, picker) = two_stores(dir.path());

    // 1. The app creates and saves a note.
    let note = app.create_note("Shared").await.unwrap();
    app.write_text(&note, "hello from the app").await.unwrap();

    // 2. The picker enumerates and reads it back without coordination.
    let listed = picker.list_notes().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title(), "Shared");
    assert_eq!(listed[0].location(), note.location());
    assert_eq!(
        picker.read_text(&listed[0]).await.unwrap(),
        Some("hello from the app".to_string())
    );

    // 3. A write through the picker's handle is seen by the app.
    picker
        .write_text(&listed[0], "edited by the requester")
        .await
        .unwrap();
    assert_eq!(
        app.read_text(&note).await.unwrap(),
        Some("edited by the requester".to_string())
    );
}

#[tokio::test]
async fn integration_concurrent_writes_are_last_writer_wins() {
    let dir = tempdir().unwrap();
    let (app, picker) = two_stores(dir.path());

    let from_app = app.create_note("Contested").await.unwrap();
    let from_picker = picker.create_note("Contested").await.unwrap();
    assert_eq!(from_app.location(), from_picker.location());

    app.write_text(&from_app, "app version").await.unwrap();
    picker
        .write_text(&from_picker, "picker version")
        .await
        .unwrap();

    // No merge and no versioned copy; the later write is the only content.
    assert_eq!(
        app.read_text(&from_app).await.unwrap(),
        Some("picker version".to_string())
    );
    assert_eq!(app.list_notes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn integration_placeholder_title_round_trips_through_listing() {
    let dir = tempdir().unwrap();
    let (app, picker) = two_stores(dir.path());

    let note = app.create_note("").await.unwrap();
    app.write_text(&note, "untitled body").await.unwrap();

    let listed = picker.list_notes().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title(), PLACEHOLDER_TITLE);
    assert_eq!(listed[0].location(), note.location());
}

#[tokio::test]
async fn integration_enumeration_failure_is_an_explicit_error() {
    let dir = tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "").await.unwrap();

    let store = NoteStore::new(StoreConfig::with_base_dir(&blocked));
    let result = store.list_notes().await;
    assert!(
        matches!(result, Err(Error::ContainerCreate { .. })),
        "listing over an unresolvable container should fail, got: {result:?}"
    );
}

#[tokio::test]
async fn integration_container_layout_matches_contract() {
    let dir = tempdir().unwrap();
    let (app, _) = two_stores(dir.path());

    let note = app.create_note("Layout").await.unwrap();
    app.write_text(&note, "x").await.unwrap();

    let expected = dir
        .path()
        .join("group.quillnote.notes")
        .join("File Provider Storage")
        .join("Layout.txt");
    assert_eq!(note.location(), expected);
    assert!(expected.is_file());
}
