use booklist_dal::{
    Error,
    book::{BookDraft, Status},
    gateway::{BackendKind, Gateway, GatewaySettings},
    local::STORE_FILE,
};
use tempfile::TempDir;

fn local_settings(dir: &TempDir) -> GatewaySettings {
    GatewaySettings {
        remote_url: None,
        remote_key: None,
        table: "books".to_string(),
        data_dir: dir.path().to_path_buf(),
    }
}

fn draft(title: &str, author: &str) -> BookDraft {
    BookDraft {
        id: None,
        title: title.to_string(),
        author: author.to_string(),
        cover: String::new(),
        status: Status::default(),
        rating: 0,
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_selects_local_without_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Gateway::connect(local_settings(&dir)).await;
    assert_eq!(gateway.kind(), BackendKind::Local);
}

#[tokio::test]
async fn test_empty_key_selects_local() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = local_settings(&dir);
    settings.remote_url = Some("https://example.supabase.co".parse().unwrap());
    settings.remote_key = Some(String::new());
    let gateway = Gateway::connect(settings).await;
    assert_eq!(gateway.kind(), BackendKind::Local);
}

#[tokio::test]
async fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Gateway::connect(local_settings(&dir)).await;

    let mut new_book = draft("Dune", "Frank Herbert");
    new_book.rating = 4;
    new_book.notes = "reread".to_string();
    let saved = gateway.upsert(new_book).await.unwrap();
    assert_eq!(saved.id, 1);
    assert_eq!(saved.status, Status::WantToRead);

    let books = gateway.list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Frank Herbert");
    assert_eq!(books[0].rating, 4);
    assert_eq!(books[0].notes, "reread");
    assert!(books[0].added_date.is_some());
}

#[tokio::test]
async fn test_new_books_list_first() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Gateway::connect(local_settings(&dir)).await;

    let first = gateway.upsert(draft("Dune", "Frank Herbert")).await.unwrap();
    let second = gateway.upsert(draft("Solaris", "Stanislaw Lem")).await.unwrap();
    assert!(second.id > first.id);

    let books = gateway.list().await.unwrap();
    assert_eq!(books[0].title, "Solaris");
    assert_eq!(books[1].title, "Dune");
}

#[tokio::test]
async fn test_overflowing_rating_is_stored_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Gateway::connect(local_settings(&dir)).await;

    let mut new_book = draft("Dune", "Frank Herbert");
    new_book.rating = 7;
    let saved = gateway.upsert(new_book).await.unwrap();
    assert_eq!(saved.rating, 5);
    assert_eq!(gateway.list().await.unwrap()[0].rating, 5);
}

#[tokio::test]
async fn test_update_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Gateway::connect(local_settings(&dir)).await;

    let saved = gateway.upsert(draft("Dune", "Frank Herbert")).await.unwrap();

    let mut patch = BookDraft::from(saved.clone());
    patch.status = Status::Reading;
    let updated = gateway.upsert(patch).await.unwrap();
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.status, Status::Reading);
    assert_eq!(updated.added_date, saved.added_date);
}

#[tokio::test]
async fn test_update_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Gateway::connect(local_settings(&dir)).await;
    gateway.upsert(draft("Dune", "Frank Herbert")).await.unwrap();

    let mut patch = draft("Ghost", "Nobody");
    patch.id = Some(999);
    let result = gateway.upsert(patch).await;
    assert!(matches!(result, Err(Error::RecordNotFound(_))));

    let books = gateway.list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
}

#[tokio::test]
async fn test_delete_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Gateway::connect(local_settings(&dir)).await;

    gateway.upsert(draft("Dune", "Frank Herbert")).await.unwrap();
    gateway.upsert(draft("Solaris", "Stanislaw Lem")).await.unwrap();

    gateway.delete(1).await.unwrap();
    assert_eq!(gateway.list().await.unwrap().len(), 1);

    // unknown id is fine
    gateway.delete(42).await.unwrap();

    gateway.delete_all().await.unwrap();
    assert!(gateway.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_store_file_lists_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(STORE_FILE), b"not json").unwrap();

    let gateway = Gateway::connect(local_settings(&dir)).await;
    assert!(gateway.list().await.unwrap().is_empty());

    // and the next write heals the file
    gateway.upsert(draft("Dune", "Frank Herbert")).await.unwrap();
    assert_eq!(gateway.list().await.unwrap().len(), 1);
}
