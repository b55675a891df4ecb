//! Integration tests for the avatar exchanger.

mod support;

use std::sync::Arc;

use profilekit_core::AvatarExchanger;
use profilekit_domain::{FileSelection, ProfileKitError};
use support::collaborators::{Kind, MockAvatarStore, RecordingNotifier};

fn exchanger() -> (Arc<MockAvatarStore>, Arc<RecordingNotifier>, AvatarExchanger) {
    support::init_tracing();
    let store = MockAvatarStore::new();
    let notifier = RecordingNotifier::new();
    let exchanger = AvatarExchanger::new(
        Arc::clone(&store) as Arc<dyn profilekit_core::AvatarStore>,
        Arc::clone(&notifier) as Arc<dyn profilekit_core::Notifier>,
    );
    (store, notifier, exchanger)
}

fn png() -> FileSelection {
    FileSelection::new("file.png", vec![0x89, 0x50, 0x4e, 0x47])
}

#[tokio::test]
async fn upload_with_no_selection_never_reaches_the_store() {
    let (store, notifier, exchanger) = exchanger();

    let err = exchanger.upload(&[]).await.unwrap_err();

    assert!(matches!(err, ProfileKitError::InvalidInput(_)));
    assert_eq!(store.upload_calls(), 0);
    assert_eq!(notifier.count(Kind::Error), 1);
}

#[tokio::test]
async fn upload_returns_token_path_with_original_extension() {
    let (store, _notifier, exchanger) = exchanger();

    let path = exchanger.upload(&[png()]).await.unwrap();

    assert!(path.ends_with(".png"));
    let token = path.trim_end_matches(".png");
    assert!(!token.is_empty() && !token.contains('.'));
    assert!(store.blob(&path).is_some());
}

#[tokio::test]
async fn sequential_uploads_never_collide() {
    let (store, _notifier, exchanger) = exchanger();

    let first = exchanger.upload(&[png()]).await.unwrap();
    let second = exchanger.upload(&[FileSelection::new("other.png", vec![1, 2, 3])]).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(store.blob_count(), 2);
}

#[tokio::test]
async fn resolve_display_round_trips_an_uploaded_blob() {
    let (_store, _notifier, exchanger) = exchanger();

    let path = exchanger.upload(&[png()]).await.unwrap();
    let image = exchanger.resolve_display(&path).await.unwrap();

    assert_eq!(image.bytes, png().bytes);
    assert_eq!(image.content_type, "image/png");
}

#[tokio::test]
async fn resolve_display_falls_back_to_placeholder_on_failure() {
    let (_store, _notifier, exchanger) = exchanger();

    assert!(exchanger.resolve_display("missing.png").await.is_none());
}

#[tokio::test]
async fn failed_upload_surfaces_error_and_stores_nothing() {
    let (store, notifier, exchanger) = exchanger();
    store.fail_upload(true);

    let err = exchanger.upload(&[png()]).await.unwrap_err();

    assert!(matches!(err, ProfileKitError::Storage(_)));
    assert_eq!(store.blob_count(), 0);
    assert_eq!(notifier.count(Kind::Error), 1);
    assert!(!exchanger.is_uploading());
}

#[tokio::test]
async fn upload_flag_resets_after_each_attempt() {
    let (_store, _notifier, exchanger) = exchanger();

    assert!(!exchanger.is_uploading());
    exchanger.upload(&[png()]).await.unwrap();
    assert!(!exchanger.is_uploading());
}
