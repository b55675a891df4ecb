//! Mock collaborator implementations for testing
//!
//! Provides in-memory mocks for all core ports, enabling deterministic unit
//! tests without a live backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use profilekit_core::{AuthGateway, AvatarStore, Notifier, ProfileRepository, SessionWriter};
use profilekit_domain::{
    AvatarImage, Profile, ProfileKitError, Result as DomainResult,
};
use tokio::sync::Notify;

fn lock<'a, T>(mutex: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory mock for `ProfileRepository`.
///
/// Stores rows in a map keyed by user id and can be switched into failure
/// mode per operation.
#[derive(Default)]
pub struct MockProfileRepository {
    rows: Mutex<HashMap<String, Profile>>,
    fail_fetch: AtomicBool,
    fail_upsert: AtomicBool,
    upsert_calls: AtomicUsize,
}

impl MockProfileRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed the mock with an existing row.
    pub fn insert_row(&self, profile: Profile) {
        lock(&self.rows).insert(profile.id.clone(), profile);
    }

    pub fn row(&self, user_id: &str) -> Option<Profile> {
        lock(&self.rows).get(user_id).cloned()
    }

    pub fn row_count(&self) -> usize {
        lock(&self.rows).len()
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_upsert(&self, fail: bool) {
        self.fail_upsert.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn fetch(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ProfileKitError::Table("fetch rejected".into()));
        }
        Ok(self.row(user_id))
    }

    async fn upsert(&self, profile: Profile) -> DomainResult<()> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_upsert.load(Ordering::SeqCst) {
            return Err(ProfileKitError::Table("upsert rejected".into()));
        }
        self.insert_row(profile);
        Ok(())
    }
}

/// Repository whose `fetch` parks until released. Used to hold the
/// synchronizer in the Syncing state while a test asserts re-entry behavior.
#[derive(Default)]
pub struct ParkedProfileRepository {
    release: Notify,
}

impl ParkedProfileRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // notify_one stores a permit, so a release is never lost even if the
    // parked call has not started waiting yet.
    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl ProfileRepository for ParkedProfileRepository {
    async fn fetch(&self, _user_id: &str) -> DomainResult<Option<Profile>> {
        self.release.notified().await;
        Ok(None)
    }

    async fn upsert(&self, _profile: Profile) -> DomainResult<()> {
        self.release.notified().await;
        Ok(())
    }
}

/// In-memory mock for `AvatarStore`.
///
/// Honors the no-overwrite contract: uploading to an existing path fails.
#[derive(Default)]
pub struct MockAvatarStore {
    blobs: Mutex<HashMap<String, AvatarImage>>,
    fail_upload: AtomicBool,
    upload_calls: AtomicUsize,
}

impl MockAvatarStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn blob(&self, path: &str) -> Option<AvatarImage> {
        lock(&self.blobs).get(path).cloned()
    }

    pub fn blob_count(&self) -> usize {
        lock(&self.blobs).len()
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn fail_upload(&self, fail: bool) {
        self.fail_upload.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AvatarStore for MockAvatarStore {
    async fn download(&self, path: &str) -> DomainResult<AvatarImage> {
        self.blob(path)
            .ok_or_else(|| ProfileKitError::NotFound(format!("no blob at {path}")))
    }

    async fn upload(&self, path: &str, image: AvatarImage) -> DomainResult<()> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(ProfileKitError::Storage("upload rejected".into()));
        }
        let mut blobs = lock(&self.blobs);
        if blobs.contains_key(path) {
            return Err(ProfileKitError::Storage(format!("blob already exists at {path}")));
        }
        blobs.insert(path.to_string(), image);
        Ok(())
    }
}

/// Mock auth gateway that clears the session writer on sign-out.
pub struct MockAuthGateway {
    writer: Arc<SessionWriter>,
    fail_sign_out: AtomicBool,
    magic_links: Mutex<Vec<String>>,
}

impl MockAuthGateway {
    pub fn new(writer: Arc<SessionWriter>) -> Arc<Self> {
        Arc::new(Self {
            writer,
            fail_sign_out: AtomicBool::new(false),
            magic_links: Mutex::new(Vec::new()),
        })
    }

    pub fn magic_links(&self) -> Vec<String> {
        lock(&self.magic_links).clone()
    }

    pub fn fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn sign_in_with_magic_link(&self, email: &str) -> DomainResult<()> {
        lock(&self.magic_links).push(email.to_string());
        Ok(())
    }

    async fn sign_out(&self) -> DomainResult<()> {
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(ProfileKitError::Auth("sign-out rejected".into()));
        }
        self.writer.clear();
        Ok(())
    }
}

/// Notifier that records every surfaced message for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Kind, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Warning,
    Error,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<(Kind, String)> {
        lock(&self.messages).clone()
    }

    pub fn count(&self, kind: Kind) -> usize {
        lock(&self.messages).iter().filter(|(k, _)| *k == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        lock(&self.messages).push((Kind::Success, message.to_string()));
    }

    fn warning(&self, message: &str) {
        lock(&self.messages).push((Kind::Warning, message.to_string()));
    }

    fn error(&self, message: &str) {
        lock(&self.messages).push((Kind::Error, message.to_string()));
    }
}
