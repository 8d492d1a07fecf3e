//! Cache lifecycle tests against the real JSON file store.
//!
//! The upstream source is stubbed; the cache store is the real adapter
//! writing into a temp directory.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use spelltrackr_domain::CharacterId;
use spelltrackr_engine::infrastructure::cache_store::JsonFileCacheStore;
use spelltrackr_engine::infrastructure::payload::{CharacterData, CharacterEnvelope};
use spelltrackr_engine::infrastructure::ports::{CharacterSourcePort, SourceError};
use spelltrackr_engine::use_cases::characters::{CharacterDataError, CharacterUseCases};

/// Upstream stub that serves `Character <id>` and counts fetches.
struct StubSource {
    fetches: AtomicUsize,
}

impl StubSource {
    fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CharacterSourcePort for StubSource {
    async fn fetch(&self, id: &CharacterId) -> Result<CharacterEnvelope, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(CharacterEnvelope {
            data: Some(CharacterData {
                name: Some(format!("Character {id}")),
                ..Default::default()
            }),
        })
    }
}

fn char_id(id: &str) -> CharacterId {
    CharacterId::new(id).expect("valid id")
}

fn use_cases_in(dir: &tempfile::TempDir) -> (Arc<StubSource>, CharacterUseCases) {
    let source = Arc::new(StubSource::new());
    let cache = Arc::new(JsonFileCacheStore::new(dir.path().join("cache")));
    let use_cases = CharacterUseCases::new(source.clone(), cache);
    (source, use_cases)
}

#[tokio::test]
async fn fetch_then_serve_from_cache_without_refetching() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (source, use_cases) = use_cases_in(&dir);

    let first = use_cases
        .get_all
        .execute(Some(vec![char_id("1"), char_id("2")]), false)
        .await
        .expect("initial fetch");
    assert_eq!(first.characters.len(), 2);
    assert_eq!(source.fetch_count(), 2);

    // Second read hits the cache: no ids needed, no network.
    let second = use_cases
        .get_all
        .execute(None, false)
        .await
        .expect("cached read");
    assert_eq!(second, first);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn single_character_reads_come_from_the_cache() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (source, use_cases) = use_cases_in(&dir);

    use_cases
        .get_all
        .execute(Some(vec![char_id("1")]), false)
        .await
        .expect("initial fetch");

    let record = use_cases
        .get_one
        .execute(char_id("1"), false)
        .await
        .expect("cached record");
    assert_eq!(record.name, "Character 1");
    assert_eq!(source.fetch_count(), 1);

    // An id that was never fetched is a miss, not a fetch.
    let missing = use_cases.get_one.execute(char_id("999"), false).await;
    assert!(matches!(missing, Err(CharacterDataError::NotCached(_))));
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn forced_single_refresh_patches_the_cached_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (source, use_cases) = use_cases_in(&dir);

    use_cases
        .get_all
        .execute(Some(vec![char_id("1"), char_id("2")]), false)
        .await
        .expect("initial fetch");

    let refreshed = use_cases
        .get_one
        .execute(char_id("2"), true)
        .await
        .expect("forced refresh");
    assert_eq!(refreshed.name, "Character 2");
    assert_eq!(source.fetch_count(), 3);

    // Both characters are still cached afterwards.
    let doc = use_cases
        .get_all
        .execute(None, false)
        .await
        .expect("cached read");
    assert_eq!(doc.characters.len(), 2);
    assert_eq!(source.fetch_count(), 3);
}

#[tokio::test]
async fn forced_single_refresh_bootstraps_an_empty_cache() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (_source, use_cases) = use_cases_in(&dir);

    let record = use_cases
        .get_one
        .execute(char_id("7"), true)
        .await
        .expect("forced refresh");
    assert_eq!(record.name, "Character 7");

    let doc = use_cases
        .get_all
        .execute(None, false)
        .await
        .expect("cached read");
    assert_eq!(doc.characters.len(), 1);
}

#[tokio::test]
async fn delete_behaves_as_if_no_cache_ever_existed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (source, use_cases) = use_cases_in(&dir);

    use_cases
        .get_all
        .execute(Some(vec![char_id("1")]), false)
        .await
        .expect("initial fetch");

    use_cases.delete_cache.execute().await.expect("delete");

    let all = use_cases.get_all.execute(None, false).await;
    assert!(matches!(all, Err(CharacterDataError::MissingIds)));

    let one = use_cases.get_one.execute(char_id("1"), false).await;
    assert!(matches!(one, Err(CharacterDataError::NotCached(_))));
    assert_eq!(source.fetch_count(), 1);

    // Deleting again is fine.
    use_cases.delete_cache.execute().await.expect("delete again");
}
