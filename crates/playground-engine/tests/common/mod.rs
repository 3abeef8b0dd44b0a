use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use playground_core::errors::{PlaygroundError, Result};
use playground_core::{ContentStore, MemoryStore, Snippet};
use playground_engine::{Capabilities, Fetcher, Gist, GistService, PlaygroundConfig, RunDispatch};
use playground_engine::{SnippetEngine, SourceResolver};

/// Host used by every test fixture
#[allow(dead_code)]
pub const HOST: &str = "EXCEL";

#[allow(dead_code)]
pub const SAMPLES_ROOT: &str = "https://samples.test";

/// Fetcher serving canned bodies; unknown URLs fail with a fetch error
#[derive(Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, String>,
}

#[allow(dead_code)]
impl FakeFetcher {
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| PlaygroundError::Fetch {
                url: url.to_string(),
                reason: "status 404 Not Found".to_string(),
            })
    }
}

/// Gist service backed by a map of hash -> gist
#[derive(Default)]
pub struct FakeGists {
    gists: HashMap<String, Gist>,
}

#[allow(dead_code)]
impl FakeGists {
    pub fn with(mut self, hash: &str, gist: Gist) -> Self {
        self.gists.insert(hash.to_string(), gist);
        self
    }
}

#[async_trait]
impl GistService for FakeGists {
    async fn gist(&self, hash: &str) -> Result<Gist> {
        self.gists
            .get(hash)
            .cloned()
            .ok_or_else(|| PlaygroundError::Fetch {
                url: format!("gists/{hash}"),
                reason: "status 404 Not Found".to_string(),
            })
    }
}

/// Dispatcher that records every hand-off
#[derive(Default, Clone)]
pub struct RecordingDispatcher {
    pub sent: Arc<Mutex<Vec<(Vec<(String, String)>, String)>>>,
}

#[allow(dead_code)]
impl RecordingDispatcher {
    pub fn sent(&self) -> Vec<(Vec<(String, String)>, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl RunDispatch for RecordingDispatcher {
    async fn dispatch(&self, fields: &[(String, String)], target: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((fields.to_vec(), target.to_string()));
        Ok(())
    }
}

#[allow(dead_code)]
pub fn config() -> PlaygroundConfig {
    PlaygroundConfig {
        host: HOST.to_string(),
        platform: "PC".to_string(),
        origin: "https://editor.test".to_string(),
        return_url: "https://editor.test/#/edit".to_string(),
        samples_root: SAMPLES_ROOT.to_string(),
        runner_url: "https://runner.test/".to_string(),
        ..PlaygroundConfig::default()
    }
}

#[allow(dead_code)]
pub fn resolver(fetcher: FakeFetcher, gists: FakeGists) -> SourceResolver {
    SourceResolver::new(Arc::new(fetcher), Arc::new(gists), &config())
}

#[allow(dead_code)]
pub fn engine(
    store: MemoryStore,
    fetcher: FakeFetcher,
    gists: FakeGists,
    dispatcher: RecordingDispatcher,
) -> SnippetEngine<MemoryStore> {
    SnippetEngine::new(
        store,
        config(),
        Capabilities {
            fetcher: Arc::new(fetcher),
            gists: Arc::new(gists),
            dispatcher: Arc::new(dispatcher),
        },
    )
}

/// Engine with no remote content
#[allow(dead_code)]
pub fn offline_engine(store: MemoryStore) -> SnippetEngine<MemoryStore> {
    engine(
        store,
        FakeFetcher::default(),
        FakeGists::default(),
        RecordingDispatcher::default(),
    )
}

/// Build a complete snippet with the given id and name
#[allow(dead_code)]
pub fn snippet(id: &str, name: &str) -> Snippet {
    Snippet {
        id: id.to_string(),
        name: name.to_string(),
        ..Snippet::defaults(HOST)
    }
}

#[allow(dead_code)]
pub fn store_with(entries: &[(&str, &str)]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (id, name) in entries {
        store.insert(id, snippet(id, name)).unwrap();
    }
    store
}
