//! Shared test utilities and recording fakes.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use flowstore::content::{ContentGateway, ContentModel, ContentStore};
use flowstore::error::GatewayError;
use flowstore::post::{Post, PostGateway, PostId, PostStore};
use flowstore::services::{Alert, BusyIndicator, Navigator};
use flowstore::user::{User, UserGateway, UserId, UserSelection, UserStore};

/// Install a subscriber so store logs show up under `RUST_LOG`. Safe to
/// call once per harness; later calls are no-ops.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Poll `cond` until it holds, or panic after a second.
pub async fn wait_until(cond: impl Fn() -> bool) {
    let start = std::time::Instant::now();
    while !cond() {
        if start.elapsed() > Duration::from_secs(1) {
            panic!("condition not reached in time");
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
}

// -- Recording collaborators --------------------------------------------------

/// Alert sink that records every message by level.
#[derive(Default)]
pub struct RecordingAlert {
    errors: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }
}

impl Alert for RecordingAlert {
    fn show_error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }

    fn show_info(&self, message: &str) {
        self.infos.lock().push(message.to_string());
    }

    fn show_warning(&self, message: &str) {
        self.warnings.lock().push(message.to_string());
    }
}

/// Busy indicator that counts `begin`/`end` pairs.
#[derive(Default)]
pub struct CountingBusy {
    begins: AtomicUsize,
    ends: AtomicUsize,
}

impl CountingBusy {
    pub fn begins(&self) -> usize {
        self.begins.load(Ordering::SeqCst)
    }

    pub fn ends(&self) -> usize {
        self.ends.load(Ordering::SeqCst)
    }

    /// Outstanding `begin`s; zero whenever no effect is in flight.
    pub fn active(&self) -> i64 {
        self.begins() as i64 - self.ends() as i64
    }
}

impl BusyIndicator for CountingBusy {
    fn begin(&self) {
        self.begins.fetch_add(1, Ordering::SeqCst);
    }

    fn end(&self) {
        self.ends.fetch_add(1, Ordering::SeqCst);
    }
}

/// Navigator that records every path it was sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.paths.lock().push(path.to_string());
    }
}

/// Test-controlled stand-in for the upstream user selection.
#[derive(Default)]
pub struct MockSelection {
    selected: Mutex<Option<UserId>>,
}

impl MockSelection {
    pub fn set(&self, user_id: Option<UserId>) {
        *self.selected.lock() = user_id;
    }
}

impl UserSelection for MockSelection {
    fn selected_user_id(&self) -> Option<UserId> {
        *self.selected.lock()
    }
}

// -- Mock gateways ------------------------------------------------------------

fn unscripted() -> GatewayError {
    GatewayError::Unavailable {
        reason: "no scripted response".to_string(),
    }
}

/// Scripted user gateway. Responses are consumed in call order; a call can
/// be gated so the test controls when it settles.
#[derive(Default)]
pub struct MockUserGateway {
    responses: Mutex<VecDeque<Result<Vec<User>, GatewayError>>>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: AtomicUsize,
}

impl MockUserGateway {
    pub fn enqueue(&self, response: Result<Vec<User>, GatewayError>) {
        self.responses.lock().push_back(response);
    }

    /// Enqueue a response that is held back until the returned sender
    /// fires. Dropping the sender releases the call as well.
    pub fn enqueue_gated(&self, response: Result<Vec<User>, GatewayError>) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.responses.lock().push_back(response);
        self.gates.lock().push_back(gate);
        release
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserGateway for MockUserGateway {
    async fn fetch_users(&self) -> Result<Vec<User>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Take the response up front so overlapping calls consume the
        // script in call order, then hold at the gate if one was set.
        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()));
        let gate = self.gates.lock().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        response
    }
}

/// Scripted post gateway with separate scripts for fetches and updates.
/// Every call and its arguments are captured for assertions.
#[derive(Default)]
pub struct MockPostGateway {
    fetch_responses: Mutex<VecDeque<Result<Vec<Post>, GatewayError>>>,
    fetch_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    fetched_user_ids: Mutex<Vec<UserId>>,
    update_responses: Mutex<VecDeque<Result<Post, GatewayError>>>,
    update_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    updated_posts: Mutex<Vec<Post>>,
}

impl MockPostGateway {
    pub fn enqueue_posts(&self, response: Result<Vec<Post>, GatewayError>) {
        self.fetch_responses.lock().push_back(response);
    }

    pub fn enqueue_posts_gated(
        &self,
        response: Result<Vec<Post>, GatewayError>,
    ) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.fetch_responses.lock().push_back(response);
        self.fetch_gates.lock().push_back(gate);
        release
    }

    pub fn enqueue_update(&self, response: Result<Post, GatewayError>) {
        self.update_responses.lock().push_back(response);
    }

    pub fn enqueue_update_gated(
        &self,
        response: Result<Post, GatewayError>,
    ) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.update_responses.lock().push_back(response);
        self.update_gates.lock().push_back(gate);
        release
    }

    /// User ids passed to `fetch_posts`, in call order.
    pub fn fetched_user_ids(&self) -> Vec<UserId> {
        self.fetched_user_ids.lock().clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetched_user_ids.lock().len()
    }

    /// Drafts passed to `update_post`, in call order.
    pub fn updated_posts(&self) -> Vec<Post> {
        self.updated_posts.lock().clone()
    }

    pub fn update_calls(&self) -> usize {
        self.updated_posts.lock().len()
    }
}

#[async_trait]
impl PostGateway for MockPostGateway {
    async fn fetch_posts(&self, user_id: UserId) -> Result<Vec<Post>, GatewayError> {
        self.fetched_user_ids.lock().push(user_id);
        let response = self
            .fetch_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()));
        let gate = self.fetch_gates.lock().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        response
    }

    async fn update_post(&self, post: Post) -> Result<Post, GatewayError> {
        self.updated_posts.lock().push(post);
        let response = self
            .update_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()));
        let gate = self.update_gates.lock().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        response
    }
}

/// Scripted content gateway. Captures requested keys.
#[derive(Default)]
pub struct MockContentGateway {
    responses: Mutex<VecDeque<Result<ContentModel, GatewayError>>>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    fetched_keys: Mutex<Vec<String>>,
}

impl MockContentGateway {
    pub fn enqueue(&self, response: Result<ContentModel, GatewayError>) {
        self.responses.lock().push_back(response);
    }

    pub fn enqueue_gated(
        &self,
        response: Result<ContentModel, GatewayError>,
    ) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.responses.lock().push_back(response);
        self.gates.lock().push_back(gate);
        release
    }

    pub fn fetched_keys(&self) -> Vec<String> {
        self.fetched_keys.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.fetched_keys.lock().len()
    }
}

#[async_trait]
impl ContentGateway for MockContentGateway {
    async fn fetch_content(&self, key: &str) -> Result<ContentModel, GatewayError> {
        self.fetched_keys.lock().push(key.to_string());
        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()));
        let gate = self.gates.lock().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        response
    }
}

// -- Entity fixtures ----------------------------------------------------------

pub fn user(id: UserId) -> User {
    User {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("user{id}@example.com"),
    }
}

pub fn post(id: PostId, user_id: UserId) -> Post {
    Post {
        id,
        user_id,
        title: format!("Post {id}"),
        body: format!("Body of post {id}"),
    }
}

pub fn content_model(text: &str) -> ContentModel {
    let mut model = ContentModel::new();
    model.insert("body".to_string(), serde_json::Value::from(text));
    model
}

// -- Composite builders -------------------------------------------------------

pub struct UserHarness {
    pub store: Arc<UserStore>,
    pub gateway: Arc<MockUserGateway>,
    pub alert: Arc<RecordingAlert>,
    pub busy: Arc<CountingBusy>,
    pub nav: Arc<RecordingNavigator>,
}

pub fn make_user_store() -> UserHarness {
    init_tracing();
    let gateway = Arc::new(MockUserGateway::default());
    let alert = Arc::new(RecordingAlert::default());
    let busy = Arc::new(CountingBusy::default());
    let nav = Arc::new(RecordingNavigator::default());
    let store = Arc::new(UserStore::new(
        gateway.clone(),
        alert.clone(),
        busy.clone(),
        nav.clone(),
    ));
    UserHarness {
        store,
        gateway,
        alert,
        busy,
        nav,
    }
}

pub struct PostHarness {
    pub store: Arc<PostStore>,
    pub gateway: Arc<MockPostGateway>,
    pub selection: Arc<MockSelection>,
    pub alert: Arc<RecordingAlert>,
    pub busy: Arc<CountingBusy>,
    pub nav: Arc<RecordingNavigator>,
}

pub fn make_post_store() -> PostHarness {
    init_tracing();
    let gateway = Arc::new(MockPostGateway::default());
    let selection = Arc::new(MockSelection::default());
    let alert = Arc::new(RecordingAlert::default());
    let busy = Arc::new(CountingBusy::default());
    let nav = Arc::new(RecordingNavigator::default());
    let store = Arc::new(PostStore::new(
        gateway.clone(),
        alert.clone(),
        busy.clone(),
        nav.clone(),
        selection.clone(),
    ));
    PostHarness {
        store,
        gateway,
        selection,
        alert,
        busy,
        nav,
    }
}

pub struct ContentHarness {
    pub store: Arc<ContentStore>,
    pub gateway: Arc<MockContentGateway>,
    pub alert: Arc<RecordingAlert>,
}

pub fn make_content_store() -> ContentHarness {
    init_tracing();
    let gateway = Arc::new(MockContentGateway::default());
    let alert = Arc::new(RecordingAlert::default());
    let store = Arc::new(ContentStore::new(gateway.clone(), alert.clone()));
    ContentHarness {
        store,
        gateway,
        alert,
    }
}

/// User and post stores wired the way an application wires them: the post
/// store reads its scope from the user store, and both share one alert,
/// one busy indicator and one navigator.
pub struct LinkedHarness {
    pub user_store: Arc<UserStore>,
    pub post_store: Arc<PostStore>,
    pub user_gateway: Arc<MockUserGateway>,
    pub post_gateway: Arc<MockPostGateway>,
    pub alert: Arc<RecordingAlert>,
    pub busy: Arc<CountingBusy>,
    pub nav: Arc<RecordingNavigator>,
}

pub fn make_linked_stores() -> LinkedHarness {
    init_tracing();
    let user_gateway = Arc::new(MockUserGateway::default());
    let post_gateway = Arc::new(MockPostGateway::default());
    let alert = Arc::new(RecordingAlert::default());
    let busy = Arc::new(CountingBusy::default());
    let nav = Arc::new(RecordingNavigator::default());
    let user_store = Arc::new(UserStore::new(
        user_gateway.clone(),
        alert.clone(),
        busy.clone(),
        nav.clone(),
    ));
    let post_store = Arc::new(PostStore::new(
        post_gateway.clone(),
        alert.clone(),
        busy.clone(),
        nav.clone(),
        user_store.clone(),
    ));
    LinkedHarness {
        user_store,
        post_store,
        user_gateway,
        post_gateway,
        alert,
        busy,
        nav,
    }
}
