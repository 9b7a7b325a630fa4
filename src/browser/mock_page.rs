use super::page::{Locator, Page};
use crate::core::{BrowserError, BrowserResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// Scripted outcome of a wait or click on a [`MockPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAction {
    Succeed,
    TimeOut,
    Intercept,
    Fail(String),
}

impl MockAction {
    fn into_result(self, locator: &Locator) -> BrowserResult<()> {
        match self {
            MockAction::Succeed => Ok(()),
            MockAction::TimeOut => Err(BrowserError::Timeout {
                locator: locator.to_string(),
            }),
            MockAction::Intercept => Err(BrowserError::ClickIntercepted {
                locator: locator.to_string(),
                message: "element click intercepted: #closeCookieBanner would receive the click"
                    .to_string(),
            }),
            MockAction::Fail(message) => Err(BrowserError::Command(message)),
        }
    }
}

#[derive(Default)]
struct MockState {
    listings: HashMap<String, Vec<String>>,
    default_listing: Vec<String>,
    current: VecDeque<String>,
    last_source: String,
    waits: HashMap<Locator, VecDeque<MockAction>>,
    clicks: HashMap<Locator, VecDeque<MockAction>>,
    broken_urls: HashSet<String>,
    visited: Vec<Url>,
    waited: Vec<Locator>,
    clicked: Vec<Locator>,
    closed: bool,
}

/// In-memory [`Page`] that replays scripted page sources.
///
/// Every `source()` call pops the next scripted HTML for the current URL and
/// keeps repeating the last one once the script runs out. Waits and clicks
/// succeed unless a script for their locator says otherwise.
#[derive(Default)]
pub struct MockPage {
    state: Mutex<MockState>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources served for any URL without its own script. They are also
    /// served right away, before any navigation.
    pub fn with_sources(self, sources: Vec<String>) -> Self {
        {
            let mut state = self.state.lock();
            state.current = sources.clone().into();
            state.default_listing = sources;
        }
        self
    }

    pub fn with_url_sources(self, url: &Url, sources: Vec<String>) -> Self {
        self.state.lock().listings.insert(url.to_string(), sources);
        self
    }

    pub fn with_waits(self, locator: Locator, actions: Vec<MockAction>) -> Self {
        self.state.lock().waits.insert(locator, actions.into());
        self
    }

    pub fn with_clicks(self, locator: Locator, actions: Vec<MockAction>) -> Self {
        self.state.lock().clicks.insert(locator, actions.into());
        self
    }

    pub fn with_broken_url(self, url: &Url) -> Self {
        self.state.lock().broken_urls.insert(url.to_string());
        self
    }

    pub fn visited(&self) -> Vec<Url> {
        self.state.lock().visited.clone()
    }

    pub fn clicks_on(&self, locator: &Locator) -> usize {
        self.state.lock().clicked.iter().filter(|l| *l == locator).count()
    }

    pub fn waits_on(&self, locator: &Locator) -> usize {
        self.state.lock().waited.iter().filter(|l| *l == locator).count()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    fn ensure_open(state: &MockState) -> BrowserResult<()> {
        if state.closed {
            Err(BrowserError::Session("session already closed".to_string()))
        } else {
            Ok(())
        }
    }

    fn next_action(script: &mut HashMap<Locator, VecDeque<MockAction>>, locator: &Locator) -> MockAction {
        script
            .get_mut(locator)
            .and_then(VecDeque::pop_front)
            .unwrap_or(MockAction::Succeed)
    }
}

#[async_trait]
impl Page for MockPage {
    async fn goto(&self, url: &Url) -> BrowserResult<()> {
        let mut state = self.state.lock();
        Self::ensure_open(&state)?;
        state.visited.push(url.clone());

        if state.broken_urls.contains(url.as_str()) {
            return Err(BrowserError::Command(format!("net::ERR_NAME_NOT_RESOLVED at {}", url)));
        }

        let sources = state
            .listings
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| state.default_listing.clone());
        state.current = sources.into();
        state.last_source.clear();
        Ok(())
    }

    async fn source(&self) -> BrowserResult<String> {
        let mut state = self.state.lock();
        Self::ensure_open(&state)?;
        if let Some(next) = state.current.pop_front() {
            state.last_source = next;
        }
        Ok(state.last_source.clone())
    }

    async fn wait_clickable(&self, locator: &Locator, _timeout: Duration) -> BrowserResult<()> {
        let mut state = self.state.lock();
        Self::ensure_open(&state)?;
        state.waited.push(locator.clone());
        Self::next_action(&mut state.waits, locator).into_result(locator)
    }

    async fn click(&self, locator: &Locator) -> BrowserResult<()> {
        let mut state = self.state.lock();
        Self::ensure_open(&state)?;
        state.clicked.push(locator.clone());
        Self::next_action(&mut state.clicks, locator).into_result(locator)
    }

    async fn close(&self) -> BrowserResult<()> {
        self.state.lock().closed = true;
        Ok(())
    }
}
