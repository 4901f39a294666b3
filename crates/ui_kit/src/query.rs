//! Query-parameter stores backing [`crate::SearchInput`].

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions, ParamsMap, RouterContext};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures writing a query parameter.
pub enum QueryParamError {
    /// The router that owned the location has been torn down.
    #[error("router location is no longer available")]
    NavigationUnavailable,
}

/// Named string parameters in the current URL (or a stand-in).
pub trait QueryParamStore {
    /// Reads a parameter without tracking reactive dependencies.
    fn get_param(&self, key: &str) -> Option<String>;

    /// Writes a parameter. An empty value is written as empty, not removed.
    fn set_param(&self, key: &str, value: &str) -> Result<(), QueryParamError>;
}

#[derive(Clone)]
/// Router-backed store that replaces the current history entry on write.
pub struct RouterQueryParams {
    query: Memo<ParamsMap>,
    pathname: Memo<String>,
    hash: Memo<String>,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterQueryParams {
    /// Binds to the enclosing `<Router>`, if there is one.
    pub fn from_context() -> Option<Self> {
        use_context::<RouterContext>()?;
        let location = use_location();
        let navigate = use_navigate();
        Some(Self {
            query: location.query,
            pathname: location.pathname,
            hash: location.hash,
            navigate: Rc::new(navigate),
        })
    }
}

impl QueryParamStore for RouterQueryParams {
    fn get_param(&self, key: &str) -> Option<String> {
        self.query
            .try_with_untracked(|params| params.get(key).cloned())
            .flatten()
    }

    fn set_param(&self, key: &str, value: &str) -> Result<(), QueryParamError> {
        let mut params = self
            .query
            .try_get_untracked()
            .ok_or(QueryParamError::NavigationUnavailable)?;
        let pathname = self
            .pathname
            .try_get_untracked()
            .ok_or(QueryParamError::NavigationUnavailable)?;
        let hash = self
            .hash
            .try_get_untracked()
            .ok_or(QueryParamError::NavigationUnavailable)?;
        params.insert(key.to_string(), value.to_string());
        let href = compose_href(&pathname, &params.to_query_string(), &hash);
        (self.navigate)(
            &href,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..NavigateOptions::default()
            },
        );
        Ok(())
    }
}

/// Joins a path, a `?`-prefixed query string, and an optional fragment.
fn compose_href(pathname: &str, query: &str, hash: &str) -> String {
    match hash.trim_start_matches('#') {
        "" => format!("{pathname}{query}"),
        fragment => format!("{pathname}{query}#{fragment}"),
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store for headless rendering and tests; records every write.
pub struct MemoryQueryParams {
    params: Rc<RefCell<BTreeMap<String, String>>>,
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryQueryParams {
    /// Seeds a parameter without recording a write.
    pub fn with_param(self, key: &str, value: &str) -> Self {
        self.params
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Writes observed through [`QueryParamStore::set_param`], in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl QueryParamStore for MemoryQueryParams {
    fn get_param(&self, key: &str) -> Option<String> {
        self.params.borrow().get(key).cloned()
    }

    fn set_param(&self, key: &str, value: &str) -> Result<(), QueryParamError> {
        self.params
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Resolves the router store when a `<Router>` is mounted, else a memory store.
pub fn use_query_param_store() -> Rc<dyn QueryParamStore> {
    match RouterQueryParams::from_context() {
        Some(store) => Rc::new(store),
        None => Rc::new(MemoryQueryParams::default()),
    }
}
