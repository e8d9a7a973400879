//! URL query string as the single source of truth for list pages.
//!
//! Reads always re-parse the current location into a fresh [`ListQuery`].
//! Writes go through [`QueryPatch`] merged over the *current* query string
//! and are stored with `history.replaceState`, so no history entry is added.

use contracts::shared::list_query::{
    ListQuery, SortOrder, KEY_LIMIT, KEY_OFFSET, KEY_ORDER, KEY_SEARCH, KEY_SORT,
};
use leptos::prelude::*;
use std::cell::RefCell;

/// Keys whose change invalidates the current page position.
const OFFSET_RESETTING_KEYS: [&str; 4] = [KEY_SEARCH, KEY_SORT, KEY_ORDER, KEY_LIMIT];

/// Access to the address bar.
pub trait LocationPort {
    /// Current query string including the leading `?`, or empty.
    fn search(&self) -> String;
    /// Replaces the query string without adding a history entry.
    fn replace_search(&self, search: &str);
}

/// `window.location` + `window.history`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl LocationPort for BrowserLocation {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace_search(&self, search: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let path = window.location().pathname().unwrap_or_else(|_| "/".into());
        let new_url = format!("{}{}", path, search);
        match window.history() {
            Ok(history) => {
                if let Err(e) =
                    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
                {
                    log::warn!("replaceState failed for {}: {:?}", new_url, e);
                }
            }
            Err(e) => log::warn!("history is not available: {:?}", e),
        }
    }
}

/// In-memory location used by tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    search: RefCell<String>,
    writes: RefCell<Vec<String>>,
}

impl MemoryLocation {
    pub fn new(search: &str) -> Self {
        Self {
            search: RefCell::new(search.to_string()),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// Simulates a manual edit or back/forward navigation.
    pub fn navigate(&self, search: &str) {
        *self.search.borrow_mut() = search.to_string();
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl LocationPort for MemoryLocation {
    fn search(&self) -> String {
        self.search.borrow().clone()
    }

    fn replace_search(&self, search: &str) {
        *self.search.borrow_mut() = search.to_string();
        self.writes.borrow_mut().push(search.to_string());
    }
}

/// Field → `Some(value)` to set, `None` to remove.
///
/// Touching `search`, `sort`, `order` or `limit` forces `offset=0` in the
/// same patch, whatever the caller asked for `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPatch {
    entries: Vec<(String, Option<String>)>,
}

impl QueryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.upsert(key, Some(value.into()));
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.upsert(key, None);
        self
    }

    pub fn search(self, text: impl Into<String>) -> Self {
        self.set(KEY_SEARCH, text)
    }

    pub fn limit(self, limit: u32) -> Self {
        self.set(KEY_LIMIT, limit.to_string())
    }

    pub fn offset(self, offset: u32) -> Self {
        self.set(KEY_OFFSET, offset.to_string())
    }

    pub fn sort(self, column: &str, order: SortOrder) -> Self {
        self.set(KEY_SORT, column).set(KEY_ORDER, order.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with the offset-reset policy applied.
    pub fn entries(&self) -> Vec<(String, Option<String>)> {
        let resets_offset = self
            .entries
            .iter()
            .any(|(key, _)| OFFSET_RESETTING_KEYS.contains(&key.as_str()));
        if !resets_offset {
            return self.entries.clone();
        }
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .filter(|(key, _)| key != KEY_OFFSET)
            .cloned()
            .collect();
        entries.push((KEY_OFFSET.to_string(), Some("0".to_string())));
        entries
    }

    fn upsert(&mut self, key: &str, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }
}

/// Splits a query string into decoded pairs, keeping their order.
pub fn parse_search(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}

/// A `key=value` segment as it appears in the URL. Untouched segments are
/// written back byte for byte.
struct Segment {
    key: String,
    raw: String,
}

fn split_segments(search: &str) -> Vec<Segment> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let key = segment.split_once('=').map_or(segment, |(k, _)| k);
            Segment {
                key: decode_component(key),
                raw: segment.to_string(),
            }
        })
        .collect()
}

/// Applies `patch` over `current`. Foreign keys and key order survive;
/// a patched key keeps its position, new keys are appended.
pub fn merge_search(current: &str, patch: &QueryPatch) -> String {
    let mut segments = split_segments(current);
    for (key, value) in patch.entries() {
        match value {
            Some(value) => {
                let raw = encode_pair(&key, &value);
                let mut seen = false;
                segments.retain_mut(|segment| {
                    if segment.key != key {
                        return true;
                    }
                    if seen {
                        return false;
                    }
                    seen = true;
                    segment.raw = raw.clone();
                    true
                });
                if !seen {
                    segments.push(Segment { key, raw });
                }
            }
            None => segments.retain(|segment| segment.key != key),
        }
    }
    if segments.is_empty() {
        return String::new();
    }
    let joined = segments
        .iter()
        .map(|segment| segment.raw.as_str())
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

pub fn query_from_search(search: &str) -> ListQuery {
    let pairs = parse_search(search);
    ListQuery::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// Non-reactive store over any [`LocationPort`].
pub struct QueryStore<L: LocationPort> {
    location: L,
}

impl<L: LocationPort> QueryStore<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn read(&self) -> ListQuery {
        query_from_search(&self.location.search())
    }

    /// Merges `patch` over the query string as it is right now and writes the
    /// result back. Returns the new query string.
    pub fn update(&self, patch: &QueryPatch) -> String {
        let current = self.location.search();
        let next = merge_search(&current, patch);
        if next != current {
            self.location.replace_search(&next);
        }
        next
    }
}

/// Reactive binding of [`QueryStore`] to the browser location.
///
/// `search` mirrors `location.search`, `query` only notifies when the typed
/// view actually changes, so foreign keys never trigger a refetch.
#[derive(Clone, Copy)]
pub struct UrlQueryStore {
    search: RwSignal<String>,
    pub query: Memo<ListQuery>,
}

impl UrlQueryStore {
    pub fn new() -> Self {
        let search = RwSignal::new(BrowserLocation.search());
        let query = Memo::new(move |_| query_from_search(&search.get()));

        // back/forward and manual edits
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            search.set(BrowserLocation.search());
        });
        on_cleanup(move || handle.remove());

        Self { search, query }
    }

    pub fn read(&self) -> ListQuery {
        self.query.get_untracked()
    }

    pub fn update(&self, patch: QueryPatch) {
        if patch.is_empty() {
            return;
        }
        let next = QueryStore::new(BrowserLocation).update(&patch);
        self.search.set(next);
    }
}

impl Default for UrlQueryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_defaults_from_empty_location() {
        let store = QueryStore::new(MemoryLocation::new(""));
        assert_eq!(store.read(), ListQuery::default());
    }

    #[test]
    fn test_update_then_read_round_trip() {
        let store = QueryStore::new(MemoryLocation::new(""));
        store.update(
            &QueryPatch::new()
                .search("acme")
                .limit(25)
                .sort("total", SortOrder::Asc),
        );
        let query = store.read();
        assert_eq!(query.search, "acme");
        assert_eq!(query.limit, 25);
        assert_eq!(query.offset, 0);
        assert_eq!(query.sort, "total");
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn test_resetting_fields_force_offset_zero() {
        let store = QueryStore::new(MemoryLocation::new("?offset=150&limit=50"));
        for patch in [
            QueryPatch::new().search("x"),
            QueryPatch::new().sort("total", SortOrder::Desc),
            QueryPatch::new().set(KEY_ORDER, "asc"),
            QueryPatch::new().limit(100),
            QueryPatch::new().offset(300).search("y"),
        ] {
            store.location().navigate("?offset=150&limit=50");
            store.update(&patch);
            assert_eq!(store.read().offset, 0, "patch {:?}", patch);
        }
    }

    #[test]
    fn test_offset_only_patch_keeps_other_fields() {
        let store = QueryStore::new(MemoryLocation::new("?search=acme&sort=total&order=asc"));
        store.update(&QueryPatch::new().offset(50));
        let query = store.read();
        assert_eq!(query.offset, 50);
        assert_eq!(query.search, "acme");
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn test_merge_preserves_foreign_keys_and_order() {
        let merged = merge_search(
            "?tab=2&search=old&status=paid",
            &QueryPatch::new().search("new value"),
        );
        assert_eq!(merged, "?tab=2&search=new%20value&status=paid&offset=0");
    }

    #[test]
    fn test_remove_drops_every_occurrence() {
        let merged = merge_search("?search=a&limit=10&search=b", &QueryPatch::new().remove("search"));
        assert_eq!(merged, "?limit=10&offset=0");
    }

    #[test]
    fn test_update_rereads_current_location() {
        let store = QueryStore::new(MemoryLocation::new("?limit=25"));
        store.location().navigate("?limit=100&sort=email");
        store.update(&QueryPatch::new().offset(200));
        let query = store.read();
        assert_eq!(query.limit, 100);
        assert_eq!(query.sort, "email");
        assert_eq!(query.offset, 200);
    }

    #[test]
    fn test_noop_patch_does_not_write() {
        let store = QueryStore::new(MemoryLocation::new("?offset=50"));
        store.update(&QueryPatch::new().offset(50));
        assert!(store.location().writes().is_empty());
    }

    #[test]
    fn test_clearing_search_commits_empty_value() {
        let store = QueryStore::new(MemoryLocation::new("?search=acme&offset=100"));
        let next = store.update(&QueryPatch::new().search(""));
        assert_eq!(next, "?search=&offset=0");
        assert_eq!(store.read().search, "");
    }

    #[test]
    fn test_parse_decodes_plus_and_percent() {
        let pairs = parse_search("?search=acme+corp%26co&flag");
        assert_eq!(pairs[0], ("search".to_string(), "acme corp&co".to_string()));
        assert_eq!(pairs[1], ("flag".to_string(), String::new()));
    }

    #[test]
    fn test_merge_keeps_untouched_segments_verbatim() {
        let merged = merge_search("?flag&q=a+b&search=x", &QueryPatch::new().offset(50));
        assert_eq!(merged, "?flag&q=a+b&search=x&offset=50");

        let merged = merge_search("?flag&q=a+b&search=x", &QueryPatch::new().search("y z"));
        assert_eq!(merged, "?flag&q=a+b&search=y%20z&offset=0");
    }
}
