//! Viewer state for the repository file browser.
//!
//! Owns the expand/collapse set, the active selection, and the per-view
//! content cache. One instance exists per mounted `(owner, repo)` view and
//! is dropped with it; nothing here is shared or persisted.
//!
//! All mutation happens on the UI event loop: a fetch completion callback
//! runs to completion before the next user-triggered open can start, so no
//! per-key in-flight tracking is needed. If opens ever become truly
//! concurrent, an in-flight map has to be added here.

use std::collections::{HashMap, HashSet};

use crate::core::error::FetchError;

/// Heading shown above a cached failure in the content pane.
pub const LOAD_FAILURE_PLACEHOLDER: &str = "// Unable to load file contents";

/// Content stored for an opened file.
#[derive(Clone, Debug, PartialEq)]
pub enum FileContent {
    /// Fetched file text.
    Text(String),
    /// The fetch failed; the message is displayed in place of the file body
    /// and cached so the path is not re-fetched for the life of the viewer.
    Failed(String),
}

impl FileContent {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Session-scoped cache of fetched file contents, keyed by repository path.
///
/// Grows monotonically; there is no eviction and no distinction between a
/// hit that was a success and one that was a cached failure beyond the
/// [`FileContent`] tag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentCache {
    entries: HashMap<String, FileContent>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&FileContent> {
        self.entries.get(path)
    }

    pub fn insert(&mut self, path: String, content: FileContent) {
        self.entries.insert(path, content);
    }

    /// Display-only predicate feeding the cached-file indicator. Not to be
    /// used to suppress errors: a cached failure counts as cached.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What [`ViewerState::open_file`] asks the caller to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    /// The path is already the active selection; nothing to do.
    AlreadyOpen,
    /// The cache holds the path; content is available immediately.
    Cached,
    /// The caller must fetch the file and report back via
    /// [`ViewerState::finish_load`].
    Fetch,
}

/// Expand/collapse, selection, and cache state for one mounted view.
#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    expanded: HashSet<String>,
    selected: Option<String>,
    loading: bool,
    cache: ContentCache,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the expansion of a directory. Never touches the selection or the
    /// cache, so it stays available while a file fetch is outstanding.
    pub fn toggle_dir(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// A fetch is in flight for the active selection.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Content of the active selection, if any is available yet.
    pub fn selected_content(&self) -> Option<&FileContent> {
        self.cache.get(self.selected.as_deref()?)
    }

    /// Select a file for display.
    ///
    /// Re-selecting the current path is a no-op. Otherwise the selection
    /// moves; if the cache already holds the path the content is shown
    /// directly, else the caller is asked to fetch it.
    pub fn open_file(&mut self, path: &str) -> OpenOutcome {
        if self.selected.as_deref() == Some(path) {
            return OpenOutcome::AlreadyOpen;
        }
        self.selected = Some(path.to_string());
        if self.cache.contains(path) {
            self.loading = false;
            return OpenOutcome::Cached;
        }
        self.loading = true;
        OpenOutcome::Fetch
    }

    /// Record the completion of a fetch started for `path`.
    ///
    /// The result is cached under `path` whether or not the selection has
    /// moved on; a stale completion is a benign cache fill and only the
    /// active selection's spinner is cleared.
    pub fn finish_load(&mut self, path: &str, result: Result<String, FetchError>) {
        let content = match result {
            Ok(text) => FileContent::Text(text),
            Err(err) => FileContent::Failed(err.to_string()),
        };
        self.cache.insert(path.to_string(), content);
        if self.selected.as_deref() == Some(path) {
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(viewer: &mut ViewerState, path: &str) -> OpenOutcome {
        viewer.open_file(path)
    }

    #[test]
    fn test_first_open_fetches_then_serves_from_cache() {
        let mut viewer = ViewerState::new();

        assert_eq!(open(&mut viewer, "src/index.ts"), OpenOutcome::Fetch);
        assert!(viewer.is_loading());
        viewer.finish_load("src/index.ts", Ok("export {}".to_string()));
        assert!(!viewer.is_loading());

        // Move away and back: content comes from the cache, no second fetch
        assert_eq!(open(&mut viewer, "readme.md"), OpenOutcome::Fetch);
        viewer.finish_load("readme.md", Ok("# hi".to_string()));
        assert_eq!(open(&mut viewer, "src/index.ts"), OpenOutcome::Cached);
        assert_eq!(
            viewer.selected_content(),
            Some(&FileContent::Text("export {}".to_string()))
        );
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut viewer = ViewerState::new();
        assert_eq!(open(&mut viewer, "a.rs"), OpenOutcome::Fetch);
        // Same path again: no transition, no new fetch, spinner untouched
        assert_eq!(open(&mut viewer, "a.rs"), OpenOutcome::AlreadyOpen);
        assert!(viewer.is_loading());
        assert_eq!(viewer.selected(), Some("a.rs"));
    }

    #[test]
    fn test_failure_is_cached_and_not_retried() {
        let mut viewer = ViewerState::new();
        assert_eq!(open(&mut viewer, "gone.rs"), OpenOutcome::Fetch);
        viewer.finish_load(
            "gone.rs",
            Err(FetchError::Http {
                status: 404,
                detail: None,
            }),
        );
        assert!(viewer.selected_content().unwrap().is_failed());
        assert!(viewer.cache().contains("gone.rs"));

        // Reopening serves the cached failure instead of refetching
        assert_eq!(open(&mut viewer, "other.rs"), OpenOutcome::Fetch);
        viewer.finish_load("other.rs", Ok(String::new()));
        assert_eq!(open(&mut viewer, "gone.rs"), OpenOutcome::Cached);
        assert!(viewer.selected_content().unwrap().is_failed());
    }

    #[test]
    fn test_toggle_is_independent_of_selection_and_cache() {
        let mut viewer = ViewerState::new();
        assert_eq!(open(&mut viewer, "src/main.rs"), OpenOutcome::Fetch);
        viewer.finish_load("src/main.rs", Ok("fn main() {}".to_string()));
        let cache_len = viewer.cache().len();

        viewer.toggle_dir("src");
        assert!(viewer.is_expanded("src"));
        assert_eq!(viewer.selected(), Some("src/main.rs"));
        assert_eq!(viewer.cache().len(), cache_len);

        viewer.toggle_dir("src");
        assert!(!viewer.is_expanded("src"));
        assert_eq!(viewer.selected(), Some("src/main.rs"));
    }

    #[test]
    fn test_stale_completion_fills_cache_without_clearing_spinner() {
        let mut viewer = ViewerState::new();
        assert_eq!(open(&mut viewer, "a.rs"), OpenOutcome::Fetch);
        assert_eq!(open(&mut viewer, "b.rs"), OpenOutcome::Fetch);

        // Completion for the abandoned path: cache fills, b.rs still loading
        viewer.finish_load("a.rs", Ok("a".to_string()));
        assert!(viewer.cache().contains("a.rs"));
        assert!(viewer.is_loading());

        viewer.finish_load("b.rs", Ok("b".to_string()));
        assert!(!viewer.is_loading());
    }

    #[test]
    fn test_open_cached_path_clears_stale_spinner() {
        let mut viewer = ViewerState::new();
        assert_eq!(open(&mut viewer, "a.rs"), OpenOutcome::Fetch);
        viewer.finish_load("a.rs", Ok("a".to_string()));
        assert_eq!(open(&mut viewer, "b.rs"), OpenOutcome::Fetch);
        // b.rs never completes; switching back to a cached path must not
        // keep the spinner up
        assert_eq!(open(&mut viewer, "a.rs"), OpenOutcome::Cached);
        assert!(!viewer.is_loading());
    }
}
