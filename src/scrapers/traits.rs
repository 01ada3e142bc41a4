use anyhow::Result;
use std::time::Duration;

/// A navigable page the run loop drives.
///
/// The one real implementation wraps a headless Chrome tab; tests swap in
/// a scripted fake so orchestration and extraction can be exercised
/// without a browser. The same handle is reused across all targets, so a
/// failed navigation must leave it usable for the next `goto`.
pub trait Page {
    /// Navigate to `url` under the implementation's timeout. Timeouts and
    /// network failures surface as errors.
    fn goto(&self, url: &str) -> Result<()>;

    /// Heuristic settle delay after navigation, giving client-side
    /// rendering time to put prices in the DOM.
    fn wait(&self, delay: Duration);

    /// Text content of every element currently in the rendered document.
    fn text_fragments(&self) -> Result<Vec<String>>;
}
