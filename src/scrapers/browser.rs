use crate::scrapers::traits::Page;
use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use scraper::{Html, Selector};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Per-navigation upper bound. Pages are read after an initial parse plus
/// a settle delay, not after full load.
const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);

const VIEWPORT: (u32, u32) = (1280, 1600);

/// The real [`Page`]: one headless Chrome tab reused for every target.
pub struct ChromeSession {
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeSession {
    /// Launch headless Chrome and open the shared tab.
    pub fn launch() -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some(VIEWPORT))
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        let tab = browser.new_tab().context("Failed to open tab")?;
        tab.set_default_timeout(NAVIGATION_TIMEOUT);

        Ok(Self { browser, tab })
    }
}

impl Page for ChromeSession {
    fn goto(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        self.tab
            .navigate_to(url)
            .with_context(|| format!("Failed to navigate to {url}"))?;
        // Initial document parse is enough; dynamic content gets the
        // settle delay afterwards.
        self.tab
            .wait_until_navigated()
            .with_context(|| format!("Navigation did not complete for {url}"))?;
        Ok(())
    }

    fn wait(&self, delay: Duration) {
        thread::sleep(delay);
    }

    fn text_fragments(&self) -> Result<Vec<String>> {
        let html_result = self
            .tab
            .evaluate("document.documentElement.outerHTML", false)
            .context("Failed to capture page HTML")?;

        let html = match html_result.value {
            Some(value) => value.as_str().unwrap_or("").to_string(),
            None => String::new(),
        };

        if html.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Captured {} bytes of HTML", html.len());

        let document = Html::parse_document(&html);
        let all = Selector::parse("*").unwrap();

        let fragments: Vec<String> = document
            .select(&all)
            .map(|element| element.text().collect::<String>())
            .collect();

        debug!("Collected {} text fragments", fragments.len());

        Ok(fragments)
    }
}
