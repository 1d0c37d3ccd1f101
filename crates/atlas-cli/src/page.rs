//! Terminal rendition of the host page.

use std::collections::BTreeMap;

use atlas_bridge::PageSurface;
use atlas_core::log::LogEntry;

/// A "page" whose regions are all present: log entries stream to stdout,
/// status writes and the mounted URL are recorded for the final report.
#[derive(Debug)]
pub struct TerminalPage {
    address: String,
    statuses: BTreeMap<String, String>,
    mounted_url: Option<String>,
}

impl TerminalPage {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_owned(),
            statuses: BTreeMap::new(),
            mounted_url: None,
        }
    }

    pub fn status(&self, region_id: &str) -> Option<&str> {
        self.statuses.get(region_id).map(String::as_str)
    }

    pub fn mounted_url(&self) -> Option<&str> {
        self.mounted_url.as_deref()
    }
}

impl PageSurface for TerminalPage {
    fn address_text(&self) -> Option<String> {
        Some(self.address.clone())
    }

    fn render_log_entry(&mut self, entry: &LogEntry) {
        println!(
            "[{}] [{}] {}: {}",
            entry.timestamp, entry.severity, entry.category, entry.message
        );
    }

    fn set_region_text(&mut self, region_id: &str, text: &str) -> bool {
        self.statuses.insert(region_id.to_owned(), text.to_owned());
        true
    }

    fn mount_map(&mut self, url: &str) -> bool {
        self.mounted_url = Some(url.to_owned());
        true
    }
}
