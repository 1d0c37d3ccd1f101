//! Host-page surface the bridge reads and writes.
//!
//! The bridge never owns the page; it talks to it through [`PageSurface`],
//! a bindings object constructed once by the host. Every region is
//! optional-existence: a missing region makes the corresponding write a
//! silent no-op (reported through the return value where callers care).

use atlas_core::log::LogEntry;
use std::collections::BTreeMap;

/// The set of page regions the bridge collaborates with.
pub trait PageSurface: Send {
    /// Text of the page's address element, if the element exists.
    fn address_text(&self) -> Option<String>;

    /// Render an entry into the log region and scroll it into view.
    /// No-op when the page has no log region; the in-memory log book is
    /// unaffected either way.
    fn render_log_entry(&mut self, entry: &LogEntry);

    /// Write `text` into the region named `region_id`. Returns whether the
    /// region exists on this page.
    fn set_region_text(&mut self, region_id: &str, text: &str) -> bool;

    /// Set the embedded frame's source to `url`, reveal the frame and hide
    /// the placeholder. Returns `false` when the map container or the frame
    /// element is missing.
    fn mount_map(&mut self, url: &str) -> bool;
}

/// In-memory [`PageSurface`] that records every write.
///
/// Used by the integration tests and by embedders that have no real page;
/// the builder methods strip individual regions to model partial pages.
#[derive(Debug)]
pub struct HeadlessPage {
    address: Option<String>,
    has_log_region: bool,
    has_map_container: bool,
    has_map_frame: bool,
    regions: BTreeMap<String, String>,
    rendered_entries: Vec<LogEntry>,
    mounted_url: Option<String>,
    frame_visible: bool,
    placeholder_hidden: bool,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPage {
    /// A page with the full chrome: both status regions, a log region, and
    /// the map container with its frame, but no address element.
    #[must_use]
    pub fn new() -> Self {
        let mut regions = BTreeMap::new();
        regions.insert(crate::status::SEARCH_STATUS_REGION.to_owned(), String::new());
        regions.insert(crate::status::PRIMARY_INDICATOR.to_owned(), String::new());
        Self {
            address: None,
            has_log_region: true,
            has_map_container: true,
            has_map_frame: true,
            regions,
            rendered_entries: Vec::new(),
            mounted_url: None,
            frame_visible: false,
            placeholder_hidden: false,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_owned());
        self
    }

    #[must_use]
    pub fn with_region(mut self, region_id: &str) -> Self {
        self.regions.insert(region_id.to_owned(), String::new());
        self
    }

    #[must_use]
    pub fn without_region(mut self, region_id: &str) -> Self {
        self.regions.remove(region_id);
        self
    }

    #[must_use]
    pub fn without_log_region(mut self) -> Self {
        self.has_log_region = false;
        self
    }

    #[must_use]
    pub fn without_map_container(mut self) -> Self {
        self.has_map_container = false;
        self
    }

    #[must_use]
    pub fn region_text(&self, region_id: &str) -> Option<&str> {
        self.regions.get(region_id).map(String::as_str)
    }

    #[must_use]
    pub fn rendered_entries(&self) -> &[LogEntry] {
        &self.rendered_entries
    }

    #[must_use]
    pub fn mounted_url(&self) -> Option<&str> {
        self.mounted_url.as_deref()
    }

    #[must_use]
    pub fn frame_visible(&self) -> bool {
        self.frame_visible
    }

    #[must_use]
    pub fn placeholder_hidden(&self) -> bool {
        self.placeholder_hidden
    }
}

impl PageSurface for HeadlessPage {
    fn address_text(&self) -> Option<String> {
        self.address.clone()
    }

    fn render_log_entry(&mut self, entry: &LogEntry) {
        if self.has_log_region {
            self.rendered_entries.push(entry.clone());
        }
    }

    fn set_region_text(&mut self, region_id: &str, text: &str) -> bool {
        match self.regions.get_mut(region_id) {
            Some(slot) => {
                text.clone_into(slot);
                true
            }
            None => false,
        }
    }

    fn mount_map(&mut self, url: &str) -> bool {
        if !(self.has_map_container && self.has_map_frame) {
            return false;
        }
        self.mounted_url = Some(url.to_owned());
        self.frame_visible = true;
        self.placeholder_hidden = true;
        true
    }
}
