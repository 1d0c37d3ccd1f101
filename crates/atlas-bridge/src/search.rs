//! Address search orchestration.
//!
//! One invocation walks the whole pipeline: log the start, query the
//! geocoding endpoint, resolve a name and coordinate pair from the first
//! hit, build the viewer URL and mount it into the page's frame. Every step
//! appends to the bridge's own log book and mirrors into the page's log
//! region; irregular outcomes terminate as distinct [`SearchOutcome`]
//! variants rather than errors.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use atlas_core::log::{LogBook, LogEntry, Severity};
use atlas_core::{build_map_url, wkt, AppConfig};
use atlas_geocode::{GeoSearchClient, SearchHit};

use crate::page::PageSurface;
use crate::status::{self, SEARCH_STATUS_REGION};

const CAT_READY: &str = "READY";
const CAT_SEARCH: &str = "SEARCH";
const CAT_API: &str = "API";
const CAT_PARSE: &str = "PARSE";
const CAT_RESULT: &str = "RESULT";
const CAT_MAP: &str = "MAP";
const CAT_LAYER: &str = "LAYER";
const CAT_ERROR: &str = "ERROR";

/// Terminal state of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The viewer URL was mounted into the page's frame.
    MapLoaded { url: String },
    /// The endpoint returned an empty hit array. Normal termination.
    NotFound,
    /// Neither the WKT geometry nor the x/y fields yielded a finite pair.
    /// Normal termination.
    CoordinatesMissing,
    /// The page has no map container or frame to mount into.
    ContainerMissing,
    /// A newer invocation started while this one was in flight; its response
    /// was discarded without touching the page.
    Superseded,
    /// Transport failure, non-2xx status or malformed body.
    Failed { message: String },
}

struct PageState<P> {
    page: P,
    book: LogBook,
    frame_load_armed: bool,
}

impl<P: PageSurface> PageState<P> {
    fn log(&mut self, category: &str, message: impl Into<String>, severity: Severity) {
        let entry = self.book.append(category, message, severity);
        tracing::debug!(
            category = %entry.category,
            severity = %entry.severity,
            "{}",
            entry.message
        );
        self.page.render_log_entry(entry);
    }

    fn set_status(&mut self, text: &str) {
        status::set_status(&mut self.page, text, SEARCH_STATUS_REGION);
    }
}

/// Bridges one host page to the geocoding endpoint and the map viewer.
///
/// The address is read from the page once, at construction. Page and log
/// state live behind a mutex that is never held across the network call, so
/// concurrent invocations interleave only at that boundary, and the
/// generation counter makes sure a stale response is discarded instead of
/// overwriting a newer invocation's writes.
pub struct Bridge<P: PageSurface> {
    client: GeoSearchClient,
    address: String,
    map_base: String,
    map_layer: String,
    map_zoom: u8,
    generation: AtomicU64,
    state: Mutex<PageState<P>>,
}

impl<P: PageSurface> Bridge<P> {
    /// Reads the address from the page (falling back to `"Unknown"`) and
    /// logs the ready entry.
    pub fn new(client: GeoSearchClient, page: P, config: &AppConfig) -> Self {
        let mut state = PageState {
            page,
            book: LogBook::new(),
            frame_load_armed: false,
        };
        let address = state
            .page
            .address_text()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown".to_owned());
        state.log(
            CAT_READY,
            "Address-to-map bridge ready. The map region is persistent; tabs cycle below.",
            Severity::Info,
        );

        Self {
            client,
            address,
            map_base: config.map_base.clone(),
            map_layer: config.map_layer.clone(),
            map_zoom: config.map_zoom,
            generation: AtomicU64::new(0),
            state: Mutex::new(state),
        }
    }

    /// The address this bridge searches for.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Runs one search invocation to its terminal state.
    ///
    /// Expected negative results (no match, unusable coordinates, missing
    /// map container) terminate normally as their own variants; transport
    /// and protocol failures are logged once and surface as
    /// [`SearchOutcome::Failed`]. Never returns `Err`; the log book and the
    /// status region carry the details.
    pub async fn run_search(&self) -> SearchOutcome {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().await;
            state.log(
                CAT_SEARCH,
                format!("Starting address search for: {}", self.address),
                Severity::Info,
            );
            state.set_status(&format!("⏳ Searching for: {}", self.address));
            let url = self.client.search_url(&self.address);
            state.log(
                CAT_API,
                format!("Calling: {}", preview(url.as_str(), 60)),
                Severity::Info,
            );
        }

        let result = self.client.search(&self.address).await;

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != token {
            state.log(
                CAT_SEARCH,
                "Discarding stale response: a newer search superseded this invocation",
                Severity::Warning,
            );
            return SearchOutcome::Superseded;
        }

        let hits = match result {
            Ok(hits) => hits,
            Err(err) => {
                state.log(CAT_ERROR, format!("Search failed: {err}"), Severity::Error);
                state.set_status(&format!("❌ Error: {err}"));
                return SearchOutcome::Failed {
                    message: err.to_string(),
                };
            }
        };

        state.log(
            CAT_API,
            format!("Response received with {} results", hits.len()),
            Severity::Success,
        );

        if hits.is_empty() {
            state.log(
                CAT_RESULT,
                format!("No address found matching: {}", self.address),
                Severity::Warning,
            );
            state.set_status("❌ Address not found in Malmö");
            return SearchOutcome::NotFound;
        }

        let hit = &hits[0];
        let name = hit.display_name();

        let Some((x, y)) = Self::extract_coordinates(&mut state, hit) else {
            state.log(CAT_ERROR, "Missing coordinates in response", Severity::Error);
            state.set_status("❌ Coordinates not found");
            return SearchOutcome::CoordinatesMissing;
        };

        state.log(
            CAT_RESULT,
            format!("Found: {name} at ({x}, {y})"),
            Severity::Success,
        );

        let url = build_map_url(&self.map_base, x, y, self.map_zoom, &self.map_layer);
        state.log(
            CAT_MAP,
            format!("Built viewer URL with the {} overlay", self.map_layer),
            Severity::Info,
        );
        state.log(CAT_MAP, format!("URL: {}", preview(&url, 100)), Severity::Info);

        if state.page.mount_map(&url) {
            state.frame_load_armed = true;
            state.log(
                CAT_MAP,
                "Map mounted in the persistent container",
                Severity::Success,
            );
            state.log(
                CAT_LAYER,
                format!("Requested the {} overlay via URL parameters", self.map_layer),
                Severity::Info,
            );
            state.log(
                CAT_LAYER,
                "If the overlay is not visible, activate it from the map's layer panel",
                Severity::Warning,
            );
            state.set_status(&format!("✅ Map loaded: {name}"));
            SearchOutcome::MapLoaded { url }
        } else {
            state.log(CAT_ERROR, "Map container not found on the page", Severity::Error);
            state.set_status("❌ Error: Map container not available");
            SearchOutcome::ContainerMissing
        }
    }

    /// Host callback for the embedded frame's load completion.
    ///
    /// One-shot per mounted map: the first call after a successful mount
    /// logs the completion; further calls are ignored until the next mount.
    pub async fn frame_loaded(&self) {
        let mut state = self.state.lock().await;
        if !state.frame_load_armed {
            return;
        }
        state.frame_load_armed = false;
        state.log(CAT_MAP, "Embedded frame finished loading", Severity::Success);
    }

    /// Snapshot of the log book.
    pub async fn log_entries(&self) -> Vec<LogEntry> {
        self.state.lock().await.book.entries().to_vec()
    }

    /// Consumes the bridge, handing back the page and the log book.
    #[must_use]
    pub fn into_parts(self) -> (P, LogBook) {
        let state = self.state.into_inner();
        (state.page, state.book)
    }

    /// Two-tier coordinate extraction: the WKT `GEOM` string first, the
    /// separate x/y fields as fallback. Both tiers require finite values.
    fn extract_coordinates(state: &mut PageState<P>, hit: &SearchHit) -> Option<(f64, f64)> {
        if let Some(geom) = hit.geom.as_deref() {
            match wkt::parse_point(geom) {
                Ok((x, y)) if x.is_finite() && y.is_finite() => {
                    state.log(
                        CAT_PARSE,
                        format!("Extracted WKT point: x={x}, y={y}"),
                        Severity::Info,
                    );
                    return Some((x, y));
                }
                Ok((x, y)) => {
                    state.log(
                        CAT_PARSE,
                        format!("WKT point has non-finite coordinates: x={x}, y={y}"),
                        Severity::Warning,
                    );
                }
                Err(err) => {
                    state.log(
                        CAT_PARSE,
                        format!("Unusable GEOM ({err}); falling back to x/y fields"),
                        Severity::Warning,
                    );
                }
            }
        }

        let (x, y) = hit.field_coordinates()?;
        state.log(
            CAT_PARSE,
            format!("Using x/y fields: x={x}, y={y}"),
            Severity::Info,
        );
        Some((x, y))
    }
}

/// First `limit` characters, with a trailing ellipsis when truncated.
fn preview(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_owned(),
    }
}
