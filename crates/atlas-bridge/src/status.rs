//! Short status strings surfaced next to the map.

use crate::page::PageSurface;

/// Default region for search progress messages.
pub const SEARCH_STATUS_REGION: &str = "search-status";

/// Fixed indicator that mirrors every status write, whatever the target
/// region. Gives the page one always-current status slot.
pub const PRIMARY_INDICATOR: &str = "status-indicator";

/// Writes `text` into `region_id` and, redundantly, into the primary
/// indicator. Missing regions are tolerated silently.
pub fn set_status<P: PageSurface + ?Sized>(page: &mut P, text: &str, region_id: &str) {
    let _ = page.set_region_text(region_id, text);
    let _ = page.set_region_text(PRIMARY_INDICATOR, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HeadlessPage;

    #[test]
    fn writes_target_region_and_indicator() {
        let mut page = HeadlessPage::new();
        set_status(&mut page, "Searching...", SEARCH_STATUS_REGION);
        assert_eq!(page.region_text(SEARCH_STATUS_REGION), Some("Searching..."));
        assert_eq!(page.region_text(PRIMARY_INDICATOR), Some("Searching..."));
    }

    #[test]
    fn missing_target_region_still_updates_indicator() {
        let mut page = HeadlessPage::new().without_region(SEARCH_STATUS_REGION);
        set_status(&mut page, "Done", SEARCH_STATUS_REGION);
        assert_eq!(page.region_text(SEARCH_STATUS_REGION), None);
        assert_eq!(page.region_text(PRIMARY_INDICATOR), Some("Done"));
    }

    #[test]
    fn custom_region_is_honoured() {
        let mut page = HeadlessPage::new().with_region("sidebar-status");
        set_status(&mut page, "Ready", "sidebar-status");
        assert_eq!(page.region_text("sidebar-status"), Some("Ready"));
        assert_eq!(page.region_text(PRIMARY_INDICATOR), Some("Ready"));
    }
}
