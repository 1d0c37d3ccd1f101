//! Response shapes for the geocoding search endpoint.

use serde::Deserialize;

/// One element of the search response array.
///
/// The endpoint is loose about which fields it populates: named places carry
/// an upper-case `NAMN`, street matches an `adress`, and geometry arrives
/// either as a WKT `GEOM` string or as separate numeric `x`/`y` fields.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "NAMN")]
    pub namn: Option<String>,
    pub name: Option<String>,
    pub adress: Option<String>,
    #[serde(rename = "GEOM")]
    pub geom: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl SearchHit {
    /// Display name for the hit: localized `NAMN` first, then `name`, then
    /// `adress`. Blank candidates are skipped; `"Unknown"` when nothing
    /// usable remains.
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.namn, &self.name, &self.adress]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or("Unknown")
            .to_owned()
    }

    /// The hit's separate `x`/`y` fields, when both are present and finite.
    /// This is the fallback tier; the WKT `GEOM` string takes precedence.
    #[must_use]
    pub fn field_coordinates(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        }
    }
}
