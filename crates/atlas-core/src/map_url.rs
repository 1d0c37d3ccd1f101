//! StadsAtlas viewer URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside hash-parameter values. The viewer splits its
/// fragment on `&` and `=`, so those must never appear raw in a value.
const FRAGMENT_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'&')
    .add(b'=')
    .add(b'%');

/// Builds the viewer URL for a resolved coordinate pair.
///
/// The pin duplicates the center, and the layer token is repeated under
/// `layers`, `layerIds` and `visibleLayers`: the viewer's parameter naming
/// convention is ambiguous across versions, so all three spellings are sent.
#[must_use]
pub fn build_map_url(map_base: &str, x: f64, y: f64, zoom: u8, layer: &str) -> String {
    let layer = utf8_percent_encode(layer, FRAGMENT_VALUE);
    format!(
        "{map_base}#center={x},{y}&zoom={zoom}&pin={x},{y}\
         &layers={layer}&layerIds={layer}&visibleLayers={layer}"
    )
}
