//! Minimal WKT point parser.
//!
//! The geocoding endpoint returns geometries as Well-Known Text; only the
//! point form is consumed here. Accepted grammar:
//!
//! ```text
//! point   := prefix "POINT" ws* "(" ws* float ws+ float ws* ")"
//! prefix  := any leading text (SRID markers and the like are skipped)
//! ```
//!
//! Anything else (a different geometry kind, a missing parenthesis, extra
//! coordinate tokens) is a typed [`WktError`] rather than a silent `None`,
//! so callers can report *why* a geometry was unusable before falling back
//! to other coordinate sources.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WktError {
    #[error("geometry is not a POINT: \"{0}\"")]
    NotAPoint(String),

    #[error("malformed POINT body: {0}")]
    MalformedBody(String),

    #[error("invalid coordinate token \"{0}\"")]
    InvalidNumber(String),
}

/// Parses a WKT `POINT(<x> <y>)` string into an `(x, y)` pair.
///
/// # Errors
///
/// - [`WktError::NotAPoint`] when the input carries no `POINT` keyword.
/// - [`WktError::MalformedBody`] when the parenthesised body is missing,
///   unterminated, or does not hold exactly two coordinate tokens.
/// - [`WktError::InvalidNumber`] when a coordinate token is not a float.
pub fn parse_point(wkt: &str) -> Result<(f64, f64), WktError> {
    let Some(start) = wkt.find("POINT") else {
        return Err(WktError::NotAPoint(wkt.to_owned()));
    };

    let rest = wkt[start + "POINT".len()..].trim_start();
    let Some(body) = rest.strip_prefix('(') else {
        return Err(WktError::MalformedBody(format!(
            "expected \"(\" after POINT in \"{wkt}\""
        )));
    };
    let Some(end) = body.find(')') else {
        return Err(WktError::MalformedBody(format!(
            "missing closing parenthesis in \"{wkt}\""
        )));
    };

    let inner = &body[..end];
    let mut tokens = inner.split_whitespace();
    let (Some(first), Some(second), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(WktError::MalformedBody(format!(
            "expected exactly two coordinates, got \"{inner}\""
        )));
    };

    let x = first
        .parse::<f64>()
        .map_err(|_| WktError::InvalidNumber(first.to_owned()))?;
    let y = second
        .parse::<f64>()
        .map_err(|_| WktError::InvalidNumber(second.to_owned()))?;

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_point() {
        assert_eq!(parse_point("POINT(13.0 55.6)"), Ok((13.0, 55.6)));
    }

    #[test]
    fn parses_point_with_inner_whitespace() {
        assert_eq!(parse_point("POINT ( 13.003 55.605 )"), Ok((13.003, 55.605)));
    }

    #[test]
    fn parses_negative_coordinates() {
        assert_eq!(parse_point("POINT(-0.5 -1.25)"), Ok((-0.5, -1.25)));
    }

    #[test]
    fn skips_srid_prefix() {
        assert_eq!(parse_point("SRID=3008;POINT(117.2 61.9)"), Ok((117.2, 61.9)));
    }

    #[test]
    fn rejects_other_geometries() {
        assert!(matches!(
            parse_point("LINESTRING(0 0, 1 1)"),
            Err(WktError::NotAPoint(_))
        ));
    }

    #[test]
    fn rejects_missing_parenthesis() {
        assert!(matches!(
            parse_point("POINT 13.0 55.6"),
            Err(WktError::MalformedBody(_))
        ));
    }

    #[test]
    fn rejects_unterminated_body() {
        assert!(matches!(
            parse_point("POINT(13.0 55.6"),
            Err(WktError::MalformedBody(_))
        ));
    }

    #[test]
    fn rejects_three_coordinates() {
        assert!(matches!(
            parse_point("POINT(13.0 55.6 2.0)"),
            Err(WktError::MalformedBody(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_token() {
        assert_eq!(
            parse_point("POINT(13.0 north)"),
            Err(WktError::InvalidNumber("north".to_owned()))
        );
    }

    #[test]
    fn rejects_empty_body() {
        assert!(matches!(parse_point("POINT()"), Err(WktError::MalformedBody(_))));
    }
}
