//! Line classification
//!
//! The two line grammars of the report format, each a single regex compiled
//! once. Classification is pure: a line either matches or it does not, and a
//! non-match is never an error. Which grammar is tried first depends on the
//! builder's histogram mode, so both are exposed separately.
//!
//! Generic lines:
//!
//! ```text
//!   Page geometry: 512x512+0+0
//! ```
//!
//! The name runs to the last `:` whose remainder is empty or starts with
//! whitespace, so names may themselves contain colons (`dcm:PatientID`) and
//! timestamp values keep theirs.
//!
//! Histogram lines:
//!
//! ```text
//!   30489: (  385,  385,  385) #018101810181 gray(0.587472%,0.587472%,0.587472%)
//!   6709: (    0,    0,    0) #000000000000 gray(0)
//! ```
//!
//! The trailing parenthesized list carries either three channel percentages
//! or a single grayscale value; both capture shapes are preserved verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

static GENERIC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<leading>\s*)(?P<name>.*):(?P<value>\s.*|)$").unwrap());

static HISTOGRAM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s+(?P<count>\d+):\s*\(\s*(?P<rval>\d+)\s*,\s*(?P<gval>\d+)\s*,\s*(?P<bval>\d+)\s*\)\s*#(?P<hexval>[0-9A-F]{12})\s*(?P<colname>[a-zA-Z]+)\s*\((?:(?P<rperc>\d+(?:\.\d+)?)%?,(?P<gperc>\d+(?:\.\d+)?)%?,(?P<bperc>\d+(?:\.\d+)?)%?|(?P<gray>\d+(?:\.\d+)?)%?)\)",
    )
    .unwrap()
});

/// Named captures of the histogram grammar, in attribute order.
const HISTOGRAM_CAPTURES: &[&str] = &[
    "count", "rval", "gval", "bval", "hexval", "colname", "rperc", "gperc", "bperc", "gray",
];

/// A generic `name: value` field with its indentation depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericLine {
    /// Nesting depth; the synthetic root occupies depth 0, so unindented
    /// fields sit at depth 1.
    pub depth: usize,
    pub name: String,
    pub value: String,
}

/// A histogram entry reduced to its capture attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramLine {
    pub attributes: Vec<(String, String)>,
}

/// Match a line against the generic grammar.
///
/// The value is trimmed of surrounding whitespace. Depth is the number of
/// leading whitespace characters divided by two, shifted one level below the
/// synthetic root.
pub fn parse_generic(line: &str) -> Option<GenericLine> {
    let caps = GENERIC_LINE.captures(line)?;
    let depth = caps["leading"].chars().count() / 2 + 1;
    Some(GenericLine {
        depth,
        name: caps["name"].to_string(),
        value: caps["value"].trim().to_string(),
    })
}

/// Match a line against the histogram-entry grammar.
///
/// Every named capture that participated in the match becomes an attribute,
/// in declaration order.
pub fn parse_histogram(line: &str) -> Option<HistogramLine> {
    let caps = HISTOGRAM_LINE.captures(line)?;
    let attributes = HISTOGRAM_CAPTURES
        .iter()
        .filter_map(|&key| {
            caps.name(key)
                .map(|m| (key.to_string(), m.as_str().to_string()))
        })
        .collect();
    Some(HistogramLine { attributes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Image: scan.dcm", 1, "Image", "scan.dcm")]
    #[case("  Geometry: 512x512+0+0", 2, "Geometry", "512x512+0+0")]
    #[case("  Page geometry: 512x512+0+0", 2, "Page geometry", "512x512+0+0")]
    #[case("    dcm:PatientID: 12345", 3, "dcm:PatientID", "12345")]
    #[case("  Histogram:", 2, "Histogram", "")]
    #[case("      min: 0 (0)", 4, "min", "0 (0)")]
    fn test_generic_fields(
        #[case] line: &str,
        #[case] depth: usize,
        #[case] name: &str,
        #[case] value: &str,
    ) {
        let parsed = parse_generic(line).expect("line should match the generic grammar");
        assert_eq!(parsed.depth, depth);
        assert_eq!(parsed.name, name);
        assert_eq!(parsed.value, value);
    }

    #[test]
    fn test_generic_name_stops_at_last_whitespace_colon() {
        // Timestamp values contain colons; the name must not swallow them.
        let parsed = parse_generic("    date:create: 2020-01-01T10:30:00+00:00").unwrap();
        assert_eq!(parsed.name, "date:create");
        assert_eq!(parsed.value, "2020-01-01T10:30:00+00:00");
    }

    #[rstest]
    #[case("")]
    #[case("no colon here")]
    #[case("key:value")] // value neither empty nor starting with whitespace
    fn test_generic_non_matches(#[case] line: &str) {
        assert!(parse_generic(line).is_none());
    }

    #[test]
    fn test_histogram_three_channel_percentages() {
        let parsed = parse_histogram(
            "    30489: (  385,  385,  385) #018101810181 gray(0.587472%,0.587472%,0.587472%)",
        )
        .expect("histogram line should match");
        let attrs: Vec<(&str, &str)> = parsed
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            attrs,
            vec![
                ("count", "30489"),
                ("rval", "385"),
                ("gval", "385"),
                ("bval", "385"),
                ("hexval", "018101810181"),
                ("colname", "gray"),
                ("rperc", "0.587472"),
                ("gperc", "0.587472"),
                ("bperc", "0.587472"),
            ]
        );
    }

    #[test]
    fn test_histogram_single_grayscale_value() {
        let parsed = parse_histogram("  6709: (    0,    0,    0) #000000000000 gray(0)")
            .expect("histogram line should match");
        let attrs: Vec<(&str, &str)> = parsed
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            attrs,
            vec![
                ("count", "6709"),
                ("rval", "0"),
                ("gval", "0"),
                ("bval", "0"),
                ("hexval", "000000000000"),
                ("colname", "gray"),
                ("gray", "0"),
            ]
        );
    }

    #[rstest]
    #[case("  Comment: not a histogram line")]
    #[case("3: (0,0,0) #000000000000 gray(0)")] // no leading whitespace
    #[case("  3: (0,0,0) #00000000 gray(0)")] // hex too short
    fn test_histogram_non_matches(#[case] line: &str) {
        assert!(parse_histogram(line).is_none());
    }
}
