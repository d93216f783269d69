//! Output encodings
//!
//! Three independent renderers over the grouped tree, plus the tag-name
//! normalization shared by the XML and property encoders:
//!
//! - [compact] — nested JSON objects, arrays only on sibling name clashes
//! - [tag] — pretty-printed XML with a fixed `Image` document element
//! - [properties] — flattened `%path=value` property list

pub mod compact;
pub mod properties;
pub mod tag;

pub use compact::encode_compact;
pub use properties::encode_properties;
pub use tag::encode_tags;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());
static CAMEL_STEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.)").unwrap());

/// Normalize a field name into an identifier-style tag.
///
/// Non-alphanumeric runs become underscores, edge underscores are trimmed,
/// then each underscore is removed and the following character upper-cased:
/// `Page geometry` becomes `PageGeometry`.
pub fn normalize_name(name: &str) -> String {
    let underscored = NON_IDENTIFIER.replace_all(name, "_");
    let trimmed = underscored.trim_matches('_');
    CAMEL_STEP
        .replace_all(trimmed, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}
