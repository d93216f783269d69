//! Markup-tag encoding (XML)
//!
//! Serializes the grouped tree to pretty-printed XML. Tag names are the
//! normalized field names; the document element is always `Image`, carrying
//! the source file path (the image node's own value) as its `file`
//! attribute.
//!
//! ## Format
//!
//! ```text
//! <Image file="scan.dcm">
//!   <Geometry>512x512+0+0</Geometry>
//!   <Histogram>
//!     <HistogramLevel count="3" rval="0" gval="0" bval="0" hexval="000000000000" colname="gray" gray="0"/>
//!   </Histogram>
//! </Image>
//! ```
//!
//! Histogram leaves carry their captures as element attributes (empty
//! values omitted) and no text content. Empty-value leaves collapse to
//! self-closing elements.

use crate::report::formats::normalize_name;
use crate::report::tree::Node;

/// Render the tree as a pretty-printed XML document.
pub fn encode_tags(root: &Node) -> String {
    let mut out = String::new();
    match root.children.first() {
        Some(image) if !image.children.is_empty() => {
            out.push_str(&format!(
                "<Image file=\"{}\">\n",
                escape_xml(&image.value)
            ));
            for child in &image.children {
                write_element(child, 1, &mut out);
            }
            out.push_str("</Image>\n");
        }
        Some(image) => {
            out.push_str(&format!("<Image file=\"{}\"/>\n", escape_xml(&image.value)));
        }
        None => out.push_str("<Image file=\"\"/>\n"),
    }
    out
}

/// Serialize one node (recursive).
fn write_element(node: &Node, indent_level: usize, out: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = normalize_name(&node.name);

    if !node.children.is_empty() {
        out.push_str(&format!("{}<{}>\n", indent, tag));
        for child in &node.children {
            write_element(child, indent_level + 1, out);
        }
        out.push_str(&format!("{}</{}>\n", indent, tag));
    } else if node.is_histogram() {
        out.push_str(&format!("{}<{}", indent, tag));
        for (key, value) in &node.attributes {
            if !value.is_empty() {
                out.push_str(&format!(" {}=\"{}\"", key, escape_xml(value)));
            }
        }
        out.push_str("/>\n");
    } else if node.value.is_empty() {
        out.push_str(&format!("{}<{}/>\n", indent, tag));
    } else {
        out.push_str(&format!(
            "{}<{}>{}</{}>\n",
            indent,
            tag,
            escape_xml(&node.value),
            tag
        ));
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builder::build_tree;
    use crate::report::grouping::group_tree;

    fn encode_lines(lines: &[&str]) -> String {
        encode_tags(&group_tree(build_tree(lines.iter()).unwrap()))
    }

    #[test]
    fn test_document_element_carries_the_file_path() {
        let xml = encode_lines(&["Image: scans/patient one.dcm", "  Depth: 8-bit"]);
        assert!(xml.starts_with("<Image file=\"scans/patient one.dcm\">\n"));
        assert!(xml.ends_with("</Image>\n"));
    }

    #[test]
    fn test_leaf_names_are_normalized_to_camel_tags() {
        let xml = encode_lines(&[
            "Image: out.png",
            "  Geometry: 512x512+0+0",
            "  Page geometry: 512x512+0+0",
        ]);
        assert!(xml.contains("  <Geometry>512x512+0+0</Geometry>\n"));
        assert!(xml.contains("  <PageGeometry>512x512+0+0</PageGeometry>\n"));
    }

    #[test]
    fn test_interior_nodes_nest_with_indentation() {
        let xml = encode_lines(&[
            "Image: scan.dcm",
            "  Channel statistics:",
            "    Gray:",
            "      min: 0 (0)",
        ]);
        assert!(xml.contains("  <ChannelStatistics>\n"));
        assert!(xml.contains("    <Gray>\n"));
        assert!(xml.contains("      <min>0 (0)</min>\n"));
        assert!(xml.contains("    </Gray>\n"));
        assert!(xml.contains("  </ChannelStatistics>\n"));
    }

    #[test]
    fn test_histogram_leaves_emit_attributes_not_text() {
        let xml = encode_lines(&[
            "Image: scan.dcm",
            "  Histogram:",
            "    3: (  0,  0,  0) #000000000000 gray(0)",
        ]);
        assert!(xml.contains(
            "    <HistogramLevel count=\"3\" rval=\"0\" gval=\"0\" bval=\"0\" \
             hexval=\"000000000000\" colname=\"gray\" gray=\"0\"/>\n"
        ));
    }

    #[test]
    fn test_grouped_properties_nest_under_prefix_tag() {
        let xml = encode_lines(&[
            "Image: scan.dcm",
            "  Properties:",
            "    dcm:PatientID: 12345",
        ]);
        assert!(xml.contains("  <Properties>\n"));
        assert!(xml.contains("    <dcm>\n"));
        assert!(xml.contains("      <PatientID>12345</PatientID>\n"));
    }

    #[test]
    fn test_empty_value_leaf_self_closes() {
        let xml = encode_lines(&["Image: scan.dcm", "  Comment:"]);
        assert!(xml.contains("  <Comment/>\n"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let xml = encode_lines(&["Image: scan.dcm", "  Comment: a<b & \"c\""]);
        assert!(xml.contains("<Comment>a&lt;b &amp; &quot;c&quot;</Comment>"));
    }
}
