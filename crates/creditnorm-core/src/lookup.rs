//! Null-safe lookups into parsed payloads.
//!
//! Missing intermediate nodes yield `None`; nothing here panics on an
//! unexpected shape.

use serde_json::Value;

/// Follow `path` through nested JSON objects.
///
/// ```
/// use creditnorm_core::lookup::lookup;
///
/// let tree = serde_json::json!({"business_info": {"owner": {"name": "Joseph Smith"}}});
/// let name = lookup(&tree, &["business_info", "owner", "name"]).and_then(|v| v.as_str());
/// assert_eq!(name, Some("Joseph Smith"));
/// assert_eq!(lookup(&tree, &["credit_data", "business_score"]), None);
/// ```
pub fn lookup<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(value, |node, key| node.get(*key))
}

/// Text content of the first element matching `//section/path...`.
///
/// Candidates are tried in document order: every `section` element anywhere
/// in the tree, then the child chain in `path`. Text content concatenates all
/// descendant text nodes. An element that exists but has no text yields
/// `Some("")`; callers decide what blank means.
pub fn select_text(doc: &roxmltree::Document<'_>, section: &str, path: &[&str]) -> Option<String> {
    doc.descendants()
        .filter(|node| node.is_element() && node.has_tag_name(section))
        .find_map(|section_node| {
            path.iter().try_fold(section_node, |node, name| {
                node.children()
                    .find(|child| child.is_element() && child.has_tag_name(*name))
            })
        })
        .map(|node| {
            node.descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect()
        })
}
