//! Resource-name to path translation.
//!
//! Shoper's REST paths use hyphens where a natural identifier would use
//! underscores (`order-status`, `product-stocks`). Callers address resources
//! by identifier-style name and the translation happens here.

/// Translates a resource name into its REST path segment.
///
/// Underscores become hyphens; the name is otherwise passed through verbatim.
/// The mapping is structural, not semantic: nothing checks that the result
/// names a real remote resource.
pub(crate) fn resource_segment(name: &str) -> String {
    name.replace('_', "-")
}

/// Joins a parent resource path with a child segment.
pub(crate) fn join(parent: &str, child: &str) -> String {
    format!("{parent}/{child}")
}
