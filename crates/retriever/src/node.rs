//! Read-only view over a parsed JSON value.

use serde_json::Value;

/// Capabilities the retriever needs from a JSON tree node.
///
/// Each coercion returns `Some` only when the node already has the matching
/// representation, so a `None` doubles as the type predicate.
pub trait JsonNode {
    /// Returns the member named `name`, or `None` when this node is not an
    /// object or has no such member.
    fn child(&self, name: &str) -> Option<&Self>;

    /// Whether the node is an explicit JSON `null`.
    fn is_null(&self) -> bool;

    /// Text of a JSON string node.
    fn as_text(&self) -> Option<&str>;

    /// Value of an integral number inside the `i32` range.
    fn as_int(&self) -> Option<i32>;

    /// Value of an integral number inside the `i64` range.
    fn as_long(&self) -> Option<i64>;
}

impl JsonNode for Value {
    fn child(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn is_null(&self) -> bool {
        Value::is_null(self)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn as_int(&self) -> Option<i32> {
        self.as_i64().and_then(|number| i32::try_from(number).ok())
    }

    fn as_long(&self) -> Option<i64> {
        self.as_i64()
    }
}
