//! Root category specifications

use serde::{Deserialize, Deserializer, de};

use crate::error::CommonsError;

/// One traversal entry point with its own recursion budget
///
/// Depth 0 means "only this category's direct file members, no subcategory
/// descent". Deserialization accepts depth as an integer or a numeric string
/// (the wire format used by campaign definitions); anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RootSpec {
    /// Category to start from, e.g. `Category:Birds of Kenya`
    #[serde(rename = "name")]
    pub category: String,
    /// Number of subcategory levels to descend below this root
    #[serde(deserialize_with = "de_depth")]
    pub depth: u32,
}

impl RootSpec {
    /// Creates a root spec from a category name and depth
    #[must_use]
    pub fn new(category: impl Into<String>, depth: u32) -> Self {
        Self {
            category: category.into(),
            depth,
        }
    }

    /// Creates a root spec parsing depth from a string.
    ///
    /// # Errors
    ///
    /// Returns [`CommonsError::InvalidArgument`] if `depth` is not a
    /// non-negative integer.
    pub fn parse(category: impl Into<String>, depth: &str) -> Result<Self, CommonsError> {
        let depth = parse_depth(depth)?;
        Ok(Self::new(category, depth))
    }
}

fn parse_depth(s: &str) -> Result<u32, CommonsError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| CommonsError::InvalidArgument(format!("depth must be a non-negative integer, got {s:?}")))
}

fn de_depth<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct DepthVisitor;

    impl de::Visitor<'_> for DepthVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a non-negative integer or numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("depth {v} out of range")))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("depth {v} out of range")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            parse_depth(v).map_err(|e| E::custom(e.to_string()))
        }
    }

    deserializer.deserialize_any(DepthVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_as_integer() {
        let spec: RootSpec =
            serde_json::from_str(r#"{"name": "Category:Birds", "depth": 2}"#).unwrap();
        assert_eq!(spec, RootSpec::new("Category:Birds", 2));
    }

    #[test]
    fn depth_as_numeric_string() {
        let spec: RootSpec =
            serde_json::from_str(r#"{"name": "Category:Birds", "depth": "3"}"#).unwrap();
        assert_eq!(spec.depth, 3);
    }

    #[test]
    fn non_numeric_depth_rejected() {
        let res: Result<RootSpec, _> =
            serde_json::from_str(r#"{"name": "Category:Birds", "depth": "lots"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn negative_depth_rejected() {
        let res: Result<RootSpec, _> =
            serde_json::from_str(r#"{"name": "Category:Birds", "depth": -1}"#);
        assert!(res.is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        let res = RootSpec::parse("Category:Birds", "deep");
        match res {
            Err(CommonsError::InvalidArgument(msg)) => assert!(msg.contains("deep")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn parse_accepts_padded_number() {
        let spec = RootSpec::parse("Category:Birds", " 4 ").unwrap();
        assert_eq!(spec.depth, 4);
    }
}
