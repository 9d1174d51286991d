//! Types for the `list=categorymembers` endpoint

use serde::Deserialize;

use crate::error::ApiErrorObject;

/// Kind of a category member, as reported by `cmprop=type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// A media file (`File:` namespace)
    File,
    /// A nested category (`Category:` namespace)
    #[serde(rename = "subcat")]
    Subcategory,
    /// Anything else the API may report (regular pages and future types)
    #[serde(other)]
    Other,
}

/// One direct child of a category: a leaf file or a nested category,
/// never the category itself
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMember {
    /// Full page title, e.g. `File:Example.jpg` or `Category:Birds`
    pub title: String,
    /// Member kind
    #[serde(rename = "type")]
    pub kind: MemberKind,
}

/// Continuation marker: more members exist for the current query
#[derive(Debug, Clone, Deserialize)]
pub struct Continuation {
    /// Opaque token to resubmit as `cmcontinue`; absence of the whole
    /// `continue` object means the member list is exhausted
    pub cmcontinue: String,
}

/// Inner `query` object of a `categorymembers` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembersPayload {
    /// Members returned on this page
    #[serde(default)]
    pub categorymembers: Vec<CategoryMember>,
}

/// One page of a `categorymembers` response
///
/// The API reports logical failures with HTTP 200 and an `error` payload
/// instead of a `query` object.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMembersResponse {
    /// Query payload, present on success
    #[serde(default)]
    pub query: Option<MembersPayload>,
    /// Continuation marker, present when more pages exist
    #[serde(rename = "continue", default)]
    pub cont: Option<Continuation>,
    /// API-level error payload
    #[serde(default)]
    pub error: Option<ApiErrorObject>,
}
