use tokio_util::sync::CancellationToken;

use crate::{
    client::Client,
    config::Config,
    error::CommonsError,
    types::members::{CategoryMember, CategoryMembersResponse},
};

/// Fixed parameters for every `list=categorymembers` query: files and
/// subcategories only (namespaces 6 and 14), maximum page size, title and
/// type properties.
const BASE_PARAMS: [(&str, &str); 5] = [
    ("action", "query"),
    ("list", "categorymembers"),
    ("cmlimit", "max"),
    ("cmnamespace", "6|14"),
    ("cmprop", "title|type"),
];

/// API resource for the `list=categorymembers` endpoint
pub struct CategoryMembers<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> CategoryMembers<'c, C> {
    /// Creates a new category-members resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetches one page of members for `category`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports a logical
    /// failure in the response body.
    pub async fn list_page(
        &self,
        category: &str,
        cmcontinue: Option<&str>,
    ) -> Result<CategoryMembersResponse, CommonsError> {
        let mut params: Vec<(&str, &str)> = BASE_PARAMS.to_vec();
        params.push(("cmtitle", category));
        if let Some(token) = cmcontinue {
            params.push(("cmcontinue", token));
        }

        let resp: CategoryMembersResponse = self.client.get(&params).await?;
        if let Some(err) = resp.error {
            return Err(CommonsError::Api(err));
        }
        Ok(resp)
    }

    /// Fetches all members of `category`, following continuation tokens
    /// until the member list is exhausted.
    ///
    /// Atomic per category: any page failure discards everything gathered so
    /// far and returns the error, so a caller never observes a partial member
    /// list. Cancellation stops before the next continuation request and
    /// returns the members gathered so far.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn list_all(
        &self,
        category: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CategoryMember>, CommonsError> {
        let mut members = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self.list_page(category, token.as_deref()).await?;
            if let Some(payload) = page.query {
                members.extend(payload.categorymembers);
            }
            match page.cont {
                Some(cont) if !cancel.is_cancelled() => token = Some(cont.cmcontinue),
                _ => break,
            }
        }

        Ok(members)
    }
}

// Add accessor to client
impl<C: Config> crate::Client<C> {
    /// Returns the category-members API resource
    #[must_use]
    pub const fn category_members(&self) -> CategoryMembers<'_, C> {
        CategoryMembers::new(self)
    }
}
