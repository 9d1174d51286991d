//! Category-tree traversal: recursive expansion with per-root depth budgets,
//! cross-root cycle avoidance, and fan-in across concurrently-expanding
//! subtrees.
//!
//! All traversal state lives in a context created per [`collect_images`]
//! call, so independent invocations cannot contaminate each other.

use std::collections::HashSet;
use std::sync::Mutex;

use futures::future::{BoxFuture, join_all};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    assemble,
    client::Client,
    config::Config,
    error::CommonsError,
    types::{RootSpec, members::MemberKind},
};

/// Policy for remote failures inside one subtree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Record the failure and keep expanding sibling subtrees; the traversal
    /// always completes with whatever was gathered (default)
    #[default]
    ContinueSiblings,
    /// Cancel the whole forest and fail with the first subtree error
    Abort,
}

/// Options for a forest traversal
#[derive(Debug, Clone, Default)]
pub struct TraversalOptions {
    /// Failure policy for subtree fetch errors
    pub error_policy: ErrorPolicy,
    /// External cancellation hook. Once cancelled, in-flight fetches stop
    /// issuing further continuation requests and pending expansions complete
    /// immediately; the traversal still resolves with whatever was gathered.
    pub cancel: CancellationToken,
}

/// One recorded subtree failure
#[derive(Debug)]
pub struct SubtreeError {
    /// Category whose fetch failed
    pub category: String,
    /// The failure
    pub error: CommonsError,
}

/// Result of a forest traversal
#[derive(Debug)]
pub struct Harvest {
    /// Distinct image titles in first-seen order, filtered by extension
    pub images: Vec<String>,
    /// Subtree failures, empty on a fully successful run
    pub failures: Vec<SubtreeError>,
}

/// Shared state for one traversal invocation
struct TraversalCtx<'a, C: Config> {
    client: &'a Client<C>,
    visited: Mutex<HashSet<String>>,
    images: Mutex<Vec<String>>,
    failures: Mutex<Vec<SubtreeError>>,
    policy: ErrorPolicy,
    cancel: CancellationToken,
}

/// Collects all image titles reachable from `roots`, each root with its own
/// depth budget.
///
/// Expands every root concurrently, waits for all subtrees to finish, then
/// deduplicates the gathered titles and filters them by the allowed image
/// extensions. A category reachable via multiple paths is expanded exactly
/// once across the whole forest.
///
/// # Errors
///
/// Returns [`CommonsError::InvalidArgument`] if a root has an empty category
/// name. Under [`ErrorPolicy::Abort`], returns the first subtree error;
/// otherwise subtree failures are reported in [`Harvest::failures`] and the
/// call succeeds.
pub async fn collect_images<C: Config>(
    client: &Client<C>,
    roots: &[RootSpec],
    options: TraversalOptions,
) -> Result<Harvest, CommonsError> {
    for root in roots {
        if root.category.trim().is_empty() {
            return Err(CommonsError::InvalidArgument(
                "root category name must not be empty".into(),
            ));
        }
    }

    let ctx = TraversalCtx {
        client,
        visited: Mutex::new(HashSet::new()),
        images: Mutex::new(Vec::new()),
        failures: Mutex::new(Vec::new()),
        policy: options.error_policy,
        cancel: options.cancel,
    };

    join_all(
        roots
            .iter()
            .map(|root| expand(&ctx, root.category.clone(), root.depth)),
    )
    .await;

    let mut failures = ctx.failures.into_inner().unwrap();
    if ctx.policy == ErrorPolicy::Abort && !failures.is_empty() {
        return Err(failures.remove(0).error);
    }

    let images = assemble::finalize(ctx.images.into_inner().unwrap());
    Ok(Harvest { images, failures })
}

/// Expands one category node: fetch members, accumulate files, then fan out
/// into subcategories with a decremented depth budget and wait for all of
/// them. Completes without a value; failures go to the context's error sink.
fn expand<'a, C: Config>(
    ctx: &'a TraversalCtx<'a, C>,
    category: String,
    depth: u32,
) -> BoxFuture<'a, ()> {
    Box::pin(async move {
        if ctx.cancel.is_cancelled() {
            return;
        }

        // Insert before fetching so a concurrent sighting of the same
        // category short-circuits instead of expanding twice.
        if !ctx.visited.lock().unwrap().insert(category.clone()) {
            debug!(category = %category, "already visited, skipping");
            return;
        }

        let fetched = ctx
            .client
            .category_members()
            .list_all(&category, &ctx.cancel)
            .await;
        let members = match fetched {
            Ok(members) => members,
            Err(error) => {
                warn!(category = %category, error = %error, "subtree fetch failed");
                if ctx.policy == ErrorPolicy::Abort {
                    ctx.cancel.cancel();
                }
                ctx.failures
                    .lock()
                    .unwrap()
                    .push(SubtreeError { category, error });
                return;
            }
        };

        // Files are appended before any child expansion starts.
        let mut subcats = Vec::new();
        {
            let mut images = ctx.images.lock().unwrap();
            for member in members {
                match member.kind {
                    MemberKind::File => images.push(member.title),
                    MemberKind::Subcategory => subcats.push(member.title),
                    MemberKind::Other => {}
                }
            }
        }

        if depth == 0 || subcats.is_empty() {
            return;
        }

        join_all(
            subcats
                .into_iter()
                .map(|subcat| expand(ctx, subcat, depth - 1)),
        )
        .await;
    })
}
