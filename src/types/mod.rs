//! Request and response types for the Commons API

/// Category-members endpoint types
pub mod members;
/// Root category specifications
pub mod roots;

pub use members::{CategoryMember, CategoryMembersResponse, Continuation, MemberKind};
pub use roots::RootSpec;
