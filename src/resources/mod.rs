//! API resource implementations for the Commons client

/// Category-members API resource
pub mod category_members;

pub use category_members::CategoryMembers;
