//! Options recognized by read and delete operations.

/// Options attached to a read request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Disable soft-delete filtering for this request only, so the read also
    /// returns records marked deleted.
    pub with_deleted: bool,
}

/// Options for a single-record soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOptions {
    /// Run the delete-rule set before mutating (on by default).
    pub check_rules: bool,
}

impl Default for DeleteOptions {
    fn default() -> Self {
        Self { check_rules: true }
    }
}
