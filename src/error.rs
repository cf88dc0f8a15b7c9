use thiserror::Error;

/// Result type returned by the fallible (`try_*`) operations of the set.
pub type Result<T> = core::result::Result<T, SetError>;

/// Failure conditions of the set.
///
/// Duplicate inserts and removals of absent values are not errors; they are
/// reported through the `bool` returned by [`insert`] and [`remove`].
///
/// [`insert`]: crate::OpenAddressingSet::insert
/// [`remove`]: crate::OpenAddressingSet::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// Slot storage for `slots` entries could not be allocated.
    ///
    /// Raised by construction and by growth. A failed growth leaves the set
    /// exactly as it was before the call.
    #[error("failed to allocate storage for {slots} slots")]
    AllocationFailure {
        /// Number of slots that were requested.
        slots: usize,
    },

    /// A probe wrapped around the whole table without finding a usable slot.
    ///
    /// The load-factor bound keeps at least 30% of the slots free, so this
    /// indicates a broken table invariant rather than a recoverable state.
    #[error("probe wrapped a table of {capacity} slots without resolving")]
    TableFull {
        /// Slot count of the table that was probed.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn allocation_failure_display() {
        assert_eq!(
            "failed to allocate storage for 64 slots",
            format!("{}", SetError::AllocationFailure { slots: 64 })
        );
    }

    #[test]
    fn table_full_display() {
        assert_eq!(
            "probe wrapped a table of 16 slots without resolving",
            format!("{}", SetError::TableFull { capacity: 16 })
        );
    }
}
