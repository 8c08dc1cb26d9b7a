//! Domain types for goaltrack.

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Session-local goal identifier.
///
/// Minted from a monotonically increasing counter owned by the tracker,
/// so every id is unique for the tracker's lifetime by construction.
/// Ids carry no meaning beyond removal matching and are not stable
/// across restarts (the list is in-memory only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalId(pub u64);

// ============================================================================
// STRUCTS
// ============================================================================

/// A single tracked goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// Unique within the owning tracker's lifetime.
    pub id: GoalId,
    /// Trimmed at the insertion boundary, never empty or whitespace-only.
    /// Interior newlines permitted. Immutable once created.
    pub text: String,
}

// ============================================================================
// TESTS
// ============================================================================
