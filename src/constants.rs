/// Constants used by subtree label derivation during candidate expansion.
pub mod expansion {
    /// Marker appended to a parent label for the first child subtree.
    pub const FIRST_CHILD_MARKER: &str = "A";
    /// Marker appended to a parent label for the second child subtree.
    pub const SECOND_CHILD_MARKER: &str = "B";
}

/// Constants used by search control defaults.
pub mod search {
    /// Subtree labels of the default base partition.
    pub const DEFAULT_BASE_GROUPS: [&str; 2] = ["A", "B"];
    /// Default cap on the subtree count before the search stops unconditionally.
    pub const DEFAULT_MAX_LEVEL: usize = 10;
}

/// Constants used by checkpoint persistence and compatibility checks.
pub mod checkpoint {
    /// Version tag for checkpoint snapshot compatibility checks.
    pub const SNAPSHOT_VERSION: u8 = 1;
    /// Default filename for persisted search checkpoints.
    pub const DEFAULT_CHECKPOINT_FILENAME: &str = "search_runs.json";
}
