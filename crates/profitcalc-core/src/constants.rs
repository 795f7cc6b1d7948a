//! Defaults and thresholds shared across the workspace.

/// Campaign discount rate used when a record does not supply one.
pub const DEFAULT_CAMPAIGN_DISCOUNT_RATE: f64 = 0.25;

/// Platform coverage rate used when a record does not supply one.
pub const DEFAULT_PLATFORM_COVERAGE_RATE: f64 = 0.30;

/// Row count above which bulk evaluation fans out across the rayon pool.
pub const PARALLEL_BATCH_THRESHOLD: usize = 4096;

/// Label prefix assigned to imported rows without a label.
pub const IMPORTED_LABEL_PREFIX: &str = "ID_";

/// Label prefix assigned to blank rows added to a ledger.
pub const BLANK_LABEL_PREFIX: &str = "NODE_";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
    /// Input file could not be read or framed.
    pub const ERROR_INPUT: i32 = 5;
}
