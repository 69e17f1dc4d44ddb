/// Constants used by the similarity scorer. These are fixed parts of the
/// scoring formula, not runtime configuration.
pub mod scoring {
    /// Multiplier applied to tag Jaccard similarity (score range `0..=100`).
    pub const TAG_MATCH_SCALE: f64 = 100.0;
    /// Multiplier applied to title-token Jaccard similarity (score range `0..=100`).
    pub const TITLE_SIMILARITY_SCALE: f64 = 100.0;
    /// Freshness score of a record published exactly at `now`.
    pub const FRESHNESS_MAX: f64 = 30.0;
    /// Days after which the freshness score halves.
    pub const FRESHNESS_HALF_LIFE_DAYS: f64 = 180.0;
    /// Bonus awarded when both records share the same non-empty category.
    pub const CATEGORY_BONUS: f64 = 10.0;
    /// Seconds per day used to convert elapsed durations into fractional days.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Constants used by the ranker and its configuration defaults.
pub mod ranking {
    /// Default upper bound on the number of related records returned.
    pub const DEFAULT_MAX_COUNT: usize = 5;
    /// Candidate count at which scoring moves onto the rayon pool.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;
}

/// Constants used by timestamp parsing.
pub mod dates {
    /// Naive date-time layouts accepted in addition to RFC 3339 (interpreted as UTC).
    pub const NAIVE_DATETIME_FORMATS: [&str; 3] =
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    /// Date-only layouts accepted (interpreted as midnight UTC).
    pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
}

/// Constants used by the command-line runner.
pub mod apps {
    /// Binary name reported by `--help`.
    pub const RELATED_BIN_NAME: &str = "related";
}
