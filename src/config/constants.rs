//! Configuration constants.

/// Default User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; wp_scout/0.1; +https://github.com/wp-scout/wp_scout)";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default settle delay before the detection request is issued, in
/// milliseconds. A heuristic wait, not a synchronization primitive: it gives
/// origins that populate content lazily a moment before inspection.
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Conventional sitemap locations probed as the last-resort tier, in
/// priority order. The first path that responds successfully wins and the
/// rest are not probed.
pub const SITEMAP_CANDIDATE_PATHS: [&str; 5] = [
    "/sitemap_index.xml",
    "/sitemap.xml",
    "/wp-sitemap.xml",
    "/post-sitemap.xml",
    "/page-sitemap.xml",
];

/// Path of the robots file consulted by the sitemap detector.
pub const ROBOTS_TXT_PATH: &str = "/robots.txt";

/// Base URL of the vulnerability database the report links each plugin to.
/// The plugin slug is appended as the search term.
pub const ADVISORY_SEARCH_URL: &str = "https://patchstack.com/database?search=";

/// Class-substring detections that count elements (commerce markers, Divi
/// markers) require strictly more than this many matching elements.
pub const CLASS_COUNT_THRESHOLD: usize = 5;
