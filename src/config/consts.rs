// src/config/consts.rs
use std::ops::RangeInclusive;

// Net config
pub const URL_60: &str = "https://xosodaiphat.com/xsmb-60-ngay.html";
pub const URL_90: &str = "https://xosodaiphat.com/xsmb-90-ngay.html";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const FETCH_TIMEOUT_SECS: u64 = 45;

// Env overrides for the fetch config
pub const ENV_URL_60: &str = "XSMB_URL_60";
pub const ENV_URL_90: &str = "XSMB_URL_90";
pub const ENV_TIMEOUT_SECS: &str = "XSMB_TIMEOUT_SECS";

// Crawl
pub const DEFAULT_MAX_DAYS: usize = 60;
pub const MIN_TAILS_PER_DAY: usize = 20; // fewer → table was misread
pub const MAX_TAILS_PER_DAY: usize = 27; // one draw has 27 prizes
pub const RESULT_TABLE_MIN_NUMBERS: usize = 20;

// Stats
pub const BUCKETS: usize = 100;
pub const CHI_SQUARE_DOF: f64 = 99.0;
pub const DEFAULT_ALPHA0: f64 = 200.0;
pub const WINDOWS: [usize; 4] = [1, 7, 30, 90];
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

// Judgement thresholds
pub const STRONG_POSTERIOR: f64 = 0.013;
pub const WEAK_POSTERIOR: f64 = 0.012;
pub const HOT_WEEK_HITS: u64 = 2;

// Suggestions
pub const DEFAULT_THRESHOLD: f64 = 0.013;
pub const DEFAULT_TOP_K: usize = 10;
pub const TOP_K_RANGE: RangeInclusive<usize> = 5..=30;
pub const ALPHA0_RANGE: RangeInclusive<f64> = 1.0..=1000.0;
pub const THRESHOLD_RANGE: RangeInclusive<f64> = 0.0..=0.1;

// Export
pub const DATA_DIR: &str = "data";
pub const RANKED_FILE: &str = "xsmb_ranked.csv";
pub const FULL_FILE: &str = "xsmb_full.csv";
pub const EVALUATED_FILE: &str = "xsmb_evaluated.csv";
pub const QUICK_VIEW_ROWS: usize = 20;

// Local
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
