//! Default values for every configuration section.

// Weights
pub const DEFAULT_MAX_RAW_WEIGHT: f64 = 100.0;
pub const DEFAULT_VERY_HIGH_ANNUAL_KM: f64 = 60_000.0;
pub const DEFAULT_BASE_CACHE_CAPACITY: u64 = 16;

// Flags
pub const DEFAULT_COMFORT_THRESHOLD: u8 = 7;
pub const DEFAULT_TECHNOLOGY_THRESHOLD: u8 = 8;
pub const DEFAULT_ENVIRONMENTAL_THRESHOLD: u8 = 8;
pub const DEFAULT_USAGE_COST_THRESHOLD: u8 = 7;
pub const DEFAULT_LOW_LOAD_MAX_OTHER_PASSENGERS: u32 = 3;

// Filters
pub const DEFAULT_AESTHETICS_MIN_VALUED: f64 = 5.0;
pub const DEFAULT_AESTHETICS_MIN_NOT_VALUED: f64 = 1.0;
pub const DEFAULT_PREMIUM_MIN_ENTHUSIAST: f64 = 5.0;
pub const DEFAULT_PREMIUM_MIN_NOT_ENTHUSIAST: f64 = 1.0;
pub const DEFAULT_SINGULARITY_ENTHUSIAST: f64 = 3.0;
pub const DEFAULT_SINGULARITY_NOT_ENTHUSIAST: f64 = 0.0;
pub const DEFAULT_SINGULARITY_EXCLUSIVE: f64 = 1.5;
pub const DEFAULT_SINGULARITY_NOT_EXCLUSIVE: f64 = 0.5;

// Economics
pub const DEFAULT_INCOME_SHARE: f64 = 0.10;
pub const DEFAULT_HORIZON_YEARS: u32 = 8;
pub const DEFAULT_USABLE_SAVINGS_RATIO: f64 = 0.75;

// Ranking
pub const DEFAULT_RESULT_LIMIT: usize = 10;
pub const DEFAULT_TECHNOLOGY_CUTOFF_YEAR: u16 = 2018;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
