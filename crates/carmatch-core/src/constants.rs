/// Upper bound of every 0–10 preference rating.
pub const MAX_RATING: u8 = 10;

/// Tolerance used when checking that normalized weights sum to 1.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Number of digits in a valid postal code.
pub const POSTAL_CODE_LEN: usize = 5;

/// The driver always occupies one seat.
pub const DRIVER_SEATS: u32 = 1;

/// Months per year, used when spreading a budget into installments.
pub const MONTHS_PER_YEAR: f64 = 12.0;
