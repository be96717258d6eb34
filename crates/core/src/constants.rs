/// Currency assigned to budgets that were stored without one
pub const DEFAULT_CURRENCY: &str = "SGD";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Days before a scheduled date that a notification counts as upcoming
pub const UPCOMING_WINDOW_DAYS: i64 = 1;
