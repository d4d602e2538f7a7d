/// Default namespace prepended to every collection key
pub const DEFAULT_KEY_PREFIX: &str = "wealthmate";

/// Collection key suffixes, joined to the namespace with `-`
pub const ASSETS_KEY_SUFFIX: &str = "assets";
pub const LIABILITIES_KEY_SUFFIX: &str = "liabilities";
pub const MONTHLY_RECORDS_KEY_SUFFIX: &str = "monthly-records";
pub const GOALS_KEY_SUFFIX: &str = "goals";

/// Decimal places used for per-month goal contributions
pub const CONTRIBUTION_DECIMAL_PLACES: i32 = 2;

/// Decimal places used for breakdown share percentages
pub const SHARE_DECIMAL_PLACES: i32 = 1;

/// Upper bound of a goal progress percentage
pub const MAX_PROGRESS_PERCENT: i64 = 100;
