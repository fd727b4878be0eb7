/// Earliest accepted birth year (inclusive)
pub const MIN_YEAR: i32 = 1900;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum day number accepted before the calendar check
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Year of the anchor instant elapsed time is added to (Unix epoch)
pub const ANCHOR_YEAR: i32 = 1970;

/// Key the dark-mode flag is stored under
pub const PREFERENCE_KEY: &str = "darkMode";

/// Shown in place of a number until an age has been computed
pub const PLACEHOLDER: &str = "--";
