//! Display components for a podcast episode's release date and duration.
//!
//! ```
//! use episode_format::{episode_date_and_duration_with, EnglishMonthNames};
//!
//! let f = episode_date_and_duration_with("2023-02-15", 3_725_000, &EnglishMonthNames);
//! assert_eq!((f.day, f.month.as_str(), f.year), (15, "Feb", 2023));
//! assert_eq!((f.hours, f.minutes), (1, 2));
//! ```

mod core;
pub mod format;
pub mod types;

pub use chrono::Locale;
pub use format::{episode_date_and_duration, episode_date_and_duration_with};
pub use types::episode::FormattedEpisodeDateAndDuration;
pub use types::errors::{LocaleError, ReleaseDateError};
pub use types::month_names::{EnglishMonthNames, LocaleMonthNames, MonthNames};
