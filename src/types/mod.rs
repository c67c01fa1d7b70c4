pub mod episode;
pub mod errors;
pub mod month_names;
