pub(crate) mod duration;
pub(crate) mod locale;
pub(crate) mod release_date;
