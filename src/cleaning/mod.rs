pub mod countries;
pub mod genres;
pub mod themes;

pub use countries::standardize_country_name;
pub use genres::GenreParser;
pub use themes::clean_theme_text;
