//! Interactive terminal front end for the keyword scraper.
pub mod display;
pub mod menu;
pub mod prompt;
