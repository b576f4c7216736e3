pub mod credits;
pub mod discover;
pub mod providers;
