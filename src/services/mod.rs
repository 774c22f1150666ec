// Services module - collaborators of the scanner and renamer

pub mod mediainfo;
pub mod nfo;

// Metadata providers
pub mod metadata;
pub mod tmdb;
