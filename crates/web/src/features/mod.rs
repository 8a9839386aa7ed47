pub mod athletes;
pub mod competitions;
pub mod events;
pub mod news;
