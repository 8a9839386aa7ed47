pub mod athlete;
pub mod competition;
pub mod event;
pub mod news;
