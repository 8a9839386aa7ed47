pub mod athlete;
pub mod competition;
pub mod event;
pub mod news;

pub use athlete::Athlete;
pub use competition::Competition;
pub use event::Event;
pub use news::News;
