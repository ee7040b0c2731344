pub mod admin;
pub mod directory;
pub mod dispatch;
pub mod donate;
pub mod events;
pub mod login;
pub mod mentors;
pub mod routes;
pub mod shared;
