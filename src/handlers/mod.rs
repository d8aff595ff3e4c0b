pub mod auth;
pub mod disciplines;
pub mod events;
pub mod leagues;
pub mod news;
pub mod pages;
pub mod shared;
pub mod sponsors;
pub mod staff_roles;
pub mod teams;
pub mod users;
