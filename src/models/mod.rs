pub mod announcements;
pub mod auth;
pub mod common;
pub mod contact;
pub mod enrollment;
pub mod events;
pub mod gallery;
pub mod notifications;
pub mod pages;
pub mod principal;
pub mod programs;
pub mod search;
pub mod staff;
pub mod themes;
pub mod uploads;
pub mod users;

pub use common::*;
