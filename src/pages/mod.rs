//! Routed page views. Pages stay thin: all contractual behavior lives in
//! the session, guard, cart, and net modules.

pub mod business;
pub mod home;
pub mod login;
pub mod orders;
