//! Reusable view components.

pub mod notice_stack;
