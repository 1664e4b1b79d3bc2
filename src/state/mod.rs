//! Shared client-side state modules.
//!
//! State is split by domain (`cart`, `notice`) so individual components can
//! depend on small focused models. Each store is a plain struct held in an
//! `RwSignal` provided via context by the root component.

pub mod cart;
pub mod notice;
