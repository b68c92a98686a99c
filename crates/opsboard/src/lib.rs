//! opsboard — record lifecycle and view-state core for role-scoped
//! admin dashboards, re-exported with the dashboard assemblies that
//! wire one `EntityManager` per module around a shared owner.

pub mod dashboard;
pub mod seed;

pub use opsboard_core::{
    error, manager, model, permissions, prelude, schedule, store, types, validate,
};
