//! State Management
//!
//! Global reactive application state and the domain types it owns.

pub mod global;

pub use global::{
    provide_global_state, AggregateStats, Country, DateWindow, GlobalState, Timeline,
};
