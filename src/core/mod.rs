//! # Core Application Logic
//!
//! Everything the console decides, independent of how it is drawn.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Shell (screens)      │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │  Effects → │   Layer    │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`shell`]: the navigation state machine
//! - [`state`]: the `App` struct and per-screen data
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`models`]: domain records
//! - [`filter`]: search predicates and rollups
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod filter;
pub mod models;
pub mod shell;
pub mod state;
