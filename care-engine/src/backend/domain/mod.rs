//! # Domain Module
//!
//! Contains the business logic of the pet care engine: everything that
//! turns a snapshot of pets, task types and records into reminders,
//! calendar days and per-pet views.
//!
//! ## Module Organization
//!
//! - **record_index**: latest-record and per-day lookups over a snapshot
//! - **due_date_service**: next due date, status and day offset of a task
//! - **reminder_service**: urgency ranking and per-pet truncation
//! - **calendar**: day classification, month grid and navigation
//! - **notification_service**: cross-pet feed of due and overdue tasks
//! - **pet_profile_service**: age, weight history, timeline and pet cards
//! - **commands**: query types accepted by the engine façade
//! - **models**: typed domain entities
//!
//! ## Business Rules
//!
//! - A task without a cycle never produces a reminder
//! - A task with a cycle but no history for a pet produces no reminder
//! - Only the most recent record of a (pet, task type) pair seeds the cycle
//! - Reminders are derived on every query and never stored
//! - Records whose pet or task type is gone are excluded, never an error
//!
//! All operations are pure functions of the snapshot and an explicit
//! reference instant.

pub mod calendar;
pub mod commands;
pub mod due_date_service;
pub mod models;
pub mod notification_service;
pub mod pet_profile_service;
pub mod record_index;
pub mod reminder_service;

pub use calendar::*;
pub use due_date_service::*;
pub use notification_service::*;
pub use pet_profile_service::*;
pub use record_index::*;
pub use reminder_service::*;
