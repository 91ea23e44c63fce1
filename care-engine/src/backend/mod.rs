//! # Backend Module
//!
//! Contains all logic of the pet care engine.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Reminder, calendar and pet profile rules
//! - **Storage**: The entity store contract and an in-memory implementation
//! - **IO**: Mappers between the `shared` wire DTOs and domain models
//!
//! The engine is UI-agnostic. A host keeps its own screen state (selected
//! pet, calendar filters, focused month), hands the engine a snapshot and
//! renders whatever comes back.
//!
//! ## Architecture
//!
//! ```text
//! Host UI
//!     ↓
//! CareEngine (queries in, shared DTOs out)
//!     ↓
//! Domain Layer (services over a borrowed snapshot view)
//!     ↑
//! Storage Layer (entity store producing snapshots)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Load configuration and set up the domain services
//! - Take the reference instant from a single clock per query
//! - Map borrowed domain views to owned DTOs at the boundary

pub mod clock;
pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::info;
use shared::{CalendarMonth, PetCard, WeightPoint};
use std::path::Path;
use std::sync::Arc;

use crate::backend::clock::{Clock, SystemClock};
use crate::backend::config::EngineConfig;
use crate::backend::domain::commands::calendar::{CalendarDayQuery, CalendarMonthQuery};
use crate::backend::domain::commands::reminders::{ReminderListQuery, ReminderQuery};
use crate::backend::domain::commands::timeline::TimelineQuery;
use crate::backend::domain::models::{CalendarFilter, CalendarFocus, CareData};
use crate::backend::domain::{CalendarService, NotificationService, PetProfileService, ReminderService};
use crate::backend::io::{PetMapper, RecordMapper, ReminderMapper};

/// The engine façade: every query the host can make, answered from a snapshot
#[derive(Clone)]
pub struct CareEngine {
    config: EngineConfig,
    clock: Arc<dyn Clock>,
    reminder_service: ReminderService,
    calendar_service: CalendarService,
    notification_service: NotificationService,
    pet_profile_service: PetProfileService,
}

impl CareEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        let pet_profile_service = PetProfileService::new(&config.weight_task_type_id);
        Self {
            config,
            clock,
            reminder_service: ReminderService::new(),
            calendar_service: CalendarService::new(),
            notification_service: NotificationService::new(),
            pet_profile_service,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn calendar_service(&self) -> &CalendarService {
        &self.calendar_service
    }

    /// The reference instant used by the next query
    pub fn now(&self) -> chrono::NaiveDateTime {
        self.clock.now()
    }

    /// Reminder of one (pet, task type) pair
    pub fn reminder_for(&self, data: &CareData, query: &ReminderQuery) -> Option<shared::Reminder> {
        let view = data.view();
        let pet = view.pet(&query.pet_id)?;
        let task_type = view.task_type(&query.task_type_id)?;
        self.reminder_service
            .reminder_for(&view, pet, task_type, self.now())
            .map(|reminder| ReminderMapper::to_dto(&reminder))
    }

    /// A pet's reminders in urgency order, truncated to the query limit
    pub fn reminders_for(&self, data: &CareData, query: &ReminderListQuery) -> Vec<shared::Reminder> {
        let view = data.view();
        let Some(pet) = view.pet(&query.pet_id) else {
            return Vec::new();
        };
        self.reminder_service
            .reminders_for(&view, pet, self.now(), query.limit)
            .iter()
            .map(ReminderMapper::to_dto)
            .collect()
    }

    /// Reminders for the pet detail screen; `expanded` is the "show more" state
    pub fn pet_detail_reminders(&self, data: &CareData, pet_id: &str, expanded: bool) -> Vec<shared::Reminder> {
        let limit = if expanded {
            None
        } else {
            Some(self.config.detail_reminder_limit)
        };
        self.reminders_for(
            data,
            &ReminderListQuery {
                pet_id: pet_id.to_string(),
                limit,
            },
        )
    }

    /// Due and overdue reminders across all pets
    pub fn notification_feed(&self, data: &CareData) -> Vec<shared::Reminder> {
        let view = data.view();
        self.notification_service
            .notification_feed(&view, self.now())
            .iter().map(ReminderMapper::to_dto).collect()
    }

    /// Contents of one day, or `None` if the date does not exist
    pub fn calendar_day(&self, data: &CareData, query: &CalendarDayQuery) -> Option<shared::CalendarDay> {
        let view = data.view();
        self.calendar_service
            .calendar_day(&view, query.year, query.month, query.day, &query.filter, self.now())
            .map(|day| ReminderMapper::to_calendar_day_dto(&day))
    }

    /// Contents of the focused day, if one is selected
    pub fn selected_day(
        &self,
        data: &CareData,
        focus: &CalendarFocus,
        filter: &CalendarFilter,
    ) -> Option<shared::CalendarDay> {
        let view = data.view();
        self.calendar_service
            .selected_day(&view, focus, filter, self.now())
            .map(|day| ReminderMapper::to_calendar_day_dto(&day))
    }

    pub fn calendar_month(&self, data: &CareData, query: &CalendarMonthQuery) -> CalendarMonth {
        let view = data.view();
        self.calendar_service
            .generate_calendar_month(&view, query.year, query.month, &query.filter, self.now())
    }

    pub fn previous_month(&self, focus: CalendarFocus) -> CalendarFocus {
        self.calendar_service.navigate_previous_month(focus)
    }

    pub fn next_month(&self, focus: CalendarFocus) -> CalendarFocus {
        self.calendar_service.navigate_next_month(focus)
    }

    /// A card per pet with its most urgent reminders
    pub fn pet_cards(&self, data: &CareData) -> Vec<PetCard> {
        let view = data.view();
        self.pet_profile_service
            .pet_cards(&view, self.now(), Some(self.config.card_reminder_limit))
            .iter()
            .map(PetMapper::to_pet_card_dto)
            .collect()
    }

    /// A pet's activity history, newest first
    pub fn timeline(&self, data: &CareData, query: &TimelineQuery) -> Vec<shared::Record> {
        let view = data.view();
        let Some(pet) = view.pet(&query.pet_id) else {
            return Vec::new();
        };
        self.pet_profile_service
            .timeline(&view, pet, query.task_type_id.as_deref())
            .into_iter()
            .map(RecordMapper::to_dto)
            .collect()
    }

    /// A pet's weigh-ins, oldest first
    pub fn weight_trend(&self, data: &CareData, pet_id: &str) -> Vec<WeightPoint> {
        let view = data.view();
        let Some(pet) = view.pet(pet_id) else {
            return Vec::new();
        };
        self.pet_profile_service
            .weight_trend(&view, pet)
            .iter()
            .map(PetMapper::to_weight_point_dto)
            .collect()
    }
}

/// Initialize the engine, reading configuration from `config_path` if given
pub fn initialize_engine(config_path: Option<&Path>) -> Result<CareEngine> {
    info!("Loading engine configuration");
    let config = match config_path {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    info!(
        "Setting up care engine (card limit {}, detail limit {})",
        config.card_reminder_limit, config.detail_reminder_limit
    );
    Ok(CareEngine::new(config))
}
