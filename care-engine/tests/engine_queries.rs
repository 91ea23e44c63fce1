use chrono::{NaiveDate, NaiveDateTime};
use pet_care_engine::backend::domain::commands::calendar::{CalendarDayQuery, CalendarMonthQuery};
use pet_care_engine::backend::domain::commands::reminders::ReminderListQuery;
use pet_care_engine::backend::domain::commands::timeline::TimelineQuery;
use pet_care_engine::backend::domain::models::{NewRecord, Pet};
use pet_care_engine::backend::storage::{
    Connection, MemoryConnection, PetStorage, RecordStorage, TaskTypeStorage,
};
use pet_care_engine::{CalendarFilter, CalendarFocus, CareData, CareEngine, EngineConfig, FixedClock, SnapshotMapper};
use shared::{CalendarMarker, Gender, PetKind, ReminderStatus};
use std::sync::Arc;

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
}

fn now() -> NaiveDateTime {
    at(2024, 2, 5, 10)
}

fn create_test_pet(id: &str, name: &str, theme_color: &str) -> Pet {
    Pet {
        id: id.to_string(),
        name: name.to_string(),
        kind: PetKind::Cat,
        gender: Gender::Female,
        breed: "狸花猫".to_string(),
        birthday: NaiveDate::from_ymd_opt(2019, 3, 10).unwrap(),
        initial_weight: 3.5,
        avatar: None,
        theme_color: theme_color.to_string(),
    }
}

fn log_record(connection: &MemoryConnection, pet_id: &str, task_type_id: &str, date: NaiveDateTime, value: Option<f64>) {
    connection
        .create_record_repository()
        .store_record(NewRecord {
            id: None,
            pet_id: pet_id.to_string(),
            task_type_id: task_type_id.to_string(),
            date,
            value,
            note: None,
        })
        .expect("Failed to log record");
}

/// Mimi has one overdue, one due-today and one upcoming task.
fn setup_test_store() -> MemoryConnection {
    let clock = Arc::new(FixedClock(now()));
    let connection = MemoryConnection::with_default_catalog(EngineConfig::default(), clock);
    connection
        .create_pet_repository()
        .store_pet(&create_test_pet("p1", "Mimi", "#FCA5A5"))
        .expect("Failed to store pet");

    log_record(&connection, "p1", "3", at(2024, 1, 1, 9), None); // deworming, due 01-31
    log_record(&connection, "p1", "4", at(2024, 1, 6, 20), None); // bath, due 02-05
    log_record(&connection, "p1", "5", at(2024, 2, 1, 8), None); // nails, due 02-22
    log_record(&connection, "p1", "1", at(2024, 2, 5, 12), Some(3.9));
    connection
}

fn create_test_engine(config: EngineConfig) -> CareEngine {
    CareEngine::with_clock(config, Arc::new(FixedClock(now())))
}

fn snapshot(connection: &MemoryConnection) -> CareData {
    connection.snapshot().expect("Failed to take snapshot")
}

fn day_query(y: i32, m: u32, d: u32, filter: CalendarFilter) -> CalendarDayQuery {
    CalendarDayQuery { year: y, month: m, day: d, filter }
}

#[test]
fn test_reminders_are_ranked_by_urgency() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig::default());

    let reminders = engine.reminders_for(
        &data,
        &ReminderListQuery { pet_id: "p1".to_string(), limit: None },
    );

    let summary: Vec<(&str, i64, ReminderStatus)> = reminders
        .iter()
        .map(|r| (r.task_type.id.as_str(), r.days_offset, r.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("3", -5, ReminderStatus::Overdue),
            ("4", 0, ReminderStatus::DueToday),
            ("5", 17, ReminderStatus::Upcoming),
        ]
    );
    // The vet task recurs but Mimi has never been, so it has no reminder
    assert!(reminders.iter().all(|r| r.task_type.id != "2"));
}

#[test]
fn test_truncation_is_a_prefix_of_the_full_list() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig {
        card_reminder_limit: 2,
        detail_reminder_limit: 1,
        ..EngineConfig::default()
    });

    let full = engine.pet_detail_reminders(&data, "p1", true);
    let detail = engine.pet_detail_reminders(&data, "p1", false);
    let cards = engine.pet_cards(&data);

    assert_eq!(full.len(), 3);
    assert_eq!(detail.as_slice(), &full[..1]);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].reminders.as_slice(), &full[..2]);
    assert_eq!(cards[0].latest_weight, 3.9);
    assert_eq!(cards[0].age.years, 4);
    assert_eq!(cards[0].age.months, 11);
}

#[test]
fn test_notification_feed_only_holds_actionable_tasks() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig::default());

    let feed = engine.notification_feed(&data);

    let ids: Vec<&str> = feed.iter().map(|r| r.task_type.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "4"]);
    assert!(feed.iter().all(|r| r.status != ReminderStatus::Upcoming));
    assert!(feed.iter().all(|r| r.task_type.id != "1"));
}

#[test]
fn test_calendar_shows_due_day_and_outstanding_today() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig::default());

    let due_day = engine
        .calendar_day(&data, &day_query(2024, 1, 31, CalendarFilter::all()))
        .expect("Day should exist");
    assert_eq!(due_day.reminders.len(), 1);
    assert_eq!(due_day.reminders[0].marker, CalendarMarker::DueDay);

    let today = engine
        .calendar_day(&data, &day_query(2024, 2, 5, CalendarFilter::all()))
        .expect("Day should exist");
    let markers: Vec<(&str, CalendarMarker, i64)> = today
        .reminders
        .iter()
        .map(|r| (r.task_type.id.as_str(), r.marker, r.overdue_days))
        .collect();
    assert_eq!(
        markers,
        vec![
            ("3", CalendarMarker::StillOutstanding, 5),
            ("4", CalendarMarker::DueDay, 0),
        ]
    );

    // Newest first: the 12:00 weigh-in, then the initial weight logged at creation
    let record_values: Vec<Option<f64>> = today.records.iter().map(|r| r.value).collect();
    assert_eq!(record_values, vec![Some(3.9), Some(3.5)]);

    let yesterday = engine
        .calendar_day(&data, &day_query(2024, 2, 4, CalendarFilter::all()))
        .expect("Day should exist");
    assert!(yesterday.reminders.is_empty());

    assert!(engine
        .calendar_day(&data, &day_query(2024, 2, 30, CalendarFilter::all()))
        .is_none());
}

#[test]
fn test_calendar_filters_and_birthdays() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig::default());

    let birthday = engine
        .calendar_day(&data, &day_query(2024, 3, 10, CalendarFilter::all()))
        .expect("Day should exist");
    assert_eq!(birthday.birthdays.len(), 1);
    assert_eq!(birthday.birthdays[0].name, "Mimi");

    let filtered = engine
        .calendar_day(&data, &day_query(2024, 2, 5, CalendarFilter::for_pet("p1").with_task("4")))
        .expect("Day should exist");
    assert!(filtered.records.is_empty());
    assert_eq!(filtered.reminders.len(), 1);
    assert_eq!(filtered.reminders[0].task_type.id, "4");

    let other_pet = engine
        .calendar_day(&data, &day_query(2024, 3, 10, CalendarFilter::for_pet("p9")))
        .expect("Day should exist");
    assert!(other_pet.birthdays.is_empty());
}

#[test]
fn test_month_grid_and_navigation() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig::default());

    let month = engine.calendar_month(
        &data,
        &CalendarMonthQuery { year: 2024, month: 2, filter: CalendarFilter::all() },
    );
    // February 2024 starts on a Thursday
    assert_eq!(month.first_day_of_week, 4);
    assert_eq!(month.days.len(), 4 + 29);

    let fifth = &month.days[4 + 4];
    assert_eq!(fifth.day, 5);
    assert!(fifth.is_today);
    assert_eq!(fifth.record_colors, vec!["#FCA5A5".to_string()]);
    assert_eq!(fifth.reminder_colors, vec!["#10b981".to_string(), "#8b5cf6".to_string()]);

    let focus = CalendarFocus::new(2024, 1, Some(31));
    let previous = engine.previous_month(focus);
    assert_eq!((previous.year, previous.month, previous.selected_day), (2023, 12, Some(31)));
    // Day 31 does not exist in February, so nothing is selected there
    let next = engine.next_month(focus);
    assert_eq!((next.year, next.month), (2024, 2));
    assert!(engine.selected_day(&data, &next, &CalendarFilter::all()).is_none());

    let selected = engine
        .selected_day(&data, &focus, &CalendarFilter::all())
        .expect("Selected day should exist");
    assert_eq!(selected.date, "2024-01-31");
}

#[test]
fn test_new_record_resets_the_cycle() {
    let connection = setup_test_store();
    let engine = create_test_engine(EngineConfig::default());

    log_record(&connection, "p1", "3", at(2024, 2, 5, 9), None);
    let data = snapshot(&connection);

    let feed = engine.notification_feed(&data);
    let ids: Vec<&str> = feed.iter().map(|r| r.task_type.id.as_str()).collect();
    assert_eq!(ids, vec!["4"]);

    let reminders = engine.pet_detail_reminders(&data, "p1", true);
    let deworming = reminders.iter().find(|r| r.task_type.id == "3").expect("Reminder should exist");
    assert_eq!(deworming.next_due_date, "2024-03-06");
    assert_eq!(deworming.days_offset, 30);
}

#[test]
fn test_deleting_a_pet_removes_it_everywhere() {
    let connection = setup_test_store();
    let engine = create_test_engine(EngineConfig::default());
    connection
        .create_pet_repository()
        .store_pet(&create_test_pet("p2", "Dahuang", "#93C5FD"))
        .unwrap();
    log_record(&connection, "p2", "4", at(2024, 1, 6, 8), None);

    assert_eq!(engine.notification_feed(&snapshot(&connection)).len(), 3);

    assert!(connection.create_pet_repository().delete_pet("p2").unwrap());
    let data = snapshot(&connection);

    assert!(data.records.iter().all(|r| r.pet_id != "p2"));
    assert!(engine.notification_feed(&data).iter().all(|r| r.pet.id != "p2"));
    let day = engine
        .calendar_day(&data, &day_query(2024, 1, 6, CalendarFilter::all()))
        .unwrap();
    assert!(day.records.iter().all(|r| r.pet_id != "p2"));
}

#[test]
fn test_deleted_task_type_hides_its_records() {
    let connection = setup_test_store();
    let engine = create_test_engine(EngineConfig::default());

    assert!(connection.create_task_type_repository().delete_task_type("4").unwrap());
    let data = snapshot(&connection);

    let day = engine
        .calendar_day(&data, &day_query(2024, 1, 6, CalendarFilter::all()))
        .unwrap();
    assert!(day.records.is_empty());
    assert!(engine.pet_detail_reminders(&data, "p1", true).iter().all(|r| r.task_type.id != "4"));
    assert!(engine
        .timeline(&data, &TimelineQuery { pet_id: "p1".to_string(), task_type_id: None })
        .iter()
        .all(|r| r.task_type_id != "4"));
}

#[test]
fn test_timeline_and_weight_trend() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig::default());

    let timeline = engine.timeline(&data, &TimelineQuery { pet_id: "p1".to_string(), task_type_id: None });
    assert_eq!(timeline.len(), 5);
    assert_eq!(timeline[0].date, "2024-02-05T12:00:00");
    assert_eq!(timeline[4].date, "2024-01-01T09:00:00");

    let baths = engine.timeline(
        &data,
        &TimelineQuery { pet_id: "p1".to_string(), task_type_id: Some("4".to_string()) },
    );
    assert_eq!(baths.len(), 1);

    let trend = engine.weight_trend(&data, "p1");
    let values: Vec<f64> = trend.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![3.5, 3.9]);
}

#[test]
fn test_queries_are_idempotent_and_survive_json() {
    let data = snapshot(&setup_test_store());
    let engine = create_test_engine(EngineConfig::default());
    let query = CalendarMonthQuery { year: 2024, month: 2, filter: CalendarFilter::all() };

    let first = engine.calendar_month(&data, &query);
    assert_eq!(engine.calendar_month(&data, &query), first);

    let json = SnapshotMapper::to_json(&data).expect("Failed to serialize snapshot");
    let reloaded = SnapshotMapper::from_json(&json).expect("Failed to load snapshot");
    assert_eq!(engine.calendar_month(&reloaded, &query), first);
    assert_eq!(engine.notification_feed(&reloaded), engine.notification_feed(&data));
}
