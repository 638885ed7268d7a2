use chrono::NaiveDate;
use planner_core::db::open_db_in_memory;
use planner_core::{
    EventOutcome, MealSlot, PlannerDay, PlannerEvent, PlannerSession, PlannerStore,
    ScheduleView, SessionError, SqliteKvRepository, WaterCellError, EMPTY_SCHEDULE_MESSAGE,
};
use rusqlite::Connection;

fn june_first() -> PlannerDay {
    PlannerDay::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn open_session(conn: &Connection) -> PlannerSession<SqliteKvRepository<'_>> {
    PlannerSession::open(
        PlannerStore::new(SqliteKvRepository::new(conn)),
        june_first(),
    )
}

fn add(session: &mut PlannerSession<SqliteKvRepository<'_>>, time: &str, name: &str) -> EventOutcome {
    session
        .dispatch(PlannerEvent::AddActivity {
            time: time.to_string(),
            name: name.to_string(),
        })
        .unwrap()
}

#[test]
fn session_is_bound_to_its_day_key() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    assert_eq!(session.day(), june_first());
    assert_eq!(session.storage_key().as_str(), "plannerData_2024-06-01");

    add(&mut session, "09:00", "Standup");
    let stored: String = conn
        .query_row(
            "SELECT key FROM kv_store;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, session.storage_key().as_str());
}

#[test]
fn schedule_renders_in_time_order() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);

    add(&mut session, "09:00", "Standup");
    add(&mut session, "08:30", "Gym");

    let schedule = session.render().schedule;
    let rows = schedule
        .rows()
        .iter()
        .map(|row| (row.name.as_str(), row.time_label.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![("Gym", "8:30 AM"), ("Standup", "9:00 AM")]);
}

#[test]
fn water_clicks_toggle_topmost_glass() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    assert_eq!(session.record().water, 0);

    let first = session.dispatch(PlannerEvent::ClickGlass { index: 3 }).unwrap();
    assert_eq!(first, EventOutcome::WaterChanged(3));
    let second = session.dispatch(PlannerEvent::ClickGlass { index: 3 }).unwrap();
    assert_eq!(second, EventOutcome::WaterChanged(2));

    let water = session.render().water;
    assert_eq!(water.count, 2);
    assert_eq!(water.filled(), 2);
}

#[test]
fn invalid_glass_is_rejected_without_change() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);

    let err = session
        .dispatch(PlannerEvent::ClickGlass { index: 9 })
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidGlass(WaterCellError(9))));
    assert_eq!(session.record().water, 0);
}

#[test]
fn deleting_only_activity_shows_empty_placeholder() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);

    let EventOutcome::ActivityAdded(id) = add(&mut session, "10:00", "Dentist") else {
        panic!("activity should be added");
    };
    let outcome = session
        .dispatch(PlannerEvent::RemoveActivity { id })
        .unwrap();
    assert!(matches!(outcome, EventOutcome::ActivityRemoved(removed) if removed.id == id));

    assert!(session.record().schedule.is_empty());
    let schedule = session.render().schedule;
    assert_eq!(schedule, ScheduleView::Empty);
    assert_eq!(schedule.to_string(), EMPTY_SCHEDULE_MESSAGE);
}

#[test]
fn blank_submission_is_ignored_and_not_persisted() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);

    assert_eq!(add(&mut session, "", "Nap"), EventOutcome::Ignored);
    assert_eq!(add(&mut session, "14:00", ""), EventOutcome::Ignored);

    let stored: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, 0);
}

#[test]
fn stale_ids_are_no_ops() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    let EventOutcome::ActivityAdded(id) = add(&mut session, "11:00", "Call mom") else {
        panic!("activity should be added");
    };
    session
        .dispatch(PlannerEvent::RemoveActivity { id })
        .unwrap();

    let toggled = session
        .dispatch(PlannerEvent::SetCompleted {
            id,
            completed: true,
        })
        .unwrap();
    assert_eq!(toggled, EventOutcome::Ignored);
    let removed = session
        .dispatch(PlannerEvent::RemoveActivity { id })
        .unwrap();
    assert_eq!(removed, EventOutcome::Ignored);
}

#[test]
fn completion_and_meals_survive_reopen() {
    let conn = open_db_in_memory().unwrap();
    let id = {
        let mut session = open_session(&conn);
        let EventOutcome::ActivityAdded(id) = add(&mut session, "07:00", "Yoga") else {
            panic!("activity should be added");
        };
        session
            .dispatch(PlannerEvent::SetCompleted {
                id,
                completed: true,
            })
            .unwrap();
        session
            .dispatch(PlannerEvent::MealInput {
                slot: MealSlot::Breakfast,
                text: "oatmeal".to_string(),
            })
            .unwrap();
        id
    };

    let reopened = open_session(&conn);
    let activity = reopened.state().activity(id).unwrap();
    assert!(activity.completed);
    assert_eq!(reopened.state().meal(MealSlot::Breakfast), "oatmeal");

    let meals = reopened.render().meals;
    assert_eq!(meals.field(MealSlot::Breakfast).unwrap().text, "oatmeal");
    assert_eq!(meals.field(MealSlot::Dinner).unwrap().text, "");
}

#[test]
fn rendering_twice_is_identical() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    add(&mut session, "13:05", "Review");
    add(&mut session, "00:15", "Night owl");

    let first = session.render();
    let second = session.render();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    assert!(first.to_string().starts_with("Saturday, June 1, 2024"));
}

#[test]
fn equal_times_keep_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    for name in ["a", "b", "c"] {
        add(&mut session, "12:00", name);
    }
    add(&mut session, "06:00", "first");

    let names = session
        .render()
        .schedule
        .rows()
        .iter()
        .map(|row| row.name.clone())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["first", "a", "b", "c"]);
}
