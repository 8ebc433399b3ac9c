//! End-to-end replay scenarios.

use todo_core::builder::SessionBuilder;
use todo_core::{Engine, Entry, EntryId, Message, Model};

fn fixture() -> Model {
    Model::with_entries(vec![Entry::new(10, "Pat head"), Entry::new(11, "Rub tummy")])
}

fn ids(model: &Model) -> Vec<EntryId> {
    model.entries.iter().map(|entry| entry.id).collect()
}

fn done(id: EntryId, description: &str) -> Entry {
    Entry::new(id, description).with_completed(true)
}

#[test]
fn model_starts_empty() {
    assert!(Model::new().entries.is_empty());
    assert_eq!(Model::new().next_id, 0);
}

#[test]
fn update_new_entry_field() {
    let model = Engine::run(&fixture(), &[Message::UpdateNewEntryField("typing away".into())]);
    assert_eq!(model.new_entry_field, "typing away");
}

#[test]
fn add() {
    let model = Engine::run(
        &fixture(),
        &[
            Message::UpdateNewEntryField("hop on one foot".into()),
            Message::Add,
        ],
    );

    assert_eq!(model.entries.len(), 3);
    let entry = model.entries.last().unwrap();
    assert_eq!(entry.id, 12);
    assert_eq!(entry.description, "hop on one foot");
    assert!(!entry.completed);
    assert_eq!(model.next_id, 13);
    assert_eq!(model.new_entry_field, "");
}

#[test]
fn add_does_nothing_if_field_is_blank() {
    let start = fixture();
    let model = Engine::run(
        &start,
        &[
            Message::update_new_entry_field(None::<String>),
            Message::Add,
            Message::UpdateNewEntryField("     ".into()),
            Message::Add,
        ],
    );

    assert_eq!(model.entries.len(), 2);
    assert_eq!(model.next_id, start.next_id + 2);
}

#[test]
fn check() {
    let model = Engine::run(&fixture(), &[Message::check(10, true)]);
    assert!(model.entries[0].completed);
    assert!(!model.entries[1].completed);
}

#[test]
fn uncheck() {
    let model = Engine::run(
        &fixture(),
        &[
            Message::check(10, true),
            Message::check(11, true),
            Message::check(10, false),
        ],
    );
    assert!(!model.entries[0].completed);
    assert!(model.entries[1].completed);
}

#[test]
fn delete() {
    let model = Engine::run(&fixture(), &[Message::Delete(10)]);
    assert_eq!(ids(&model), vec![11]);
}

#[test]
fn delete_all_completed() {
    let model = Engine::run(
        &fixture(),
        &[Message::check(10, true), Message::DeleteAllCompleted],
    );
    assert_eq!(ids(&model), vec![11]);
}

fn time_travel_messages() -> Vec<Message> {
    vec![
        Message::UpdateNewEntryField("go forward in time".into()),
        Message::Add,
        Message::Add, // no effect
        Message::UpdateNewEntryField("delete this item".into()),
        Message::Add,
        Message::Delete(2),
        Message::UpdateNewEntryField("go in time".into()),
        Message::UpdateNewEntryField("go backward in time".into()),
        Message::Add,
        Message::check(0, true),
        Message::check(3, true),
        Message::check(3, false),
        Message::DeleteAllCompleted,
    ]
}

fn expected_time_travel_history() -> Vec<Model> {
    let forward = || Entry::new(0, "go forward in time");
    let backward = || Entry::new(3, "go backward in time");

    vec![
        Model::from_parts(vec![], "go forward in time", Some(0)),
        Model::from_parts(vec![forward()], "", Some(1)),
        Model::from_parts(vec![forward()], "", Some(2)),
        Model::from_parts(vec![forward()], "delete this item", Some(2)),
        Model::from_parts(vec![forward(), Entry::new(2, "delete this item")], "", Some(3)),
        Model::from_parts(vec![forward()], "", Some(3)),
        Model::from_parts(vec![forward()], "go in time", Some(3)),
        Model::from_parts(vec![forward()], "go backward in time", Some(3)),
        Model::from_parts(vec![forward(), backward()], "", Some(4)),
        Model::from_parts(vec![done(0, "go forward in time"), backward()], "", Some(4)),
        Model::from_parts(
            vec![done(0, "go forward in time"), done(3, "go backward in time")],
            "",
            Some(4),
        ),
        Model::from_parts(vec![done(0, "go forward in time"), backward()], "", Some(4)),
        Model::from_parts(vec![backward()], "", Some(4)),
    ]
}

#[test]
fn time_travel() {
    let actual = Engine::run_with_history(&Model::new(), &time_travel_messages());
    let expected = expected_time_travel_history();

    assert_eq!(actual.len(), expected.len());
    for (index, (expected, actual)) in expected.iter().zip(actual.models()).enumerate() {
        assert_eq!(expected, actual, "History mismatch at step {index}");
    }
}

#[test]
fn time_travel_final_model() {
    let model = Engine::run(&Model::new(), &time_travel_messages());
    assert_eq!(
        model,
        Model::from_parts(vec![Entry::new(3, "go backward in time")], "", Some(4))
    );
}

#[test]
fn time_travel_through_session() {
    let session = SessionBuilder::new()
        .initial(Model::new())
        .replay(time_travel_messages())
        .build()
        .unwrap();

    let path = session.path();
    assert_eq!(path.len(), 14);
    assert_eq!(path[0], &Model::new());
    assert_eq!(session.history().clone().into_models(), expected_time_travel_history());
}

#[test]
fn delete_all_completed_twice_matches_once() {
    let once = Engine::run(
        &fixture(),
        &[Message::check(11, true), Message::DeleteAllCompleted],
    );
    let twice = Engine::run(
        &fixture(),
        &[
            Message::check(11, true),
            Message::DeleteAllCompleted,
            Message::DeleteAllCompleted,
        ],
    );
    assert_eq!(once, twice);
}
