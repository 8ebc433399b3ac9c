//! Time Travel
//!
//! Replays a short editing session and prints every intermediate model.
//!
//! Key concepts:
//! - Messages are pure transitions from one model to the next
//! - The engine keeps every intermediate model, so any past state can be inspected
//! - A blank `Add` still consumes an id
//!
//! Run with: RUST_LOG=todo_core=trace cargo run --example time_travel

use todo_core::{Engine, Message, Model};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let messages = vec![
        Message::UpdateNewEntryField("go forward in time".into()),
        Message::Add,
        Message::Add,
        Message::UpdateNewEntryField("delete this item".into()),
        Message::Add,
        Message::Delete(2),
        Message::UpdateNewEntryField("go backward in time".into()),
        Message::Add,
        Message::check(0, true),
        Message::DeleteAllCompleted,
    ];

    let history = Engine::run_with_history(&Model::new(), &messages);

    println!("=== Time Travel ===\n");
    for (step, transition) in history.transitions().iter().enumerate() {
        let model = &transition.model;
        println!(
            "[{step:2}] {:<20} next_id={} field={:?}",
            transition.message.name(),
            model.next_id,
            model.new_entry_field
        );
        for entry in &model.entries {
            let mark = if entry.completed { 'x' } else { ' ' };
            println!("       [{mark}] #{} {}", entry.id, entry.description);
        }
    }

    match history.model_at(4) {
        Ok(model) => println!("\nBack at step 4 there were {} entries", model.entries.len()),
        Err(err) => println!("\n{err}"),
    }
}
