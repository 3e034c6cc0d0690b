//! Sinks for decoded rows.

use duckpg_db::models::person::Person;

/// Receives every row that decoded successfully, in stream order.
pub trait PersonObserver {
    fn on_person(&mut self, person: &Person);
}

/// Writes each person to the log as `name: <value>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl PersonObserver for LogObserver {
    fn on_person(&mut self, person: &Person) {
        tracing::info!("name: {}", person.name);
    }
}

/// Collects rows in memory.
impl PersonObserver for Vec<Person> {
    fn on_person(&mut self, person: &Person) {
        self.push(person.clone());
    }
}
