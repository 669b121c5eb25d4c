use crate::core::{JokeResponse, Reporter};
use crate::utils::error::Result;

/// Renders the report lines for a joke, in display order.
///
/// Category lines appear only when there is at least one category, labeled
/// 1-indexed in the array's original order.
pub fn format_report(joke: &JokeResponse) -> Vec<String> {
    let mut lines = vec![
        format!("Type: {}", joke.kind),
        format!("Value ID: {}", joke.value.id),
        format!("Value Joke: {}", joke.value.joke),
        format!("Number of Categories: {}", joke.value.categories.len()),
    ];

    for (i, category) in joke.value.categories.iter().enumerate() {
        lines.push(format!("Value Category {}: {}", i + 1, category));
    }

    lines
}

/// Prints the joke breakdown to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, joke: &JokeResponse) -> Result<()> {
        for line in format_report(joke) {
            println!("{}", line);
        }
        Ok(())
    }
}
