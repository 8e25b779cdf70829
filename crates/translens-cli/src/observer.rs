use owo_colors::OwoColorize;
use translens_runtime::{Error, RunObserver};

/// Operator-facing progress reporting. A line per listing page, a
/// warning per skipped record, a note per contact with no bot session.
pub struct ConsoleObserver;

impl RunObserver for ConsoleObserver {
    fn page_complete(&mut self, processed: usize, matched: Option<usize>) {
        match matched {
            Some(matched) => println!(
                "{} Stitched [{}/{}] keys",
                "[IN PROGRESS]".cyan(),
                matched,
                processed
            ),
            None => println!(
                "{} Transformed [{}] keys",
                "[IN PROGRESS]".cyan(),
                processed
            ),
        }
    }

    fn record_skipped(&mut self, key: &str, err: &Error) {
        eprintln!("{} Skipping {}: {}", "[WARNING]".yellow(), key, err);
    }

    fn no_match(&mut self, contact_id: &str) {
        println!("No bot session found for contact {}", contact_id);
    }
}
