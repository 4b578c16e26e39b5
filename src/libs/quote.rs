//! Motivational quotes for the dashboard footer.

use std::time::{SystemTime, UNIX_EPOCH};

pub const QUOTES: [&str; 7] = [
    "Small steps every day lead to big results.",
    "Focus on progress, not perfection.",
    "Do something today that your future self will thank you for.",
    "Stay consistent, momentum compounds.",
    "Break big tasks into tiny tasks and start.",
    "Your future is created by what you do today, not tomorrow.",
    "Progress is better than perfection.",
];

/// Picks a quote seeded by the wall clock, one per second.
pub fn pick() -> &'static str {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    QUOTES[(seed % QUOTES.len() as u64) as usize]
}
