//! Time-of-day greeting shown when the assistant starts.

use chrono::{Local, Timelike};

/// Greeting for `name` at the given hour (0-23).
pub fn greeting_for_hour(name: &str, hour: u32) -> String {
    match hour {
        0..=11 => format!("Good morning, {name}! 🌞 How can I assist you today?"),
        12..=16 => format!("Good afternoon, {name}! 🌤️ How can I assist you today?"),
        17..=20 => format!("Good evening, {name}! 🌙 How can I assist you today?"),
        _ => format!(
            "Good night, {name}! 🌌 If you need anything before bed, just let me know!"
        ),
    }
}

/// Greeting for `name` at the current local time.
pub fn wish_me(name: &str) -> String {
    greeting_for_hour(name, Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert!(greeting_for_hour("Ada", 0).starts_with("Good morning, Ada!"));
        assert!(greeting_for_hour("Ada", 11).starts_with("Good morning"));
        assert!(greeting_for_hour("Ada", 12).starts_with("Good afternoon"));
        assert!(greeting_for_hour("Ada", 16).starts_with("Good afternoon"));
        assert!(greeting_for_hour("Ada", 17).starts_with("Good evening"));
        assert!(greeting_for_hour("Ada", 20).starts_with("Good evening"));
        assert!(greeting_for_hour("Ada", 21).starts_with("Good night"));
        assert!(greeting_for_hour("Ada", 23).starts_with("Good night"));
    }

    #[test]
    fn test_wish_me_uses_name() {
        assert!(wish_me("User").contains("User"));
    }
}
