use crate::domain::model::Event;
use chrono::NaiveDate;

/// Past, today's and upcoming events relative to `today`, one output line each.
pub fn report(events: &[Event], today: NaiveDate) -> Vec<String> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let mut past = Vec::new();
    let mut current = Vec::new();
    let mut upcoming = Vec::new();
    for event in sorted {
        match event.date.cmp(&today) {
            std::cmp::Ordering::Less => past.push(event),
            std::cmp::Ordering::Equal => current.push(event),
            std::cmp::Ordering::Greater => upcoming.push(event),
        }
    }

    tracing::debug!(
        "Event report for {}: {} past, {} today, {} upcoming",
        today,
        past.len(),
        current.len(),
        upcoming.len()
    );

    let mut output = Vec::new();
    if !past.is_empty() {
        output.push("PAST EVENTS: ".to_string());
        output.extend(past.iter().map(|e| format!("\t{}", e)));
    }

    output.push("\nTODAY'S EVENTS: ".to_string());
    if current.is_empty() {
        output.push("\tYou have no events today.".to_string());
    } else {
        output.extend(current.iter().map(|e| format!("\t{}", e)));
    }

    output.push("\nUPCOMING EVENTS: ".to_string());
    if upcoming.is_empty() {
        output.push("\tYou have no upcoming events.".to_string());
    } else {
        output.extend(upcoming.iter().map(|e| format!("\t{}", e)));
    }

    output
}
