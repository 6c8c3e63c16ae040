//! Terminal rendering for the OKR board.

use crate::feed::FetchState;
use console::style;
use okr_common::{Category, KeyResult, Objective, OkrStatus};
use owo_colors::OwoColorize;

const HR: &str = "────────────────────────────────────────────────────────────";
const GAUGE_WIDTH: usize = 24;

/// Key/value line with aligned keys. Padding is applied to the plain key so
/// the style's escape codes don't count against the column width.
fn kv_line(key: &str, value: &str, key_width: usize) -> String {
    let padded = format!("{:width$}", key, width = key_width);
    format!("{} {}", padded.dimmed(), value)
}

/// Print a key/value line with aligned keys.
pub fn print_kv(key: &str, value: &str, key_width: usize) {
    println!("{}", kv_line(key, value, key_width));
}

/// Character gauge for a progress percentage.
pub fn gauge(progress: f64, width: usize) -> String {
    let clamped = progress.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Status label with its color.
pub fn status_label(status: OkrStatus) -> String {
    match status {
        OkrStatus::NotStarted => status.as_str().dimmed().to_string(),
        OkrStatus::InProgress => status.as_str().blue().to_string(),
        OkrStatus::Completed => status.as_str().green().to_string(),
        OkrStatus::AtRisk => status.as_str().red().to_string(),
    }
}

fn print_key_result(kr: &KeyResult) {
    let measure = match (kr.current, kr.target) {
        (Some(current), Some(target)) => {
            let unit = if kr.unit.is_empty() {
                String::new()
            } else {
                format!(" {}", kr.unit)
            };
            format!("{}/{}{}", current, target, unit)
        }
        (Some(current), None) => format!("{} (no target)", current),
        _ => "—".to_string(),
    };

    println!(
        "    • {:40} {:>18} [{}]",
        kr.description,
        measure,
        status_label(kr.status)
    );
}

fn print_objective(objective: &Objective) {
    println!(
        "  {} {} {:>5.1}% [{}]",
        style(&objective.title).bold(),
        gauge(objective.progress, GAUGE_WIDTH),
        objective.progress,
        status_label(objective.status)
    );

    if let Some(due) = &objective.due_date {
        println!("    {} {}", "due".dimmed(), due);
    }

    for kr in &objective.key_results {
        print_key_result(kr);
    }
}

/// Print one category block.
pub fn print_category(category: &Category) {
    println!();
    println!(
        "{} {}",
        style(&category.name).bold().underlined(),
        format!("({} objectives)", category.objectives.len()).dimmed()
    );

    for objective in &category.objectives {
        print_objective(objective);
    }
}

/// Render a full board snapshot.
pub fn print_board(state: &FetchState) {
    println!(
        "{}",
        style(format!("okrctl v{}", env!("CARGO_PKG_VERSION"))).bold()
    );
    println!("{}", HR.dimmed());

    if let Some(error) = &state.error {
        println!("{} {}", "error:".red().bold(), error);
        if !state.categories.is_empty() {
            println!("{}", "showing last successful fetch".dimmed());
        }
    }

    if state.categories.is_empty() && state.error.is_none() {
        println!("{}", "No objectives found.".dimmed());
        return;
    }

    let total: usize = state.categories.iter().map(|c| c.objectives.len()).sum();
    print_kv("categories", &state.categories.len().to_string(), 12);
    print_kv("objectives", &total.to_string(), 12);

    for category in &state.categories {
        print_category(category);
    }
}
