// Terminal output for a publish run

use colored::Colorize;

use crate::domain::StepResult;

const BOX_WIDTH: usize = 58;

/// Boxed title; long topics are cut with an ellipsis so the box stays closed
pub fn print_header(title: &str) {
    println!();
    println!("{}", format!("╔{}╗", "═".repeat(BOX_WIDTH + 2)).bright_blue());
    println!("{}", format!("║  {:<width$}║", fit(title, BOX_WIDTH), width = BOX_WIDTH).bright_blue());
    println!("{}", format!("╚{}╝", "═".repeat(BOX_WIDTH + 2)).bright_blue());
    println!();
}

pub fn print_rule() {
    println!("{}", "═".repeat(BOX_WIDTH + 2).bright_blue());
}

pub fn print_success(message: &str) {
    println!("{}", format!("✅ {}", message).bright_green().bold());
}

pub fn print_error(message: &str) {
    eprintln!("{}", format!("❌ {}", message).bright_red().bold());
}

/// One summary line per step, with the failure message underneath
pub fn print_step_result(result: &StepResult) {
    let status = if result.success { "✅" } else { "❌" };
    println!(
        "   {} {} ({:.1}s)",
        status,
        result.step.name(),
        result.duration.as_secs_f64()
    );
    if let Some(message) = &result.message {
        println!("      {}", message.dimmed());
    }
}

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_short_title_unchanged() {
        assert_eq!(fit("Publish: Rust", 58), "Publish: Rust");
    }

    #[test]
    fn test_fit_long_title_truncated() {
        let long = "x".repeat(80);
        let fitted = fit(&long, 58);
        assert_eq!(fitted.chars().count(), 58);
        assert!(fitted.ends_with('…'));
    }
}
