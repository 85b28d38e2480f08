//! Console output for finished conversions

use colored::*;
use fitsheet_core::Program;
use std::path::Path;

/// Print the success line and the number of exercises per day
pub fn print_summary(output: &Path, program: &Program) {
    println!(
        "{}",
        format!("✓ Successfully created {}", output.display())
            .green()
            .bold()
    );

    if program.is_empty() {
        println!("{}", "No rows matched a training day".yellow());
        return;
    }

    println!();
    for (day, exercises) in program.days() {
        println!(
            "  {} {} ({})",
            format!("{:<10}", day.as_str()).cyan().bold(),
            exercises.len(),
            day.localized_name().bright_black()
        );
    }
    println!(
        "  {} {}",
        format!("{:<10}", "Total").bold(),
        program.exercise_count()
    );
}
