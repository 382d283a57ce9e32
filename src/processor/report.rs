//! Run summary printed after all stages finish.

use crate::models::RunStats;
use colored::*;

/// Print a per-dataset summary table to stdout
pub fn print_summary(stats: &RunStats) {
    println!("\n{}", "Subset Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Reach identifiers:".bright_cyan(),
        stats.subset_size.to_string().bright_white().bold()
    );

    for stage in &stats.stages {
        let mut line = format!(
            "  {:<12} {:>8} / {:<8}",
            stage.dataset.name(),
            stage.records_out,
            stage.records_in
        );
        if stage.members_in > 0 {
            line.push_str(&format!(
                " ({} / {} members)",
                stage.members_out, stage.members_in
            ));
        }
        if stage.records_out == 0 {
            println!("{}", line.bright_yellow());
        } else {
            println!("{}", line.bright_white());
        }
        println!(
            "  {:<12} {}",
            "",
            stage.output_path.display().to_string().bright_black()
        );
    }

    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_millis().to_string().bright_white()
    );
}
