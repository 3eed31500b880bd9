//! Statistics reporting.

use console::style;

use crate::filer::OrganizeOutcome;

/// Counters for one run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub downloaded: u64,
    pub already_present: u64,
    pub moved: u64,
    pub skipped_at_destination: u64,
    pub organize_failed: u64,
    pub download_failed: u64,
}

impl RunStats {
    /// Record the terminal state of one organize step.
    pub fn record_organize(&mut self, outcome: OrganizeOutcome) {
        match outcome {
            OrganizeOutcome::Moved => self.moved += 1,
            OrganizeOutcome::SkippedExists => self.skipped_at_destination += 1,
            OrganizeOutcome::Failed => self.organize_failed += 1,
        }
    }

    /// Whether any per-file step failed.
    pub fn has_failures(&self) -> bool {
        self.organize_failed > 0 || self.download_failed > 0
    }
}

/// Print statistics for the whole run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run statistics:").bold());
    println!("  Downloaded:       {}", stats.downloaded);
    println!("  Already present:  {}", stats.already_present);
    println!("  Filed:            {}", stats.moved);
    println!("  Skipped (exists): {}", stats.skipped_at_destination);
    if stats.download_failed > 0 {
        println!(
            "  Download errors:  {}",
            style(stats.download_failed).red()
        );
    }
    if stats.organize_failed > 0 {
        println!(
            "  Filing errors:    {}",
            style(stats.organize_failed).red()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
