//! Human-facing console output. Milestones with status glyphs and boxed templates.

use crate::adapters::templates::MeetupTemplate;
use crate::domain::{RunReport, ShareOutcome};

const RULE: &str = "══════════════════════════════════════════";

/// One line per sharing outcome, e.g. "✅ Event shared to Slack successfully!".
pub fn outcome_line(platform: &str, outcome: &ShareOutcome) -> String {
    match outcome {
        ShareOutcome::Succeeded => format!("✅ Event shared to {} successfully!", platform),
        ShareOutcome::Failed(e) => format!("❌ Failed to share to {}: {}", platform, e),
        ShareOutcome::Skipped(reason) => format!("⏭️  {} sharing skipped ({})", platform, reason),
    }
}

pub fn print_report(report: &RunReport) {
    println!("✅ Meetup event ready!");
    println!("Event ID: {}", report.event.id);
    println!("Event URL: {}", report.event.url);
    println!("{}", outcome_line("Slack", &report.slack));
    println!("{}", outcome_line("LinkedIn", &report.linkedin));
    println!();
    println!(
        "🎉 All done! Your meetup event has been created and shared according to your settings."
    );
}

fn print_header(title: &str) {
    println!("╔{}╗", RULE);
    println!("║ {:^40} ║", title);
    println!("╚{}╝", RULE);
    println!();
}

pub fn print_meetup_template(t: &MeetupTemplate) {
    print_header("MEETUP EVENT TEMPLATE");
    println!("📋 TITLE:\n{}\n", t.title);
    println!("📅 DATE & TIME:\n{}\n", t.date_time);
    println!("📍 VENUE:\n{}\n{}\n", t.venue, t.address);
    println!("📝 DESCRIPTION:\n{}\n", t.description);
    println!("🔗 EVENT URL (after creation):\n{}\n", t.event_url);
    println!("Copy the above details to create your event manually on meetup.com");
    println!();
}

pub fn print_share_template(platform: &str, text: &str) {
    print_header(&format!("{} POST", platform.to_uppercase()));
    println!("{}", text);
    println!();
    println!("Copy and paste the above to {}", platform);
    println!();
}

pub fn print_template_done() {
    println!("🎉 Templates ready. Nothing was posted; share them by hand.");
}
