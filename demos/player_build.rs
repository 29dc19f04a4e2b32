//! Player build example: drive a session the way a form would
//!
//! This example demonstrates:
//! - Resolving caps for a position and height
//! - Numeric edits versus slider drags near the budget
//! - Re-clamping after a height change
//! - Pushing results to a view
//!
//! Run with `RUST_LOG=skillcap=debug` to see the recompute trace.

use skillcap::*;
use tracing_subscriber::EnvFilter;

/// Prints what a chart and status line would show.
struct ConsoleView;

impl BuildView for ConsoleView {
    fn render_chart(&mut self, frame: &ChartFrame) {
        println!("\n  {:<11} {:>4} {:>4}", "Skill", "Cap", "Pts");
        for ((label, cap), rating) in frame.labels.iter().zip(&frame.caps).zip(&frame.ratings) {
            let bar = "#".repeat((*rating as usize) / 5);
            println!("  {label:<11} {cap:>4} {rating:>4}  {bar}");
        }
    }

    fn show_status(&mut self, message: Option<&ValidationMessage>) {
        match message {
            Some(message) => println!("  status: {message}"),
            None => println!("  status: ok"),
        }
    }
}

fn main() -> Result<(), LookupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut view = ConsoleView;
    let mut session = BuildSession::new(
        CapResolver::standard(),
        "pf".parse()?,
        "6'9".parse()?,
    )?;

    println!("=== {} at {} ===", session.position().display_name(), session.height());
    session.refresh(&mut view);

    println!("\nTyping values:");
    for (skill, value) in [
        (SkillId::Defense, 99),
        (SkillId::Rebounding, 99),
        (SkillId::Vertical, 95),
        (SkillId::Shooting, 70),
    ] {
        session.edit_number(skill, value);
        println!("  {} <- {value}: now {}", skill.display_name(), session.allocation()[skill]);
    }
    session.refresh(&mut view);
    println!("  remaining: {}", session.remaining_points());

    println!("\nDragging sliders near the budget:");
    session.drag_slider(SkillId::Stamina, session.remaining_points() as i32);
    session.refresh(&mut view);
    session.drag_slider(SkillId::Stamina, session.remaining_points() as i32 - 1);
    session.refresh(&mut view);

    println!("\nShrinking to 6'2:");
    session.set_height("6'2".parse()?)?;
    session.refresh(&mut view);
    println!("  remaining: {}", session.remaining_points());

    Ok(())
}
