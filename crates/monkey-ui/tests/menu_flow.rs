//! End-to-end menu sessions driven through a line console.

use std::io::{BufRead, Cursor};
use std::time::Duration;

use monkey_runtime::catalog_service::CatalogService;
use monkey_runtime::data::catalog::Catalog;
use monkey_ui::app::{MenuController, MenuState};
use monkey_ui::console::LineConsole;
use monkey_ui::themes::Theme;

/// Run a full session over `input` and return (captured output, unread input).
async fn session(input: &str) -> (String, String) {
    let catalog = Catalog::from_seed_with_rng_seed(7).expect("seed catalog");
    session_with(CatalogService::new(catalog), input).await
}

async fn session_with(service: CatalogService, input: &str) -> (String, String) {
    let console = LineConsole::new(Cursor::new(input.to_string()), Vec::new());
    let mut controller = MenuController::new(service, console, Theme::plain());
    controller.run().await.expect("menu session");
    assert_eq!(controller.state(), MenuState::Terminated);

    let (mut reader, out) = controller.into_console().into_parts();
    let mut rest = String::new();
    while reader.read_line(&mut rest).expect("read rest") > 0 {}
    (String::from_utf8(out).expect("utf8 output"), rest)
}

#[tokio::test]
async fn test_find_mandrill_shows_details() {
    let (out, _) = session("2\nMandrill\n\n5\n").await;
    assert!(out.contains("🎉 Monkey Found!"));
    assert!(out.contains("   Name: Mandrill"));
    assert!(out.contains("800,000"));
}

#[tokio::test]
async fn test_find_is_case_insensitive() {
    let (out, _) = session("2\n  sPiDeR mOnKeY \n\n5\n").await;
    assert!(out.contains("   Name: Spider Monkey"));
}

#[tokio::test(start_paused = true)]
async fn test_find_blank_name_is_validation_error() {
    let catalog = Catalog::from_seed_with_rng_seed(7).expect("seed catalog");
    let service = CatalogService::with_latency(catalog, Duration::from_secs(5));

    let start = tokio::time::Instant::now();
    let (out, _) = session_with(service, "2\n\n\n5\n").await;

    // Every catalog query sleeps first, so no virtual time means no lookup.
    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(out.contains("❌ Error: Please enter a valid monkey name."));
    assert!(!out.contains("No monkey found"));
}

#[tokio::test]
async fn test_find_unknown_name_shows_tip() {
    let (out, _) = session("2\nYeti\n\n5\n").await;
    assert!(out.contains("❌ No monkey found with the name 'Yeti'."));
    assert!(out.contains("💡 Tip:"));
}

#[tokio::test]
async fn test_list_shows_all_seed_records() {
    let (out, _) = session("1\n\n5\n").await;
    assert!(out.contains("🐒 All Available Monkeys:"));
    assert!(out.contains(" 1. Baboon - Location: Africa & Arabia, Population: 2,000,000"));
    assert!(out.contains("15. Marmoset"));
    assert!(out.contains("Total: 15 monkey species"));
}

#[tokio::test]
async fn test_random_shows_a_record() {
    let (out, _) = session("3\n\n5\n").await;
    assert!(out.contains("🎉 Here's your random monkey!"));
    assert!(out.contains("   Name: "));
}

#[tokio::test]
async fn test_about_reports_count() {
    let (out, _) = session("4\n\n5\n").await;
    assert!(out.contains("Database contains information about 15 monkey species."));
}

#[tokio::test]
async fn test_invalid_option_then_menu_again() {
    let (out, _) = session("9\n\n5\n").await;
    assert!(out.contains("❌ Invalid option. Please try again."));
    assert_eq!(out.matches("Enter your choice (1-5): ").count(), 2);
}

#[tokio::test]
async fn test_exit_stops_reading_input() {
    let (out, rest) = session("5\n1\n2\nBaboon\n").await;
    assert!(out.contains("See you later, monkey lover!"));
    assert!(!out.contains("Press any key to continue..."));
    assert!(!out.contains("All Available Monkeys"));
    assert_eq!(rest, "1\n2\nBaboon\n");
}

#[tokio::test]
async fn test_exit_aliases() {
    for alias in ["q", "QUIT", "Exit"] {
        let (out, rest) = session(&format!("{alias}\n4\n")).await;
        assert!(out.contains("See you later, monkey lover!"), "{alias}");
        assert_eq!(rest, "4\n", "{alias}");
    }
}

#[tokio::test]
async fn test_end_of_input_terminates() {
    let (out, _) = session("4\n").await;
    assert!(out.contains("Database contains information about 15 monkey species."));
    assert!(out.contains("See you later, monkey lover!"));
}

#[tokio::test(start_paused = true)]
async fn test_session_with_latency() {
    let catalog = Catalog::from_seed_with_rng_seed(7).expect("seed catalog");
    let service = CatalogService::with_latency(catalog, Duration::from_millis(500));
    let (out, _) = session_with(service, "2\nGelada\n\n5\n").await;
    assert!(out.contains("   Name: Gelada"));
}
