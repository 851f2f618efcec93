//! Text views for each menu action.
//!
//! Every function writes complete lines to `out` using `theme` for colour,
//! and performs no input.

use std::io::{self, Write};

use monkey_core::formatting::{format_coordinate, format_number, or_not_available};
use monkey_core::models::MonkeyRecord;

use crate::art;
use crate::themes::Theme;

/// Names suggested when a lookup misses.
pub const SEARCH_TIP: &str =
    "💡 Tip: Try searching for names like 'Baboon', 'Capuchin', or 'Spider Monkey'";

pub fn render_welcome(out: &mut dyn Write, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.paint(&theme.banner, art::WELCOME_BANNER))
}

pub fn render_goodbye(out: &mut dyn Write, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.paint(&theme.banner, art::GOODBYE_BANNER))
}

/// Main menu followed by the choice prompt (no trailing newline).
pub fn render_menu(out: &mut dyn Write, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.paint(&theme.menu_title, "🐒 === MONKEY CONSOLE APPLICATION ===")
    )?;
    writeln!(out)?;
    writeln!(out, "Please choose an option:")?;
    writeln!(out, "1. 📋 List all monkeys")?;
    writeln!(out, "2. 🔍 Find monkey by name")?;
    writeln!(out, "3. 🎲 Get random monkey")?;
    writeln!(out, "4. ℹ️  About")?;
    writeln!(out, "5. 🚪 Exit")?;
    writeln!(out)?;
    write!(out, "Enter your choice (1-5): ")?;
    out.flush()
}

/// Numbered summary of every record plus the total.
pub fn render_list(out: &mut dyn Write, theme: &Theme, records: &[MonkeyRecord]) -> io::Result<()> {
    writeln!(out, "{}", theme.paint(&theme.heading, "🐒 All Available Monkeys:"))?;
    writeln!(out)?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, record)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        theme.paint(
            &theme.dim,
            &format!("Total: {} monkey species", records.len())
        )
    )
}

pub fn render_search_prompt(out: &mut dyn Write, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.paint(&theme.heading, "🔍 Find Monkey by Name:"))?;
    writeln!(out)?;
    write!(out, "Enter the monkey name: ")?;
    out.flush()
}

pub fn render_found(out: &mut dyn Write, theme: &Theme, record: &MonkeyRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.paint(&theme.highlight, "🎉 Monkey Found!"))?;
    render_details(out, theme, record)
}

pub fn render_not_found(out: &mut dyn Write, theme: &Theme, name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        theme.paint(
            &theme.error,
            &format!("❌ No monkey found with the name '{}'.", name)
        )
    )?;
    writeln!(out)?;
    writeln!(out, "{}", SEARCH_TIP)
}

pub fn render_random_heading(out: &mut dyn Write, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.paint(&theme.heading, "🎲 Random Monkey:"))?;
    writeln!(out)
}

pub fn render_random(out: &mut dyn Write, theme: &Theme, record: &MonkeyRecord) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.paint(&theme.highlight, "🎉 Here's your random monkey!")
    )?;
    render_details(out, theme, record)
}

/// Every field of `record`, absent optionals as `N/A`, then its portrait.
pub fn render_details(out: &mut dyn Write, theme: &Theme, record: &MonkeyRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🐒 Monkey Details:")?;
    writeln!(out, "   Name: {}", record.name)?;
    writeln!(out, "   Location: {}", record.location)?;
    writeln!(out, "   Population: {}", format_number(record.population))?;
    writeln!(out, "   Details: {}", or_not_available(record.details.as_deref()))?;
    writeln!(out, "   Image: {}", or_not_available(record.image_url.as_deref()))?;
    writeln!(out, "   Latitude: {}", format_coordinate(record.latitude))?;
    writeln!(out, "   Longitude: {}", format_coordinate(record.longitude))?;
    writeln!(out)?;
    writeln!(out, "{}", theme.paint(&theme.art, art::art_for(&record.name)))
}

pub fn render_about(out: &mut dyn Write, theme: &Theme, count: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.paint(&theme.heading, "ℹ️  About Monkey Console Application:")
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "This application provides information about various monkey species"
    )?;
    writeln!(out, "from around the world. You can:")?;
    writeln!(out, "• Browse all available monkeys")?;
    writeln!(out, "• Search for specific monkeys by name")?;
    writeln!(out, "• Discover random monkeys")?;
    writeln!(out)?;
    writeln!(
        out,
        "Database contains information about {} monkey species.",
        count
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        theme.paint(&theme.dim, "Created with ❤️ for monkey enthusiasts!")
    )
}

pub fn render_error(out: &mut dyn Write, theme: &Theme, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.paint(&theme.error, &format!("❌ Error: {}", message))
    )
}

pub fn render_invalid_option(out: &mut dyn Write, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.paint(&theme.error, "❌ Invalid option. Please try again.")
    )
}

pub fn render_continue_prompt(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Press any key to continue...")?;
    out.flush()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
