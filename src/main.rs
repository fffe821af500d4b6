//! # chatrecap CLI
//!
//! Command-line interface for chatrecap library.

use std::io::Write;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatrecap::RecapError;
use chatrecap::cli::Args;
use chatrecap::core::{summarize_with_config, to_json, to_json_compact};
use chatrecap::parser::TranscriptParser;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), RecapError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = args.recap_config();

    // Parse
    let parser = TranscriptParser::with_config(&config);
    let messages = parser.parse_file(Path::new(&args.input))?;

    // Aggregate
    let summary = summarize_with_config(&messages, &config);
    let json = if args.compact {
        to_json_compact(&summary)?
    } else {
        to_json(&summary)?
    };

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    std::fs::write(&args.output, json.as_bytes())?;

    println!("📊 chatrecap v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📖 Dialect:  {}", args.source);
    println!("📂 Input:    {}", args.input);
    println!("📅 Year:     {}", config.target_year);
    println!("💾 Output:   {}", args.output);
    println!();
    println!("   Messages:        {}", messages.len());
    println!("   Participants:    {}", summary.user_stats.len());
    println!(
        "   Longest silence: {}",
        format_duration(summary.streaks.longest_silence_seconds)
    );
    println!(
        "   Longest streak:  {}",
        format_duration(summary.streaks.longest_streak_duration_seconds)
    );
    if let Some((glyph, count)) = summary.top_emojis.iter().next() {
        println!("   Top emoji:       {} ×{}", glyph, count);
    }
    println!();
    println!(
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Formats seconds as `Xd Yh Zm`, dropping leading zero units.
fn format_duration(secs: i64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    match (days, hours) {
        (0, 0) => format!("{}m", minutes),
        (0, _) => format!("{}h {}m", hours, minutes),
        _ => format!("{}d {}h {}m", days, hours, minutes),
    }
}
