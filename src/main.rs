// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use needle::bench::{run as run_harness, Report, RunConfig, Suite};
use needle::config::Settings;
use needle::corpus::{load_text, load_words, random_corpus};
use needle::{BenchmarkResult, FuzzyMatcher, KmpMatcher, MaxDistance, NaiveMatcher, Pattern, TextUnit};

mod cli;
use cli::display::{
    self, distance_label, muted, pad_left, pad_right, paint, row, section_bot, section_top,
    timing_ms, title, Color, Weight,
};
use cli::{Cli, Commands, CountArgs, FuzzyArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        display::error(&err);
        process::exit(1);
    }
}

/// NEEDLE_LOG wins over RUST_LOG; `--verbose` only changes the fallback.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "needle=debug" } else { "warn" };
    let filter = env::var("NEEDLE_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.config.as_deref()).context("failed to load settings")?;

    match cli.command {
        Commands::Compare(args) => {
            let json = args.json;
            compare(&args.apply(settings), json)
        }
        Commands::Fuzzy(args) => fuzzy(&args.apply(settings), &args),
        Commands::Count(args) => count(&args.apply(settings), &args),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COMPARE
// ═══════════════════════════════════════════════════════════════════════════

fn compare(settings: &Settings, json: bool) -> Result<()> {
    let pattern = Pattern::new(&settings.pattern).context("invalid pattern")?;
    let largest = settings.sizes.iter().copied().max().unwrap_or(0);

    let random = random_corpus(largest, settings.min_len, settings.max_len, settings.seed)
        .context("failed to generate random corpus")?;
    let file_words = match load_words(&settings.text_path) {
        Ok(words) => Some(words),
        Err(err) => {
            warn!(error = %err, "skipping file word series");
            None
        }
    };

    let mut suite = Suite::new(pattern, settings.sizes.clone())
        .parallel(settings.parallel)
        .series("Brute Force (random strings)", NaiveMatcher, &random)
        .series("KMP (random strings)", KmpMatcher, &random);
    if let Some(words) = &file_words {
        suite = suite
            .series("Brute Force (file words)", NaiveMatcher, words)
            .series("KMP (file words)", KmpMatcher, words);
    }

    let report = run_suite(&suite)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(settings, &report);
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_suite(suite: &Suite<'_>) -> Result<Report> {
    use indicatif::{ProgressBar, ProgressStyle};

    let progress = ProgressBar::new(suite.points() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        )?
        .progress_chars("━━╸"),
    );
    progress.set_prefix("Measuring");

    let report = suite
        .run_with(|point| {
            progress.set_message(format!("{} @ {}", point.label, point.size));
            progress.inc(1);
        })
        .context("benchmark run failed")?;
    progress.finish_and_clear();
    Ok(report)
}

#[cfg(not(feature = "parallel"))]
fn run_suite(suite: &Suite<'_>) -> Result<Report> {
    suite.run().context("benchmark run failed")
}

fn print_report(settings: &Settings, report: &Report) {
    let mut lines = vec![
        title(&format!("needle compare: \"{}\"", settings.pattern)),
        String::new(),
    ];

    for dataset in &report.datasets {
        lines.push(section_top(&dataset.label));
        lines.push(row(&format!(
            "  {}  {}  {}",
            pad_left(&muted("size"), 10),
            pad_left(&muted("ms"), 10),
            pad_left(&muted("matches"), 10),
        )));
        for ((size, ms), matches) in report.sizes.iter().zip(&dataset.data).zip(&dataset.counts) {
            lines.push(row(&format!("  {:>10}  {}  {:>10}", size, timing_ms(*ms), matches)));
        }
        lines.push(section_bot());
    }

    println!("{}", lines.join("\n"));
}

// ═══════════════════════════════════════════════════════════════════════════
// FUZZY
// ═══════════════════════════════════════════════════════════════════════════

fn fuzzy(settings: &Settings, args: &FuzzyArgs) -> Result<()> {
    let pattern = Pattern::new(&settings.pattern).context("invalid pattern")?;
    let matcher = FuzzyMatcher::new(settings.max_distance).context("invalid max distance")?;
    let text = load_text(&settings.text_path).context("failed to load text")?;

    let corpus = vec![TextUnit::from(text)];
    let result = run_harness(&matcher, &RunConfig::new(pattern, &corpus))
        .context("fuzzy search failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{}\n",
        title(&format!(
            "needle fuzzy: \"{}\" within {}",
            settings.pattern,
            matcher.max_distance().get()
        ))
    );
    print_matches(&result, args.limit);
    Ok(())
}

fn print_matches(result: &BenchmarkResult, limit: Option<usize>) {
    let matches = result.matches.as_deref().unwrap_or(&[]);
    let shown = limit.unwrap_or(matches.len()).min(matches.len());

    let mut lines = vec![section_top("Matches")];
    if matches.is_empty() {
        lines.push(row(&format!("  {}", muted("no matches"))));
    }
    for record in &matches[..shown] {
        lines.push(row(&format!(
            "  {}  {}  {}",
            pad_left(&record.position.to_string(), 10),
            pad_right(&distance_label(record.distance), 6),
            record.substring
        )));
    }
    if shown < matches.len() {
        let rest = format!("... {} more", matches.len() - shown);
        lines.push(row(&format!("  {}", muted(&rest))));
    }
    lines.push(section_bot());

    lines.push(section_top("Totals"));
    lines.push(row(&format!("  matches  {:>10}", result.match_count)));
    lines.push(row(&format!("  elapsed  {} ms", timing_ms(result.elapsed_ms()))));
    lines.push(section_bot());

    println!("{}", lines.join("\n"));
}

// ═══════════════════════════════════════════════════════════════════════════
// COUNT
// ═══════════════════════════════════════════════════════════════════════════

fn count(settings: &Settings, args: &CountArgs) -> Result<()> {
    let pattern = Pattern::new(&settings.pattern).context("invalid pattern")?;
    let max_distance = MaxDistance::new(settings.max_distance).context("invalid max distance")?;
    let corpus: Vec<TextUnit> = args.texts.iter().map(|text| TextUnit::from(text.as_str())).collect();

    let matcher = args.strategy.matcher(max_distance);
    let result = run_harness(&*matcher, &RunConfig::new(pattern, &corpus))
        .with_context(|| format!("{} failed", args.strategy))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{}  {} matches in {} unit(s), {:.3} ms",
        paint(Color::Cyan, Weight::Bold, args.strategy.as_str()),
        result.match_count,
        corpus.len(),
        result.elapsed_ms()
    );
    if let Some(matches) = &result.matches {
        for record in matches {
            println!(
                "  {}  {}  {}",
                pad_left(&record.position.to_string(), 6),
                pad_right(&distance_label(record.distance), 6),
                record.substring
            );
        }
    }
    Ok(())
}
