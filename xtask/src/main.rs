//! Custom cargo commands for the needle crate.
//!
//! Usage:
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run criterion benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask kani      - Run the model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["exact_agreement", "levenshtein_properties", "fuzzy_windows"];

/// Seconds each fuzz target runs under `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test      Run all Rust tests, with and without the parallel feature
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
  kani      Run Kani proofs (needs cargo-kani)
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    println!("[1/2] cargo test (default features)...");
    run_cargo(&["test"])?;

    println!("[2/2] cargo test (no default features)...");
    run_cargo(&["test", "--no-default-features"])?;

    println!("\n✓ All tests passed");
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "matching_bench"])
}

/// Run each fuzz target for a fixed time budget
fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for (i, &target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        run_in(
            &root,
            "cargo",
            &["+nightly", "fuzz", "run", target, "--", max_time.as_str()],
        )?;
    }

    println!("\n✓ No fuzz failures in {}s per target", FUZZ_SECONDS);
    Ok(())
}

/// Run the standalone Kani proofs
fn kani() -> Result<()> {
    let proofs = project_root()?.join("kani-proofs");
    if !proofs.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }
    run_in(&proofs, "cargo", &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}
