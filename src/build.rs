//! `mdsite build` — generate a static site from markdown content, static
//! files and an HTML template.
//!
//! The pipeline: reset the output directory, mirror the static directory
//! into it, then walk the content directory and generate one `.html` per
//! `.md` source at the same relative path.

use anyhow::{Context, Result};
use colored::Colorize;
use notify::{EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use walkdir::WalkDir;

use crate::config::SiteConfig;

/// Aggregate counts from one build.
#[derive(Default)]
pub struct BuildReport {
    pub pages: usize,
    pub static_files: usize,
}

impl BuildReport {
    pub fn print_summary(&self, out_dir: &str) {
        println!(
            "{} {} pages, {} static files -> {}",
            "Built".green().bold(),
            self.pages,
            self.static_files,
            out_dir,
        );
    }
}

/// Run a full build under `root`.
pub fn run_build(root: &Path, config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    let out_dir = root.join(&config.out_dir);
    let content_dir = root.join(&config.content_dir);
    let static_dir = root.join(&config.static_dir);
    let template_path = root.join(&config.template_path);

    let template = std::fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template '{}'", template_path.display()))?;

    // The output directory belongs to the generator; every build starts clean.
    if out_dir.exists() {
        std::fs::remove_dir_all(&out_dir)
            .with_context(|| format!("Failed to clear '{}'", out_dir.display()))?;
    }
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create '{}'", out_dir.display()))?;

    let mut report = BuildReport::default();

    if static_dir.is_dir() {
        report.static_files = copy_tree(&static_dir, &out_dir)?;
    }

    generate_pages(&content_dir, &out_dir, &template, quiet, &mut report)?;

    Ok(report)
}

/// Recursively mirror `src` into `dst`, returning the copied file count.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src)?;
        let dest_path = dst.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &dest_path)
                .with_context(|| format!("Failed to copy '{}'", entry.path().display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Walk the content tree and render every `.md` file through the template.
///
/// The batch halts on the first document that fails conversion, naming the
/// offending file — the conversion core itself stays path-agnostic.
fn generate_pages(
    content_dir: &Path,
    out_dir: &Path,
    template: &str,
    quiet: bool,
    report: &mut BuildReport,
) -> Result<()> {
    for entry in WalkDir::new(content_dir) {
        let entry = entry?;
        let is_md = entry.path().extension().and_then(|e| e.to_str()) == Some("md");
        if !entry.file_type().is_file() || !is_md {
            continue;
        }

        let rel = entry.path().strip_prefix(content_dir)?;
        let dest = out_dir.join(rel).with_extension("html");

        let source = std::fs::read_to_string(entry.path())
            .with_context(|| format!("Failed to read '{}'", entry.path().display()))?;
        let html = mdsite_convert::render_page(&source, template)
            .with_context(|| format!("Failed to convert '{}'", entry.path().display()))?;

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&dest, html)
            .with_context(|| format!("Failed to write '{}'", dest.display()))?;

        report.pages += 1;
        if !quiet {
            println!("  {} {} -> {}", "page".dimmed(), rel.display(), dest.display());
        }
    }
    Ok(())
}

/// Watch the content and static directories plus the template, rebuilding on
/// each change.
///
/// Rapid event bursts (editors that write in stages) are debounced with a
/// 200ms window. Ctrl+C exits.
pub fn watch_and_rebuild(root: &Path, config: &SiteConfig, quiet: bool) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for dir in [
        root.join(&config.content_dir),
        root.join(&config.static_dir),
    ] {
        if dir.is_dir() {
            watcher.watch(&dir, RecursiveMode::Recursive)?;
        }
    }
    let template_path = root.join(&config.template_path);
    if template_path.is_file() {
        watcher.watch(&template_path, RecursiveMode::NonRecursive)?;
    }

    println!(
        "{} {} for changes (Ctrl+C to stop)",
        "Watching".cyan().bold(),
        root.display()
    );

    // Watcher event paths are absolute; a relative output path would never
    // match them, so resolve it up front.
    let out_dir = root.join(&config.out_dir);
    let out_dir = out_dir.canonicalize().unwrap_or(out_dir);
    let mut last_rebuild = Instant::now();
    let debounce = Duration::from_millis(200);

    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                let relevant = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );
                // Ignore events for files the build itself just wrote.
                let in_output = event_in_output(&event.paths, &out_dir);

                if relevant && !in_output && last_rebuild.elapsed() > debounce {
                    // Small delay to let the editor finish writing.
                    std::thread::sleep(Duration::from_millis(50));

                    match run_build(root, config, quiet) {
                        Ok(report) => {
                            if !quiet {
                                report.print_summary(&config.out_dir);
                            }
                            last_rebuild = Instant::now();
                        }
                        Err(e) => {
                            eprintln!("{} {e:#}", "Build error:".red().bold());
                        }
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // Keep looping.
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}

/// True when every path of a watcher event sits inside the build output
/// tree. `out_dir` must already be canonicalized. A pathless event is never
/// treated as output.
fn event_in_output(paths: &[PathBuf], out_dir: &Path) -> bool {
    !paths.is_empty() && paths.iter().all(|p| p.starts_with(out_dir))
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
