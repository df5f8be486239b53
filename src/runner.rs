use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::Cli;
use crate::scaffold::Report;
use crate::{layout, prompt, readme, scaffold};

const RULE_WIDTH: usize = 60;

pub fn run(_cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let home = prompt::home_dir();
    run_with(&mut input, &mut out, home.as_deref()).map(|_| ())
}

/// Drive the whole flow over arbitrary streams and return the absolute root.
pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    home: Option<&Utf8Path>,
) -> Result<Utf8PathBuf> {
    banner(out)?;
    let root = prompt::acquire_root(input, out, home)?;
    build(out, &root).context("creating directory structure")
}

fn build<W: Write>(out: &mut W, root: &Utf8Path) -> Result<Utf8PathBuf> {
    let report = scaffold::materialize(root, layout::DIRECTORIES)?;
    print_report(out, &report)?;
    let failed = report.failures().count();
    if failed > 0 {
        tracing::warn!(failed, root = %report.root, "some directories could not be created");
    }

    readme::write(&report.root)?;
    writeln!(out, "✓ Created {} with documentation", readme::README_FILE)?;

    writeln!(out)?;
    rule(out)?;
    writeln!(out, "SUCCESS! Roblox directory structure has been created.")?;
    rule(out)?;
    writeln!(out, "\nLocation: {}", report.root)?;
    writeln!(out, "\nYou can now start developing your Roblox game!")?;
    writeln!(
        out,
        "Open the {} file for more information about the structure.",
        readme::README_FILE
    )?;
    out.flush()?;

    Ok(report.root)
}

fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "ROBLOX DIRECTORY STRUCTURE CREATOR")?;
    rule(out)?;
    writeln!(out)
}

fn print_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "Creating Roblox directory structure in: {}", report.root)?;
    rule(out)?;
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => writeln!(out, "✓ Created: {}", outcome.relative)?,
            Err(err) => writeln!(out, "✗ Failed to create {}: {}", outcome.relative, err)?,
        }
    }
    rule(out)?;
    writeln!(
        out,
        "Successfully created {} directories!",
        report.created_count()
    )?;
    writeln!(out, "Directory structure created at: {}", report.root)
}

fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}
