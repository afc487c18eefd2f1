use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storeshot::{
    ApproachId, Catalog, ConformanceReport, ProcessLauncherOpts, ProjectLayout, RawInventory,
    RunAllOpts, RunStatus, Runner, is_interpreter_available, verify_approach_outputs,
    verify_outputs,
};

#[derive(Parser, Debug)]
#[command(name = "storeshot", version)]
struct Cli {
    /// Project root holding `scripts/`, `raw/` and `output/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the approach table.
    List(ListArgs),
    /// Run a single approach.
    Run(RunArgs),
    /// Run every approach in id order, continuing past failures.
    RunAll(RunAllArgs),
    /// Check produced PNGs against the App Store target rasters.
    Verify(VerifyArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Emit the catalog as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Approach id (see `storeshot list`).
    #[arg(long)]
    approach: u32,

    /// Interpreter used to run the generator scripts.
    #[arg(long, default_value = "python3")]
    python: PathBuf,
}

#[derive(Parser, Debug)]
struct RunAllArgs {
    /// Also launch semi-automated approaches instead of skipping them.
    #[arg(long, default_value_t = false)]
    include_semi: bool,

    /// Interpreter used to run the generator scripts.
    #[arg(long, default_value = "python3")]
    python: PathBuf,
}

#[derive(Parser, Debug)]
struct VerifyArgs {
    /// Check only this approach's output folder.
    #[arg(long)]
    approach: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let layout = ProjectLayout::new(cli.root);
    match cli.cmd {
        Command::List(args) => cmd_list(layout, args),
        Command::Run(args) => cmd_run(layout, args),
        Command::RunAll(args) => cmd_run_all(layout, args),
        Command::Verify(args) => cmd_verify(layout, args),
    }
}

fn cmd_list(layout: ProjectLayout, args: ListArgs) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.approaches())?);
        return Ok(());
    }

    println!("Approaches:");
    for a in catalog.approaches() {
        println!("  {:>2}. [{}] {}: {}", a.id, a.automation, a.name, a.description);
        println!("      script: {}  requires: {}", a.script, a.requires.join(", "));
    }

    let raw = RawInventory::scan(&layout)?;
    if raw.is_empty() {
        eprintln!(
            "no raw screenshots in '{}'; add app captures before running",
            layout.raw_dir().display()
        );
    } else {
        let mut names = raw.preview(5);
        if raw.count() > names.len() {
            names.push(format!("… and {} more", raw.count() - names.len()));
        }
        println!("raw/: {} screenshots ({})", raw.count(), names.join(", "));
    }
    Ok(())
}

fn cmd_run(layout: ProjectLayout, args: RunArgs) -> anyhow::Result<()> {
    let opts = ProcessLauncherOpts {
        interpreter: args.python,
        ..ProcessLauncherOpts::default()
    };
    let mut runner = Runner::with_process_launcher(layout, opts);

    let record = runner.run(ApproachId(args.approach))?;
    println!(
        "✓ {:>2}. {} ({:.1}s)",
        record.id,
        record.name,
        record.elapsed.as_secs_f64()
    );
    Ok(())
}

fn cmd_run_all(layout: ProjectLayout, args: RunAllArgs) -> anyhow::Result<()> {
    let raw = RawInventory::scan(&layout)?;
    if raw.is_empty() {
        anyhow::bail!(
            "no raw screenshots in '{}'; add app captures before running",
            layout.raw_dir().display()
        );
    }
    println!("Found {} raw screenshots", raw.count());

    if !is_interpreter_available(&args.python) {
        anyhow::bail!(
            "interpreter '{}' is not available; install it or pass --python",
            args.python.display()
        );
    }

    let opts = ProcessLauncherOpts {
        interpreter: args.python,
        ..ProcessLauncherOpts::default()
    };
    let mut runner = Runner::with_process_launcher(layout.clone(), opts);

    let report = runner.run_all(RunAllOpts {
        include_semi: args.include_semi,
    })?;

    println!();
    println!("Summary:");
    for r in &report.records {
        match r.status {
            RunStatus::Completed => {
                println!("  ✓ {:>2}. {} ({:.1}s)", r.id, r.name, r.elapsed.as_secs_f64())
            }
            RunStatus::Failed => println!(
                "  ✗ {:>2}. {}: {}",
                r.id,
                r.name,
                r.error.as_deref().unwrap_or("failed")
            ),
            RunStatus::Skipped => println!("  - {:>2}. {} (semi-automated, skipped)", r.id, r.name),
        }
    }
    println!(
        "{} completed, {} failed, {} skipped",
        report.count(RunStatus::Completed),
        report.count(RunStatus::Failed),
        report.count(RunStatus::Skipped)
    );

    let conformance = verify_outputs(&layout)?;
    if !conformance.folders.is_empty() {
        println!();
        println!("Output folders:");
        for f in &conformance.folders {
            println!("  {} ({} images)", f.folder, f.png_count);
        }
    }

    if report.has_failures() {
        anyhow::bail!("{} approaches failed", report.count(RunStatus::Failed));
    }
    Ok(())
}

fn cmd_verify(layout: ProjectLayout, args: VerifyArgs) -> anyhow::Result<()> {
    let report = match args.approach {
        Some(id) => {
            let catalog = Catalog::builtin();
            let approach = catalog
                .get(ApproachId(id))
                .ok_or(storeshot::StoreshotError::NotFound(ApproachId(id)))?;
            verify_approach_outputs(&layout, approach)?
        }
        None => verify_outputs(&layout)?,
    };

    print_conformance(&report);
    if !report.all_conform() {
        anyhow::bail!("{} files do not match a target raster", report.nonconforming());
    }
    Ok(())
}

fn print_conformance(report: &ConformanceReport) {
    if report.checks.is_empty() {
        println!("no PNG output to verify");
        return;
    }

    for check in &report.checks {
        match (&check.matched, &check.size, &check.error) {
            (Some(target), _, _) => {
                println!("  ✓ {} ({target})", check.path.display())
            }
            (None, Some((w, h)), _) => {
                println!("  ✗ {} ({w}x{h}, no target raster)", check.path.display())
            }
            (None, None, Some(err)) => {
                println!("  ✗ {} (unreadable: {err})", check.path.display())
            }
            (None, None, None) => println!("  ✗ {}", check.path.display()),
        }
    }
    println!(
        "{} conforming, {} non-conforming",
        report.conforming(),
        report.nonconforming()
    );
}
