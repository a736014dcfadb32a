use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollvine", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and compile a scene config, reporting any errors.
    Validate(ValidateArgs),
    /// Sweep progress from 0 to 1 and print one render state per tick as a
    /// JSON line.
    Ticks(TicksArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TicksArgs {
    /// Input scene config JSON. Defaults to the built-in skill tree.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of ticks across the sweep (inclusive of both endpoints).
    #[arg(long, default_value_t = 121)]
    steps: u32,

    /// Pretty-print each state instead of one line per tick.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Ticks(args) => cmd_ticks(args),
    }
}

fn read_config_json(path: &Path) -> anyhow::Result<scrollvine::TreeConfig> {
    let f = File::open(path).with_context(|| format!("open scene config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: scrollvine::TreeConfig =
        serde_json::from_reader(r).with_context(|| "parse scene config JSON")?;
    Ok(config)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let config = read_config_json(&args.in_path)?;
    let plan = scrollvine::compile(&config)?;

    let unresolved = plan.segments().filter(|s| s.length <= 0.0).count();
    eprintln!(
        "ok: {} segments ({} unresolved), {} nodes, {} leaves",
        plan.segments().count(),
        unresolved,
        plan.nodes.len(),
        plan.leaves.len()
    );
    for category in [
        scrollvine::SkillCategory::Frontend,
        scrollvine::SkillCategory::Design,
        scrollvine::SkillCategory::Backend,
        scrollvine::SkillCategory::Tools,
    ] {
        let count = plan.nodes.iter().filter(|n| n.category == category).count();
        if count > 0 {
            eprintln!("  {}: {} skills", category.legend_label(), count);
        }
    }
    Ok(())
}

fn cmd_ticks(args: TicksArgs) -> anyhow::Result<()> {
    if args.steps < 2 {
        anyhow::bail!("--steps must be at least 2");
    }

    let config = match &args.in_path {
        Some(path) => read_config_json(path)?,
        None => scrollvine::skill_tree()?,
    };
    let plan = scrollvine::compile(&config)?;

    // Drive the sweep through a real scroll context so the printed states
    // carry the velocity a steady scroll would produce.
    let extent = 1000.0;
    let mut ctx = scrollvine::ScrollContext::new(scrollvine::PinnedRegion::new(extent)?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for step in 0..args.steps {
        let offset = extent * f64::from(step) / f64::from(args.steps - 1);
        let sample = ctx.sample(offset);
        let state = scrollvine::Evaluator::eval_tick(&plan, sample);
        let line = if args.pretty {
            serde_json::to_string_pretty(&state).context("serialize render state")?
        } else {
            serde_json::to_string(&state).context("serialize render state")?
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}
