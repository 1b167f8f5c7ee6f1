use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use vle_app::{
    AppError, AppResult, ExportFormat, RunOverrides, RunResponse, SweepExport, TxyDiagram,
    XyDiagram, project_service, run_service, system_compile,
};
use vle_fluids::{parse_pressure_mmhg, parse_temperature_c};
use vle_project::schema::{FailurePolicyDef, VleConfig};

#[derive(Parser)]
#[command(name = "vle-cli")]
#[command(about = "vleflow CLI - T-x-y and x-y diagrams for ideal binary mixtures")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the liquid composition and print the T-x-y table
    Run {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Solve the bubble point for one liquid composition
    Bubble {
        /// Liquid mole fraction of the light component
        x: f64,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Write sweep data as CSV or JSON
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Print diagram series as JSON for a renderer
    Diagram {
        #[arg(long, value_enum, default_value_t = DiagramKind::Txy)]
        kind: DiagramKind,
        #[command(flatten)]
        run: RunArgs,
    },
    /// List built-in components
    Components,
    /// Write the default configuration file
    InitConfig {
        /// Destination path, .yaml or .json (optional, defaults to YAML on stdout)
        path: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// System pressure, e.g. "760 mmHg", "1 atm", "101.325 kPa" (bare number = mmHg)
    #[arg(long)]
    pressure: Option<String>,
    /// Number of grid points from x = 0 to x = 1
    #[arg(long)]
    points: Option<usize>,
    /// Newton starting temperature, e.g. "60 C", "333.15 K" (bare number = °C)
    #[arg(long)]
    initial_guess: Option<String>,
    /// What to do when a grid point fails
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Seed each point with the previous converged temperature
    #[arg(long, overrides_with = "no_warm_start")]
    warm_start: bool,
    /// Start every point from the configured initial guess
    #[arg(long, overrides_with = "warm_start")]
    no_warm_start: bool,
    /// Solve grid points in parallel
    #[arg(long, overrides_with = "no_parallel")]
    parallel: bool,
    /// Solve grid points one after another
    #[arg(long, overrides_with = "parallel")]
    no_parallel: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    FailFast,
    Skip,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum DiagramKind {
    Txy,
    Xy,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { run } => cmd_run(&run),
        Commands::Bubble { x, run } => cmd_bubble(x, &run),
        Commands::Export {
            format,
            output,
            run,
        } => cmd_export(format, output.as_deref(), &run),
        Commands::Diagram { kind, run } => cmd_diagram(kind, &run),
        Commands::Components => cmd_components(),
        Commands::InitConfig { path } => cmd_init_config(path.as_deref()),
    }
}

fn resolve_config(args: &RunArgs) -> AppResult<VleConfig> {
    let config = project_service::load_config(args.config.as_deref())?;
    let overrides = RunOverrides {
        pressure_mmhg: args
            .pressure
            .as_deref()
            .map(parse_pressure_mmhg)
            .transpose()?,
        points: args.points,
        initial_guess_c: args
            .initial_guess
            .as_deref()
            .map(parse_temperature_c)
            .transpose()?,
        policy: args.policy.map(|p| match p {
            PolicyArg::FailFast => FailurePolicyDef::FailFast,
            PolicyArg::Skip => FailurePolicyDef::SkipAndReport,
        }),
        warm_start: switch(args.warm_start, args.no_warm_start),
        parallel: switch(args.parallel, args.no_parallel),
    };
    let config = overrides.apply(config)?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// `None` when neither `--flag` nor `--no-flag` was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn sweep(args: &RunArgs) -> AppResult<(RunResponse, vle_fluids::BinarySystem)> {
    let config = resolve_config(args)?;
    let response = run_service::run_sweep(&config)?;
    let system = system_compile::build_system(&response.config.system)?;
    Ok((response, system))
}

fn cmd_run(args: &RunArgs) -> AppResult<()> {
    let (response, system) = sweep(args)?;
    let result = &response.result;

    println!(
        "{} / {} at {} mmHg",
        system.light().name(),
        system.heavy().name(),
        system.pressure_mmhg()
    );
    println!("{:>8}  {:>10}  {:>8}", "x", "T (°C)", "y");
    for p in result.points() {
        println!("{:>8.4}  {:>10.4}  {:>8.4}", p.x, p.t_c, p.y);
    }

    if result.num_failed() > 0 {
        println!("\nSkipped points:");
        for f in result.failures() {
            println!("  [{}] x = {:.4}: {}", f.index, f.x, f.error);
        }
    }

    let timing = &response.timing;
    println!("\nTiming summary:");
    println!("  Build:      {:.3}s", timing.build_time_s);
    println!("  Solve:      {:.3}s", timing.solve_time_s);
    println!("  Total:      {:.3}s", timing.total_time_s);
    println!("  Iterations: {}", timing.total_iterations);
    Ok(())
}

fn cmd_bubble(x: f64, args: &RunArgs) -> AppResult<()> {
    let config = resolve_config(args)?;
    let sol = run_service::solve_point(&config, x)?;
    let p = sol.point;
    println!("x          = {:.6}", p.x);
    println!("T          = {:.6} °C", p.t_c);
    println!("y          = {:.6}", p.y);
    println!("alpha      = {:.6}", p.relative_volatility());
    println!("iterations = {}", sol.iterations);
    println!("residual   = {:.3e} mmHg", sol.residual);
    Ok(())
}

fn cmd_export(format: FormatArg, output: Option<&Path>, args: &RunArgs) -> AppResult<()> {
    let (response, system) = sweep(args)?;
    let export = SweepExport::new(&system, &response.result);
    let content = export.render(match format {
        FormatArg::Csv => ExportFormat::Csv,
        FormatArg::Json => ExportFormat::Json,
    })?;

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, content).map_err(|e| AppError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!(
            "✓ Exported {} points to {}",
            export.points.len(),
            path.display()
        );
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_diagram(kind: DiagramKind, args: &RunArgs) -> AppResult<()> {
    let (response, system) = sweep(args)?;
    let json = match kind {
        DiagramKind::Txy => {
            serde_json::to_string_pretty(&TxyDiagram::from_sweep(&system, &response.result))?
        }
        DiagramKind::Xy => {
            serde_json::to_string_pretty(&XyDiagram::from_sweep(&system, &response.result))?
        }
    };
    println!("{}", json);
    Ok(())
}

fn cmd_components() -> AppResult<()> {
    println!("Built-in components:");
    for c in project_service::list_components() {
        println!(
            "  {} ({}) A = {}, B = {}, C = {}  aliases: {}",
            c.id,
            c.name,
            c.a,
            c.b,
            c.c,
            c.aliases.join(", ")
        );
    }
    Ok(())
}

fn cmd_init_config(path: Option<&Path>) -> AppResult<()> {
    let config = project_service::explicit_default_config()?;
    if let Some(path) = path {
        project_service::save_config(path, &config)?;
        println!("✓ Wrote default configuration to {}", path.display());
    } else {
        print!("{}", project_service::config_to_yaml(&config)?);
    }
    Ok(())
}
