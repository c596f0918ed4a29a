//! CirclePack CLI

use circlepack_cli::{PackReport, TableParser};
use circlepack_core::{Config, Error, Solver, Strategy};
use circlepack_solvers::CirclePacker;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "circlepack")]
#[command(about = "Minimal enclosing-circle packing for quantity/diameter tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a table and describe it without packing
    Inspect {
        /// Path to the CSV or JSON table
        file: PathBuf,
    },

    /// Pack a table with one strategy
    Run {
        /// Path to the CSV or JSON table
        file: PathBuf,

        /// Strategy to use
        #[arg(short, long, value_enum, default_value = "greedy")]
        strategy: StrategyArg,

        /// Bisection steps for the binary-search strategy
        #[arg(long, default_value = "30")]
        search_iterations: u32,

        /// Relaxation rounds per trial radius
        #[arg(long, default_value = "5000")]
        max_iterations: u32,

        /// Relaxation convergence tolerance
        #[arg(long, default_value = "1e-5")]
        tolerance: f64,

        /// Angular scan step in degrees for the greedy strategy
        #[arg(long, default_value = "1")]
        angle_step: u32,

        /// RNG seed for reproducible relaxation runs
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for the report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the per-circle table (CSV)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Run both strategies and compare container diameters
    Compare {
        /// Path to the CSV or JSON table
        file: PathBuf,

        /// RNG seed for the binary-search strategy
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Greedy angular placement (deterministic)
    Greedy,
    /// Binary search + relaxation (stochastic)
    Binary,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Greedy => Strategy::GreedyAngular,
            StrategyArg::Binary => Strategy::BinarySearch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { file } => {
            let loaded = TableParser::new().parse_file(&file)?;
            let info = loaded.dataset.info();

            println!("Dataset:       {}", info.name);
            println!("Item rows:     {}", info.item_types);
            println!("Total circles: {}", info.total_circles);
            println!("Diameters:     {} .. {}", info.min_diameter, info.max_diameter);

            if !loaded.issues.is_empty() {
                println!("\nSkipped rows:");
                for issue in &loaded.issues {
                    println!("  line {}: {}", issue.line, issue.reason);
                }
            }
        }

        Commands::Run {
            file,
            strategy,
            search_iterations,
            max_iterations,
            tolerance,
            angle_step,
            seed,
            output,
            csv,
        } => {
            let loaded = TableParser::new().parse_file(&file)?;
            for issue in &loaded.issues {
                eprintln!("warning: skipped line {}: {}", issue.line, issue.reason);
            }

            let mut config = Config::default()
                .with_strategy(strategy.into())
                .with_search_iterations(search_iterations)
                .with_max_iterations(max_iterations)
                .with_tolerance(tolerance)
                .with_angle_step(angle_step);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let packer = CirclePacker::new(config);
            let result = match packer.solve(&loaded.dataset.to_geometries()) {
                Ok(result) => result,
                Err(Error::Infeasible { trials }) => {
                    eprintln!(
                        "No feasible layout found within {} trial radii; \
                         try more search iterations or a looser tolerance",
                        trials
                    );
                    std::process::exit(2);
                }
                Err(err) => return Err(err.into()),
            };

            let labels = loaded.dataset.instance_labels();
            let report = PackReport::new(loaded.dataset.name.clone(), &labels, &result);
            report.print_summary();

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("\nReport saved to: {}", path.display());
            }

            if let Some(path) = csv {
                report.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::Compare { file, seed } => {
            let loaded = TableParser::new().parse_file(&file)?;
            let geometries = loaded.dataset.to_geometries();
            let labels = loaded.dataset.instance_labels();

            println!("Strategy comparison for '{}':", loaded.dataset.name);
            println!("{:-<60}", "");

            for strategy in [Strategy::GreedyAngular, Strategy::BinarySearch] {
                let mut config = Config::default().with_strategy(strategy);
                if let Some(seed) = seed {
                    config = config.with_seed(seed);
                }

                match CirclePacker::new(config).solve(&geometries) {
                    Ok(result) => {
                        let report =
                            PackReport::new(loaded.dataset.name.clone(), &labels, &result);
                        println!(
                            "  {:<16} diameter={:<10.3} density={:.1}% time={}ms",
                            report.strategy,
                            report.container_diameter,
                            report.density * 100.0,
                            report.computation_time_ms
                        );
                    }
                    Err(Error::Infeasible { trials }) => {
                        println!(
                            "  {:<16} infeasible within {} trial radii",
                            format!("{:?}", strategy),
                            trials
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }

    Ok(())
}
