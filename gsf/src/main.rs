use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cylpack::entities::Instance;
use cylpack::eval::{PLACEMENT_PENALTY, place, repair};
use cylpack::io::export::{export_instance, export_solution};
use cylpack::io::import::import_instance;
use cylpack::io::svg::layout_to_svg;
use gsf::config::GSFConfig;
use gsf::io::cli::{Cli, Strategy};
use gsf::io::output::SolveOutput;
use gsf::opt::ga::GeneticOptimizer;
use gsf::opt::{greedy, random_restart};
use gsf::{instances, io};
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GSFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed GSFConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let instances = match &args.input_file {
        Some(input_file) => {
            let ext_instance = io::read_instance(input_file)?;
            vec![import_instance(&ext_instance)?]
        }
        None => {
            warn!("[MAIN] No instance file provided, solving the built-in reference set");
            instances::reference_instances()
        }
    };

    let strategies = match args.strategy {
        Strategy::All => vec![Strategy::Genetic, Strategy::Greedy, Strategy::RandomRestart],
        strategy => vec![strategy],
    };

    for instance in &instances {
        info!(
            "[MAIN] instance '{}': {} cylinders, total weight {:.1}",
            instance.name,
            instance.cylinders.len(),
            instance.total_weight()
        );
        for &strategy in &strategies {
            solve_instance(instance, strategy, config, &args.solution_folder)?;
        }
    }

    Ok(())
}

fn solve_instance(
    instance: &Instance,
    strategy: Strategy,
    config: GSFConfig,
    solution_folder: &Path,
) -> Result<()> {
    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let start = Instant::now();
    let result = match strategy {
        Strategy::Genetic => GeneticOptimizer::new(instance, config, rng).solve(),
        Strategy::Greedy => greedy::solve(instance, &config),
        Strategy::RandomRestart => {
            let mut rng = rng;
            random_restart::solve(instance, &config, &mut rng)
        }
        Strategy::All => unreachable!("expanded into concrete strategies before solving"),
    };
    let run_time_ms = start.elapsed().as_millis() as u64;

    info!(
        "[MAIN] {} on '{}': fitness {}",
        strategy.label(),
        instance.name,
        result.best_fitness
    );

    let Some(order) = result.best_order else {
        warn!(
            "[MAIN] {} found no placeable order for '{}', nothing to export",
            strategy.label(),
            instance.name
        );
        return Ok(());
    };
    if result.best_fitness >= PLACEMENT_PENALTY {
        warn!(
            "[MAIN] best order of {} for '{}' cannot be placed, nothing to export",
            strategy.label(),
            instance.name
        );
        return Ok(());
    }

    // rebuild the layout of the best order for export
    let mut layout = place(&order, &instance.cylinders, &instance.container)
        .expect("orders scored below the placement penalty are placeable");
    repair(&mut layout);

    let solution = export_solution(instance, &order, &layout, result.best_fitness, run_time_ms);
    let output = SolveOutput {
        instance: export_instance(instance),
        strategy: strategy.label().to_string(),
        solution,
        config,
    };

    let stem = format!("{}_{}", instance.name, strategy.label());
    io::write_json(&output, &solution_folder.join(format!("sol_{stem}.json")))?;

    let svg = layout_to_svg(
        &layout,
        config.svg_draw_options,
        &format!("{} | fitness: {}", instance.name, result.best_fitness),
    );
    io::write_svg(&svg, &solution_folder.join(format!("sol_{stem}.svg")))?;

    Ok(())
}
