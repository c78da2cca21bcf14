use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use eyre::{Context, Result};
use rand::SeedableRng;
use serde::Serialize;
use touchcube_core::{Color, Cube, SideId};
use touchcube_prefs::Preferences;
use touchcube_view::{CubeSimulation, RenderFrame};

use crate::{net, script};

/// Touchcube command-line interface
///
/// If no subcommand is specified, then the solved (or scrambled) cube is
/// printed.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to layer over the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print an unfolded net of the cube.
    Show {
        #[command(flatten)]
        start: StartArgs,
    },
    /// Feed a YAML script of frame inputs through the engine and print the
    /// resulting cube.
    Run {
        /// Script file to run, use '-' for stdin.
        #[arg(value_parser)]
        script: clio::Input,

        #[command(flatten)]
        start: StartArgs,

        /// Print the final frame as JSON instead of a net.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective preferences as YAML.
    Prefs,
}

/// Options for the starting state of the cube.
#[derive(clap::Args, Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct StartArgs {
    /// YAML file mapping each side to its nine colors.
    #[arg(long)]
    pub state: Option<PathBuf>,
    /// Number of random quarter turns to apply.
    #[arg(long, default_value_t = 0)]
    pub scramble: usize,
    /// Seed for the scramble.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}
impl StartArgs {
    fn build_cube(&self) -> Result<Cube> {
        let mut cube = match &self.state {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("error reading {}", path.display()))?;
                let colors: BTreeMap<SideId, Vec<Color>> =
                    serde_norway::from_str(&text).wrap_err("error parsing cube state")?;
                Cube::from_side_colors(&colors).wrap_err("invalid cube state")?
            }
            None => Cube::new(),
        };
        if self.scramble > 0 {
            let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(self.seed);
            let shifts = cube.scramble(&mut rng, self.scramble);
            log::info!("scrambled with seed {}: {shifts:?}", self.seed);
        }
        Ok(cube)
    }
}

/// Summary printed by `run --json`.
#[derive(Serialize, Debug)]
struct RunSummary {
    frames: usize,
    solved: bool,
    frame: RenderFrame,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());

    match args.subcommand.unwrap_or(Subcommand::Show {
        start: StartArgs::default(),
    }) {
        Subcommand::Show { start } => {
            println!("{}", net::format_net(&start.build_cube()?));
            Ok(())
        }

        Subcommand::Run {
            mut script,
            start,
            json,
        } => {
            let mut buffer = String::new();
            script
                .read_to_string(&mut buffer)
                .context("error reading script")?;
            let steps = script::parse(&buffer).context("error parsing script")?;

            let mut sim = CubeSimulation::from_cube(start.build_cube()?, &prefs);
            let mut frames = 0;
            for (i, step) in steps.iter().enumerate() {
                let input = step
                    .frame_input()
                    .wrap_err_with(|| format!("error in script step {i}"))?;
                for _ in 0..step.repeat {
                    sim.step(&input);
                    frames += 1;
                }
            }
            log::info!("ran {frames} frames; final state is {:?}", sim.machine().state());

            match json {
                true => write_json_output(&RunSummary {
                    frames,
                    solved: sim.cube().is_solved(),
                    frame: sim.render(),
                }),
                false => {
                    println!("{}", net::format_net(sim.cube()));
                    Ok(())
                }
            }
        }

        Subcommand::Prefs => {
            print!("{}", prefs.to_yaml()?);
            Ok(())
        }
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
