//! moodgrid CLI
//!
//! Operates on TOML scene files (canvas size + item list) and prints the new
//! scene to stdout, optionally with an ASCII preview of the board on stderr.
//!
//! Usage:
//!   moodgrid place <SCENE> --id new --width 4 --height 3
//!   moodgrid relayout <SCENE> --intensity 0.4 --seed 7
//!   moodgrid shuffle <SCENE> --intensity 0.8
//!   moodgrid shift <SCENE> --id a --edge right --delta 2
//!   moodgrid grow <SCENE> [--collect]
//!   moodgrid preview <SCENE>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use moodgrid::{
    grow_to_bounding_box, grow_to_edges, place, relayout, render::render_ascii, shift_edge,
    shuffle, BoardError, Edge, Item, ItemKind, Scene, StrategyPolicy,
};

#[derive(Parser)]
#[command(name = "moodgrid")]
#[command(about = "Grid moodboard layout and packing engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print an ASCII preview of the result to stderr
    #[arg(long, global = true)]
    ascii: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Place one new item without disturbing the rest
    Place {
        scene: PathBuf,
        /// Id for the new item
        #[arg(long)]
        id: String,
        #[arg(long)]
        width: i32,
        #[arg(long)]
        height: i32,
        #[arg(long, value_enum, default_value = "image")]
        kind: KindArg,
        #[arg(long, value_enum, default_value = "packed")]
        strategy: StrategyArg,
    },
    /// Recompute the mosaic while keeping item order
    Relayout {
        scene: PathBuf,
        #[arg(long, default_value_t = 0.4)]
        intensity: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Reshuffle the mosaic destructively
    Shuffle {
        scene: PathBuf,
        #[arg(long, default_value_t = 0.6)]
        intensity: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Drag one edge of an item, moving the shared boundary
    Shift {
        scene: PathBuf,
        #[arg(long)]
        id: String,
        #[arg(long, value_enum)]
        edge: EdgeArg,
        #[arg(long)]
        delta: i32,
    },
    /// Close gaps by growing items toward the canvas edges
    Grow {
        scene: PathBuf,
        /// Grow toward the items' bounding box instead of the canvas edges
        #[arg(long)]
        collect: bool,
    },
    /// Print the ASCII preview and exit
    Preview { scene: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Image,
    Video,
    Embed,
    Swatch,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Image => ItemKind::Image,
            KindArg::Video => ItemKind::Video,
            KindArg::Embed => ItemKind::Embed,
            KindArg::Swatch => ItemKind::Swatch,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Packed,
    Snake,
    Radial,
}

#[derive(Clone, Copy, ValueEnum)]
enum EdgeArg {
    Left,
    Right,
    Top,
    Bottom,
}

impl From<EdgeArg> for Edge {
    fn from(edge: EdgeArg) -> Self {
        match edge {
            EdgeArg::Left => Edge::Left,
            EdgeArg::Right => Edge::Right,
            EdgeArg::Top => Edge::Top,
            EdgeArg::Bottom => Edge::Bottom,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BoardError> {
    match &cli.command {
        Command::Place {
            scene,
            id,
            width,
            height,
            kind,
            strategy,
        } => {
            let scene = Scene::from_file(scene)?;
            let kind: ItemKind = (*kind).into();
            let policy = match (*strategy, kind) {
                (_, ItemKind::Swatch) => StrategyPolicy::StrictRadial(kind),
                (StrategyArg::Packed, _) => StrategyPolicy::Packed,
                (StrategyArg::Snake, _) => StrategyPolicy::Snake,
                (StrategyArg::Radial, _) => StrategyPolicy::RadialDense,
            };
            let (w, h) = (scene.canvas.width, scene.canvas.height);
            match place(&scene.items, *width, *height, w, h, policy) {
                Some(rect) => {
                    let mut items = scene.items.clone();
                    items.push(Item::new(id.clone(), kind, rect));
                    emit(cli, &scene.with_items(items))
                }
                None => {
                    eprintln!("no space for a {}x{} item", width, height);
                    emit(cli, &scene)
                }
            }
        }
        Command::Relayout {
            scene,
            intensity,
            seed,
        } => {
            let scene = Scene::from_file(scene)?;
            let mut rng = SmallRng::seed_from_u64(*seed);
            let items = relayout(
                &scene.items,
                scene.canvas.width,
                scene.canvas.height,
                *intensity,
                &mut rng,
            );
            emit(cli, &scene.with_items(items))
        }
        Command::Shuffle {
            scene,
            intensity,
            seed,
        } => {
            let scene = Scene::from_file(scene)?;
            let mut rng = SmallRng::seed_from_u64(*seed);
            let items = shuffle(
                &scene.items,
                scene.canvas.width,
                scene.canvas.height,
                *intensity,
                &mut rng,
            );
            emit(cli, &scene.with_items(items))
        }
        Command::Shift {
            scene,
            id,
            edge,
            delta,
        } => {
            let scene = Scene::from_file(scene)?;
            if !scene.items.iter().any(|i| &i.id == id) {
                return Err(BoardError::UnknownItem(id.clone()));
            }
            let outcome = shift_edge(
                &scene.items,
                id,
                (*edge).into(),
                *delta,
                scene.canvas.width,
                scene.canvas.height,
            );
            eprintln!("applied delta: {}", outcome.applied);
            emit(cli, &scene.with_items(outcome.items))
        }
        Command::Grow { scene, collect } => {
            let scene = Scene::from_file(scene)?;
            let (w, h) = (scene.canvas.width, scene.canvas.height);
            let items = if *collect {
                grow_to_bounding_box(&scene.items, w, h)
            } else {
                grow_to_edges(&scene.items, w, h)
            };
            emit(cli, &scene.with_items(items))
        }
        Command::Preview { scene } => {
            let scene = Scene::from_file(scene)?;
            println!(
                "{}",
                render_ascii(&scene.items, scene.canvas.width, scene.canvas.height)
            );
            Ok(())
        }
    }
}

fn emit(cli: &Cli, scene: &Scene) -> Result<(), BoardError> {
    if cli.ascii {
        eprintln!(
            "{}",
            render_ascii(&scene.items, scene.canvas.width, scene.canvas.height)
        );
    }
    println!("{}", scene.to_toml()?);
    Ok(())
}
