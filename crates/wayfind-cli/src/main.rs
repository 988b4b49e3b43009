//! wayfind CLI - grid path queries over ASCII maps.
//!
//! Single binary that provides:
//! - `wayfind path` - one path query, text or JSON output
//! - `wayfind walk` - simulate walking the path tick by tick

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use wayfind_core::{TickContext, WorldMut, WorldView};
use wayfind_nav::{
    MoveDecision, Mover, MoverConfig, MoverState, NavGrid, NavWorldMut, NavWorldView, Navigator,
    Vec2,
};

#[derive(Parser)]
#[command(name = "wayfind")]
#[command(about = "Grid pathfinding playground", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a path between two points on a map
    Path {
        /// ASCII map file ('#' blocked, '.' walkable)
        #[arg(short, long)]
        map: PathBuf,

        /// Start position, as "x,y" in world units
        #[arg(long, value_parser = parse_point)]
        from: Vec2,

        /// Goal position, as "x,y" in world units
        #[arg(long, value_parser = parse_point)]
        to: Vec2,

        /// Emit the path as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate walking the path one cell per step interval
    Walk {
        /// ASCII map file ('#' blocked, '.' walkable)
        #[arg(short, long)]
        map: PathBuf,

        /// Start position, as "x,y" in world units
        #[arg(long, value_parser = parse_point)]
        from: Vec2,

        /// Goal position, as "x,y" in world units
        #[arg(long, value_parser = parse_point)]
        to: Vec2,

        /// Seconds between cell steps
        #[arg(long, default_value_t = 0.25)]
        step_interval: f32,
    },
}

struct SimWorld {
    grid: NavGrid,
    pos: Vec2,
}

impl WorldView for SimWorld {
    type Agent = u32;
}

impl WorldMut for SimWorld {}

impl NavWorldView for SimWorld {
    fn position(&self, _agent: u32) -> Option<Vec2> {
        Some(self.pos)
    }

    fn navigator(&self) -> &dyn Navigator {
        &self.grid
    }
}

impl NavWorldMut for SimWorld {
    fn set_position(&mut self, _agent: u32, position: Vec2) {
        self.pos = position;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Path {
            map,
            from,
            to,
            json,
        } => run_path(&map, from, to, json),
        Commands::Walk {
            map,
            from,
            to,
            step_interval,
        } => run_walk(&map, from, to, step_interval),
    }
}

fn run_path(map: &Path, from: Vec2, to: Vec2, json: bool) -> Result<()> {
    let grid = load_map(map)?;
    let path = grid.find_path(from, to)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    for p in path.points() {
        println!("({:.1}, {:.1})", p.x, p.y);
    }
    println!("{} steps", path.len());
    Ok(())
}

fn run_walk(map: &Path, from: Vec2, to: Vec2, step_interval: f32) -> Result<()> {
    let grid = load_map(map)?;
    let mut world = SimWorld { grid, pos: from };
    let mut mover = Mover::new(MoverConfig { step_interval });

    let agent = 0u32;
    if mover.request_move(&world, agent, to)? == MoveDecision::AlreadyThere {
        println!("already there");
        return Ok(());
    }

    let mut tick = 0u64;
    while mover.state() == MoverState::Moving {
        let ctx = TickContext::new(tick, step_interval);
        mover.tick(&ctx, agent, &mut world);
        println!("tick {tick}: ({:.1}, {:.1})", world.pos.x, world.pos.y);

        tick += 1;
        if tick > 100_000 {
            bail!("walk did not converge");
        }
    }

    println!("arrived in {tick} ticks");
    Ok(())
}

fn load_map(path: &Path) -> Result<NavGrid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading map {}", path.display()))?;
    let grid = grid_from_ascii(&text)?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        "map loaded"
    );
    Ok(grid)
}

fn grid_from_ascii(text: &str) -> Result<NavGrid> {
    let rows: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if rows.is_empty() {
        bail!("map is empty");
    }

    let width = rows[0].chars().count();
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            bail!("map row {y} has {} cells, expected {width}", row.chars().count());
        }
    }

    let mut grid = NavGrid::new(width as u32, rows.len() as u32, 1.0);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '#' => grid.set_blocked(x as i32, y as i32, true),
                '.' => {}
                other => bail!("unexpected map character {other:?} at {x},{y}"),
            }
        }
    }
    Ok(grid)
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate {x:?}"))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate {y:?}"))?;
    Ok(Vec2::new(x, y))
}
