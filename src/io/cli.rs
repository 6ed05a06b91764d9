//! Command-line interface for generating one map per invocation

use crate::algorithm::pipeline::{GeneratorConfig, audit, build_model, solve_model};
use crate::catalog::edges::edge_catalog;
use crate::catalog::file::load_catalog;
use crate::catalog::terrain::terrain_catalog;
use crate::catalog::tileset::TileCatalog;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_TILE_SHEET, DEFAULT_TILE_SIZE, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::SolveProgress;
use crate::io::raster::{SpriteSheet, export_map_png, render_map};
use crate::solver::sat::SatBackend;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

/// Built-in tile catalogs
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogChoice {
    /// Rock, water and grass where rock never touches water
    Terrain,
    /// 41 edge-matched transition tiles
    Edges,
}

#[derive(Parser, Debug)]
#[command(name = "terrasolve")]
#[command(
    author,
    version,
    about = "Generate tile maps with a SAT solver and render them from a sprite sheet"
)]
/// Command-line arguments for the map generator
pub struct Cli {
    /// Built-in catalog to generate with
    #[arg(short, long, value_enum, default_value_t = CatalogChoice::Edges)]
    pub catalog: CatalogChoice,

    /// TOML catalog file, overrides --catalog
    #[arg(long, value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Map width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed for the random search hints (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Sprite sheet to draw tiles from
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_TILE_SHEET)]
    pub tiles: PathBuf,

    /// Output PNG path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Sprite edge length in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Suppress the spinner and all logs but errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if the solver spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator settings taken from the arguments
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
        }
    }
}

/// Runs the full pipeline for one set of arguments
pub struct MapRunner {
    cli: Cli,
}

impl MapRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments the runner was built with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Catalog selected by `--catalog-file` or `--catalog`
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or is invalid
    pub fn load_catalog(&self) -> Result<TileCatalog> {
        match (&self.cli.catalog_file, self.cli.catalog) {
            (Some(path), _) => load_catalog(path),
            (None, CatalogChoice::Terrain) => terrain_catalog(),
            (None, CatalogChoice::Edges) => edge_catalog(),
        }
    }

    /// Reject arguments that would fail only after solving
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions or tile size are out of range
    pub fn validate(&self) -> Result<()> {
        self.cli.generator_config().validate()?;
        if self.cli.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.cli.tile_size,
                &"must be positive",
            ));
        }
        Ok(())
    }

    /// Generate, render and write one map
    ///
    /// Nothing is written unless the solver succeeds and the sprite sheet loads.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Argument validation fails
    /// - The catalog cannot be loaded
    /// - The model is infeasible or the solver gives up
    /// - The sprite sheet cannot be read or the output cannot be written
    pub fn run(&self) -> Result<()> {
        self.validate()?;
        let catalog = self.load_catalog()?;
        let prepared = build_model(&catalog, &self.cli.generator_config())?;

        let started = Instant::now();
        let progress = SolveProgress::start(self.cli.should_show_progress(), "Solving");
        let mut backend = SatBackend::new();
        let solved = solve_model(&prepared, &mut backend);
        if solved.is_ok() {
            progress.finish("Solved");
        } else {
            progress.clear();
        }
        let solution = solved?;
        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "found assignment"
        );
        audit(&solution, &catalog, prepared.bounds);

        let sheet = SpriteSheet::load(&self.cli.tiles, self.cli.tile_size)?;
        let image = render_map(&solution, &catalog, &sheet)?;
        export_map_png(&image, &self.cli.output)?;

        tracing::info!(
            output = %self.cli.output.display(),
            width = image.width(),
            height = image.height(),
            "wrote map"
        );
        Ok(())
    }
}
