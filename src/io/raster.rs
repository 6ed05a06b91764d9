//! Sprite sheet loading and map rasterization

use crate::catalog::tileset::{SpriteCoord, TileCatalog};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::solution::Solution;
use image::{ImageFormat, RgbaImage, imageops};
use std::path::Path;

/// Grid of equally sized square sprites
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    image: RgbaImage,
    tile_size: u32,
}

impl SpriteSheet {
    /// Read a sheet from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded, or `tile_size` is zero
    pub fn load(path: &Path, tile_size: u32) -> Result<Self> {
        let image = image::open(path).map_err(|source| GenerationError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_image(image.to_rgba8(), tile_size)
    }

    /// Wrap an in-memory sheet
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is zero
    pub fn from_image(image: RgbaImage, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter("tile_size", &tile_size, &"must be positive"));
        }
        Ok(Self { image, tile_size })
    }

    /// Edge length of one sprite in pixels
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Sheet size in pixels as `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Copy out the sprite at `coord`
    ///
    /// # Errors
    ///
    /// Returns an error if the sprite does not lie fully inside the sheet
    pub fn sprite(&self, coord: SpriteCoord) -> Result<RgbaImage> {
        let (width, height) = self.dimensions();
        let out_of_bounds = || GenerationError::SpriteOutOfBounds {
            sprite: (coord.column, coord.row),
            sheet: (width, height),
            tile_size: self.tile_size,
        };

        let left = coord.column.checked_mul(self.tile_size).ok_or_else(out_of_bounds)?;
        let top = coord.row.checked_mul(self.tile_size).ok_or_else(out_of_bounds)?;
        let fits = left
            .checked_add(self.tile_size)
            .is_some_and(|right| right <= width)
            && top
                .checked_add(self.tile_size)
                .is_some_and(|bottom| bottom <= height);
        if !fits {
            return Err(out_of_bounds());
        }

        Ok(imageops::crop_imm(&self.image, left, top, self.tile_size, self.tile_size).to_image())
    }
}

fn canvas_extent(cells: usize, tile_size: u32, parameter: &'static str) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(tile_size))
        .ok_or_else(|| invalid_parameter(parameter, &cells, &"output image would be too large"))
}

/// Paint every cell's sprite onto a canvas covering the whole grid
///
/// Cells are visited in row-major order; each sprite is extracted once.
///
/// # Errors
///
/// Returns an error if:
/// - A solved value has no catalog entry
/// - A sprite lies outside the sheet
/// - The canvas would exceed `u32` pixel dimensions
pub fn render_map(
    solution: &Solution,
    catalog: &TileCatalog,
    sheet: &SpriteSheet,
) -> Result<RgbaImage> {
    let tile_size = sheet.tile_size();
    let width = canvas_extent(solution.width(), tile_size, "width")?;
    let height = canvas_extent(solution.height(), tile_size, "height")?;
    let mut canvas = RgbaImage::new(width, height);

    let mut sprites: Vec<Option<RgbaImage>> = vec![None; catalog.len()];

    for (x, y, value) in solution.cells() {
        let tile = catalog.tile(value).ok_or(GenerationError::InvalidTileIndex {
            index: value,
            max_tiles: catalog.len(),
        })?;
        let slot = sprites
            .get_mut(value)
            .ok_or(GenerationError::InvalidTileIndex {
                index: value,
                max_tiles: catalog.len(),
            })?;
        if slot.is_none() {
            *slot = Some(sheet.sprite(tile.sprite)?);
        }

        if let Some(sprite) = slot.as_ref() {
            let left = x as i64 * i64::from(tile_size);
            let top = y as i64 * i64::from(tile_size);
            imageops::replace(&mut canvas, sprite, left, top);
        }
    }

    Ok(canvas)
}

/// Save a rendered map as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_map_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
