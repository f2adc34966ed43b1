use common::{log, log_error};
use eframe::egui;
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::Path;

pub const FALLBACK_FOOD_COLOR: [u8; 4] = [0xff, 0x00, 0x00, 0xff];

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    name: String,
}

impl Sprite {
    pub fn solid(name: &str, size: usize, rgba: [u8; 4]) -> Self {
        Sprite {
            pixels: rgba.repeat(size * size),
            width: size,
            height: size,
            name: name.to_string(),
        }
    }

    fn from_image(name: &str, image: &RgbaImage) -> Self {
        Sprite {
            pixels: image.as_raw().clone(),
            width: image.width() as usize,
            height: image.height() as usize,
            name: name.to_string(),
        }
    }

    #[cfg(test)]
    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * self.width + x) * 4;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }

    pub fn to_egui_texture(&self, ctx: &egui::Context) -> egui::TextureHandle {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [self.width, self.height],
            &self.pixels,
        );
        ctx.load_texture(self.name.as_str(), color_image, Default::default())
    }
}

/// Outcome of the one-time food texture load.
#[derive(Clone, Debug, PartialEq)]
pub enum FoodVisual {
    Loaded(Sprite),
    Fallback(Sprite),
}

impl FoodVisual {
    pub fn sprite(&self) -> &Sprite {
        match self {
            FoodVisual::Loaded(sprite) | FoodVisual::Fallback(sprite) => sprite,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FoodVisual::Fallback(_))
    }
}

/// Loads the food image scaled to one cell. Never fails: any error is logged
/// and replaced by a flat red square of the same footprint.
pub async fn load_food_visual(path: &Path, cell_size: u32) -> FoodVisual {
    match load_sprite(path, cell_size).await {
        Ok(sprite) => {
            log!("Loaded food texture from {}", path.display());
            FoodVisual::Loaded(sprite)
        }
        Err(e) => {
            log_error!("Failed to load texture: {}", e);
            FoodVisual::Fallback(Sprite::solid(
                "food_fallback",
                cell_size as usize,
                FALLBACK_FOOD_COLOR,
            ))
        }
    }
}

async fn load_sprite(path: &Path, cell_size: u32) -> Result<Sprite, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;

    let image = image::load_from_memory(&bytes)
        .map_err(|e| format!("cannot decode {}: {}", path.display(), e))?;

    let resized = image
        .resize_exact(cell_size, cell_size, FilterType::Triangle)
        .to_rgba8();

    Ok(Sprite::from_image("food", &resized))
}
