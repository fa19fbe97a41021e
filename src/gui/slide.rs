use raylib::prelude::*;

use crate::item::Item;
use crate::layout::{Rect, fit_within};

pub struct Slide {
    pub item: Item,
    image: Texture2D,
}

impl std::fmt::Debug for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slide")
            .field("item", &self.item)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl Slide {
    pub fn new(item: Item, image: Texture2D) -> Self {
        Self { item, image }
    }

    pub fn media_size(&self) -> (f32, f32) {
        (self.image.width() as f32, self.image.height() as f32)
    }

    /// Draws the whole texture letterboxed inside `bounds`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rect) {
        let (tex_width, tex_height) = self.media_size();
        let dest = fit_within(tex_width, tex_height, bounds);
        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(dest.x, dest.y, dest.width, dest.height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
