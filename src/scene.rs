use raylib::prelude::*;
use crate::constants::*;
use crate::layout::{cloud_rect, contain, parachute_pivot, parachute_rect};
use crate::splash::{Layer, SplashAnimation};

fn sky_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::new(r, g, b, 255)
}

/// Draws the splash animation with the loaded sprites.
pub struct SplashScene {
    pub animation: SplashAnimation,
    parachute: Texture2D,
    cloud: Texture2D,
}

impl SplashScene {
    pub fn new(animation: SplashAnimation, parachute: Texture2D, cloud: Texture2D) -> Self {
        Self { animation, parachute, cloud }
    }

    pub fn update(&mut self, dt: f32) {
        let finished = self.animation.update(dt);
        if !finished.is_empty() {
            log::trace!("clouds {:?} looped", finished);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let viewport = self.animation.viewport();

        d.draw_rectangle_gradient_v(
            0,
            0,
            viewport.width as i32,
            viewport.height as i32,
            sky_color(SKY_TOP),
            sky_color(SKY_BOTTOM),
        );

        for layer in self.animation.layers() {
            match layer {
                Layer::Cloud(index) => self.draw_cloud(d, index),
                Layer::Parachute => self.draw_parachute(d),
            }
        }
    }

    fn draw_cloud(&self, d: &mut RaylibDrawHandle, index: usize) {
        let Some(cloud) = self.animation.clouds.get(index) else {
            return;
        };

        let bounds = cloud_rect(
            self.animation.viewport(),
            cloud.size(),
            cloud.vertical_offset(),
            cloud.horizontal_offset(),
        );
        let dest = contain(self.cloud.width() as f32, self.cloud.height() as f32, bounds);

        d.draw_texture_pro(
            &self.cloud,
            Rectangle::new(0.0, 0.0, self.cloud.width() as f32, self.cloud.height() as f32),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    fn draw_parachute(&self, d: &mut RaylibDrawHandle) {
        let viewport = self.animation.viewport();
        let pivot = parachute_pivot(viewport);
        let sprite = contain(
            self.parachute.width() as f32,
            self.parachute.height() as f32,
            parachute_rect(viewport),
        );

        // Dest rect is anchored at the pivot; origin is the pivot relative to the sprite's top-left
        let origin = Vector2::new(pivot.x - sprite.x, pivot.y - sprite.y);

        d.draw_texture_pro(
            &self.parachute,
            Rectangle::new(0.0, 0.0, self.parachute.width() as f32, self.parachute.height() as f32),
            Rectangle::new(pivot.x, pivot.y, sprite.width, sprite.height),
            origin,
            self.animation.parachute.angle(),
            Color::WHITE,
        );
    }
}
