//! In-memory 144x168 draw target for rendering tests.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PointsIter, Rectangle},
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const PIXELS: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

pub struct TestCanvas {
    pixels: [bool; PIXELS],
}

impl TestCanvas {
    pub const fn new() -> Self { Self { pixels: [false; PIXELS] } }

    pub fn is_lit(
        &self,
        point: Point,
    ) -> bool {
        Self::index(point).is_some_and(|i| self.pixels[i])
    }

    pub fn lit_count(&self) -> usize { self.pixels.iter().filter(|p| **p).count() }

    /// Lit pixels inside `area`.
    pub fn lit_inside(
        &self,
        area: &Rectangle,
    ) -> usize {
        area.points().filter(|p| self.is_lit(*p)).count()
    }

    pub fn lit_outside(
        &self,
        area: &Rectangle,
    ) -> usize {
        self.lit_count() - self.lit_inside(area)
    }

    fn index(point: Point) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x < 0 || y < 0 || x >= SCREEN_WIDTH as i32 || y >= SCREEN_HEIGHT as i32 {
            return None;
        }
        Some(y as usize * SCREEN_WIDTH as usize + x as usize)
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for TestCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point) {
                self.pixels[i] = color.is_on();
            }
        }
        Ok(())
    }
}
