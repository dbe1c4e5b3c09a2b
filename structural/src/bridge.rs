//! Pattern 2: Bridge, renderer-style
//!
//! The `Circle` abstraction holds a boxed renderer implementor. Drawing
//! goes through the bridge, so renderers vary without touching the shape.

pub trait Renderer {
    fn render_circle(&self, radius: f64) -> String;
}

pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("drawing a circle of radius {radius} with vectors")
    }
}

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("rasterizing a circle of radius {radius} into pixels")
    }
}

pub struct Circle {
    radius: f64,
    renderer: Box<dyn Renderer>,
}

impl Circle {
    pub fn new(radius: f64, renderer: Box<dyn Renderer>) -> Self {
        Circle { radius, renderer }
    }

    pub fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }

    pub fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_abstraction_draws_through_either_renderer() {
        let vector = Circle::new(5.0, Box::new(VectorRenderer));
        let raster = Circle::new(5.0, Box::new(RasterRenderer));

        assert_eq!(vector.draw(), "drawing a circle of radius 5 with vectors");
        assert_eq!(raster.draw(), "rasterizing a circle of radius 5 into pixels");
    }

    #[test]
    fn resizing_changes_the_abstraction_not_the_renderer() {
        let mut circle = Circle::new(2.0, Box::new(VectorRenderer));
        circle.resize(3.0);
        assert_eq!(circle.draw(), "drawing a circle of radius 6 with vectors");
    }

    #[test]
    fn drawing_twice_replays_the_same_line() {
        let circle = Circle::new(5.0, Box::new(RasterRenderer));
        assert_eq!(circle.draw(), circle.draw());
    }
}
