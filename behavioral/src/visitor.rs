//! Pattern 10: Visitor
//!
//! The element set is a closed enum; the visitor trait carries one method
//! per kind plus a provided `visit` that dispatches by matching on the
//! tag. New operations are new visitors; the elements never change.

pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Triangle { base: f64, height: f64 },
}

pub trait ShapeVisitor {
    type Output;

    fn visit(&mut self, shape: &Shape) -> Self::Output {
        match shape {
            Shape::Circle { radius } => self.visit_circle(*radius),
            Shape::Rectangle { width, height } => self.visit_rectangle(*width, *height),
            Shape::Triangle { base, height } => self.visit_triangle(*base, *height),
        }
    }

    fn visit_circle(&mut self, radius: f64) -> Self::Output;
    fn visit_rectangle(&mut self, width: f64, height: f64) -> Self::Output;
    fn visit_triangle(&mut self, base: f64, height: f64) -> Self::Output;
}

pub struct AreaCalculator;

impl ShapeVisitor for AreaCalculator {
    type Output = f64;

    fn visit_circle(&mut self, radius: f64) -> f64 {
        std::f64::consts::PI * radius * radius
    }

    fn visit_rectangle(&mut self, width: f64, height: f64) -> f64 {
        width * height
    }

    fn visit_triangle(&mut self, base: f64, height: f64) -> f64 {
        base * height / 2.0
    }
}

pub struct ShapeNamer;

impl ShapeVisitor for ShapeNamer {
    type Output = String;

    fn visit_circle(&mut self, radius: f64) -> String {
        format!("circle of radius {radius}")
    }

    fn visit_rectangle(&mut self, width: f64, height: f64) -> String {
        format!("{width}x{height} rectangle")
    }

    fn visit_triangle(&mut self, base: f64, height: f64) -> String {
        format!("triangle with base {base} and height {height}")
    }
}

pub fn total_area(shapes: &[Shape]) -> f64 {
    let mut calculator = AreaCalculator;
    shapes.iter().map(|shape| calculator.visit(shape)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shapes() -> Vec<Shape> {
        vec![
            Shape::Rectangle {
                width: 3.0,
                height: 4.0,
            },
            Shape::Triangle {
                base: 6.0,
                height: 5.0,
            },
        ]
    }

    #[test]
    fn one_visitor_computes_areas_per_tag() {
        let mut calculator = AreaCalculator;
        let areas: Vec<f64> = sample_shapes().iter().map(|s| calculator.visit(s)).collect();
        assert_eq!(areas, vec![12.0, 15.0]);
    }

    #[test]
    fn another_visitor_names_the_same_elements() {
        let mut namer = ShapeNamer;
        let names: Vec<String> = sample_shapes().iter().map(|s| namer.visit(s)).collect();
        assert_eq!(names, vec!["3x4 rectangle", "triangle with base 6 and height 5"]);
    }

    #[test]
    fn total_area_aggregates_over_the_collection() {
        assert_eq!(total_area(&sample_shapes()), 27.0);
    }

    #[test]
    fn visiting_twice_replays_the_same_results() {
        let shapes = sample_shapes();
        assert_eq!(total_area(&shapes), total_area(&shapes));
    }
}
