use nalgebra::{Point2, Vector2};

/// Axis-aligned 2D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoundingBox {
    /// A degenerate box containing exactly one point.
    pub fn at(point: Point2<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// The smallest box containing every given point, `None` when the
    /// iterator is empty.
    pub fn of_points(points: impl IntoIterator<Item = Point2<f64>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::at(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: Point2<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Closed-interval overlap test; touching edges count as intersecting.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Grows the box by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> BoundingBox {
        let delta = Vector2::new(margin, margin);
        BoundingBox {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    pub fn center(&self) -> Point2<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Arithmetic mean of a point cloud, `None` when empty.
pub fn centroid(points: impl IntoIterator<Item = Point2<f64>>) -> Option<Point2<f64>> {
    let mut sum = Vector2::zeros();
    let mut count = 0usize;
    for point in points {
        sum += point.coords;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(Point2::from(sum / count as f64))
    }
}

/// Scales `point` about `origin` by `factor`.
pub fn scale_about(point: Point2<f64>, origin: Point2<f64>, factor: f64) -> Point2<f64> {
    origin + (point - origin) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn of_points_spans_all_points() {
        let bounds = BoundingBox::of_points([
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ])
        .unwrap();

        assert_eq!(bounds.min, Point2::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point2::new(4.0, 5.0));
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 6.0);
    }

    #[test]
    fn of_points_is_none_for_empty_input() {
        assert!(BoundingBox::of_points(std::iter::empty()).is_none());
    }

    #[test]
    fn intersects_detects_overlap_and_separation() {
        let a = BoundingBox {
            min: Point2::new(0.0, 0.0),
            max: Point2::new(2.0, 2.0),
        };
        let b = BoundingBox {
            min: Point2::new(1.0, 1.0),
            max: Point2::new(3.0, 3.0),
        };
        let c = BoundingBox {
            min: Point2::new(5.0, 5.0),
            max: Point2::new(6.0, 6.0),
        };

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.inflate(3.0).intersects(&c));
    }

    #[test]
    fn union_and_center() {
        let a = BoundingBox::at(Point2::new(0.0, 0.0));
        let b = BoundingBox::at(Point2::new(4.0, 2.0));
        let merged = a.union(&b);

        assert_eq!(merged.center(), Point2::new(2.0, 1.0));
        assert_eq!(merged.area(), 8.0);
    }

    #[test]
    fn centroid_is_mean_of_points() {
        let center = centroid([Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)]).unwrap();
        assert!((center.x - 2.0).abs() < TOLERANCE);
        assert!((center.y - 0.0).abs() < TOLERANCE);
        assert!(centroid(std::iter::empty()).is_none());
    }

    #[test]
    fn scale_about_fixes_the_origin() {
        let origin = Point2::new(2.0, 0.0);
        let scaled = scale_about(Point2::new(4.0, 0.0), origin, 0.25);
        assert!((scaled.x - 2.5).abs() < TOLERANCE);
        assert_eq!(scale_about(origin, origin, 10.0), origin);
    }
}
