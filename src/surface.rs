use crate::point::Point;

/// A 2D drawing target for the background layer.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    /// Whole-surface CSS filter, e.g. `blur(100px)`.
    fn set_filter(&mut self, filter: &str);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
}
