//! Coordinate math for the SVG charts, kept free of any view code so it can
//! be unit tested on the host.

/// Maps data values into a fixed plot rectangle. `y` grows downward in SVG,
/// so the series maximum lands at the top edge and zero at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    max: f64,
    width: f64,
    height: f64,
}

impl ChartScale {
    pub fn new(max_value: f64, width: f64, height: f64) -> Self {
        // An all-zero series still needs a finite scale
        let max = if max_value > 0.0 { max_value } else { 1.0 };
        Self { max, width, height }
    }

    /// Horizontal position of point `index` out of `count` evenly spaced
    /// slots across the plot width.
    pub fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.width / 2.0;
        }
        self.width * index as f64 / (count - 1) as f64
    }

    pub fn y(&self, value: f64) -> f64 {
        self.height - (value.clamp(0.0, self.max) / self.max) * self.height
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// SVG polyline `points` attribute for one series: one `x,y` pair per value.
pub fn polyline_points(values: &[f64], scale: &ChartScale) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", scale.x(i, values.len()), scale.y(*v)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evenly spaced y-axis tick values from 0 to the scale maximum, inclusive.
pub fn y_ticks(scale: &ChartScale, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![0.0, scale.max()];
    }
    (0..=count)
        .map(|i| scale.max() * i as f64 / count as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximum_maps_to_top_and_zero_to_bottom() {
        let scale = ChartScale::new(500.0, 700.0, 360.0);
        assert_eq!(scale.y(500.0), 0.0);
        assert_eq!(scale.y(0.0), 360.0);
        assert_eq!(scale.y(250.0), 180.0);
    }

    #[test]
    fn x_slots_are_evenly_spaced() {
        let scale = ChartScale::new(1.0, 600.0, 300.0);
        assert_eq!(scale.x(0, 4), 0.0);
        assert_eq!(scale.x(3, 4), 600.0);
        assert_eq!(scale.x(1, 4), 200.0);
        // A single slot sits in the middle
        assert_eq!(scale.x(0, 1), 300.0);
    }

    #[test]
    fn zero_maximum_does_not_divide_by_zero() {
        let scale = ChartScale::new(0.0, 100.0, 100.0);
        assert_eq!(scale.y(0.0), 100.0);
        assert!(scale.y(0.0).is_finite());
    }

    #[test]
    fn polyline_has_one_pair_per_value() {
        let scale = ChartScale::new(10.0, 300.0, 100.0);
        let points = polyline_points(&[0.0, 5.0, 10.0], &scale);
        assert_eq!(points.split(' ').count(), 3);
        assert_eq!(points, "0.0,100.0 150.0,50.0 300.0,0.0");
    }

    #[test]
    fn ticks_span_zero_to_max() {
        let scale = ChartScale::new(800.0, 100.0, 100.0);
        let ticks = y_ticks(&scale, 4);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[4], 800.0);
        assert_eq!(ticks[2], 400.0);
    }
}
