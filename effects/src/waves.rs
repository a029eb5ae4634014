//! Layered sine-wave background geometry.
//!
//! Pure math: given a canvas size and a clock value, produce the closed
//! outline of each layer. [`crate::render`] turns the outlines into pixels.

#[cfg(test)]
#[path = "waves_test.rs"]
mod waves_test;

/// Fraction of the canvas height where the first layer's baseline sits.
pub const BASELINE_RATIO: f64 = 0.2;

/// A point in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One filled wave band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveLayer {
    /// CSS fill color.
    pub color: &'static str,
    /// Baseline offset below [`BASELINE_RATIO`] of the height, in pixels.
    pub offset: f64,
    pub amplitude: f64,
    /// Radians per pixel.
    pub frequency: f64,
    pub phase_shift: f64,
    /// Radians per millisecond; the sign sets the drift direction.
    pub speed: f64,
}

/// Back-to-front layers, lightest first.
pub const OCEAN_LAYERS: [WaveLayer; 6] = [
    WaveLayer { color: "rgba(1, 90, 132, 1)", offset: 0.0, amplitude: 40.0, frequency: 0.010, phase_shift: 1.0, speed: 0.0010 },
    WaveLayer { color: "rgba(1, 42, 108, 1)", offset: 40.0, amplitude: 35.0, frequency: 0.012, phase_shift: 2.0, speed: -0.0012 },
    WaveLayer { color: "rgba(0, 32, 83, 1)", offset: 80.0, amplitude: 50.0, frequency: 0.011, phase_shift: 3.0, speed: 0.0011 },
    WaveLayer { color: "rgba(0, 24, 63, 1)", offset: 120.0, amplitude: 25.0, frequency: 0.013, phase_shift: 4.0, speed: -0.0013 },
    WaveLayer { color: "rgba(0, 13, 44, 1)", offset: 160.0, amplitude: 30.0, frequency: 0.009, phase_shift: 5.0, speed: 0.0010 },
    WaveLayer { color: "rgba(0, 7, 24, 1)", offset: 200.0, amplitude: 45.0, frequency: 0.008, phase_shift: 6.0, speed: -0.0011 },
];

impl WaveLayer {
    /// Resting height of the wave for a canvas `height` pixels tall.
    #[must_use]
    pub fn baseline(&self, height: f64) -> f64 {
        height * BASELINE_RATIO + self.offset
    }

    /// Phase at `time_ms`.
    #[must_use]
    pub fn phase(&self, time_ms: f64) -> f64 {
        time_ms * self.speed + self.phase_shift
    }

    /// Wave crest height at column `x`.
    #[must_use]
    pub fn y_at(&self, x: f64, height: f64, time_ms: f64) -> f64 {
        self.baseline(height) + (x * self.frequency + self.phase(time_ms)).sin() * self.amplitude
    }

    /// Closed polygon for this layer: the start of the baseline, one point
    /// per pixel column along the crest, then the bottom-right and
    /// bottom-left corners.
    #[must_use]
    pub fn outline(&self, width: u32, height: u32, time_ms: f64) -> Vec<Point> {
        let h = f64::from(height);
        let mut points = Vec::with_capacity(width as usize + 4);
        points.push(Point::new(0.0, self.baseline(h)));
        for x in 0..=width {
            let x = f64::from(x);
            points.push(Point::new(x, self.y_at(x, h, time_ms)));
        }
        points.push(Point::new(f64::from(width), h));
        points.push(Point::new(0.0, h));
        points
    }
}
