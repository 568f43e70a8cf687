// File: crates/barchart-core/src/scale.rs
// Summary: Linear (value) and band (category) scales as plain value objects.

use tracing::warn;

/// Continuous mapping from a numeric domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to pixels. A collapsed domain maps everything to the
    /// middle of the range.
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }

    /// Roughly `count` human-friendly tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain[0], self.domain[1], count)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Upper bound on the requested tick count; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 1_000;

/// Tick step for `[start, stop]` on the 1-2-5 ladder. Positive results are the
/// step itself; negative results are the reciprocal of the step (negated), which
/// keeps sub-unit steps exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Evenly spaced, rounded tick values covering `[start, stop]`.
/// `count` is clamped to [`MAX_TICK_COUNT`].
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count.min(MAX_TICK_COUNT);
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop && count > 0 {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut out: Vec<f64> = if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).ceil().max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) * step).collect()
    } else {
        let first = (lo * step).floor();
        let last = (hi * step).ceil();
        let n = (first - last + 1.0).ceil().max(0.0) as usize;
        (0..n).map(|i| (first - i as f64) / step).collect()
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Categorical mapping from labels to equal-width bands with padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: [f64; 2],
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
    reverse: bool,
}

impl BandScale {
    /// Build a band scale. Duplicate labels keep their first position.
    pub fn new<I, S>(domain: I, range: [f64; 2]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = Vec::new();
        for s in domain {
            let s = s.into();
            if labels.contains(&s) {
                warn!(category = %s, "duplicate category; keeping first band");
                continue;
            }
            labels.push(s);
        }
        let mut scale = Self {
            domain: labels,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            step: 0.0,
            bandwidth: 0.0,
            start: 0.0,
            reverse: false,
        };
        scale.rescale();
        scale
    }

    /// Set inner and outer padding to the same ratio.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self.rescale();
        self
    }

    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding.max(0.0);
        self.rescale();
        self
    }

    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let [r0, r1] = self.range;
        self.reverse = r1 < r0;
        let (lo, hi) = if self.reverse { (r1, r0) } else { (r0, r1) };
        let step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - step * (n - self.padding_inner)) * self.align;
        self.step = step;
        self.bandwidth = step * (1.0 - self.padding_inner);
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Leading edge of the band for `category`, if it is in the domain.
    #[inline]
    pub fn position(&self, category: &str) -> Option<f64> {
        let n = self.domain.len();
        self.domain.iter().position(|c| c == category).map(|i| {
            // reversed ranges hand out bands from the far end
            let slot = if self.reverse { n - 1 - i } else { i };
            self.start + self.step * slot as f64
        })
    }

    /// Width of a single band.
    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent bands.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }
}
