// src/geometry/scale.rs
use serde::Serialize;

/// Continuous domain → continuous range, straight line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A collapsed domain maps everything to the middle of the range.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (v - d0) / (d1 - d0) };
        r0 + (r1 - r0) * t
    }

    /// Widen the domain outward to round tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut prev = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prev == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prev = Some(step);
        }

        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    /// Roughly `count` round values inside the domain (1/2/5 × 10^k steps).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        ticks(d0.min(d1), d0.max(d1), count)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Positive: the step. Negative: the reciprocal of the step (keeps small
/// steps exact when multiplied back).
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !(stop > start) || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let step = (stop - start) / count as f64;
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

pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop && start.is_finite() {
        return vec![start];
    }
    let inc = tick_increment(start, stop, count);
    if inc > 0.0 {
        let i0 = (start / inc).ceil() as i64;
        let i1 = (stop / inc).floor() as i64;
        (i0..=i1).map(|i| i as f64 * inc).collect()
    } else if inc < 0.0 {
        let inc = -inc;
        let i0 = (start * inc).ceil() as i64;
        let i1 = (stop * inc).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inc).collect()
    } else {
        Vec::new()
    }
}

/// Categories → equal slots across a range.
///
/// Slot `i` starts at `range.0 + i × step` with `step = extent / count`;
/// the drawn band is `step × (1 − padding)` wide, leaving the gap after it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self { domain, range, padding: padding.clamp(0.0, 1.0) }
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            0.0
        } else {
            (self.range.1 - self.range.0) / self.domain.len() as f64
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    pub fn position_at(&self, index: usize) -> f64 {
        self.range.0 + index as f64 * self.step()
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == key)
    }

    pub fn position(&self, key: &str) -> Option<f64> {
        self.index_of(key).map(|i| self.position_at(i))
    }

    /// Middle of the drawn band.
    pub fn center_at(&self, index: usize) -> f64 {
        self.position_at(index) + self.bandwidth() / 2.0
    }
}

/// Unique values in first-seen order.
pub fn unique_in_order<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for it in items {
        if !out.iter().any(|o| o == it) {
            out.push(s!(it));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_into_inverted_range() {
        let sc = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert_eq!(sc.map(0.0), 300.0);
        assert_eq!(sc.map(50.0), 150.0);
        assert_eq!(sc.map(75.0), 75.0);
    }

    #[test]
    fn nice_rounds_outward() {
        let sc = LinearScale::new((2023.0, 2030.0), (0.0, 1.0)).nice(10);
        assert_eq!(sc.domain, (2023.0, 2030.0));
        let sc = LinearScale::new((0.0, 97.0), (0.0, 1.0)).nice(10);
        assert_eq!(sc.domain, (0.0, 100.0));
        let sc = LinearScale::new((0.13, 0.87), (0.0, 1.0)).nice(5);
        assert_eq!(sc.domain, (0.0, 1.0));
    }

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
    }

    #[test]
    fn band_formula() {
        let b = BandScale::new(vec!["a".into(), "b".into(), "c".into(), "d".into()], (0.0, 400.0), 0.1);
        assert_eq!(b.step(), 100.0);
        assert!((b.bandwidth() - 90.0).abs() < 1e-9);
        assert_eq!(b.position("c"), Some(200.0));
        assert_eq!(b.position("z"), None);
    }

    #[test]
    fn unique_keeps_first_seen() {
        assert_eq!(unique_in_order(["b", "a", "b", "c"]), vec!["b", "a", "c"]);
    }
}
