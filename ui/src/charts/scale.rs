//! Band and linear scales for the bar charts, following the d3 conventions
//! the charts were designed around (banded categories with inner padding,
//! "niced" linear domains, thinned tick labels).

/// Banded ordinal scale over a sorted set of category keys (years). Inner
/// and outer padding share one factor.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<i32>,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    pub fn new(domain: Vec<i32>, width: f64, padding: f64) -> Self {
        let n = domain.len() as f64;
        let step = width / (n + padding).max(1.0);
        Self {
            domain,
            step,
            bandwidth: step * (1.0 - padding),
            offset: step * padding,
        }
    }

    pub fn position(&self, key: i32) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| *k == key)
            .map(|i| self.offset + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[i32] {
        &self.domain
    }
}

/// Linear scale mapping `domain` onto `range`. A zero-span domain maps every
/// value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Extend the domain to round tick values (two refinement passes, as d3
    /// does).
    pub fn nice(mut self, count: usize) -> Self {
        for _ in 0..2 {
            let step = tick_increment(self.domain.0, self.domain.1, count as f64);
            if step > 0.0 && step.is_finite() {
                self.domain.0 = (self.domain.0 / step).floor() * step;
                self.domain.1 = (self.domain.1 / step).ceil() * step;
            }
        }
        self
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 {
            0.5
        } else {
            (value - d0) / (d1 - d0)
        };
        r0 + t * (r1 - r0)
    }

    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return vec![d0];
        }
        let step = tick_increment(d0, d1, count as f64);
        if step <= 0.0 || !step.is_finite() {
            return vec![d0, d1];
        }
        let mut ticks = Vec::new();
        let mut value = (d0 / step).ceil() * step;
        while value <= d1 + step * 1e-9 {
            ticks.push(value);
            value += step;
        }
        ticks
    }
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(1.0);
    if step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Show every `stride`-th category label once more than ~10 categories are
/// on the axis; bar placement is unaffected.
pub fn label_stride(category_count: usize) -> usize {
    category_count.div_ceil(10).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_evenly_stepped_with_padding() {
        let scale = BandScale::new(vec![2000, 2001, 2002], 310.0, 0.1);
        let step = 310.0 / 3.1;
        assert!((scale.bandwidth() - step * 0.9).abs() < 1e-9);
        let p0 = scale.position(2000).unwrap();
        let p1 = scale.position(2001).unwrap();
        assert!((p1 - p0 - step).abs() < 1e-9);
        assert!((p0 - step * 0.1).abs() < 1e-9);
        assert_eq!(scale.position(1999), None);
    }

    #[test]
    fn nice_rounds_the_domain_outward() {
        let scale = LinearScale::new((0.0, 9_340.0), (400.0, 0.0)).nice(10);
        assert_eq!(scale.domain_max(), 10_000.0);
        assert_eq!(scale.scale(0.0), 400.0);
        assert_eq!(scale.scale(10_000.0), 0.0);
    }

    #[test]
    fn zero_span_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (10.0, 100.0));
        assert_eq!(scale.scale(5.0), 55.0);
    }

    #[test]
    fn ticks_land_on_round_values() {
        let scale = LinearScale::new((0.0, 1_000.0), (400.0, 0.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(1_000.0));
        assert!(ticks.windows(2).all(|w| (w[1] - w[0] - 100.0).abs() < 1e-9));
    }

    #[test]
    fn label_stride_thins_past_ten_categories() {
        assert_eq!(label_stride(0), 1);
        assert_eq!(label_stride(8), 1);
        assert_eq!(label_stride(10), 1);
        assert_eq!(label_stride(11), 2);
        assert_eq!(label_stride(20), 2);
        assert_eq!(label_stride(45), 5);
    }
}
