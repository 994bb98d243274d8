//! Word sizing and spiral placement for the cloud renderer.
//!
//! Placement sits behind the `WordPlacer` trait so the player only depends
//! on its input/output contract (and the staleness rule in `player`); the
//! built-in `SpiralPlacer` walks an archimedean spiral outward from the
//! canvas center and drops words it cannot fit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::charts::scale::LinearScale;

/// Layout canvas in CSS pixels; coordinates are relative to its center.
pub const CANVAS: (f64, f64) = (800.0, 400.0);
/// Font sizes words are scaled into.
pub const FONT_MIN: f64 = 10.0;
pub const FONT_MAX: f64 = 100.0;

const WORD_PADDING: f64 = 5.0;
const SPIRAL_STEP: f64 = 0.35;
const SPIRAL_GROWTH: f64 = 2.4;

#[derive(Debug, Clone, PartialEq)]
pub struct WordSpec {
    pub text: String,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub font_size: f64,
    /// Offset of the word center from the canvas center.
    pub x: f64,
    pub y: f64,
    /// 0 or 90 degrees.
    pub rotate: i32,
}

/// Scale a snapshot's counts into `[FONT_MIN, FONT_MAX]`. A single-value
/// snapshot maps everything to the middle of the range.
pub fn sized_words<'a, I>(counts: I) -> Vec<WordSpec>
where
    I: IntoIterator<Item = (&'a str, u32)> + Clone,
{
    let mut min = u32::MAX;
    let mut max = 0u32;
    for (_, count) in counts.clone() {
        min = min.min(count);
        max = max.max(count);
    }
    if max == 0 && min == u32::MAX {
        return Vec::new();
    }

    let scale = LinearScale::new((min as f64, max as f64), (FONT_MIN, FONT_MAX));
    counts
        .into_iter()
        .map(|(text, count)| WordSpec {
            text: text.to_string(),
            font_size: scale.scale(count as f64),
        })
        .collect()
}

pub trait WordPlacer {
    /// Assign each word a position and rotation inside `canvas` without
    /// overlap; words that cannot be placed are omitted from the result.
    fn place(&mut self, words: &[WordSpec], canvas: (f64, f64)) -> Vec<PlacedWord>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    half_width: f64,
    half_height: f64,
}

impl Extent {
    fn of(text: &str, font_size: f64, rotate: i32) -> Self {
        // Rough glyph metrics; the packer only needs a conservative box.
        let width = font_size * 0.6 * text.chars().count().max(1) as f64 + WORD_PADDING;
        let height = font_size + WORD_PADDING;
        if rotate == 90 {
            Self {
                half_width: height / 2.0,
                half_height: width / 2.0,
            }
        } else {
            Self {
                half_width: width / 2.0,
                half_height: height / 2.0,
            }
        }
    }

    fn overlaps(&self, x: f64, y: f64, other: &(f64, f64, Extent)) -> bool {
        let (ox, oy, oe) = other;
        (x - ox).abs() < self.half_width + oe.half_width
            && (y - oy).abs() < self.half_height + oe.half_height
    }

    fn fits(&self, x: f64, y: f64, canvas: (f64, f64)) -> bool {
        x.abs() + self.half_width <= canvas.0 / 2.0 && y.abs() + self.half_height <= canvas.1 / 2.0
    }
}

pub struct SpiralPlacer {
    rng: StdRng,
}

impl SpiralPlacer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic packer for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SpiralPlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPlacer for SpiralPlacer {
    fn place(&mut self, words: &[WordSpec], canvas: (f64, f64)) -> Vec<PlacedWord> {
        // Big words first: they are the hardest to fit and anchor the layout
        // near the center.
        let mut order: Vec<&WordSpec> = words.iter().collect();
        order.sort_by(|a, b| b.font_size.total_cmp(&a.font_size));

        let aspect = (canvas.0 / canvas.1).max(1.0);
        let max_radius = (canvas.0 / 2.0).hypot(canvas.1 / 2.0);

        let mut placed: Vec<(f64, f64, Extent)> = Vec::with_capacity(order.len());
        let mut out = Vec::with_capacity(order.len());

        for word in order {
            let rotate = self.rng.gen_range(0..2) * 90;
            let extent = Extent::of(&word.text, word.font_size, rotate);

            let mut t = 0.0f64;
            loop {
                let radius = SPIRAL_GROWTH * t;
                if radius > max_radius {
                    break; // unplaceable; silently dropped
                }
                let x = radius * t.cos() * aspect;
                let y = radius * t.sin();

                if extent.fits(x, y, canvas)
                    && !placed.iter().any(|other| extent.overlaps(x, y, other))
                {
                    placed.push((x, y, extent));
                    out.push(PlacedWord {
                        text: word.text.clone(),
                        font_size: word.font_size,
                        x,
                        y,
                        rotate,
                    });
                    break;
                }
                t += SPIRAL_STEP;
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(entries: &[(&str, f64)]) -> Vec<WordSpec> {
        entries
            .iter()
            .map(|(text, size)| WordSpec {
                text: text.to_string(),
                font_size: *size,
            })
            .collect()
    }

    #[test]
    fn counts_scale_into_the_font_range() {
        let words = sized_words(vec![("Emma", 100u32), ("Noah", 400), ("Mia", 250)]);
        let by_name = |name: &str| {
            words
                .iter()
                .find(|w| w.text == name)
                .expect("word present")
                .font_size
        };
        assert_eq!(by_name("Emma"), FONT_MIN);
        assert_eq!(by_name("Noah"), FONT_MAX);
        assert_eq!(by_name("Mia"), 55.0);
    }

    #[test]
    fn uniform_counts_use_the_midpoint() {
        let words = sized_words(vec![("Emma", 7u32), ("Noah", 7)]);
        assert!(words.iter().all(|w| w.font_size == 55.0));
    }

    #[test]
    fn empty_snapshot_yields_no_words() {
        assert!(sized_words(Vec::<(&str, u32)>::new()).is_empty());
    }

    #[test]
    fn placed_words_stay_on_the_canvas_without_overlap() {
        let mut placer = SpiralPlacer::seeded(42);
        let words = specs(&[
            ("Emma", 80.0),
            ("Noah", 60.0),
            ("Olivia", 40.0),
            ("Liam", 30.0),
            ("Ava", 20.0),
            ("Mia", 12.0),
        ]);
        let placed = placer.place(&words, CANVAS);
        assert_eq!(placed.len(), words.len());

        for word in &placed {
            assert!(word.rotate == 0 || word.rotate == 90);
            let extent = Extent::of(&word.text, word.font_size, word.rotate);
            assert!(extent.fits(word.x, word.y, CANVAS));
        }

        for (i, a) in placed.iter().enumerate() {
            let ea = Extent::of(&a.text, a.font_size, a.rotate);
            for b in placed.iter().skip(i + 1) {
                let eb = Extent::of(&b.text, b.font_size, b.rotate);
                assert!(
                    !ea.overlaps(a.x, a.y, &(b.x, b.y, eb)),
                    "{} overlaps {}",
                    a.text,
                    b.text
                );
            }
        }
    }

    #[test]
    fn words_that_cannot_fit_are_dropped() {
        let mut placer = SpiralPlacer::seeded(7);
        let words = specs(&[("Extraordinarily", 90.0), ("Long", 80.0)]);
        // A canvas too small for either word: both are silently omitted.
        let placed = placer.place(&words, (40.0, 40.0));
        assert!(placed.is_empty());
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let words = specs(&[("Emma", 50.0), ("Noah", 40.0), ("Mia", 30.0)]);
        let a = SpiralPlacer::seeded(9).place(&words, CANVAS);
        let b = SpiralPlacer::seeded(9).place(&words, CANVAS);
        assert_eq!(a, b);
    }
}
