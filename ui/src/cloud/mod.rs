//! Word-cloud frame assembly over the per-year snapshots.

pub mod layout;
pub mod player;

use indexmap::IndexMap;

use crate::charts::diff::{FramePlan, MarkSet};
use crate::charts::palette;
use crate::cloud::layout::{sized_words, PlacedWord, WordSpec};

/// Target geometry for one rendered word, keyed by its text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordGeom {
    pub x: f64,
    pub y: f64,
    pub rotate: i32,
    pub font_size: f64,
    pub fill: &'static str,
}

/// Size one year's snapshot for the placer.
pub fn snapshot_words(counts: &IndexMap<String, u32>) -> Vec<WordSpec> {
    sized_words(counts.iter().map(|(name, count)| (name.as_str(), *count)))
}

/// View-owned cloud state: the rendered word set and the latest diff.
#[derive(Debug, Clone, Default)]
pub struct CloudState {
    marks: MarkSet<WordGeom>,
    pub plan: FramePlan<WordGeom>,
}

impl CloudState {
    /// Diff a finished (and non-stale) placement against the rendered words.
    pub fn apply(&mut self, placed: &[PlacedWord]) {
        let targets = placed
            .iter()
            .enumerate()
            .map(|(i, word)| {
                (
                    word.text.clone(),
                    WordGeom {
                        x: word.x,
                        y: word.y,
                        rotate: word.rotate,
                        font_size: word.font_size,
                        fill: palette::category_fill(i),
                    },
                )
            })
            .collect();
        self.plan = self.marks.apply(targets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x: f64) -> PlacedWord {
        PlacedWord {
            text: text.to_string(),
            font_size: 20.0,
            x,
            y: 0.0,
            rotate: 0,
        }
    }

    #[test]
    fn replayed_frames_diff_word_to_word() {
        let mut cloud = CloudState::default();
        cloud.apply(&[word("Emma", 0.0), word("Noah", 40.0)]);
        assert_eq!(cloud.plan.enter.len(), 2);

        cloud.apply(&[word("Emma", -30.0), word("Liam", 10.0)]);
        assert_eq!(cloud.plan.update.len(), 1);
        assert_eq!(cloud.plan.update[0].key, "Emma");
        assert_eq!(cloud.plan.enter.len(), 1);
        assert_eq!(cloud.plan.enter[0].key, "Liam");
        assert_eq!(cloud.plan.exit.len(), 1);
        assert_eq!(cloud.plan.exit[0].key, "Noah");
    }

    #[test]
    fn snapshot_words_keep_insertion_order() {
        let mut counts = IndexMap::new();
        counts.insert("Jacob".to_string(), 600u32);
        counts.insert("Emily".to_string(), 500);
        let words = snapshot_words(&counts);
        assert_eq!(words[0].text, "Jacob");
        assert_eq!(words[1].text, "Emily");
    }
}
