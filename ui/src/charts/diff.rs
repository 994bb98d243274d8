//! Keyed mark diffing: classify a target set against the currently rendered
//! one into enter/update/exit.
//!
//! The rendered key set is replaced by the targets the moment `apply`
//! returns, so a data update arriving mid-transition simply diffs against
//! the newest targets and supersedes them; transitions never have to finish
//! before the next frame starts.

use indexmap::IndexMap;

/// One mark of a frame plan. `index` is the mark's position in the target
/// array and feeds the stagger delay; exits keep index 0 (they leave without
/// stagger). `prev` carries the previously rendered geometry for updates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMark<G> {
    pub key: String,
    pub index: usize,
    pub geom: G,
    pub prev: Option<G>,
}

/// The three disjoint mark sets produced by one diff step.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan<G> {
    pub enter: Vec<PlannedMark<G>>,
    pub update: Vec<PlannedMark<G>>,
    pub exit: Vec<PlannedMark<G>>,
}

impl<G> Default for FramePlan<G> {
    fn default() -> Self {
        Self {
            enter: Vec::new(),
            update: Vec::new(),
            exit: Vec::new(),
        }
    }
}

impl<G> FramePlan<G> {
    pub fn is_empty(&self) -> bool {
        self.enter.is_empty() && self.update.is_empty() && self.exit.is_empty()
    }
}

/// The set of marks currently on screen, keyed by stable identity.
#[derive(Debug, Clone, Default)]
pub struct MarkSet<G> {
    marks: IndexMap<String, G>,
}

impl<G: Clone> MarkSet<G> {
    /// Diff `targets` against the rendered set and make them the new
    /// rendered set.
    pub fn apply(&mut self, targets: Vec<(String, G)>) -> FramePlan<G> {
        let mut plan = FramePlan::default();
        let mut next: IndexMap<String, G> = IndexMap::with_capacity(targets.len());

        for (index, (key, geom)) in targets.into_iter().enumerate() {
            let mark = PlannedMark {
                key: key.clone(),
                index,
                geom: geom.clone(),
                prev: self.marks.get(&key).cloned(),
            };
            if mark.prev.is_some() {
                plan.update.push(mark);
            } else {
                plan.enter.push(mark);
            }
            next.insert(key, geom);
        }

        for (key, geom) in self.marks.drain(..) {
            if !next.contains_key(&key) {
                plan.exit.push(PlannedMark {
                    key,
                    index: 0,
                    geom,
                    prev: None,
                });
            }
        }

        self.marks = next;
        plan
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.marks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
