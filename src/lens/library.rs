//! The 256 lens boxes and the focusing-power score.

use tracing::trace;

use super::hash::{hash, BOX_COUNT};
use super::step::Step;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lens {
    pub label: String,
    pub focal: u8,
}

/// An ordered box of lenses. Slots keep insertion order; replacing a lens
/// keeps its slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LensBox {
    lenses: Vec<Lens>,
}

impl LensBox {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lenses(&self) -> &[Lens] {
        &self.lenses
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lenses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lenses.is_empty()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.lenses.iter().position(|lens| lens.label == label)
    }

    /// Replace the focal length of `label` in place, or append a new lens.
    pub fn upsert(&mut self, label: &str, focal: u8) {
        match self.position(label) {
            Some(slot) => self.lenses[slot].focal = focal,
            None => self.lenses.push(Lens {
                label: label.to_owned(),
                focal,
            }),
        }
    }

    /// Take `label` out, shifting later lenses forward. Returns the removed lens.
    pub fn remove(&mut self, label: &str) -> Option<Lens> {
        self.position(label).map(|slot| self.lenses.remove(slot))
    }

    /// Focusing power of this box's lenses, without the box-number factor.
    fn slot_power(&self) -> u64 {
        self.lenses
            .iter()
            .enumerate()
            .map(|(slot, lens)| (slot as u64 + 1) * u64::from(lens.focal))
            .sum()
    }
}

pub struct LensLibrary {
    boxes: Vec<LensBox>,
}

impl Default for LensLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl LensLibrary {
    pub fn new() -> Self {
        Self {
            boxes: vec![LensBox::new(); BOX_COUNT],
        }
    }

    /// The box a label hashes to.
    #[inline]
    pub fn box_for(&self, label: &str) -> &LensBox {
        &self.boxes[usize::from(hash(label))]
    }

    #[inline]
    pub fn boxes(&self) -> &[LensBox] {
        &self.boxes
    }

    pub fn apply(&mut self, step: &Step) {
        let index = usize::from(hash(step.label()));
        let lens_box = &mut self.boxes[index];
        match step {
            Step::Remove { label } => {
                let removed = lens_box.remove(label);
                trace!(%label, index, removed = removed.is_some(), "remove");
            }
            Step::Insert { label, focal } => {
                lens_box.upsert(label, *focal);
                trace!(%label, index, focal, "insert");
            }
        }
    }

    pub fn replay<'a, I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = &'a Step>,
    {
        for step in steps {
            self.apply(step);
        }
    }

    /// Sum of box number × slot number × focal length, both 1-based.
    pub fn focusing_power(&self) -> u64 {
        self.boxes
            .iter()
            .enumerate()
            .map(|(index, lens_box)| (index as u64 + 1) * lens_box.slot_power())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(lens_box: &LensBox) -> Vec<&str> {
        lens_box.lenses().iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn upsert_keeps_slot_of_existing_label() {
        let mut lens_box = LensBox::new();
        lens_box.upsert("a", 1);
        lens_box.upsert("b", 2);
        lens_box.upsert("c", 3);
        lens_box.upsert("a", 9);
        assert_eq!(labels(&lens_box), ["a", "b", "c"]);
        assert_eq!(lens_box.lenses()[0].focal, 9);
    }

    #[test]
    fn remove_shifts_later_lenses_forward() {
        let mut lens_box = LensBox::new();
        lens_box.upsert("a", 1);
        lens_box.upsert("b", 2);
        lens_box.upsert("c", 3);
        let removed = lens_box.remove("b").unwrap();
        assert_eq!(removed.focal, 2);
        assert_eq!(labels(&lens_box), ["a", "c"]);
        assert!(lens_box.remove("missing").is_none());
        assert_eq!(lens_box.len(), 2);
    }

    #[test]
    fn removed_label_returns_at_the_back() {
        let mut lens_box = LensBox::new();
        lens_box.upsert("a", 1);
        lens_box.upsert("b", 2);
        lens_box.remove("a");
        lens_box.upsert("a", 4);
        assert_eq!(labels(&lens_box), ["b", "a"]);
    }

    #[test]
    fn focusing_power_weights_box_and_slot() {
        let mut library = LensLibrary::new();
        // "rn" and "cm" hash to box 0; "pc" to box 3.
        library.apply(&Step::Insert { label: "rn".into(), focal: 1 });
        library.apply(&Step::Insert { label: "cm".into(), focal: 2 });
        library.apply(&Step::Insert { label: "pc".into(), focal: 5 });
        // 1*1*1 + 1*2*2 + 4*1*5
        assert_eq!(library.focusing_power(), 25);
    }
}
