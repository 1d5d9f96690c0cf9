/// Set of flat cell indices whose expansion is complete.
///
/// Membership is stamped with a generation counter so a new search only
/// bumps the generation instead of clearing the whole buffer.
#[derive(Debug, Default)]
pub(crate) struct Finalized {
    marks: Vec<u32>,
    generation: u32,
    count: usize,
}

impl Finalized {
    /// Start a new, empty set over `len` cells.
    pub(crate) fn reset(&mut self, len: usize) {
        if self.marks.len() < len {
            self.marks.resize(len, 0);
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could alias the new generation.
            self.marks.fill(0);
            self.generation = 1;
        }
        self.count = 0;
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.marks[idx] == self.generation
    }

    /// Insert `idx`. Returns `false` if it was already present.
    #[inline]
    pub(crate) fn insert(&mut self, idx: usize) -> bool {
        if self.contains(idx) {
            return false;
        }
        self.marks[idx] = self.generation;
        self.count += 1;
        true
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }
}
