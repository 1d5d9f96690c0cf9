use std::collections::BinaryHeap;

use crate::node::NodeId;

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first and, among equal `f`, the entry pushed first.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
struct Entry {
    f: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of generated nodes with FIFO tie-breaking.
///
/// Several entries may refer to the same position; the caller discards the
/// stale ones when they are popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    #[inline]
    pub(crate) fn push(&mut self, id: NodeId, f: u32) {
        self.heap.push(Entry {
            f,
            seq: self.seq,
            id,
        });
        self.seq += 1;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeArena, SearchNode};
    use amaze_core::Pos;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::default();
        (0..n)
            .map(|i| arena.push(SearchNode::root(Pos::new(0, i as i32), 0)))
            .collect()
    }

    #[test]
    fn pops_lowest_f_first() {
        let ids = ids(3);
        let mut fr = Frontier::default();
        fr.push(ids[0], 9);
        fr.push(ids[1], 3);
        fr.push(ids[2], 5);
        assert_eq!(fr.len(), 3);
        assert_eq!(fr.pop(), Some(ids[1]));
        assert_eq!(fr.pop(), Some(ids[2]));
        assert_eq!(fr.pop(), Some(ids[0]));
        assert_eq!(fr.pop(), None);
        assert_eq!(fr.len(), 0);
    }

    #[test]
    fn equal_f_is_first_in_first_out() {
        let ids = ids(6);
        let mut fr = Frontier::default();
        for &id in &ids {
            fr.push(id, 4);
        }
        let popped: Vec<NodeId> = std::iter::from_fn(|| fr.pop()).collect();
        assert_eq!(popped, ids);
    }

    #[test]
    fn fifo_holds_across_interleaved_pushes() {
        let ids = ids(4);
        let mut fr = Frontier::default();
        fr.push(ids[0], 2);
        fr.push(ids[1], 1);
        fr.push(ids[2], 2);
        assert_eq!(fr.pop(), Some(ids[1]));
        fr.push(ids[3], 2);
        assert_eq!(fr.pop(), Some(ids[0]));
        assert_eq!(fr.pop(), Some(ids[2]));
        assert_eq!(fr.pop(), Some(ids[3]));
    }

    #[test]
    fn clear_resets_sequence() {
        let ids = ids(2);
        let mut fr = Frontier::default();
        fr.push(ids[0], 1);
        fr.clear();
        assert_eq!(fr.len(), 0);
        assert_eq!(fr.seq, 0);
        fr.push(ids[1], 1);
        assert_eq!(fr.pop(), Some(ids[1]));
    }
}
