//! Body module - the snake's segments in a fixed-capacity ring
//!
//! Segments are stored in a ring of `capacity` slots (one per board tile).
//! The live range starts at `head` and runs `len` slots forward, so segment 0
//! is the head and segment `len - 1` the tail.
//!
//! Moving writes the new head into the slot just before the current head and
//! drops the tail off the live range. When the ring is full that slot *is*
//! the tail slot, so the tail record is recycled as the new head. Growing is a
//! length increment: the old tail slot stays live and keeps the coordinates
//! the tail just vacated. Nothing is allocated after construction.

use crate::board::Coords;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    slots: Vec<Coords>,
    head: usize,
    len: usize,
}

impl Body {
    /// A single-segment body at `start`, able to hold `capacity` segments
    pub fn new(capacity: usize, start: Coords) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize(capacity, start);
        Self {
            slots,
            head: 0,
            len: 1,
        }
    }

    /// A body with the given segments, head first
    ///
    /// Segments beyond `capacity` are dropped; an empty slice gives a body at (0, 0).
    pub fn from_segments(capacity: usize, segments: &[Coords]) -> Self {
        let mut body = Self::new(capacity, segments.first().copied().unwrap_or((0, 0)));
        for (slot, &seg) in body.slots.iter_mut().zip(segments) {
            *slot = seg;
        }
        body.len = segments.len().clamp(1, body.slots.len());
        body
    }

    /// Back to one segment at `start`, reusing the ring storage
    pub fn reset(&mut self, start: Coords) {
        self.head = 0;
        self.len = 1;
        self.slots[0] = start;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline(always)]
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % self.slots.len()
    }

    pub fn head(&self) -> Coords {
        self.slots[self.head]
    }

    pub fn tail(&self) -> Coords {
        self.slots[self.slot(self.len - 1)]
    }

    /// Segments from head to tail
    pub fn iter(&self) -> impl Iterator<Item = Coords> + '_ {
        (0..self.len).map(move |i| self.slots[self.slot(i)])
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.iter().any(|seg| seg == pos)
    }

    /// Whether any non-head segment shares the head's tile
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.iter().skip(1).any(|seg| seg == head)
    }

    /// Put a new head at `new_head`; returns the tile the tail vacated
    ///
    /// With `grow` the old tail stays in place as the new last segment, unless
    /// the ring is already full.
    pub fn advance(&mut self, new_head: Coords, grow: bool) -> Coords {
        let capacity = self.slots.len();
        let vacated = self.tail();

        self.head = (self.head + capacity - 1) % capacity;
        self.slots[self.head] = new_head;

        if grow && self.len < capacity {
            self.len += 1;
        }
        vacated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(body: &Body) -> Vec<Coords> {
        body.iter().collect()
    }

    #[test]
    fn advance_keeps_length() {
        let mut body = Body::from_segments(10, &[(2, 0), (1, 0), (0, 0)]);
        let vacated = body.advance((3, 0), false);
        assert_eq!(vacated, (0, 0));
        assert_eq!(segments(&body), vec![(3, 0), (2, 0), (1, 0)]);
    }

    #[test]
    fn advance_with_growth_keeps_vacated_tail() {
        let mut body = Body::from_segments(10, &[(2, 0), (1, 0)]);
        body.advance((3, 0), true);
        assert_eq!(segments(&body), vec![(3, 0), (2, 0), (1, 0)]);
        assert_eq!(body.tail(), (1, 0));
    }

    #[test]
    fn full_ring_recycles_tail_slot() {
        let mut body = Body::from_segments(3, &[(2, 0), (1, 0), (0, 0)]);
        assert!(body.is_full());
        body.advance((0, 1), true);
        assert_eq!(segments(&body), vec![(0, 1), (2, 0), (1, 0)]);
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn ring_wraps_many_times() {
        let mut body = Body::new(4, (0, 0));
        for x in 1..=50 {
            body.advance((x, 0), x % 17 == 0);
        }
        let expected: Vec<Coords> = (0..body.len() as i16).map(|i| (50 - i, 0)).collect();
        assert_eq!(segments(&body), expected);
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn reset_returns_to_one_segment() {
        let mut body = Body::from_segments(8, &[(4, 4), (4, 5), (4, 6)]);
        body.reset((1, 0));
        assert_eq!(segments(&body), vec![(1, 0)]);
        assert_eq!(body.capacity(), 8);
    }

    #[test]
    fn overlap_ignores_head_itself() {
        let body = Body::from_segments(8, &[(1, 1)]);
        assert!(!body.head_overlaps_body());
        let body = Body::from_segments(8, &[(1, 1), (1, 2), (1, 1)]);
        assert!(body.head_overlaps_body());
    }
}
