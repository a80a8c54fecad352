//! Iterators over a borrowed [`BitArray`].
//!
//! Both iterators hold a shared reference to their source and a cursor.
//! Each call to [`BitArray::iter`] or [`BitArray::iter_ones`] starts a new,
//! independent pass. While an iterator is alive the borrow checker keeps
//! the source from being mutated.

use crate::core::bitarray::BitArray;
use std::iter::FusedIterator;

/// Iterator over `(index, bit)` pairs of a [`BitArray`], in index order.
///
/// Created by [`BitArray::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    bits: &'a BitArray,

    /// Next index yielded from the front.
    front: usize,

    /// One past the next index yielded from the back.
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(bits: &'a BitArray) -> Self {
        Self {
            bits,
            front: 0,
            back: bits.len(),
        }
    }

    fn pair(&self, index: usize) -> Option<(usize, bool)> {
        self.bits.get(index).ok().map(|bit| (index, bit))
    }
}

impl Iterator for Iter<'_> {
    type Item = (usize, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let index = self.front;
        self.front += 1;
        self.pair(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.pair(self.back)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the indices of set bits, ascending.
///
/// Created by [`BitArray::iter_ones`]. Each step is one
/// [`BitArray::next_set_bit`] call, so runs of zero bytes are skipped.
#[derive(Debug, Clone)]
pub struct IterOnes<'a> {
    bits: &'a BitArray,
    from: usize,
}

impl<'a> IterOnes<'a> {
    pub(crate) fn new(bits: &'a BitArray) -> Self {
        Self { bits, from: 0 }
    }
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.bits.next_set_bit(self.from) {
            Ok(Some(index)) => {
                self.from = index + 1;
                Some(index)
            }
            _ => {
                self.from = self.bits.len();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.bits.len() - self.from))
    }
}

impl FusedIterator for IterOnes<'_> {}
