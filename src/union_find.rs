use std::cell::Cell;
use std::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Vector-based union-find over the elements `0 .. len`.
///
/// Each element stores its parent; a root is its own parent. Ranks
/// bound tree height and are only meaningful at roots. `find`
/// compresses paths through interior mutability, so queries take
/// `&self`.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnionFind {
    parents: Vec<Cell<usize>>,
    ranks: Vec<u8>,
    sets: usize,
}
// Invariant: self.parents.len() == self.ranks.len()

impl Debug for UnionFind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "UnionFind({:?})", self.parents)
    }
}

impl Default for UnionFind {
    fn default() -> Self {
        UnionFind::new(0)
    }
}

impl UnionFind {
    /// Creates a new union-find of `size` singleton sets.
    pub fn new(size: usize) -> Self {
        UnionFind {
            parents: (0..size).map(Cell::new).collect(),
            ranks: vec![0; size],
            sets: size,
        }
    }

    /// The number of elements in all the sets.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Is the union-find devoid of elements?
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Joins the sets of the two given elements.
    ///
    /// Returns whether anything changed: `true` if the sets were
    /// different, `false` if the elements were already connected.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.union_unchecked(a, b))
    }

    /// Finds the representative element for the given element’s set.
    ///
    /// Every element on the path to the root is relinked directly to
    /// the root.
    pub fn find(&self, element: usize) -> Result<usize> {
        self.check(element)?;
        Ok(self.root(element))
    }

    /// Determines whether two elements are in the same set.
    pub fn equiv(&self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// The rank of the given element’s root.
    pub fn rank_of(&self, element: usize) -> Result<u8> {
        let root = self.find(element)?;
        Ok(self.ranks[root])
    }

    /// Returns the representative of every element.
    pub fn to_vec(&self) -> Vec<usize> {
        (0 .. self.len()).map(|element| self.root(element)).collect()
    }

    // HELPERS

    pub(crate) fn union_unchecked(&mut self, a: usize, b: usize) -> bool {
        let a = self.root(a);
        let b = self.root(b);

        if a == b { return false; }

        let rank_a = self.ranks[a];
        let rank_b = self.ranks[b];

        if rank_a > rank_b {
            self.parents[b].set(a);
        } else if rank_b > rank_a {
            self.parents[a].set(b);
        } else {
            self.parents[b].set(a);
            self.ranks[a] = rank_a.saturating_add(1);
        }

        trace!("union: {} and {} now rooted at {}", a, b, self.root(a));
        self.sets -= 1;
        true
    }

    pub(crate) fn root(&self, element: usize) -> usize {
        let mut root = element;
        while self.parent(root) != root {
            root = self.parent(root);
        }

        let mut current = element;
        while current != root {
            let next = self.parent(current);
            self.parents[current].set(root);
            current = next;
        }

        root
    }

    fn parent(&self, element: usize) -> usize {
        self.parents[element].get()
    }

    fn check(&self, element: usize) -> Result<()> {
        if element < self.len() {
            Ok(())
        } else {
            Err(Error::ElementOutOfRange { element, len: self.len() })
        }
    }
}
