//! A fixed-size coordinate set packed into an unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid is
//! stored row-major in `T`; bit `y * N + x` is set when `(x, y)` is a member.
//! The random generator keeps its free cells here and the targeting engine its
//! hunt queue.

use core::ops::{BitAnd, BitOr, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::cell::Coord;

/// Errors returned by bitboard construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: N*N={} exceeds T::BITS={}",
                    n * n,
                    capacity
                )
            }
        }
    }
}

/// Set of coordinates on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(c: Coord) -> Option<usize> {
        (c.x < N && c.y < N).then_some(c.y * N + c.x)
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Set holding every coordinate of the grid.
    #[inline]
    pub fn full() -> Self {
        BitBoard { bits: Self::mask() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; off-grid coordinates are never members.
    pub fn contains(&self, c: Coord) -> bool {
        match Self::index(c) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `c`. Returns `false` when `c` is off-grid and was ignored.
    pub fn insert(&mut self, c: Coord) -> bool {
        match Self::index(c) {
            Some(idx) => {
                self.bits = self.bits | (T::one() << idx);
                true
            }
            None => false,
        }
    }

    /// Removes `c`, returning whether it was a member.
    pub fn remove(&mut self, c: Coord) -> bool {
        let present = self.contains(c);
        if let Some(idx) = Self::index(c) {
            self.bits = self.bits & !(T::one() << idx);
        }
        present
    }

    /// Keeps only the members for which `keep` returns `true`.
    pub fn retain<F: FnMut(Coord) -> bool>(&mut self, mut keep: F) {
        for c in self.iter() {
            if !keep(c) {
                self.remove(c);
            }
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// The `n`-th member in row-major order.
    pub fn nth(&self, n: usize) -> Option<Coord> {
        self.iter().nth(n)
    }

    /// A uniformly chosen member, or `None` for the empty set.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.nth(rng.random_range(0..len))
    }

    /// Creates a set from coordinates; off-grid ones are skipped.
    pub fn from_coords<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::new();
        for c in iter {
            board.insert(c);
        }
        board
    }

    /// Iterator over members in row-major order.
    #[inline]
    pub fn iter(&self) -> Members<T, N> {
        Members {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for y in 0..N {
            for x in 0..N {
                let bit = if self.contains(Coord::new(x, y)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Members<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Members<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new(idx % N, idx / N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
