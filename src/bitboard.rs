//! A square bitboard with a side length chosen at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is packed row-major into `W` words of the unsigned integer `T`, so any
//! side with `N * N <= W * T::BITS` fits. Game grids use the [`Cells`]
//! alias, which is large enough for every legal grid size.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested side N needs N*N bits, more than the `W` words can hold.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds capacity={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An N×N bitboard stored in `W` words of the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const W: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    side: usize,
    words: [T; W],
}

/// Bitboard wide enough for any grid up to 16×16.
pub type Cells = BitBoard<u64, 4>;

impl<T, const W: usize> BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Total number of bits available across all words.
    pub const CAPACITY: usize = Self::WORD_BITS * W;

    /// Fallible constructor: returns `Err(SizeTooLarge)` if side*side exceeds capacity.
    pub fn try_new(side: usize) -> Result<Self, BitBoardError> {
        if side * side > Self::CAPACITY {
            return Err(BitBoardError::SizeTooLarge {
                n: side,
                capacity: Self::CAPACITY,
            });
        }
        Ok(BitBoard {
            side,
            words: [T::zero(); W],
        })
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(side: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(side)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Side length N of the grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Returns true if any cell is set on both boards.
    pub fn intersects(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| !(*a & *b).is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(!(self.words[word] & bit).is_zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] | bit;
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] & !bit;
        Ok(())
    }

    /// Iterator over the set bits of the board in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, W> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, T), BitBoardError> {
        if row >= self.side || col >= self.side {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.side + col;
        Ok((idx / Self::WORD_BITS, T::one() << (idx % Self::WORD_BITS)))
    }

    #[inline]
    fn bit_at(&self, idx: usize) -> bool {
        let bit = T::one() << (idx % Self::WORD_BITS);
        !(self.words[idx / Self::WORD_BITS] & bit).is_zero()
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.side {
            for c in 0..self.side {
                let bit = if self.bit_at(r * self.side + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.side {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T, const W: usize> fmt::Debug for BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", self.side, self.side)?;
        self.write_grid(f)
    }
}

impl<T, const W: usize> fmt::Display for BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f)
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const W: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, W>,
    idx: usize,
}

impl<'a, T, const W: usize> Iterator for SetBits<'a, T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let side = self.board.side;
        while self.idx < side * side {
            let idx = self.idx;
            self.idx += 1;
            if self.board.bit_at(idx) {
                return Some((idx / side, idx % side));
            }
        }
        None
    }
}

/// Bitwise AND of two boards with the same side.
impl<T, const W: usize> BitAnd for BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(mut self, rhs: Self) -> Self {
        debug_assert_eq!(self.side, rhs.side);
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a = *a & *b;
        }
        self
    }
}

/// Bitwise OR of two boards with the same side.
impl<T, const W: usize> BitOr for BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl<T, const W: usize> BitOrAssign for BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.side, rhs.side);
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a = *a | *b;
        }
    }
}
