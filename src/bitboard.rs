use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Side length of the (square) playing grid.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the grid.
pub const BOARD_AREA: usize = BOARD_SIZE * BOARD_SIZE;

/// One bit per cell of the 8×8 grid, row-major: `index = row * 8 + col`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u64,
}

/// Every cell except column 0 (masks off wraps when stepping right).
const NOT_COL0: Bitboard = Bitboard::from_bits(!0x0101_0101_0101_0101);

/// Every cell except column 7 (masks off wraps when stepping left).
const NOT_COL_LAST: Bitboard = Bitboard::from_bits(!0x8080_8080_8080_8080);

impl Bitboard {
    /// All bits zero.
    #[inline]
    pub const fn empty() -> Self {
        Bitboard { bits: 0 }
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Bitboard { bits }
    }

    /// Single bit set at `index`.
    #[inline]
    pub fn single(index: usize) -> Self {
        debug_assert!(index < BOARD_AREA);
        Bitboard { bits: 1u64 << index }
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < BOARD_AREA);
        (self.bits >> index) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < BOARD_AREA);
        self.bits |= 1u64 << index;
    }

    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < BOARD_AREA);
        self.bits &= !(1u64 << index);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Population count.
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Index of the lowest set bit, or `None` if empty.
    #[inline]
    pub fn lowest_bit_index(&self) -> Option<usize> {
        if self.bits == 0 {
            None
        } else {
            Some(self.bits.trailing_zeros() as usize)
        }
    }

    /// Iterate over indices of set bits in ascending (row-major) order.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator {
        BitIterator { bits: self.bits }
    }

    /// All orthogonal neighbors of every set bit, clipped to the grid.
    /// Neighbors never wrap across an edge.
    #[inline]
    pub fn neighbors(&self) -> Bitboard {
        let right = Bitboard::from_bits(self.bits << 1) & NOT_COL0;
        let left = Bitboard::from_bits(self.bits >> 1) & NOT_COL_LAST;
        let down = Bitboard::from_bits(self.bits << BOARD_SIZE);
        let up = Bitboard::from_bits(self.bits >> BOARD_SIZE);
        right | left | down | up
    }

    /// Flood-fill from `seed` through `mask`. Returns the connected component
    /// of `seed` within `mask`.
    #[inline]
    pub fn flood_fill(seed: Bitboard, mask: Bitboard) -> Bitboard {
        let mut filled = seed & mask;
        loop {
            let expanded = (filled | filled.neighbors()) & mask;
            if expanded == filled {
                return filled;
            }
            filled = expanded;
        }
    }

    /// Split the set bits into 4-connected components, in order of their
    /// lowest cell.
    pub fn components(&self) -> Components {
        Components { remaining: *self }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.bits |= rhs.bits;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard { bits: !self.bits }
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(bit)
    }
}

/// Iterator over the connected components of a `Bitboard`.
pub struct Components {
    remaining: Bitboard,
}

impl Iterator for Components {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Bitboard> {
        let seed = self.remaining.lowest_bit_index()?;
        let group = Bitboard::flood_fill(Bitboard::single(seed), self.remaining);
        self.remaining &= !group;
        Some(group)
    }
}
