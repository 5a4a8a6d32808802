//! Per-digit operation tables
//!
//! Each table maps a pair of digits to an [`OpResult`]. Addition and
//! multiplication are commutative, so their tables are upper-triangular: only
//! keys with `second >= first` are populated. [`DigitTable::get`] exposes the
//! raw triangular view; [`DigitTable::lookup`] swaps operands before indexing.

use crate::constants::{DIGIT_BASE, FULL_TABLE_LEN, TRIANGULAR_TABLE_LEN};
use crate::domain::digit::{Digit, OpResult};
use std::fmt;

const N: usize = DIGIT_BASE as usize;

/// Digit operation covered by a table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigitOp {
    Add,
    Sub,
    Mul,
}

impl DigitOp {
    /// Whether operands may be swapped without changing the result
    pub const fn is_commutative(self) -> bool {
        matches!(self, DigitOp::Add | DigitOp::Mul)
    }

    /// Short name used in structured records
    pub const fn name(self) -> &'static str {
        match self {
            DigitOp::Add => "add",
            DigitOp::Sub => "sub",
            DigitOp::Mul => "mul",
        }
    }

    /// Compute `a op b` as result digit + carry (or borrow)
    pub fn apply(self, a: Digit, b: Digit) -> OpResult {
        let (a, b) = (a.get(), b.get());
        match self {
            DigitOp::Add => OpResult::from_sum(u32::from(a + b)),
            DigitOp::Sub => OpResult::from_difference(i32::from(a) - i32::from(b)),
            DigitOp::Mul => OpResult::from_sum(u32::from(a * b)),
        }
    }

    /// Second operands stored for first operand `a`
    pub fn second_operands(self, a: Digit) -> impl Iterator<Item = Digit> + Clone {
        let start = if self.is_commutative() { a } else { Digit::ZERO };
        Digit::range_from(start)
    }
}

impl fmt::Display for DigitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable table of one digit operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitTable {
    op: DigitOp,
    cells: [[OpResult; N]; N],
}

impl DigitTable {
    /// Build the table for `op`
    pub fn build(op: DigitOp) -> Self {
        // Cells below the diagonal of a triangular table stay at the zero
        // placeholder and are never returned.
        let mut cells = [[OpResult::from_sum(0); N]; N];
        for a in Digit::all() {
            for b in op.second_operands(a) {
                cells[a.index()][b.index()] = op.apply(a, b);
            }
        }
        Self { op, cells }
    }

    /// Addition table (upper-triangular)
    pub fn addition() -> Self {
        Self::build(DigitOp::Add)
    }

    /// Subtraction table (full)
    pub fn subtraction() -> Self {
        Self::build(DigitOp::Sub)
    }

    /// Multiplication table (upper-triangular)
    pub fn multiplication() -> Self {
        Self::build(DigitOp::Mul)
    }

    pub fn op(&self) -> DigitOp {
        self.op
    }

    /// Whether only `second >= first` keys are stored
    pub fn is_triangular(&self) -> bool {
        self.op.is_commutative()
    }

    /// Raw lookup
    ///
    /// Returns `None` for `b < a` on a triangular table. Callers holding such a
    /// pair must swap the operands first, or use [`DigitTable::lookup`].
    pub fn get(&self, a: Digit, b: Digit) -> Option<OpResult> {
        if self.is_triangular() && b < a {
            None
        } else {
            Some(self.cells[a.index()][b.index()])
        }
    }

    /// Symmetric lookup, swapping operands of a triangular table when `b < a`
    pub fn lookup(&self, a: Digit, b: Digit) -> OpResult {
        let (a, b) = if self.is_triangular() && b < a {
            (b, a)
        } else {
            (a, b)
        };
        self.cells[a.index()][b.index()]
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        if self.is_triangular() {
            TRIANGULAR_TABLE_LEN
        } else {
            FULL_TABLE_LEN
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rows in increasing first-operand order
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        Digit::all().map(move |first| TableRow {
            op: self.op,
            first,
            cells: &self.cells[first.index()],
        })
    }

    /// All stored entries as `(first, second, result)`, in key order
    pub fn entries(&self) -> impl Iterator<Item = (Digit, Digit, OpResult)> + '_ {
        self.rows()
            .flat_map(|row| row.entries().map(move |(b, r)| (row.first(), b, r)))
    }
}

/// Stored entries of one table row
#[derive(Clone, Copy, Debug)]
pub struct TableRow<'a> {
    op: DigitOp,
    first: Digit,
    cells: &'a [OpResult; N],
}

impl<'a> TableRow<'a> {
    pub fn op(&self) -> DigitOp {
        self.op
    }

    /// First operand shared by the row
    pub fn first(&self) -> Digit {
        self.first
    }

    /// `(second, result)` pairs in increasing second-operand order
    pub fn entries(self) -> impl Iterator<Item = (Digit, OpResult)> + 'a {
        let cells = self.cells;
        self.op
            .second_operands(self.first)
            .map(move |b| (b, cells[b.index()]))
    }
}
