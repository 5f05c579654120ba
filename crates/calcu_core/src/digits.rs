//! Column alignment shared by the hint analyzers.

/// Decimal digits of `n`, most significant first.
pub fn digits_of(n: u64) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

/// Two operands written one above the other, zero-padded on the left to a
/// common width. Index 0 is the most significant column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub top: Vec<u8>,
    pub bottom: Vec<u8>,
}

impl Columns {
    /// Aligns two operands by place value.
    pub fn align(top: u64, bottom: u64) -> Self {
        let mut top = digits_of(top);
        let mut bottom = digits_of(bottom);
        let width = top.len().max(bottom.len());
        pad_left(&mut top, width);
        pad_left(&mut bottom, width);
        Self { top, bottom }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.top.len()
    }

    /// Place value (0 = ones) of column `index`.
    pub fn place_of(&self, index: usize) -> usize {
        self.width() - 1 - index
    }
}

fn pad_left(digits: &mut Vec<u8>, width: usize) {
    let missing = width - digits.len();
    digits.splice(0..0, std::iter::repeat_n(0, missing));
}
