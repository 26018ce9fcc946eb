//! Lookup tables for REBA and RULA
//!
//! Every table is a fixed-size array read through `clamp_index`, so an
//! observation outside its documented range lands on the nearest edge of
//! the table instead of out of bounds.

/// Clamp a zero-based coordinate into `0..=max`.
pub(crate) fn clamp_index(value: i32, max: usize) -> usize {
    value.clamp(0, max as i32) as usize
}

/// REBA Group A: `[neck][trunk][legs]`
pub(crate) const REBA_TABLE_A: [[[i32; 4]; 5]; 3] = [
    [[1, 2, 3, 4], [2, 3, 4, 5], [2, 4, 5, 6], [3, 5, 6, 7], [4, 6, 7, 8]],
    [[1, 2, 3, 4], [3, 4, 5, 6], [4, 5, 6, 7], [5, 6, 7, 8], [6, 7, 8, 9]],
    [[3, 3, 5, 6], [4, 5, 6, 7], [5, 6, 7, 8], [6, 7, 8, 9], [7, 8, 9, 9]],
];

/// REBA Group B: `[upperArm][lowerArm][wrist]`
///
/// Only two wrist columns exist; the third wrist score reads as a missing
/// entry.
pub(crate) const REBA_TABLE_B: [[[i32; 2]; 3]; 6] = [
    [[1, 2], [1, 2], [3, 3]],
    [[1, 2], [2, 3], [3, 4]],
    [[3, 3], [3, 4], [5, 5]],
    [[4, 4], [4, 5], [5, 5]],
    [[6, 6], [6, 7], [7, 7]],
    [[7, 7], [7, 8], [8, 8]],
];

/// REBA Group C: `[scoreA - 1][scoreB - 1]`
pub(crate) const REBA_TABLE_C: [[i32; 12]; 12] = [
    [1, 1, 1, 2, 3, 3, 4, 5, 6, 7, 7, 7],
    [1, 2, 2, 3, 4, 4, 5, 6, 6, 7, 7, 8],
    [2, 3, 3, 3, 4, 5, 6, 7, 7, 8, 8, 8],
    [3, 4, 4, 4, 5, 6, 7, 8, 8, 9, 9, 9],
    [4, 4, 4, 5, 6, 7, 8, 8, 9, 9, 10, 10],
    [6, 6, 6, 7, 8, 8, 9, 9, 10, 10, 10, 10],
    [7, 7, 7, 8, 9, 9, 9, 10, 10, 11, 11, 11],
    [8, 8, 8, 9, 10, 10, 10, 10, 10, 11, 11, 11],
    [9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 12],
    [10, 10, 10, 11, 11, 11, 11, 12, 12, 12, 12, 12],
    [11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 12],
    [12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12],
];

/// RULA upper-limb table: `[upperArm + lowerArm - 2][wrist - 1]`
pub(crate) const RULA_TABLE_C: [[i32; 4]; 12] = [
    [1, 2, 3, 3],
    [2, 2, 3, 4],
    [3, 3, 3, 4],
    [3, 3, 4, 4],
    [4, 4, 4, 5],
    [4, 4, 4, 5],
    [5, 5, 5, 6],
    [5, 5, 5, 6],
    [6, 6, 6, 7],
    [6, 6, 7, 7],
    [7, 7, 7, 7],
    [7, 7, 7, 8],
];

/// RULA neck/trunk table: `[neck + trunk - 2][legs - 1]`
pub(crate) const RULA_TABLE_D: [[i32; 4]; 12] = [
    [1, 2, 3, 3],
    [2, 2, 3, 4],
    [3, 3, 3, 4],
    [3, 3, 4, 4],
    [4, 4, 4, 5],
    [4, 4, 4, 5],
    [5, 5, 5, 6],
    [5, 5, 5, 6],
    [6, 6, 6, 7],
    [6, 6, 7, 7],
    [7, 7, 7, 7],
    [7, 7, 7, 8],
];
