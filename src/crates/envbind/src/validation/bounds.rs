//! Natural ranges per numeric width

use crate::shape::Width;

static SIGNED: [(Width, i64, i64); 4] = [
    (Width::W8, i8::MIN as i64, i8::MAX as i64),
    (Width::W16, i16::MIN as i64, i16::MAX as i64),
    (Width::W32, i32::MIN as i64, i32::MAX as i64),
    (Width::W64, i64::MIN, i64::MAX),
];

static UNSIGNED: [(Width, u64); 4] = [
    (Width::W8, u8::MAX as u64),
    (Width::W16, u16::MAX as u64),
    (Width::W32, u32::MAX as u64),
    (Width::W64, u64::MAX),
];

/// Floats have no 8/16-bit forms; those widths fall back to 32 bits
static FLOAT: [(Width, f64); 4] = [
    (Width::W8, f32::MAX as f64),
    (Width::W16, f32::MAX as f64),
    (Width::W32, f32::MAX as f64),
    (Width::W64, f64::MAX),
];

fn lookup<T: Copy>(table: &[(Width, T)], width: Width) -> T {
    table
        .iter()
        .find(|(w, _)| *w == width)
        .map(|(_, value)| *value)
        .unwrap_or(table[table.len() - 1].1)
}

/// `(min, max)` of a signed integer of `width` bits
pub fn signed_range(width: Width) -> (i64, i64) {
    SIGNED
        .iter()
        .find(|(w, _, _)| *w == width)
        .map(|(_, min, max)| (*min, *max))
        .unwrap_or((i64::MIN, i64::MAX))
}

/// `(0, max)` of an unsigned integer of `width` bits
pub fn unsigned_range(width: Width) -> (u64, u64) {
    (0, lookup(&UNSIGNED, width))
}

/// `(-max, max)` of a float of `width` bits
pub fn float_range(width: Width) -> (f64, f64) {
    let max = lookup(&FLOAT, width);
    (-max, max)
}
