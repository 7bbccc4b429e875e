#![deny(rust_2018_idioms)]

pub mod process;

pub use process::function::process;

pub mod summarize;
pub use summarize::function::summarize;

pub mod resolve;
pub mod session;
pub mod sheet;
pub mod xlsx;

use crate::sheet::Cell;

/// The ten Persian digit glyphs in ascending order; a glyph's position in
/// this string is its ASCII digit value.
const PERSIAN_DIGITS: &str = "۰۱۲۳۴۵۶۷۸۹";

/// Normalize a monetary cell into whole rials.
///
/// Numbers are trusted as the amount, clamped into the non-negative integer
/// domain. Text is scanned character by character: Persian and ASCII digits
/// survive in their original order, every other character (thousand
/// separators, currency marks, whitespace, signs, decimal points) is dropped,
/// and the surviving digit sequence is read as one base-10 value. Anything
/// without digits, including empty cells, is 0. A minus sign is noise like
/// any other separator, so negative text becomes its positive magnitude.
pub fn normalize_amount(cell: &Cell) -> u64 {
    match cell {
        Cell::Empty => 0,
        Cell::Number(value) => round_to_u64(*value),
        Cell::Text(text) => {
            let mut amount = 0u64;
            for ch in text.chars() {
                let digit = match PERSIAN_DIGITS.chars().position(|glyph| glyph == ch) {
                    Some(value) => value as u64,
                    None => match ch.to_digit(10) {
                        Some(value) => u64::from(value),
                        None => continue,
                    },
                };
                amount = amount.saturating_mul(10).saturating_add(digit);
            }
            amount
        }
    }
}

fn round_to_u64(value: f64) -> u64 {
    const U64_MAX_F64: f64 = 18_446_744_073_709_551_615.0;
    if !value.is_finite() {
        return 0;
    }
    let rounded = value.round();
    if rounded <= 0.0 {
        0
    } else if rounded >= U64_MAX_F64 {
        u64::MAX
    } else {
        rounded as u64
    }
}
