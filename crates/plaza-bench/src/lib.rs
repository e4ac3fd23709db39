//! Benchmark profiles for the Plaza occupancy board.
//!
//! - [`reference_profile`]: 64x64 board with 64 boxes
//! - [`stress_profile`]: 256x256 board with 1024 boxes
//! - [`spread_positions`]: deterministic, collision-free box placement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use plaza_board::BoardConfig;
use plaza_core::Position;

/// A 64x64 board whose roster holds boxes `0..64` in four groups.
pub fn reference_profile() -> BoardConfig {
    BoardConfig::new(64, 64).with_roster(BoardConfig::groups(0, &[16; 4]))
}

/// A 256x256 board whose roster holds boxes `0..1024` in sixteen groups.
pub fn stress_profile() -> BoardConfig {
    BoardConfig::new(256, 256).with_roster(BoardConfig::groups(0, &[64; 16]))
}

/// `n` distinct cells on a `width` x `height` board, derived from `seed`.
///
/// Uses a multiplicative hash with linear probing, so the same inputs
/// always give the same cells.
pub fn spread_positions(width: u32, height: u32, n: usize, seed: u64) -> Vec<Position> {
    let cells = u64::from(width) * u64::from(height);
    let n = n.min(cells as usize);
    let mut taken = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    for i in 0..n as u64 {
        let mut idx = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % cells;
        while !taken.insert(idx) {
            idx = (idx + 1) % cells;
        }
        out.push(Position::new(
            (idx % u64::from(width)) as i32,
            (idx / u64::from(width)) as i32,
        ));
    }
    out
}
