/// Combo multiplier: one extra step for every `step` completions in a row.
#[must_use]
pub const fn multiplier(combo: u32, step: u32) -> u32 {
    let step = if step == 0 { 1 } else { step };
    1 + combo / step
}

/// Points for clearing a sequence with `combo` completions already banked.
/// `doubled` covers both the easter egg and the double-points power-up;
/// the two never stack.
#[must_use]
pub const fn points(combo: u32, doubled: bool, step: u32) -> u32 {
    let base = if doubled { 2 } else { 1 };
    base * multiplier(combo, step)
}
