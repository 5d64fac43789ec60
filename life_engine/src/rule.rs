// rule.rs - B3/S23 transition rule

/// Next state of a cell given its current state and live neighbour count.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_cell_is_born_only_on_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead cell with {n} neighbours");
        }
    }

    #[test]
    fn live_cell_survives_on_two_or_three() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live cell with {n} neighbours");
        }
    }
}
