use alloc::vec::Vec;

/// Side of the standard board.
pub const BOARD_SIZE: usize = 6;
/// Largest side whose cells fit the `u128` cell sets used by [`Board`](crate::Board).
pub const MAX_BOARD_SIZE: usize = 11;
/// Ship lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Random placement attempts allowed for one board before it is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 2000;
/// Boards generated before setup gives up.
pub const MAX_BOARD_ATTEMPTS: u32 = 1000;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}

/// Parameters of a game and of its board generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: u32,
    pub max_board_attempts: u32,
}

impl GameConfig {
    /// Standard fleet and limits on a board of side `board_size`.
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_board_attempts: MAX_BOARD_ATTEMPTS,
        }
    }
}

/// Seeded generator when `seed` is given, otherwise one seeded from the OS.
#[cfg(feature = "std")]
pub fn rng_from_seed(seed: Option<u64>) -> rand::rngs::SmallRng {
    use rand::SeedableRng;

    match seed {
        Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            rand::rngs::SmallRng::from_rng(&mut seed_rng)
        }
    }
}
