use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::player::Player;

/// Computer opponent that shoots uniformly at random over the whole grid
/// and leaves repeat detection to the board.
pub struct AiPlayer {
    name: &'static str,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::named("Computer")
    }

    /// Same strategy under another name, e.g. when two computers play.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        self.name
    }

    fn choose_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate> {
        let n = enemy.size() as i32;
        let target = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
        debug!("{} aims at {}", self.name, target);
        Ok(target)
    }
}
