use rand::rngs::SmallRng;

use crate::board::Board;
use crate::coordinate::Coordinate;

/// Interface implemented by different player types.
///
/// A player only decides where to shoot. The game owns both boards, fires
/// the shot and asks again when the board rejects the target.
pub trait Player {
    /// Name used when reporting moves.
    fn name(&self) -> &str;

    /// Choose the next target on `enemy`. The target is not required to be
    /// valid; an error here means no move can be produced at all.
    fn choose_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate>;
}
