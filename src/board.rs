//! Game board state: ship placement with the no-touching rule, and shot
//! resolution.
//!
//! Two cell sets keep the board's "busy" cells apart by purpose:
//! `reserved` holds ship cells and their contours and only matters while
//! ships are being placed; `targeted` holds every cell that was shot at or
//! revealed around a destroyed ship and only matters for shots.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, PlacementError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

type BB = BitBoard<u128>;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Unknown water.
    Empty,
    /// Intact ship cell; never shown on a hidden board.
    Ship,
    /// Ship cell that was shot.
    Hit,
    /// Water that was shot.
    Miss,
    /// Water next to a destroyed ship, revealed when it sank.
    Contour,
}

/// Display view of a board. Ships are masked out when the board is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub size: usize,
    pub hidden: bool,
    pub cells: Vec<Vec<CellState>>,
}

pub struct Board {
    size: usize,
    hidden: bool,
    ships: Vec<Ship>,
    destroyed: usize,
    ship_map: BB,
    reserved: BB,
    targeted: BB,
    hits: BB,
    misses: BB,
    contour: BB,
}

impl Board {
    /// Create an empty, visible board of side `size`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        let empty = BB::try_new(size)?;
        Ok(Board {
            size,
            hidden: false,
            ships: Vec::new(),
            destroyed: 0,
            ship_map: empty,
            reserved: empty,
            targeted: empty,
            hits: empty,
            misses: empty,
            contour: empty,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether renderers must hide intact ships.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// True when `coord` lies outside the grid.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        let n = self.size as i32;
        !(0..n).contains(&coord.row()) || !(0..n).contains(&coord.col())
    }

    fn index(&self, coord: Coordinate) -> Option<(usize, usize)> {
        if self.is_out_of_bounds(coord) {
            None
        } else {
            Some((coord.row() as usize, coord.col() as usize))
        }
    }

    /// Returns `true` once every ship is destroyed.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// True if a shot at `coord` would be rejected as a repeat.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .is_some_and(|(r, c)| self.targeted.get(r, c).unwrap_or(false))
    }

    /// Put `ship` on the board. Every cell must be on the grid and free of
    /// other ships and their contours; on success the ship's own contour is
    /// reserved so that later ships cannot touch it.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let mut cells = Vec::with_capacity(ship.length());
        for cell in ship.cells() {
            cells.push(self.index(cell).ok_or(PlacementError::OutOfBounds(cell))?);
        }
        let hull = BB::from_cells(self.size, cells)?;
        if let Some((r, c)) = (hull & self.reserved).iter_set_bits().next() {
            return Err(PlacementError::CellOccupied(Coordinate::new(r as i32, c as i32)).into());
        }
        let halo = self.halo(&ship)?;
        self.ship_map |= hull;
        self.reserved |= halo;
        self.ships.push(ship);
        trace!("placed {:?}", ship);
        Ok(())
    }

    /// On-board cells of the 3×3 blocks around every cell of `ship`, the
    /// ship's own cells included.
    fn halo(&self, ship: &Ship) -> Result<BB, BoardError> {
        let cells = ship
            .cells()
            .flat_map(Coordinate::neighbourhood)
            .filter_map(|near| self.index(near));
        Ok(BB::from_cells(self.size, cells)?)
    }

    /// Reveal the contour of a destroyed ship: halo cells not yet shot
    /// become visible markers and can no longer be targeted.
    fn reveal_contour(&mut self, ship: &Ship) -> Result<(), BoardError> {
        let halo = self.halo(ship)?;
        for (r, c) in halo.iter_set_bits() {
            if !self.targeted.get(r, c)? {
                self.contour.set(r, c)?;
                self.targeted.set(r, c)?;
            }
        }
        Ok(())
    }

    /// Fire at `coord`, updating ship health and the display.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        let (r, c) = self.index(coord).ok_or(BoardError::OutOfBounds(coord))?;
        if self.targeted.get(r, c)? {
            return Err(BoardError::AlreadyTargeted(coord));
        }
        self.targeted.set(r, c)?;

        if self.ship_map.get(r, c)? {
            if let Some(i) = self.ships.iter().position(|s| s.is_hit_by(coord)) {
                self.hits.set(r, c)?;
                self.ships[i].register_hit();
                let ship = self.ships[i];
                if ship.is_sunk() {
                    self.destroyed += 1;
                    self.reveal_contour(&ship)?;
                    debug!(
                        "ship destroyed at {} ({}/{} sunk)",
                        coord,
                        self.destroyed,
                        self.ships.len()
                    );
                    return Ok(ShotOutcome::Destroyed);
                }
                debug!("ship hit at {}, health {}", coord, ship.health());
                return Ok(ShotOutcome::Hit);
            }
        }
        self.misses.set(r, c)?;
        debug!("miss at {}", coord);
        Ok(ShotOutcome::Miss)
    }

    /// Forget which cells were shot at. Called once, between fleet placement
    /// and the first shot; calling it mid-game would allow repeat shots.
    pub fn reset_targeting(&mut self) {
        self.targeted.clear_all();
    }

    /// State of a single cell, ships included regardless of visibility.
    pub fn cell_state(&self, coord: Coordinate) -> Option<CellState> {
        let (r, c) = self.index(coord)?;
        let is = |bb: &BB| bb.get(r, c).unwrap_or(false);
        let state = if is(&self.hits) {
            CellState::Hit
        } else if is(&self.misses) {
            CellState::Miss
        } else if is(&self.contour) {
            CellState::Contour
        } else if is(&self.ship_map) {
            CellState::Ship
        } else {
            CellState::Empty
        };
        Some(state)
    }

    /// Grid of cell states as a renderer should show it.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = vec![vec![CellState::Empty; self.size]; self.size];
        let mut layers = Vec::with_capacity(4);
        if !self.hidden {
            layers.push((&self.ship_map, CellState::Ship));
        }
        // later layers win: hits > misses > contour > ships
        layers.push((&self.contour, CellState::Contour));
        layers.push((&self.misses, CellState::Miss));
        layers.push((&self.hits, CellState::Hit));
        for (layer, state) in layers {
            for (r, c) in layer.iter_set_bits() {
                cells[r][c] = state;
            }
        }
        BoardSnapshot {
            size: self.size,
            hidden: self.hidden,
            cells,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ship_map: {:?},\n  targeted: {:?},\n  hits: {:?},\n  misses: {:?},\n  destroyed: {},\n  ships: {:?}\n}}",
            self.size,
            self.ship_map,
            self.targeted,
            self.hits,
            self.misses,
            self.destroyed,
            self.ships
        )
    }
}
