//! The board: a flat row-major grid of cells.
//!
//! ## Layout
//!
//! Cells are stored in a single `Vec` indexed by `row * cols + col`, giving
//! O(1) bounds checks and neighbor lookups; the laser resolver performs one
//! per step. Each cell carries a terrain tag and at most one piece. A piece
//! exists only inside a cell, never off-board.
//!
//! Mutation goes through [`Board::place`], [`Board::relocate`],
//! [`Board::rotate`] and [`Board::remove`], which enforce the structural
//! constraints (bounds, single occupancy, terrain ownership). Rule-level
//! legality (turn order, adjacency, piece movability) lives in
//! `rules::validate`.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Position, Rotation};
use super::piece::{Piece, PieceKind};
use super::player::Player;
use crate::error::IllegalMove;

/// Rows on the standard board.
pub const STANDARD_ROWS: u8 = 8;
/// Columns on the standard board.
pub const STANDARD_COLS: u8 = 10;

/// What a cell's ground permits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Any piece may occupy the cell.
    Open,
    /// Only the tagged player's pieces may occupy the cell.
    RestrictedTo(Player),
}

impl Terrain {
    /// Whether a piece owned by `player` may occupy this terrain.
    #[must_use]
    pub fn admits(self, player: Player) -> bool {
        match self {
            Terrain::Open => true,
            Terrain::RestrictedTo(owner) => owner == player,
        }
    }
}

/// One board cell: terrain plus at most one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: Terrain,
    pub piece: Option<Piece>,
}

impl Cell {
    const fn open() -> Self {
        Self {
            terrain: Terrain::Open,
            piece: None,
        }
    }
}

/// The playing grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size, all terrain open.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![Cell::open(); rows as usize * cols as usize],
        }
    }

    /// Create the standard empty 8×10 board.
    ///
    /// Column 0 is reserved for Silver and the last column for Red, so each
    /// player's laser source corner lies in their own restricted file.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::new(STANDARD_ROWS, STANDARD_COLS);
        for row in 0..STANDARD_ROWS {
            board.set_terrain(Position::new(row, 0), Terrain::RestrictedTo(Player::Silver));
            board.set_terrain(
                Position::new(row, STANDARD_COLS - 1),
                Terrain::RestrictedTo(Player::Red),
            );
        }
        board
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether `position` lies on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Upper bound on laser path length: `2 × (rows + cols)`.
    ///
    /// A reflecting piece can never re-aim the beam through a previously
    /// occupied cell in a way that revisits a (cell, direction) pair before
    /// producing a resolution, so any longer walk is an engine defect.
    #[must_use]
    pub fn step_budget(&self) -> usize {
        2 * (self.rows as usize + self.cols as usize)
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.cols as usize + position.col as usize
    }

    /// The cell at `position`, if on the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.contains(position).then(|| &self.cells[self.index(position)])
    }

    /// The terrain at `position`, if on the board.
    #[must_use]
    pub fn terrain(&self, position: Position) -> Option<Terrain> {
        self.cell(position).map(|cell| cell.terrain)
    }

    /// The piece at `position`, if any.
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.cell(position).and_then(|cell| cell.piece.as_ref())
    }

    /// Tag the terrain of a cell. Panics off-board; layout-construction only.
    pub fn set_terrain(&mut self, position: Position, terrain: Terrain) {
        assert!(self.contains(position), "terrain tag off the board");
        let index = self.index(position);
        self.cells[index].terrain = terrain;
    }

    /// The neighboring on-board position one cell in `direction`.
    #[must_use]
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .offset(direction)
            .filter(|next| self.contains(*next))
    }

    /// Put a piece onto an empty, admitting cell.
    pub fn place(&mut self, piece: Piece, position: Position) -> Result<(), IllegalMove> {
        if !self.contains(position) {
            return Err(IllegalMove::OutOfBounds(position));
        }
        let index = self.index(position);
        let cell = &self.cells[index];
        if cell.piece.is_some() {
            return Err(IllegalMove::CellOccupied(position));
        }
        if !cell.terrain.admits(piece.owner) {
            return Err(IllegalMove::SquareForbidden(position));
        }
        self.cells[index].piece = Some(piece);
        Ok(())
    }

    /// Move the piece at `from` to `to`, re-checking occupancy and terrain
    /// at the target. The board stays unchanged on failure.
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<(), IllegalMove> {
        if !self.contains(from) {
            return Err(IllegalMove::OutOfBounds(from));
        }
        if !self.contains(to) {
            return Err(IllegalMove::OutOfBounds(to));
        }
        let piece = self
            .piece_at(from)
            .copied()
            .ok_or(IllegalMove::NoPieceAtSource(from))?;
        self.place(piece, to)?;
        let from_index = self.index(from);
        self.cells[from_index].piece = None;
        Ok(())
    }

    /// Rotate the piece at `position` by `rotation`.
    pub fn rotate(&mut self, position: Position, rotation: Rotation) -> Result<(), IllegalMove> {
        if !self.contains(position) {
            return Err(IllegalMove::OutOfBounds(position));
        }
        let index = self.index(position);
        let piece = self.cells[index]
            .piece
            .ok_or(IllegalMove::NoPieceAtSource(position))?;
        if !piece.kind.is_rotatable() {
            return Err(IllegalMove::NotRotatable(piece.kind));
        }
        self.cells[index].piece = Some(piece.rotated(rotation));
        Ok(())
    }

    /// Take the piece at `position` off the board.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        if !self.contains(position) {
            return None;
        }
        let index = self.index(position);
        self.cells[index].piece.take()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells.iter().enumerate().map(|(index, cell)| {
            let row = (index / self.cols as usize) as u8;
            let col = (index % self.cols as usize) as u8;
            (Position::new(row, col), cell)
        })
    }

    /// All occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> {
        self.cells()
            .filter_map(|(position, cell)| cell.piece.as_ref().map(|piece| (position, piece)))
    }

    /// Count the pieces of `kind` owned by `player`.
    #[must_use]
    pub fn count_pieces(&self, player: Player, kind: PieceKind) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.owner == player && piece.kind == kind)
            .count()
    }

    /// Locate `player`'s laser source.
    #[must_use]
    pub fn laser_source(&self, player: Player) -> Option<(Position, Piece)> {
        self.pieces()
            .find(|(_, piece)| piece.owner == player && piece.kind == PieceKind::LaserSource)
            .map(|(position, piece)| (position, *piece))
    }
}
