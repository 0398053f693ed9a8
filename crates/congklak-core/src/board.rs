//! The Congklak board: pit and store seed counts, side to move, and game status.

use std::fmt;
use std::ops::Range;

use crate::error::BoardError;
use crate::player::Player;
use crate::status::GameStatus;

/// Largest supported number of holes per side.
pub const MAX_HOLES: usize = 15;

/// Cell capacity of the backing array: both sides' holes plus two stores.
pub const MAX_CELLS: usize = 2 * (MAX_HOLES + 1);

/// Holes per side on a standard board.
pub const DEFAULT_HOLES: usize = 7;

/// Seeds per hole at the start of a standard game.
pub const DEFAULT_SEEDS: u32 = 7;

/// Complete game state.
///
/// Cells are laid out as one cyclic sequence: player one's holes, player one's
/// store, player two's holes, player two's store. Sowing walks this sequence in
/// increasing index order. The array is sized for [`MAX_HOLES`]; cells past
/// [`cell_count()`](BoardState::cell_count) are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    /// Seed count per cell.
    cells: [u32; MAX_CELLS],
    /// Holes per side.
    holes: u8,
    /// Which player moves next.
    current_player: Player,
    /// Outcome so far.
    status: GameStatus,
}

impl BoardState {
    /// Return the starting position for `holes` holes per side, each holding
    /// `seeds` seeds, with both stores empty and player one to move.
    pub fn initial(holes: usize, seeds: u32) -> Result<BoardState, BoardError> {
        check_holes(holes)?;
        let total = 2 * holes as u64 * seeds as u64;
        if total > u32::MAX as u64 {
            return Err(BoardError::SeedOverflow { holes, seeds });
        }

        let mut board = BoardState::empty(holes);
        for player in Player::ALL {
            for idx in board.hole_range(player) {
                board.cells[idx] = seeds;
            }
        }
        board.settle();
        Ok(board)
    }

    /// Return the standard 7-hole, 7-seed starting position.
    pub fn standard() -> BoardState {
        let mut board = BoardState::empty(DEFAULT_HOLES);
        for player in Player::ALL {
            for idx in board.hole_range(player) {
                board.cells[idx] = DEFAULT_SEEDS;
            }
        }
        board
    }

    /// Construct a board from per-side contents. Used by notation parsing.
    ///
    /// The terminal check is run on the result, so a position with an empty
    /// side comes back already swept and decided.
    pub(crate) fn from_sides(
        one_holes: &[u32],
        one_store: u32,
        two_holes: &[u32],
        two_store: u32,
        current_player: Player,
    ) -> Result<BoardState, BoardError> {
        let holes = one_holes.len();
        check_holes(holes)?;
        debug_assert_eq!(holes, two_holes.len());

        let total = one_holes
            .iter()
            .chain(two_holes)
            .chain([&one_store, &two_store])
            .try_fold(0u32, |acc, &n| acc.checked_add(n));
        if total.is_none() {
            let seeds = one_holes.iter().chain(two_holes).copied().max().unwrap_or(0);
            return Err(BoardError::SeedOverflow { holes, seeds });
        }

        let mut board = BoardState::empty(holes);
        board.cells[..holes].copy_from_slice(one_holes);
        board.cells[holes] = one_store;
        board.cells[holes + 1..2 * holes + 1].copy_from_slice(two_holes);
        board.cells[2 * holes + 1] = two_store;
        board.current_player = current_player;
        board.settle();
        Ok(board)
    }

    fn empty(holes: usize) -> BoardState {
        BoardState {
            cells: [0; MAX_CELLS],
            holes: holes as u8,
            current_player: Player::One,
            status: GameStatus::Ongoing,
        }
    }

    /// Holes per side.
    #[inline]
    pub fn holes_per_side(&self) -> usize {
        self.holes as usize
    }

    /// Number of cells in use: `2 * (holes + 1)`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        2 * (self.holes as usize + 1)
    }

    /// All cells in sowing order.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells[..self.cell_count()]
    }

    /// Seed count of one cell by absolute index.
    #[inline]
    pub fn cell(&self, idx: usize) -> u32 {
        self.cells()[idx]
    }

    /// Absolute index of `player`'s store.
    #[inline]
    pub fn store_index(&self, player: Player) -> usize {
        match player {
            Player::One => self.holes as usize,
            Player::Two => 2 * self.holes as usize + 1,
        }
    }

    /// Absolute index of `player`'s first hole.
    #[inline]
    pub fn hole_start(&self, player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => self.holes as usize + 1,
        }
    }

    /// Absolute indices of `player`'s holes.
    #[inline]
    pub fn hole_range(&self, player: Player) -> Range<usize> {
        let start = self.hole_start(player);
        start..start + self.holes as usize
    }

    /// `player`'s holes in sowing order.
    #[inline]
    pub fn holes(&self, player: Player) -> &[u32] {
        &self.cells[self.hole_range(player)]
    }

    /// Seeds in `player`'s store.
    #[inline]
    pub fn store(&self, player: Player) -> u32 {
        self.cells[self.store_index(player)]
    }

    /// Seeds still in play on `player`'s side.
    pub fn seeds_on_side(&self, player: Player) -> u32 {
        self.holes(player).iter().sum()
    }

    /// Return `true` if every hole on `player`'s side is empty.
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.holes(player).iter().all(|&n| n == 0)
    }

    /// Total seeds on the board, stores included.
    pub fn total_seeds(&self) -> u32 {
        self.cells().iter().sum()
    }

    /// Absolute index of the hole facing hole `idx`.
    ///
    /// The board is mirror-symmetric: hole 0 faces hole `2H`, hole 1 faces
    /// `2H - 1`, and so on.
    #[inline]
    pub fn opposite(&self, idx: usize) -> usize {
        2 * self.holes as usize - idx
    }

    /// Which player moves next.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The game status.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return `true` once the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Return the same position with the other player to move.
    ///
    /// For a side to move that has no legal moves in a position that is not
    /// yet decided.
    pub fn pass(&self) -> BoardState {
        let mut b = *self;
        b.current_player = !b.current_player;
        b
    }

    /// Mutable access to one cell.
    #[inline]
    pub(crate) fn cell_mut(&mut self, idx: usize) -> &mut u32 {
        &mut self.cells[idx]
    }

    /// Set the side to move.
    #[inline]
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Run the end-of-game check.
    ///
    /// Once either side's holes are empty, every side sweeps its remaining
    /// hole seeds into its own store and the status is decided by the stores.
    pub(crate) fn settle(&mut self) {
        if !self.side_is_empty(Player::One) && !self.side_is_empty(Player::Two) {
            return;
        }

        for player in Player::ALL {
            let range = self.hole_range(player);
            let swept: u32 = self.cells[range.clone()].iter().sum();
            self.cells[range].fill(0);
            let store = self.store_index(player);
            self.cells[store] += swept;
        }

        self.status = GameStatus::from_stores(self.store(Player::One), self.store(Player::Two));
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Right-aligned two-column cells joined by single spaces.
fn row(values: impl Iterator<Item = u32>) -> String {
    values
        .map(|n| format!("{n:2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn check_holes(holes: usize) -> Result<(), BoardError> {
    if (1..=MAX_HOLES).contains(&holes) {
        Ok(())
    } else {
        Err(BoardError::HolesOutOfRange {
            holes,
            max: MAX_HOLES,
        })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::standard()
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardState(\"{}\")", self)
    }
}

/// Wrapper for printing a board the way players sit around it.
///
/// Player two's holes run right to left across the top, player one's left to
/// right across the bottom, with each store at its owner's end of the row.
pub struct PrettyBoard<'a>(&'a BoardState);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let holes = board.holes_per_side();

        let two = row(board.holes(Player::Two).iter().rev().copied());
        let two_idx = row((0..holes as u32).rev());
        let one = row(board.holes(Player::One).iter().copied());
        let one_idx = row(0..holes as u32);
        let gap = " ".repeat(one.len().saturating_sub(2));

        writeln!(f, "--- Player 2 (holes {}-0) ---", holes - 1)?;
        writeln!(f, "      {two}")?;
        writeln!(f, "      {two_idx}")?;
        writeln!(
            f,
            "P2 [{:2}]{gap}[{:2}] P1",
            board.store(Player::Two),
            board.store(Player::One)
        )?;
        writeln!(f, "      {one}")?;
        writeln!(f, "      {one_idx}")?;
        write!(f, "--- Player 1 (holes 0-{}) ---", holes - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardState, DEFAULT_HOLES, MAX_HOLES};
    use crate::error::BoardError;
    use crate::player::Player;
    use crate::status::GameStatus;

    #[test]
    fn standard_layout() {
        let board = BoardState::standard();
        assert_eq!(board.cell_count(), 16);
        assert_eq!(board.store_index(Player::One), 7);
        assert_eq!(board.store_index(Player::Two), 15);
        assert_eq!(board.hole_range(Player::One), 0..7);
        assert_eq!(board.hole_range(Player::Two), 8..15);
        assert_eq!(board.total_seeds(), 98);
        assert_eq!(board.store(Player::One), 0);
        assert_eq!(board.store(Player::Two), 0);
        assert_eq!(board.current_player(), Player::One);
        assert_eq!(board.status(), GameStatus::Ongoing);
    }

    #[test]
    fn initial_matches_standard() {
        let board = BoardState::initial(DEFAULT_HOLES, 7).unwrap();
        assert_eq!(board, BoardState::standard());
        assert_eq!(BoardState::default(), board);
    }

    #[test]
    fn initial_custom_size() {
        let board = BoardState::initial(5, 4).unwrap();
        assert_eq!(board.cells(), &[4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 0]);
        assert_eq!(board.opposite(0), 10);
        assert_eq!(board.opposite(4), 6);
    }

    #[test]
    fn initial_rejects_bad_hole_counts() {
        assert_eq!(
            BoardState::initial(0, 7),
            Err(BoardError::HolesOutOfRange {
                holes: 0,
                max: MAX_HOLES
            })
        );
        assert!(BoardState::initial(MAX_HOLES + 1, 7).is_err());
        assert!(BoardState::initial(MAX_HOLES, 7).is_ok());
    }

    #[test]
    fn initial_rejects_seed_overflow() {
        assert!(matches!(
            BoardState::initial(7, u32::MAX),
            Err(BoardError::SeedOverflow { .. })
        ));
    }

    #[test]
    fn zero_seeds_is_immediately_drawn() {
        let board = BoardState::initial(7, 0).unwrap();
        assert_eq!(board.status(), GameStatus::Draw);
        assert!(board.is_over());
    }

    #[test]
    fn opposite_pairs_are_mirrored() {
        let board = BoardState::standard();
        for idx in board.hole_range(Player::One) {
            let opp = board.opposite(idx);
            assert!(board.hole_range(Player::Two).contains(&opp));
            assert_eq!(board.opposite(opp), idx);
        }
        assert_eq!(board.opposite(0), 14);
        assert_eq!(board.opposite(6), 8);
    }

    #[test]
    fn pass_flips_side_only() {
        let board = BoardState::standard();
        let passed = board.pass();
        assert_eq!(passed.current_player(), Player::Two);
        assert_eq!(passed.cells(), board.cells());
    }

    #[test]
    fn pretty_print() {
        let board = BoardState::standard();
        let output = format!("{}", board.pretty());
        assert!(output.contains("--- Player 2 (holes 6-0) ---"));
        assert!(output.contains(" 6  5  4  3  2  1  0"));
        assert!(output.contains(" 0  1  2  3  4  5  6"));
        assert!(output.contains("P2 [ 0]"));
        assert!(output.contains("[ 0] P1"));
        assert!(output.ends_with("--- Player 1 (holes 0-6) ---"));
    }
}
