//! The game mediator: owns the authoritative board and drives a game.
//!
//! [`GameMediator`] validates each move with [`ChessJudge`], applies its
//! side effects (castling rook, en-passant marker and capture, promotion)
//! and detects checkmate and stalemate after every completed turn.
//!
//! # Example
//! ```
//! use chess_judge::board::Coordinate;
//! use chess_judge::game::{GameMediator, GameState};
//!
//! let mut game = GameMediator::default();
//! let at = |c, r| Coordinate::new(c, r).unwrap();
//! assert!(game.move_piece(at(6, 2), at(6, 3)));
//! assert!(game.move_piece(at(5, 7), at(5, 5)));
//! assert!(game.move_piece(at(7, 2), at(7, 4)));
//! assert!(game.move_piece(at(4, 8), at(8, 4)));
//! assert!(matches!(game.state(), GameState::GameOver(_)));
//! ```

use std::collections::BTreeSet;

use crate::board::{standard_position, Board, BoardError, Coordinate, Piece, PieceId, PieceKind, Team};
use crate::judge::{
    CheckJudge, CheckStatus, ChessJudge, KingJudge, MovementData, MovementJudge, PawnJudge,
    TeamPieces,
};

mod factory;
mod state;

pub use factory::{BoardFactory, PieceFactory, StandardBoardFactory, StandardPieceFactory};
pub use state::{GameOutcome, GameState, SelectedPromotion};

#[cfg(test)]
mod tests;

/// Owns the board, move history and piece indices of one game.
#[derive(Clone, Debug)]
pub struct GameMediator {
    board: Board,
    moved_pieces: Vec<PieceId>,
    white: TeamPieces,
    black: TeamPieces,
    ghost: Option<Coordinate>,
    turn: Team,
    state: GameState,
}

impl Default for GameMediator {
    fn default() -> Self {
        GameMediator::from_board(standard_position())
    }
}

impl GameMediator {
    /// Start a game on the board produced by `factory`.
    pub fn new(factory: &dyn BoardFactory) -> Result<Self, BoardError> {
        Ok(GameMediator::from_board(factory.create_board()?))
    }

    fn from_board(board: Board) -> Self {
        let mut game = GameMediator {
            board: Board::standard(),
            moved_pieces: Vec::new(),
            white: TeamPieces::default(),
            black: TeamPieces::default(),
            ghost: None,
            turn: Team::White,
            state: GameState::Movement,
        };
        game.reset(board);
        game
    }

    /// Discard the current game and start over on a new board.
    ///
    /// On error the current game is left untouched.
    pub fn load_game(&mut self, factory: &dyn BoardFactory) -> Result<(), BoardError> {
        let board = factory.create_board()?;
        self.reset(board);
        Ok(())
    }

    fn reset(&mut self, board: Board) {
        self.white = TeamPieces::scan(&board, Team::White);
        self.black = TeamPieces::scan(&board, Team::Black);
        self.ghost = board.pieces_of(Team::Ghost).next().map(|(coord, _)| coord);
        self.board = board;
        self.moved_pieces.clear();
        self.turn = Team::White;
        self.state = GameState::Movement;
        log_debug!(
            "loaded {}x{} board with {} pieces",
            self.board.columns(),
            self.board.rows(),
            self.board.piece_count()
        );
        self.update_outcome();
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> Team {
        self.turn
    }

    /// Ids of every piece that has moved at least once.
    #[must_use]
    pub fn moved_pieces(&self) -> &[PieceId] {
        &self.moved_pieces
    }

    /// Non-king pieces of `team`. Empty for the ghost.
    #[must_use]
    pub fn piece_coordinates(&self, team: Team) -> &[Coordinate] {
        self.index(team).map_or(&[], |index| &index.pieces)
    }

    #[must_use]
    pub fn king_coordinate(&self, team: Team) -> Option<Coordinate> {
        self.index(team).and_then(|index| index.king)
    }

    /// Square of the en-passant marker left by the last double step.
    #[must_use]
    pub fn en_passant_ghost(&self) -> Option<Coordinate> {
        self.ghost
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            GameState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The winner, if the game ended in checkmate.
    #[must_use]
    pub fn team_that_won(&self) -> Option<Team> {
        self.outcome().and_then(GameOutcome::winner)
    }

    /// Check status of the side to move.
    #[must_use]
    pub fn check_status(&self) -> CheckStatus {
        CheckJudge.responses(&self.attack_data())
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        !CheckJudge.attackers(&self.attack_data()).is_empty()
    }

    /// True if the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_responses(&self) -> bool {
        ChessJudge.has_any_legal_move(&self.attack_data())
    }

    /// Legal destinations for the piece on `origin`. Empty unless a move
    /// could be made right now.
    #[must_use]
    pub fn legal_moves_from(&self, origin: Coordinate) -> BTreeSet<Coordinate> {
        if self.state != GameState::Movement || !self.board.contains(origin) {
            return BTreeSet::new();
        }
        ChessJudge.possible_moves(&self.attack_data().from(origin))
    }

    /// Every legal `(origin, destination)` pair of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Coordinate, Coordinate)> {
        if self.state != GameState::Movement {
            return Vec::new();
        }
        ChessJudge.legal_moves(&self.attack_data())
    }

    /// Try to move a piece of the side to move. Returns `false`, leaving
    /// the game untouched, if the move is not legal right now.
    pub fn move_piece(&mut self, origin: Coordinate, destination: Coordinate) -> bool {
        if self.state != GameState::Movement {
            log_trace!("rejected {origin} -> {destination}: state is {:?}", self.state);
            return false;
        }
        if !self.board.contains(origin) || !self.board.contains(destination) {
            log_trace!("rejected {origin} -> {destination}: off the board");
            return false;
        }

        let data = self.attack_data().from(origin).to(destination);
        if !ChessJudge.is_legal_move(&data) {
            log_trace!("rejected {origin} -> {destination}: illegal for {}", self.turn);
            return false;
        }
        let castling = KingJudge::is_castling(&data).then(|| {
            (
                KingJudge::castling_rook_origin(&data),
                KingJudge::castling_rook_destination(&data),
            )
        });
        let en_passant_victim = PawnJudge::is_en_passant_attack(&data)
            .then(|| PawnJudge::en_passant_capture_coordinate(&data));
        let new_ghost = PawnJudge::is_move_two_forward(&data)
            .then(|| PawnJudge::en_passant_ghost_coordinate(&data));
        let promotes = PawnJudge::is_promotion(&data);

        if let Some((rook_origin, rook_destination)) = castling {
            log_debug!("{} castles, rook {rook_origin} -> {rook_destination}", self.turn);
            self.relocate(rook_origin, rook_destination);
        }

        self.clear_ghost();
        if let Some(victim) = en_passant_victim {
            log_debug!("en passant captures pawn on {victim}");
            self.capture(victim);
        }

        self.relocate(origin, destination);

        if let Some(ghost) = new_ghost {
            self.board.place(ghost, Piece::ghost());
            self.ghost = Some(ghost);
        }

        if promotes {
            log_debug!("pawn on {destination} awaits promotion");
            self.state = GameState::PendingPromotion(destination);
        }

        log_debug!("{} moved {origin} -> {destination}", self.turn);
        self.turn = self.turn.opponent();

        if self.state == GameState::Movement {
            self.update_outcome();
        }
        true
    }

    /// Promote the pending pawn with a standard piece.
    pub fn promote(&mut self, choice: SelectedPromotion) -> bool {
        self.promote_with(choice, &StandardPieceFactory)
    }

    /// Replace the pending pawn with a piece built by `factory`.
    pub fn promote_with(&mut self, choice: SelectedPromotion, factory: &dyn PieceFactory) -> bool {
        let GameState::PendingPromotion(square) = self.state else {
            log_trace!("rejected promotion: no pawn awaiting promotion");
            return false;
        };
        let Some(pawn) = self.board.piece_at(square) else {
            log_trace!("rejected promotion: {square} is empty");
            return false;
        };

        let piece = factory.create_piece(pawn.team(), choice.kind());
        self.board.place(square, piece);
        log_debug!("{} pawn on {square} promoted to {}", pawn.team(), choice.kind());

        self.state = GameState::Movement;
        self.update_outcome();
        true
    }

    fn index(&self, team: Team) -> Option<&TeamPieces> {
        match team {
            Team::White => Some(&self.white),
            Team::Black => Some(&self.black),
            Team::Ghost => None,
        }
    }

    fn index_mut(&mut self, team: Team) -> Option<&mut TeamPieces> {
        match team {
            Team::White => Some(&mut self.white),
            Team::Black => Some(&mut self.black),
            Team::Ghost => None,
        }
    }

    /// Movement data for the side to move, centered on its king.
    fn attack_data(&self) -> MovementData<'_> {
        let (allies, enemies) = match self.turn {
            Team::Black => (&self.black, &self.white),
            _ => (&self.white, &self.black),
        };
        let king = allies
            .king
            .unwrap_or(Coordinate::new_unchecked(Coordinate::MIN, Coordinate::MIN));
        MovementData::new(king, king, &self.board)
            .with_moved_pieces(&self.moved_pieces)
            .with_teams(allies, enemies)
            .with_side_to_move(self.turn)
    }

    /// Move a piece and keep history and indices in step with the board.
    fn relocate(&mut self, origin: Coordinate, destination: Coordinate) {
        let Some(piece) = self.board.piece_at(origin) else {
            return;
        };
        if let Some(captured) = self.board.relocate(origin, destination) {
            if !captured.is_ghost() {
                log_debug!("captured {captured} on {destination}");
                if let Some(index) = self.index_mut(captured.team()) {
                    index.remove(destination);
                }
            }
        }
        if let Some(index) = self.index_mut(piece.team()) {
            if piece.kind() == PieceKind::King && index.king == Some(origin) {
                index.king = Some(destination);
            } else {
                index.remove(origin);
                index.pieces.push(destination);
            }
        }
        if !self.moved_pieces.contains(&piece.id()) {
            self.moved_pieces.push(piece.id());
        }
    }

    fn capture(&mut self, coord: Coordinate) {
        if let Some(piece) = self.board.take(coord) {
            if let Some(index) = self.index_mut(piece.team()) {
                index.remove(coord);
            }
        }
    }

    fn clear_ghost(&mut self) {
        if let Some(ghost) = self.ghost.take() {
            if self.board.piece_at(ghost).is_some_and(|p| p.is_ghost()) {
                self.board.take(ghost);
            }
        }
    }

    /// Checkmate and stalemate detection for the side to move.
    fn update_outcome(&mut self) {
        let data = self.attack_data();
        let outcome = match CheckJudge.responses(&data) {
            status if status.is_checkmate() => Some(GameOutcome::Checkmate {
                winner: self.turn.opponent(),
            }),
            CheckStatus::Clear if !ChessJudge.has_any_legal_move(&data) => {
                Some(GameOutcome::Stalemate)
            }
            _ => None,
        };
        if let Some(outcome) = outcome {
            log_info!("game over: {outcome}");
            self.state = GameState::GameOver(outcome);
        }
    }
}
