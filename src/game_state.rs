//! The aggregate game state and turn controller.
//!
//! Owns the piece register, the grid projection, the action log, and the
//! whose-turn flag, and orchestrates a full action: raw options from the
//! per-piece generators, pin pruning, special-move composition, commit,
//! damage, casualty handling, and terminal evaluation. All mutation happens
//! in `commit_action`, `promote_pawn`, `place_piece`, and `next_turn`;
//! everything else is a read-only query. Coordinates live in one fixed
//! frame; "flipped" is derived for presentation only.

use crate::action_log::ActionLog;
use crate::board_grid::BoardGrid;
use crate::board_location::{Cell, Dimension};
use crate::chess_errors::ChessErrors;
use crate::game_config::{GameConfig, RuleMode};
use crate::legality::attack_scan::is_cell_attacked;
use crate::legality::pin_filter::pin_filter;
use crate::moves::move_options::raw_options;
use crate::outcome::{ActionKind, ActionReport, GameResult, Outcome};
use crate::piece_class::{PieceClass, PROMOTION_CLASSES};
use crate::piece_record::Piece;
use crate::piece_register::PieceRegister;
use crate::piece_stats::PieceStats;
use crate::piece_team::PieceTeam;
use crate::special_moves::castling::{castle_options, CastleOption};
use crate::special_moves::en_passant::{en_passant_option, EnPassantOption};
use crate::special_moves::placement::{is_placement_safe, placement_cells, placement_pool};
use crate::special_moves::promotion::promotion_eligible;
use crate::utils::algebraic;
use crate::utils::fen_generator;
use crate::utils::fen_parser::parse_position;

pub const DEFAULT_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Everything a selected piece may legally do right now.
#[derive(Clone, Debug, Default)]
pub struct PieceOptions {
    pub moves: Vec<Cell>,
    pub attacks: Vec<Cell>,
    pub castles: Vec<CastleOption>,
    pub en_passant: Option<EnPassantOption>,
}

impl PieceOptions {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
            && self.attacks.is_empty()
            && self.castles.is_empty()
            && self.en_passant.is_none()
    }
}

enum Resolution {
    Move,
    Attack,
    Castle(CastleOption),
    EnPassant(EnPassantOption),
}

#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    stats: PieceStats,
    register: PieceRegister,
    board: BoardGrid,
    turn: PieceTeam,
    action_log: ActionLog,
    result: Option<GameResult>,
    promotion_pending: Option<Cell>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, ChessErrors> {
        GameState::from_position(config, DEFAULT_POSITION)
    }

    /// Builds a game from a position descriptor. Parsing is forgiving, but a
    /// position that breaks the semantic ground rules (king counts, the side
    /// to move already holding the enemy king) is rejected outright:
    /// continuing from such a position would make every legality answer
    /// downstream meaningless.
    pub fn from_position(config: GameConfig, descriptor: &str) -> Result<Self, ChessErrors> {
        let parsed = parse_position(descriptor)?;
        let dimension: Dimension = (parsed.rows[0].len() as i8, parsed.rows.len() as i8);
        let stats = PieceStats::from_assignment(config.stat_assignment);

        let mut register = PieceRegister::new();
        for (row, codes) in parsed.rows.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                if let Some(class) = PieceClass::from_code(code) {
                    let team = if code > 0 {
                        PieceTeam::White
                    } else {
                        PieceTeam::Black
                    };
                    register.add_piece(Piece::new(class, team, (col as i8, row as i8), &stats));
                }
            }
        }

        for team in [PieceTeam::White, PieceTeam::Black] {
            let count = register.king_count(team);
            if count != 1 {
                return Err(ChessErrors::WrongKingCount(team, count));
            }
        }

        let board = BoardGrid::project(&register, dimension);
        let game = GameState {
            config,
            stats,
            register,
            board,
            turn: parsed.side_to_move,
            action_log: ActionLog::new(),
            result: None,
            promotion_pending: None,
        };

        if config.rule_mode == RuleMode::Standard {
            let enemy = game.turn.opponent();
            if let Some(king) = game.register.king_cell(enemy) {
                if is_cell_attacked(king, enemy, &game.register, &game.board) {
                    return Err(ChessErrors::KingAlreadyCapturable(game.turn));
                }
            }
        }

        Ok(game)
    }

    // ---- read-only queries ------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dimension(&self) -> Dimension {
        self.board.dimension()
    }

    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    pub fn current_player(&self) -> PieceTeam {
        self.turn
    }

    /// Whether presentation should mirror the board for the current mover.
    /// Derived, never stored: the engine's coordinates do not move.
    pub fn is_board_flipped(&self) -> bool {
        self.config.flip_board && self.turn == PieceTeam::Black
    }

    pub fn get_piece(&self, cell: Cell) -> Option<&Piece> {
        if !self.board.in_bounds(cell) {
            return None;
        }
        self.register.piece_at(cell)
    }

    pub fn pieces(&self, team: PieceTeam) -> &[Piece] {
        self.register.pieces(team)
    }

    pub fn casualties(&self, team: PieceTeam) -> &[Piece] {
        self.register.casualties(team)
    }

    pub fn selectable_piece(&self, cell: Cell) -> bool {
        self.get_piece(cell).map_or(false, |p| p.team == self.turn)
    }

    pub fn player_won(&self) -> Option<GameResult> {
        self.result
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.action_log
    }

    /// Human-readable form of the most recent action, e.g. `"E2-E4 moves"`.
    pub fn translate_last_move(&self) -> Option<String> {
        self.action_log.last().map(ActionLog::describe)
    }

    pub fn export_position(&self) -> String {
        fen_generator::export_position(&self.register, &self.board, self.turn)
    }

    pub fn alpha_identifiers(&self) -> Vec<String> {
        let mut ids = algebraic::alpha_identifiers(self.dimension().0);
        if self.is_board_flipped() {
            ids.reverse();
        }
        ids
    }

    pub fn number_identifiers(&self) -> Vec<String> {
        let mut ids = algebraic::number_identifiers(self.dimension().1);
        if self.is_board_flipped() {
            ids.reverse();
        }
        ids
    }

    /// Maps a fixed-frame cell into the display frame (and back: the mirror
    /// is its own inverse).
    pub fn to_display_frame(&self, cell: Cell) -> Cell {
        if self.is_board_flipped() {
            let (columns, rows) = self.dimension();
            (columns - 1 - cell.0, rows - 1 - cell.1)
        } else {
            cell
        }
    }

    /// Classes the current player may place, one entry per spent piece.
    pub fn placement_pool(&self) -> Vec<PieceClass> {
        if !self.config.crazyhouse {
            return Vec::new();
        }
        placement_pool(&self.register, self.turn)
    }

    /// Cells the current player may place on.
    pub fn placement_options(&self) -> Vec<Cell> {
        if !self.config.crazyhouse || self.result.is_some() {
            return Vec::new();
        }
        placement_cells(self.turn, &self.register, &self.board, self.config.rule_mode)
    }

    /// Legal options for the current player's piece on `cell`. Empty options
    /// for an empty cell, an enemy piece, or an off-board cell; invalid
    /// selection is never an error.
    pub fn select_piece(&self, cell: Cell) -> PieceOptions {
        self.options_for_team(cell, self.turn)
    }

    fn options_for_team(&self, cell: Cell, team: PieceTeam) -> PieceOptions {
        let mut out = PieceOptions::default();
        if self.result.is_some() || !self.board.in_bounds(cell) {
            return out;
        }
        let piece = match self.register.piece_at(cell) {
            Some(p) if p.team == team => *p,
            _ => return out,
        };

        let raw = raw_options(&piece, &self.board);
        let filtered = match self.config.rule_mode {
            RuleMode::Standard => pin_filter(&piece, raw, &self.register, &self.board),
            RuleMode::KingCapture => raw,
        };
        out.moves = filtered.moves;
        out.attacks = filtered.attacks;

        if piece.class == PieceClass::King {
            out.castles = castle_options(&piece, &self.register, &self.board, self.config.rule_mode);
        }
        if piece.class == PieceClass::Pawn {
            out.en_passant = en_passant_option(&piece, &self.register, &self.action_log);
        }
        out
    }

    // ---- mutators ---------------------------------------------------------

    /// Validates `to` against the legal options of the piece on `from` and
    /// commits the action. A target outside the option set reports
    /// `ActionKind::None` with the state untouched.
    pub fn commit_action(&mut self, from: Cell, to: Cell) -> Result<ActionReport, ChessErrors> {
        if self.result.is_some() {
            return Err(ChessErrors::GameAlreadyFinished);
        }
        if let Some(cell) = self.promotion_pending {
            return Err(ChessErrors::PromotionUnresolved(cell));
        }

        let options = self.select_piece(from);
        let resolution = if let Some(castle) =
            options.castles.iter().find(|c| c.king_to == to).copied()
        {
            Some(Resolution::Castle(castle))
        } else if options.en_passant.map_or(false, |ep| ep.to == to) {
            options.en_passant.map(Resolution::EnPassant)
        } else if options.moves.contains(&to) {
            Some(Resolution::Move)
        } else if options.attacks.contains(&to) {
            Some(Resolution::Attack)
        } else {
            None
        };
        let resolution = match resolution {
            Some(r) => r,
            None => {
                return Ok(ActionReport {
                    kind: ActionKind::None,
                    outcome: Outcome::None,
                })
            }
        };

        let board_before = self.board.clone();
        let (kind, acted_cell) = match resolution {
            Resolution::Move => {
                self.register
                    .piece_at_mut(from)
                    .ok_or(ChessErrors::NoPieceAtCell(from))?
                    .move_to(to);
                (ActionKind::Moves, to)
            }
            Resolution::Castle(castle) => {
                self.register
                    .piece_at_mut(castle.king_from)
                    .ok_or(ChessErrors::NoPieceAtCell(castle.king_from))?
                    .move_to(castle.king_to);
                self.register
                    .piece_at_mut(castle.rook_from)
                    .ok_or(ChessErrors::NoPieceAtCell(castle.rook_from))?
                    .move_to(castle.rook_to);
                (ActionKind::Castles, castle.king_to)
            }
            Resolution::Attack => {
                let kind = self.apply_attack(from, to, to)?;
                (kind, if kind == ActionKind::Takes { to } else { from })
            }
            Resolution::EnPassant(ep) => {
                let kind = self.apply_attack(from, ep.victim, ep.to)?;
                (kind, if kind == ActionKind::Takes { ep.to } else { from })
            }
        };

        self.board = BoardGrid::project(&self.register, self.dimension());
        self.action_log.add(board_before, from, to, kind);
        debug_assert!(self.projection_consistent());

        let outcome = self.after_action_outcome(acted_cell);
        Ok(ActionReport { kind, outcome })
    }

    /// Deals the attacker's damage to the piece on `victim`. A felled victim
    /// leaves the board for its casualty list and the attacker advances to
    /// `landing` (for en passant that is not the victim's cell).
    fn apply_attack(
        &mut self,
        from: Cell,
        victim: Cell,
        landing: Cell,
    ) -> Result<ActionKind, ChessErrors> {
        let damage = self
            .register
            .piece_at(from)
            .ok_or(ChessErrors::NoPieceAtCell(from))?
            .damage;
        let target = self
            .register
            .piece_at_mut(victim)
            .ok_or(ChessErrors::NoPieceAtCell(victim))?;
        if target.take_damage(damage) {
            return Ok(ActionKind::Attacks);
        }
        let dead = self
            .register
            .remove_at(victim)
            .ok_or(ChessErrors::NoPieceAtCell(victim))?;
        self.register.bury(dead);
        self.register
            .piece_at_mut(from)
            .ok_or(ChessErrors::NoPieceAtCell(from))?
            .move_to(landing);
        Ok(ActionKind::Takes)
    }

    fn after_action_outcome(&mut self, acted_cell: Cell) -> Outcome {
        // King elimination is checked before anything else; in that mode a
        // game always ends in a kill.
        if self.config.rule_mode == RuleMode::KingCapture {
            let enemy = self.turn.opponent();
            if self.register.king_cell(enemy).is_none() {
                let result = GameResult::Won(self.turn);
                self.result = Some(result);
                return Outcome::GameFinished(result);
            }
        }

        if let Some(piece) = self.register.piece_at(acted_cell) {
            if piece.team == self.turn && promotion_eligible(piece, self.dimension()) {
                self.promotion_pending = Some(acted_cell);
                return Outcome::PawnPromotion;
            }
        }

        self.finish_check()
    }

    fn finish_check(&mut self) -> Outcome {
        if self.config.rule_mode == RuleMode::Standard {
            if let Some(result) = self.evaluate_standard_terminal() {
                self.result = Some(result);
                return Outcome::GameFinished(result);
            }
        }
        Outcome::None
    }

    /// Swaps in the replacement class for the pawn waiting on the far rank.
    pub fn promote_pawn(&mut self, class: PieceClass) -> Result<Outcome, ChessErrors> {
        let cell = self.promotion_pending.ok_or(ChessErrors::NoPromotionPending)?;
        if !PROMOTION_CLASSES.contains(&class) {
            return Err(ChessErrors::InvalidPromotionClass(class));
        }
        let stats = self.stats;
        let piece = self
            .register
            .piece_at_mut(cell)
            .ok_or(ChessErrors::NoPieceAtCell(cell))?;
        piece.class = class;
        piece.max_health = stats.max_health(class);
        piece.health = stats.max_health(class);
        piece.damage = stats.damage(class);
        piece.first_move = false;
        self.promotion_pending = None;
        self.board = BoardGrid::project(&self.register, self.dimension());
        debug_assert!(self.projection_consistent());
        Ok(self.finish_check())
    }

    /// Crazyhouse: spends a felled enemy piece of `class` and places an own
    /// piece of that class on the empty cell. Counts as the turn's action.
    pub fn place_piece(&mut self, class: PieceClass, cell: Cell) -> Result<ActionReport, ChessErrors> {
        if !self.config.crazyhouse {
            return Err(ChessErrors::CrazyhouseDisabled);
        }
        if self.result.is_some() {
            return Err(ChessErrors::GameAlreadyFinished);
        }
        if let Some(pending) = self.promotion_pending {
            return Err(ChessErrors::PromotionUnresolved(pending));
        }
        if class == PieceClass::King {
            return Err(ChessErrors::CasualtyPoolEmpty(class));
        }
        if !self.board.in_bounds(cell) {
            return Err(ChessErrors::OutOfBounds(cell));
        }
        if !self.board.is_empty_cell(cell) {
            return Err(ChessErrors::CellOccupied(cell));
        }
        if self.config.rule_mode == RuleMode::Standard
            && !is_placement_safe(cell, self.turn, &self.register, &self.board)
        {
            return Err(ChessErrors::PlacementBlocked(cell));
        }

        self.register.spend_casualty(self.turn.opponent(), class)?;
        let board_before = self.board.clone();
        self.register
            .add_piece(Piece::new(class, self.turn, cell, &self.stats));
        self.board = BoardGrid::project(&self.register, self.dimension());
        self.action_log.add(board_before, cell, cell, ActionKind::Placed);
        debug_assert!(self.projection_consistent());

        let outcome = self.finish_check();
        Ok(ActionReport {
            kind: ActionKind::Placed,
            outcome,
        })
    }

    /// Hands the move to the other side. Orientation flips along with it
    /// when configured, as a derived property of the new turn.
    pub fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.board = BoardGrid::project(&self.register, self.dimension());
        debug_assert!(self.projection_consistent());
    }

    // ---- terminal evaluation ----------------------------------------------

    fn evaluate_standard_terminal(&self) -> Option<GameResult> {
        let defender = self.turn.opponent();
        let mobile = self
            .register
            .pieces(defender)
            .iter()
            .any(|p| !self.options_for_team(p.cell, defender).is_empty());

        if !mobile {
            let rescued = self.config.crazyhouse
                && !placement_pool(&self.register, defender).is_empty()
                && !placement_cells(defender, &self.register, &self.board, RuleMode::Standard)
                    .is_empty();
            if !rescued {
                if let Some(king) = self.register.king_cell(defender) {
                    if is_cell_attacked(king, defender, &self.register, &self.board) {
                        return Some(GameResult::Won(self.turn));
                    }
                }
                return Some(GameResult::Stalemate);
            }
        }

        if self.action_log.count_snapshot(&self.board) + 1 >= 3 {
            return Some(GameResult::DrawByRepetition);
        }

        if !self.config.crazyhouse && self.insufficient_material() {
            return Some(GameResult::DrawInsufficientMaterial);
        }

        None
    }

    fn insufficient_material(&self) -> bool {
        if self.register.alive_count() > 4 {
            return false;
        }
        let mut minors: Vec<&Piece> = Vec::new();
        for piece in self.register.all_pieces() {
            match piece.class {
                PieceClass::King => {}
                PieceClass::Bishop | PieceClass::Knight => minors.push(piece),
                _ => return false,
            }
        }
        match minors.as_slice() {
            [] | [_] => true,
            [a, b] => {
                a.class == PieceClass::Bishop
                    && b.class == PieceClass::Bishop
                    && (a.cell.0 + a.cell.1) % 2 == (b.cell.0 + b.cell.1) % 2
            }
            _ => false,
        }
    }

    fn projection_consistent(&self) -> bool {
        self.board == BoardGrid::project(&self.register, self.dimension())
    }
}
