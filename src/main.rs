//! Random self-play demo for the hit-point chess engine.
//!
//! Builds a default game, lets both sides pick uniformly from their legal
//! actions until the game ends or the ply budget runs out, and prints the
//! board and the action log.

use std::process::exit;

use rand::prelude::IndexedRandom;

use hitpoint_chess::board_location::Cell;
use hitpoint_chess::game_config::GameConfig;
use hitpoint_chess::game_state::GameState;
use hitpoint_chess::outcome::Outcome;
use hitpoint_chess::piece_class::{PieceClass, PROMOTION_CLASSES};
use hitpoint_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 300;

fn legal_actions(game: &GameState) -> Vec<(Cell, Cell)> {
    let mut actions = Vec::new();
    for piece in game.pieces(game.current_player()) {
        let options = game.select_piece(piece.cell);
        for to in options.moves {
            actions.push((piece.cell, to));
        }
        for to in options.attacks {
            actions.push((piece.cell, to));
        }
        for castle in options.castles {
            actions.push((piece.cell, castle.king_to));
        }
        if let Some(ep) = options.en_passant {
            actions.push((piece.cell, ep.to));
        }
    }
    actions
}

fn main() {
    let game = GameState::new(GameConfig::default());
    let mut game = match game {
        Ok(game) => game,
        Err(error) => {
            eprintln!("invalid setup position: {error:?}");
            exit(1);
        }
    };

    let mut rng = rand::rng();
    for _ in 0..MAX_PLIES {
        let actions = legal_actions(&game);
        let picked = match actions.as_slice().choose(&mut rng) {
            Some(&picked) => picked,
            None => break,
        };

        let report = match game.commit_action(picked.0, picked.1) {
            Ok(report) => report,
            Err(error) => {
                eprintln!("engine rejected a generated action: {error:?}");
                exit(1);
            }
        };

        let outcome = if report.outcome == Outcome::PawnPromotion {
            let class = PROMOTION_CLASSES
                .as_slice()
                .choose(&mut rng)
                .copied()
                .unwrap_or(PieceClass::Queen);
            match game.promote_pawn(class) {
                Ok(outcome) => outcome,
                Err(error) => {
                    eprintln!("promotion failed: {error:?}");
                    exit(1);
                }
            }
        } else {
            report.outcome
        };

        if let Some(line) = game.translate_last_move() {
            println!("{} {}", game.current_player().name(), line);
        }

        if let Outcome::GameFinished(result) = outcome {
            println!("{result}");
            break;
        }
        game.next_turn();
    }

    println!("{}", render_game_state(&game));
    println!("Log:");
    print!("{}", game.action_log());
}
