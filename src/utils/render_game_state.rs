//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view of the current position for debugging,
//! tests, and the demo binary. Renders in the display frame, so a flipped
//! board prints the way the current mover sees it, with piece health shown
//! in a roster below the grid.

use crate::game_state::GameState;
use crate::piece_team::PieceTeam;
use crate::utils::algebraic::cell_name;

pub fn render_game_state(game: &GameState) -> String {
    let (columns, rows) = game.dimension();
    let alpha = game.alpha_identifiers();
    let numbers = game.number_identifiers();
    let mut out = String::new();

    out.push_str("  ");
    for id in &alpha {
        out.push_str(id);
        out.push(' ');
    }
    out.push('\n');

    for display_row in 0..rows {
        out.push_str(&numbers[display_row as usize]);
        out.push(' ');
        for display_col in 0..columns {
            let cell = game.to_display_frame((display_col, display_row));
            match game.get_piece(cell) {
                Some(piece) => {
                    let letter = piece.class.letter();
                    out.push(if piece.team == PieceTeam::White {
                        letter.to_ascii_uppercase()
                    } else {
                        letter
                    });
                }
                None => out.push('·'),
            }
            out.push(' ');
        }
        out.push_str(&numbers[display_row as usize]);
        out.push('\n');
    }

    out.push_str("  ");
    for id in &alpha {
        out.push_str(id);
        out.push(' ');
    }
    out.push('\n');

    out.push_str(&format!("{} to move\n", game.current_player().name()));
    for team in [PieceTeam::White, PieceTeam::Black] {
        out.push_str(&format!("{}:", team.name()));
        for piece in game.pieces(team) {
            out.push_str(&format!(
                " {}{} {}/{}",
                piece.class.letter(),
                cell_name(piece.cell, (columns, rows)),
                piece.health,
                piece.max_health
            ));
        }
        let fallen = game.casualties(team).len();
        if fallen > 0 {
            out.push_str(&format!(" ({fallen} fallen)"));
        }
        out.push('\n');
    }
    if let Some(result) = game.player_won() {
        out.push_str(&format!("{result}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::GameConfig;

    #[test]
    fn renders_the_default_layout() {
        let game = GameState::new(GameConfig::default()).expect("default game should build");
        let view = render_game_state(&game);
        assert!(view.starts_with("  A B C D E F G H"));
        assert!(view.contains("r n b q k b n r"));
        assert!(view.contains("P P P P P P P P"));
        assert!(view.contains("white to move"));
        assert!(view.contains("kE1 150/150"));
    }

    #[test]
    fn flipped_view_mirrors_the_grid() {
        let mut game = GameState::new(GameConfig::default()).expect("default game should build");
        game.commit_action((4, 6), (4, 4)).expect("e2-e4");
        game.next_turn();
        let view = render_game_state(&game);
        assert!(view.starts_with("  H G F E D C B A"));
        assert!(view.contains("black to move"));
    }
}
