//! Property-based tests for rules invariants
//!
//! Positions are reached by random playouts from the built-in layouts, so
//! every tested position is one the engine can actually produce.

use chess_rules::engine::square_under_attack;
use chess_rules::{Engine, EngineSettings, MoveOutcome, PieceKind, Square, StartingLayout};
use proptest::prelude::*;

fn layout() -> impl Strategy<Value = StartingLayout> {
    prop::sample::select(vec![StartingLayout::Standard, StartingLayout::CastlingDrill])
}

fn choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..40)
}

fn legal_moves(engine: &Engine) -> Vec<(Square, Square)> {
    engine.position().legal_move_table().moves().collect()
}

/// Play a legal move, promoting to a queen when asked
fn play(engine: &mut Engine, from: Square, to: Square) {
    match engine.attempt_move(from, to) {
        Ok(MoveOutcome::Applied) => {}
        Ok(MoveOutcome::PromotionRequired) => engine
            .confirm_promotion(PieceKind::Queen)
            .expect("queen is always a valid promotion"),
        Err(e) => panic!("table move {from}-{to} was refused: {e}"),
    }
}

/// Random playout of up to `choices.len()` half-moves
fn playout(layout: StartingLayout, choices: &[usize]) -> Engine {
    let mut engine = Engine::with_settings(&EngineSettings {
        layout,
        ..EngineSettings::default()
    });
    for &choice in choices {
        let moves = legal_moves(&engine);
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[choice % moves.len()];
        play(&mut engine, from, to);
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_legal_moves_never_expose_own_king(layout in layout(), choices in choices()) {
        let engine = playout(layout, &choices);
        let mover = engine.current_colour();

        for (from, to) in legal_moves(&engine) {
            let mut next = engine.clone();
            play(&mut next, from, to);

            let king = next.position().king_square(mover).expect("king stays on the board");
            prop_assert!(
                !square_under_attack(next.position(), king, mover.opponent()),
                "{}-{} left the {} king attacked", from, to, mover
            );
        }
    }

    #[test]
    fn test_terminal_iff_no_legal_moves(layout in layout(), choices in choices()) {
        let mut engine = Engine::with_settings(&EngineSettings {
            layout,
            ..EngineSettings::default()
        });

        for choice in choices {
            let moves = legal_moves(&engine);
            prop_assert_eq!(engine.is_terminal(), moves.is_empty());
            prop_assert_eq!(engine.is_terminal(), engine.position().legal_move_table().is_empty());
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[choice % moves.len()];
            play(&mut engine, from, to);
        }
    }

    #[test]
    fn test_en_passant_window_lives_one_move(layout in layout(), choices in choices()) {
        let mut engine = Engine::with_settings(&EngineSettings {
            layout,
            ..EngineSettings::default()
        });

        for choice in choices {
            let moves = legal_moves(&engine);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[choice % moves.len()];
            let mover = engine.piece_at(from).expect("table moves start on a piece");
            play(&mut engine, from, to);

            let double_step = mover.kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2;
            if double_step {
                let skipped = Square::new((from.rank() + to.rank()) / 2, from.file());
                prop_assert_eq!(engine.position().en_passant_target(), Some(skipped));
                prop_assert_eq!(engine.position().en_passant_victim(), Some(to));
            } else {
                prop_assert_eq!(engine.position().en_passant(), None);
            }
        }
    }

    #[test]
    fn test_king_cache_tracks_kings(layout in layout(), choices in choices()) {
        let engine = playout(layout, &choices);

        for colour in [chess_rules::Colour::White, chess_rules::Colour::Black] {
            let king = engine.position().king_square(colour).expect("cached king");
            let piece = engine.piece_at(king).expect("king stands on its cached square");
            prop_assert_eq!(piece.kind, PieceKind::King);
            prop_assert_eq!(piece.colour, colour);
        }
    }
}
