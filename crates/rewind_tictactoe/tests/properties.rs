//! Property-based tests for rules and history transitions.

use proptest::prelude::*;
use rewind_tictactoe::{
    Board, GameHistory, Player, Position, Square, check_winner, diff, rules::LINES,
};

/// Any assignment of squares, legal or not.
fn arb_board() -> impl Strategy<Value = Board> {
    let square = prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ];
    proptest::array::uniform9(square).prop_map(Board::from_squares)
}

/// A sequence of cell indices to attempt, some of which may be rejected.
fn arb_attempts() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..20)
}

proptest! {
    #[test]
    fn winner_owns_a_completed_line(board in arb_board()) {
        match check_winner(&board) {
            None => {
                for [a, b, c] in LINES {
                    let sq = board.get(a);
                    prop_assert!(sq == Square::Empty || sq != board.get(b) || sq != board.get(c));
                }
            }
            Some(player) => {
                let owned = LINES.iter().any(|line| {
                    line.iter().all(|pos| board.get(*pos) == Square::Occupied(player))
                });
                prop_assert!(owned);
            }
        }
    }

    #[test]
    fn legal_plays_grow_history(attempts in arb_attempts()) {
        let mut game = GameHistory::new();
        let mut legal = 0;

        for index in attempts {
            let before = game.clone();
            match game.play_index(index) {
                Ok(()) => {
                    legal += 1;
                    prop_assert_eq!(game.len(), legal + 1);
                    prop_assert_eq!(game.current_move(), legal);
                }
                Err(_) => {
                    prop_assert_eq!(&game, &before);
                }
            }
        }
    }

    #[test]
    fn consecutive_snapshots_diff_to_the_parity_player(attempts in arb_attempts()) {
        let mut game = GameHistory::new();
        for index in attempts {
            let _ = game.play_index(index);
        }

        for (n, pair) in game.boards().windows(2).enumerate() {
            let placement = diff(&pair[1], &pair[0]);
            prop_assert!(placement.is_some());
            let placement = placement.unwrap();
            prop_assert_eq!(placement.mark, Player::for_move(n));
            let pos = placement.position();
            prop_assert!(pos.is_some());
            prop_assert_eq!(pair[1], pair[0].with_mark(pos.unwrap(), placement.mark));
        }
    }

    #[test]
    fn jump_only_moves_the_cursor(attempts in arb_attempts(), target in 0usize..12) {
        let mut game = GameHistory::new();
        for index in attempts {
            let _ = game.play_index(index);
        }
        let before = game.clone();

        match game.jump_to(target) {
            Ok(()) => {
                prop_assert!(target < before.len());
                prop_assert_eq!(game.current_move(), target);
            }
            Err(_) => {
                prop_assert!(target >= before.len());
                prop_assert_eq!(game.current_move(), before.current_move());
            }
        }
        prop_assert_eq!(game.boards(), before.boards());
    }

    #[test]
    fn playing_after_jump_truncates(attempts in arb_attempts(), target in 0usize..10) {
        let mut game = GameHistory::new();
        for index in attempts {
            let _ = game.play_index(index);
        }
        prop_assume!(target < game.len());
        game.jump_to(target).unwrap();
        let kept = game.boards()[..=target].to_vec();

        if let Some(pos) = Position::valid_moves(game.current_board()).first().copied() {
            if game.play(pos).is_ok() {
                prop_assert_eq!(game.len(), target + 2);
                prop_assert_eq!(&game.boards()[..=target], kept.as_slice());
            }
        }
    }
}
