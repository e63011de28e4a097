use crate::common::sq;
use voidmate::chess::{CastlingSide, ChessError, Color};
use voidmate::game::{
    ActionMode, ActionResult, GameConfig, GameController, GameEvent, GameOutcome, HistoryEntry,
};

fn controller_with_quota(quota: u32) -> GameController {
    GameController::new(GameConfig {
        removals_per_player: Some(quota),
        turn_time_limit: None,
    })
}

#[cfg(test)]
mod tap_tests {
    use super::*;

    #[test]
    fn test_tap_selects_then_moves() {
        let mut controller = GameController::default();

        assert_eq!(
            controller.tap(sq("g1")).unwrap(),
            ActionResult::Selected(sq("g1"))
        );
        let result = controller.tap(sq("f3")).unwrap();
        assert!(matches!(
            result,
            ActionResult::Applied(HistoryEntry::Move { .. })
        ));
        assert_eq!(controller.state().current_player(), Color::Black);
        assert_eq!(controller.state().selected(), None);
    }

    #[test]
    fn test_tap_same_square_deselects() {
        let mut controller = GameController::default();
        controller.tap(sq("e2")).unwrap();
        assert_eq!(controller.tap(sq("e2")).unwrap(), ActionResult::Deselected);
        assert_eq!(controller.state().selected(), None);
    }

    #[test]
    fn test_tap_other_own_piece_reselects() {
        let mut controller = GameController::default();
        controller.tap(sq("e2")).unwrap();
        assert_eq!(
            controller.tap(sq("d2")).unwrap(),
            ActionResult::Selected(sq("d2"))
        );
        assert_eq!(controller.state().ply(), 0);
    }

    #[test]
    fn test_tap_empty_square_without_selection_is_rejected() {
        let mut controller = GameController::default();
        assert!(matches!(
            controller.tap(sq("e4")),
            Err(ChessError::IllegalMove(_))
        ));
        assert_eq!(controller.state().selected(), None);
    }

    #[test]
    fn test_illegal_destination_keeps_selection() {
        let mut controller = GameController::default();
        controller.tap(sq("e2")).unwrap();
        assert!(controller.tap(sq("e5")).is_err());
        assert_eq!(controller.state().selected(), Some(sq("e2")));
        assert_eq!(controller.state().ply(), 0);
    }

    #[test]
    fn test_remove_mode() {
        let mut controller = GameController::default();
        controller.tap(sq("e2")).unwrap();

        controller.set_mode(ActionMode::Remove);
        assert_eq!(controller.mode(), ActionMode::Remove);
        assert_eq!(controller.state().selected(), None);

        let result = controller.tap(sq("e5")).unwrap();
        assert_eq!(
            result,
            ActionResult::Applied(HistoryEntry::Removal {
                color: Color::White,
                square: sq("e5")
            })
        );
        assert!(controller.state().removed().is_removed(sq("e5")));
        assert_eq!(controller.state().current_player(), Color::Black);
    }
}

#[cfg(test)]
mod removal_tests {
    use super::*;

    #[test]
    fn test_quota_enforced_per_player() {
        let mut controller = controller_with_quota(1);
        assert_eq!(controller.removals_remaining(Color::White), Some(1));

        controller.remove_square(sq("d4")).unwrap();
        assert_eq!(controller.removals_remaining(Color::White), Some(0));
        assert_eq!(controller.removals_remaining(Color::Black), Some(1));

        controller.remove_square(sq("d5")).unwrap();

        let before = controller.state().clone();
        assert!(matches!(
            controller.remove_square(sq("c4")),
            Err(ChessError::InvalidRemoval(_))
        ));
        assert_eq!(controller.state(), &before);

        // Moving is still allowed
        assert!(controller.play_move(sq("e2"), sq("e4")).is_ok());
    }

    #[test]
    fn test_unlimited_removals() {
        let mut controller = GameController::default();
        assert_eq!(controller.removals_remaining(Color::White), None);
        for (white, black) in [("a4", "a5"), ("b4", "b5"), ("c4", "c5"), ("d4", "d5")] {
            controller.remove_square(sq(white)).unwrap();
            controller.remove_square(sq(black)).unwrap();
        }
        assert_eq!(controller.state().removed().len(), 8);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut controller = GameController::default();
        assert!(matches!(
            controller.remove_square(sq("e1")),
            Err(ChessError::InvalidRemoval(_))
        ));
        assert_eq!(controller.state().ply(), 0);
    }
}

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn test_events_apply_actions() {
        let mut controller = GameController::default();

        controller
            .handle_event(GameEvent::Move {
                from: sq("e2"),
                to: sq("e4"),
            })
            .unwrap();
        controller
            .handle_event(GameEvent::Remove(sq("e3")))
            .unwrap();

        assert_eq!(controller.state().ply(), 2);
        assert_eq!(controller.state().current_player(), Color::White);
        assert!(matches!(
            controller.handle_event(GameEvent::Castle(CastlingSide::KingSide)),
            Err(ChessError::IllegalMove(_))
        ));
    }

    #[test]
    fn test_timeout_ends_game() {
        let mut controller = GameController::default();
        let result = controller
            .handle_event(GameEvent::Timeout {
                player: Color::White,
                ply: 0,
            })
            .unwrap();

        assert_eq!(
            result,
            ActionResult::TimedOut(GameOutcome::Timeout {
                winner: Color::Black
            })
        );
        assert_eq!(controller.state().winner(), Some(Color::Black));
        assert!(matches!(
            controller.play_move(sq("e2"), sq("e4")),
            Err(ChessError::GameOver)
        ));
        assert!(matches!(
            controller.remove_square(sq("e4")),
            Err(ChessError::GameOver)
        ));
    }

    #[test]
    fn test_stale_timeout_ignored() {
        let mut controller = GameController::default();
        controller.play_move(sq("e2"), sq("e4")).unwrap();

        // White's countdown from ply 0 fires after White already moved
        assert_eq!(
            controller.signal_timeout(Color::White, 0).unwrap(),
            ActionResult::Ignored
        );
        // Wrong player for the current ply
        assert_eq!(
            controller.signal_timeout(Color::White, 1).unwrap(),
            ActionResult::Ignored
        );
        assert!(!controller.state().is_game_over());

        assert!(matches!(
            controller.signal_timeout(Color::Black, 1).unwrap(),
            ActionResult::TimedOut(_)
        ));
    }

    #[test]
    fn test_castle_through_controller() {
        let mut controller = GameController::default();
        for (from, to) in [
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
        ] {
            controller.play_move(sq(from), sq(to)).unwrap();
        }

        let result = controller.castle(CastlingSide::KingSide).unwrap();
        match result {
            ActionResult::Applied(entry) => assert_eq!(entry.to_string(), "O-O"),
            other => panic!("expected an applied castle, got {other:?}"),
        }
        assert!(controller.state().castling().has_king_moved(Color::White));
    }
}
