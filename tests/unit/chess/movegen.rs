use crate::common::{board, ledger, sorted, sq, squares};
use voidmate::chess::{
    attacked_squares, pseudo_legal_destinations, Board, CastlingRights, RemovalLedger,
};

fn destinations(board: &Board, removed: &RemovalLedger, from: &str) -> Vec<voidmate::Position> {
    sorted(pseudo_legal_destinations(
        board,
        removed,
        &CastlingRights::none(),
        sq(from),
    ))
}

#[cfg(test)]
mod pawn_tests {
    use super::*;

    #[test]
    fn test_pawn_single_and_double_step() {
        let board = Board::new();
        let removed = RemovalLedger::new();
        assert_eq!(destinations(&board, &removed, "e2"), squares(&["e3", "e4"]));
        assert_eq!(destinations(&board, &removed, "d7"), squares(&["d6", "d5"]));
    }

    #[test]
    fn test_pawn_double_step_needs_both_squares() {
        let board = Board::new();

        let removed = ledger(&board, &["e4"]);
        assert_eq!(destinations(&board, &removed, "e2"), squares(&["e3"]));

        let removed = ledger(&board, &["e3"]);
        assert!(destinations(&board, &removed, "e2").is_empty());
    }

    #[test]
    fn test_pawn_off_start_row_steps_once() {
        let board = board("4k3/8/8/8/8/4P3/8/4K3");
        assert_eq!(
            destinations(&board, &RemovalLedger::new(), "e3"),
            squares(&["e4"])
        );
    }

    #[test]
    fn test_pawn_captures_diagonally_only() {
        // White pawn e4 facing a black pawn on e5, black knights on d5 and f5
        let board = board("4k3/8/8/3npn2/4P3/8/8/4K3");
        assert_eq!(
            destinations(&board, &RemovalLedger::new(), "e4"),
            squares(&["d5", "f5"])
        );
    }

    #[test]
    fn test_pawn_never_captures_own_piece() {
        let board = board("4k3/8/8/3N4/4P3/8/8/4K3");
        assert_eq!(
            destinations(&board, &RemovalLedger::new(), "e4"),
            squares(&["e5"])
        );
    }
}

#[cfg(test)]
mod stepper_tests {
    use super::*;

    #[test]
    fn test_knight_from_start() {
        let board = Board::new();
        assert_eq!(
            destinations(&board, &RemovalLedger::new(), "b1"),
            squares(&["a3", "c3"])
        );
    }

    #[test]
    fn test_knight_cannot_land_on_removed_square() {
        let board = Board::new();
        let removed = ledger(&board, &["c3"]);
        assert_eq!(destinations(&board, &removed, "b1"), squares(&["a3"]));
    }

    #[test]
    fn test_knight_jumps_over_removed_squares() {
        let board = board("4k3/8/8/8/8/8/8/1N2K3");
        let removed = ledger(&board, &["b2", "c2", "b3", "a2"]);
        assert_eq!(
            destinations(&board, &removed, "b1"),
            squares(&["a3", "c3", "d2"])
        );
    }

    #[test]
    fn test_king_steps_avoid_removed_squares() {
        let board = board("4k3/8/8/8/4K3/8/8/8");
        let removed = ledger(&board, &["d5", "e5", "f5"]);
        assert_eq!(
            destinations(&board, &removed, "e4"),
            squares(&["d4", "f4", "d3", "e3", "f3"])
        );
    }
}

#[cfg(test)]
mod slider_tests {
    use super::*;

    #[test]
    fn test_rook_ray_stops_before_removed_square() {
        let board = board("4k3/8/8/8/8/8/8/R3K3");
        let removed = ledger(&board, &["a4"]);
        assert_eq!(
            destinations(&board, &removed, "a1"),
            squares(&["a2", "a3", "b1", "c1", "d1"])
        );
    }

    #[test]
    fn test_rook_captures_first_enemy_on_ray() {
        let board = board("4k3/8/8/r7/8/8/8/R3K3");
        assert_eq!(
            destinations(&board, &RemovalLedger::new(), "a1"),
            squares(&["a2", "a3", "a4", "a5", "b1", "c1", "d1"])
        );
    }

    #[test]
    fn test_bishop_blocked_by_removed_square() {
        let board = board("4k3/8/8/8/8/8/8/2B1K3");
        let removed = ledger(&board, &["e3"]);
        assert_eq!(
            destinations(&board, &removed, "c1"),
            squares(&["b2", "a3", "d2"])
        );
    }

    #[test]
    fn test_queen_combines_rays() {
        let board = board("4k3/8/8/8/8/8/1P6/QK6");
        let removed = ledger(&board, &["a4"]);
        // Up the file to a3, diagonal blocked by own pawn, rank blocked by own king
        assert_eq!(
            destinations(&board, &removed, "a1"),
            squares(&["a2", "a3"])
        );
    }

    #[test]
    fn test_empty_square_has_no_destinations() {
        let board = Board::new();
        assert!(destinations(&board, &RemovalLedger::new(), "e4").is_empty());
    }
}

#[cfg(test)]
mod attack_tests {
    use super::*;

    #[test]
    fn test_pawn_attacks_diagonals_even_when_empty() {
        let board = board("4k3/8/8/8/4P3/8/8/4K3");
        assert_eq!(
            sorted(attacked_squares(&board, &RemovalLedger::new(), sq("e4"))),
            squares(&["d5", "f5"])
        );
    }

    #[test]
    fn test_black_pawn_attacks_toward_white() {
        let board = board("4k3/8/8/4p3/8/8/8/4K3");
        assert_eq!(
            sorted(attacked_squares(&board, &RemovalLedger::new(), sq("e5"))),
            squares(&["d4", "f4"])
        );
    }

    #[test]
    fn test_slider_attacks_include_defended_piece() {
        let board = board("4k3/8/8/8/8/8/8/R2NK3");
        assert_eq!(
            sorted(attacked_squares(&board, &RemovalLedger::new(), sq("a1"))),
            squares(&["a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1", "d1"])
        );
    }

    #[test]
    fn test_removed_squares_are_never_attacked() {
        let board = board("4k3/8/8/8/8/8/8/1N2K3");
        let removed = ledger(&board, &["c3"]);
        let attacked = attacked_squares(&board, &removed, sq("b1"));
        assert!(!attacked.contains(&sq("c3")));
        assert!(attacked.contains(&sq("a3")));
    }
}
