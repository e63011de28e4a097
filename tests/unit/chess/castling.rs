use crate::common::{board, ledger, sorted, sq, squares};
use voidmate::chess::{
    legal_destinations, make_move, Board, CastlingRights, CastlingSide, ChessError, Color,
    RemovalLedger,
};

const BOTH_SIDES: &str = "r3k2r/8/8/8/8/8/8/R3K2R";

#[cfg(test)]
mod rights_tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        assert_eq!(CastlingRights::new().to_fen(), "KQkq");
        assert_eq!(CastlingRights::none().to_fen(), "-");
        assert_eq!(CastlingRights::from_fen("Kq").unwrap().to_fen(), "Kq");
        assert!(matches!(
            CastlingRights::from_fen("KX"),
            Err(ChessError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn test_king_move_revokes_both_sides() {
        let rights = CastlingRights::new().updated(&Board::new(), sq("e1"), sq("e2"));
        assert!(!rights.is_available(Color::White, CastlingSide::KingSide));
        assert!(!rights.is_available(Color::White, CastlingSide::QueenSide));
        assert!(rights.is_available(Color::Black, CastlingSide::KingSide));
        assert!(rights.is_available(Color::Black, CastlingSide::QueenSide));
        assert!(rights.has_king_moved(Color::White));
        assert!(!rights.has_king_moved(Color::Black));
    }

    #[test]
    fn test_rook_move_revokes_its_side() {
        let rights = CastlingRights::new().updated(&Board::new(), sq("h8"), sq("h6"));
        assert!(!rights.is_available(Color::Black, CastlingSide::KingSide));
        assert!(rights.is_available(Color::Black, CastlingSide::QueenSide));
        assert!(!rights.has_king_moved(Color::Black));
    }

    #[test]
    fn test_rook_capture_revokes_victims_side() {
        let board = board(BOTH_SIDES);
        let rights = CastlingRights::new().updated(&board, sq("a1"), sq("a8"));
        assert_eq!(rights.to_fen(), "Kk");
    }

    #[test]
    fn test_rights_never_come_back() {
        let board = board(BOTH_SIDES);
        let rights = CastlingRights::new().updated(&board, sq("h1"), sq("h2"));
        let board = make_move(&board, sq("h1"), sq("h2")).unwrap().board;

        let rights = rights.updated(&board, sq("h2"), sq("h1"));
        assert!(!rights.is_available(Color::White, CastlingSide::KingSide));
        assert_eq!(rights.to_fen(), "Qkq");
    }

    #[test]
    fn test_side_geometry() {
        let side = CastlingSide::QueenSide;
        assert_eq!(side.king_from(Color::Black), sq("e8"));
        assert_eq!(side.king_to(Color::Black), sq("c8"));
        assert_eq!(side.rook_from(Color::Black), sq("a8"));
        assert_eq!(side.rook_to(Color::Black), sq("d8"));
        assert_eq!(sorted(side.between(Color::Black)), squares(&["b8", "c8", "d8"]));
        assert_eq!(
            sorted(side.king_path(Color::Black).to_vec()),
            squares(&["c8", "d8", "e8"])
        );
        assert_eq!(
            CastlingSide::from_king_move(Color::White, sq("e1"), sq("g1")),
            Some(CastlingSide::KingSide)
        );
        assert_eq!(CastlingSide::from_king_move(Color::White, sq("e1"), sq("f1")), None);
    }
}

#[cfg(test)]
mod castling_move_tests {
    use super::*;

    fn king_moves(placement: &str, removed: &[&str], rights: &str) -> Vec<voidmate::Position> {
        let board = board(placement);
        let removed = ledger(&board, removed);
        let rights = CastlingRights::from_fen(rights).unwrap();
        sorted(legal_destinations(&board, sq("e1"), &removed, &rights))
    }

    #[test]
    fn test_both_sides_available() {
        assert_eq!(
            king_moves(BOTH_SIDES, &[], "KQkq"),
            squares(&["c1", "d1", "d2", "e2", "f1", "f2", "g1"])
        );
    }

    #[test]
    fn test_revoked_right_blocks_castling() {
        assert_eq!(
            king_moves(BOTH_SIDES, &[], "kq"),
            squares(&["d1", "d2", "e2", "f1", "f2"])
        );
    }

    #[test]
    fn test_removed_square_between_blocks_castling() {
        assert_eq!(
            king_moves(BOTH_SIDES, &["f1"], "KQ"),
            squares(&["c1", "d1", "d2", "e2", "f2"])
        );
        // b1 is not on the king's path but still sits between king and rook
        assert_eq!(
            king_moves(BOTH_SIDES, &["b1"], "KQ"),
            squares(&["d1", "d2", "e2", "f1", "f2", "g1"])
        );
    }

    #[test]
    fn test_attacked_path_blocks_castling() {
        let moves = king_moves("4kr2/8/8/8/8/8/8/R3K2R", &[], "KQ");
        assert!(moves.contains(&sq("c1")));
        assert!(!moves.contains(&sq("g1")));
    }

    #[test]
    fn test_attacked_destination_blocks_castling() {
        let moves = king_moves("6rk/8/8/8/8/8/8/R3K2R", &[], "KQ");
        assert!(moves.contains(&sq("c1")));
        assert!(!moves.contains(&sq("g1")));
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let moves = king_moves("4r1k1/8/8/8/8/8/8/R3K2R", &[], "KQ");
        assert!(!moves.contains(&sq("c1")));
        assert!(!moves.contains(&sq("g1")));
    }

    #[test]
    fn test_missing_rook_means_no_castling() {
        let moves = king_moves("4k3/8/8/8/8/8/8/4K2R", &[], "KQ");
        assert!(moves.contains(&sq("g1")));
        assert!(!moves.contains(&sq("c1")));
    }

    #[test]
    fn test_black_castles_too() {
        let board = board(BOTH_SIDES);
        let moves = sorted(legal_destinations(
            &board,
            sq("e8"),
            &RemovalLedger::new(),
            &CastlingRights::new(),
        ));
        assert!(moves.contains(&sq("g8")));
        assert!(moves.contains(&sq("c8")));
    }
}
