//! Full-game integration tests on the built-in layout.
//!
//! These drive the public controller and host APIs the way a network
//! adapter would: submit moves, read snapshots, and follow the laser
//! traces across real multi-mirror chains.

use laser_chess::{
    Board, EngineError, Game, GameHost, GamePhase, GameStatus, HostError, IllegalMove,
    LaserOutcome, MoveSpec, Orientation, Piece, PieceKind, Player, Position, Rotation,
};

fn rotate(row: u8, col: u8, delta: Rotation) -> MoveSpec {
    MoveSpec::Rotate {
        position: Position::new(row, col),
        delta,
    }
}

fn relocate(from: (u8, u8), to: (u8, u8)) -> MoveSpec {
    MoveSpec::Relocate {
        from: Position::new(from.0, from.1),
        to: Position::new(to.0, to.1),
    }
}

// =============================================================================
// Whole-game scenarios
// =============================================================================

/// On the starting layout, turning Red's guard pyramid clockwise feeds the
/// beam through six mirrors straight into Red's own king.
#[test]
fn test_opening_blunder_loses_in_one_move() {
    let mut game = Game::new();
    let snapshot = game
        .apply_move(Player::Red, rotate(5, 9, Rotation::Cw))
        .unwrap();

    assert_eq!(snapshot.status, GameStatus::Won(Player::Silver));
    assert_eq!(game.state().phase(), GamePhase::GameOver(Player::Silver));

    // Six reflections walk the beam across the board and up to (0,5).
    let path = game.state().last_laser().unwrap();
    assert_eq!(path.len(), 18);
    assert_eq!(
        path.outcome,
        LaserOutcome::PieceDestroyed {
            position: Position::new(0, 5),
            kind: PieceKind::King,
        }
    );
    assert_eq!(game.state().board().piece_at(Position::new(0, 5)), None);

    // The loser's king is gone; nobody moves again.
    let result = game.apply_move(Player::Silver, rotate(6, 6, Rotation::Cw));
    assert_eq!(
        result.unwrap_err().as_illegal(),
        Some(IllegalMove::GameAlreadyOver)
    );
}

/// A five-move middlegame: quiet development, then Red's beam is walked
/// around the board and finally takes a Silver obelisk.
#[test]
fn test_scripted_game_reaches_a_capture() {
    let mut game = Game::new();

    // 1. Red re-aims a rear pyramid; the beam still exits off (5,9).
    let s1 = game
        .apply_move(Player::Red, rotate(2, 6, Rotation::Ccw))
        .unwrap();
    assert_eq!(s1.status, GameStatus::InProgress);

    // 2. Silver develops a pyramid; Silver's own file stays clear.
    let s2 = game
        .apply_move(Player::Silver, relocate((2, 5), (2, 4)))
        .unwrap();
    assert_eq!(s2.current_player, Player::Red);

    // 3. Red opens the long chain: the beam crosses row 5, drops down to
    //    row 6, climbs file 6, and exits east along row 2.
    let s3 = game
        .apply_move(Player::Red, rotate(5, 9, Rotation::Cw))
        .unwrap();
    assert_eq!(s3.status, GameStatus::InProgress);
    assert_eq!(game.state().last_laser().unwrap().len(), 18);
    assert_eq!(
        game.state().last_laser().unwrap().outcome,
        LaserOutcome::ExitedBoard
    );

    // 4. Silver steps its row-5 pyramid out of the firing line.
    game.apply_move(Player::Silver, relocate((5, 4), (5, 3)))
        .unwrap();

    // 5. With (5,4) vacated the beam now reaches Silver's pyramid at
    //    (5,3), which bends it south into the obelisk at (7,3).
    let s5 = game
        .apply_move(Player::Red, rotate(6, 4, Rotation::Ccw))
        .unwrap();
    assert_eq!(
        game.state().last_laser().unwrap().outcome,
        LaserOutcome::PieceDestroyed {
            position: Position::new(7, 3),
            kind: PieceKind::Obelisk,
        }
    );
    assert_eq!(game.state().board().piece_at(Position::new(7, 3)), None);
    assert_eq!(s5.status, GameStatus::InProgress);

    assert_eq!(game.state().turn_number(), 6);
    assert_eq!(game.state().current_player(), Player::Silver);
    assert_eq!(game.state().history().len(), 5);
    assert_eq!(
        game.state()
            .board()
            .count_pieces(Player::Silver, PieceKind::Obelisk),
        1
    );
}

// =============================================================================
// Boundary behavior
// =============================================================================

/// The host relays engine results unchanged and keeps games isolated.
#[test]
fn test_host_runs_a_game_to_completion() {
    let mut host = GameHost::new();
    let (id, initial) = host.create_game();
    assert_eq!(initial.turn_number, 1);

    let final_snapshot = host
        .apply_move(id, Player::Red, rotate(5, 9, Rotation::Cw))
        .unwrap();
    assert_eq!(final_snapshot.status, GameStatus::Won(Player::Silver));

    // Reads after the game keep returning the terminal snapshot.
    assert_eq!(
        host.snapshot(id).unwrap().status,
        GameStatus::Won(Player::Silver)
    );

    let rejected = host.apply_move(id, Player::Silver, rotate(6, 6, Rotation::Cw));
    assert!(rejected.is_err());
}

/// Rejections at the boundary leave the snapshot byte-for-byte unchanged.
#[test]
fn test_rejected_moves_do_not_change_the_snapshot() {
    let mut host = GameHost::new();
    let (id, before) = host.create_game();

    // The king onto its own obelisk.
    let own_piece = host.apply_move(id, Player::Red, relocate((0, 5), (0, 4)));
    assert_eq!(
        own_piece.unwrap_err(),
        HostError::Engine(EngineError::Illegal(IllegalMove::CellOccupied(
            Position::new(0, 4)
        )))
    );

    // Silver out of turn.
    let out_of_turn = host.apply_move(id, Player::Silver, rotate(6, 6, Rotation::Cw));
    assert_eq!(
        out_of_turn.unwrap_err(),
        HostError::Engine(EngineError::Illegal(IllegalMove::NotYourTurn(
            Player::Silver
        )))
    );

    assert_eq!(host.snapshot(id).unwrap(), before);
}

/// A Red piece may never enter Silver's restricted file.
#[test]
fn test_restricted_file_rejection() {
    let mut board = Board::standard();
    for (kind, owner, orientation, position) in [
        (PieceKind::King, Player::Red, Orientation::Deg0, (7, 1)),
        (PieceKind::LaserSource, Player::Red, Orientation::Deg0, (7, 9)),
        (PieceKind::Pyramid, Player::Red, Orientation::Deg0, (4, 1)),
        (PieceKind::King, Player::Silver, Orientation::Deg0, (0, 4)),
        (
            PieceKind::LaserSource,
            Player::Silver,
            Orientation::Deg180,
            (0, 0),
        ),
    ] {
        board
            .place(
                Piece::new(kind, owner, orientation),
                Position::new(position.0, position.1),
            )
            .unwrap();
    }
    let mut game = Game::with_board(board, Player::Red);
    let before = game.state().clone();

    let result = game.apply_move(Player::Red, relocate((4, 1), (4, 0)));
    assert_eq!(
        result.unwrap_err().as_illegal(),
        Some(IllegalMove::SquareForbidden(Position::new(4, 0)))
    );
    assert_eq!(game.state(), &before);
}
