//! Tests for game sessions.

use strictly_tictactoe::{
    Activation, GameSession, InvariantSet, MoveError, Outcome, Player, Position, TicTacToeInvariants,
};

#[test]
fn test_new_session_starts_with_player_one() {
    let session = GameSession::with_settings(Player::One, 5);
    assert_eq!(session.to_move(), Player::One);
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert!(session.history().is_empty());
}

#[test]
fn test_activation_places_human_and_reply() {
    let mut session = GameSession::with_settings(Player::One, 5);
    let activation = session.on_cell_activated(1, 1).unwrap();

    let Activation::Played {
        human,
        reply,
        outcome,
    } = activation
    else {
        panic!("Expected a played activation");
    };
    assert_eq!(human, Position::Center);
    assert!(reply.is_some());
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.to_move(), Player::One);
    assert!(TicTacToeInvariants::check_all(&session).is_ok());
}

#[test]
fn test_rejected_activation_leaves_session_unchanged() {
    let mut session = GameSession::with_settings(Player::One, 5);
    session.on_cell_activated(0, 0).unwrap();
    let board = *session.board();
    let history = session.history().to_vec();

    assert_eq!(
        session.on_cell_activated(0, 0),
        Err(MoveError::OccupiedCell(Position::TopLeft))
    );
    assert_eq!(
        session.on_cell_activated(5, 5),
        Err(MoveError::OutOfBounds { row: 5, col: 5 })
    );
    assert_eq!(*session.board(), board);
    assert_eq!(session.history(), history.as_slice());
}

#[test]
fn test_human_second_gets_opening_reply() {
    let session = GameSession::with_settings(Player::Two, 5);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].player, Player::One);
    assert_eq!(session.to_move(), Player::Two);
}

#[test]
fn test_direct_marks_alternate_and_stop_at_terminal() {
    let mut session = GameSession::with_settings(Player::One, 5);
    // One takes the top row while Two plays the middle row.
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.place_mark(row, col).unwrap();
    }
    assert_eq!(session.outcome(), Outcome::PlayerOneWins);
    assert_eq!(session.place_mark(2, 2), Err(MoveError::GameOver));
    assert_eq!(session.history().len(), 5);
}

#[test]
fn test_activation_after_terminal_resets() {
    let mut session = GameSession::with_settings(Player::One, 5);
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.place_mark(row, col).unwrap();
    }
    assert!(session.outcome().is_terminal());

    assert_eq!(session.on_cell_activated(2, 2), Ok(Activation::Reset));
    assert!(session.history().is_empty());
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.to_move(), Player::One);
}

#[test]
fn test_no_reply_after_human_wins() {
    // Weak opponent so the human can line up three.
    let mut session = GameSession::with_settings(Player::One, 0);
    // Depth 0 answers in the first empty cell: (0,0), then (0,1).
    session.on_cell_activated(1, 0).unwrap();
    session.on_cell_activated(1, 1).unwrap();
    let activation = session.on_cell_activated(1, 2).unwrap();

    assert_eq!(
        activation,
        Activation::Played {
            human: Position::MiddleRight,
            reply: None,
            outcome: Outcome::PlayerOneWins,
        }
    );
    assert_eq!(session.history().len(), 5);
}

#[test]
fn test_full_game_against_search_ends_without_human_win() {
    let mut session = GameSession::with_settings(Player::One, 9);
    // Human always takes the first empty cell.
    loop {
        let pos = session.board().empty_positions()[0];
        match session.on_cell_activated(pos.row(), pos.col()).unwrap() {
            Activation::Played { outcome, .. } if outcome.is_terminal() => {
                assert_ne!(outcome, Outcome::PlayerOneWins);
                break;
            }
            Activation::Played { .. } => {}
            Activation::Reset => panic!("Game was already over"),
        }
    }
}

#[test]
fn test_status_message() {
    let mut session = GameSession::with_settings(Player::One, 5);
    assert_eq!(session.status_message(), "Your move (X)");
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.place_mark(row, col).unwrap();
    }
    assert_eq!(session.status_message(), "Player One wins");
}
