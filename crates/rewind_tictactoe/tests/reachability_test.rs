//! Exhaustive checks over every board reachable through play.

use std::collections::HashSet;

use rewind_tictactoe::{Board, History, Player, Position, rules};

/// Visits every distinct board reachable from the empty board via `select`.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![History::new()];
    let mut boards = Vec::new();

    while let Some(history) = stack.pop() {
        let board = *history.current_board();
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);

        for pos in Position::valid_moves(&board) {
            let next = history.select(pos);
            if next != history {
                stack.push(next);
            }
        }
    }

    boards
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of legal tic-tac-toe positions, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_no_reachable_board_has_two_winners() {
    for board in reachable_boards() {
        let owners: HashSet<Player> = rules::LINES
            .iter()
            .filter_map(|&line| rules::win::line_owner(&board, line))
            .collect();
        assert!(
            owners.len() <= 1,
            "both players hold a triple on\n{}",
            board.display()
        );
    }
}

#[test]
fn test_mark_counts_stay_balanced() {
    for board in reachable_boards() {
        let count = |p: Player| {
            board
                .squares()
                .iter()
                .filter(|s| s.player() == Some(p))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));
        assert!(x == o || x == o + 1, "x={x} o={o}");
    }
}
