//! Plain-text views of a history.

use rewind_tictactoe::History;

/// Board, status line and move list.
pub fn render(history: &History) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        history.current_board().display(),
        history.status(),
        render_moves(history)
    )
}

/// One line per move: `[id] Go to move #N`, marking the current one.
pub fn render_moves(history: &History) -> String {
    history
        .entries()
        .map(|entry| format!("[{}] {}", entry.id, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Position;

    #[test]
    fn test_render_fresh_game() {
        let text = render(&History::new());
        assert_eq!(
            text,
            "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\n\nNext player: X\n\n[0] Go to game start (current)"
        );
    }

    #[test]
    fn test_render_moves_after_rewind() {
        let history = History::new().select(Position::Center);
        let history = history
            .jump_to(history.moves()[0].id())
            .expect("start exists");

        assert_eq!(
            render_moves(&history),
            "[0] Go to game start (current)\n[1] Go to move #1"
        );
    }
}
