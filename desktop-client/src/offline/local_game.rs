use std::time::Duration;
use tokio::sync::mpsc;
use common::games::tictactoe::{GamePresenter, TicTacToeSession, TurnOutcome, calculate_move};
use common::log;
use crate::state::ClientCommand;

/// Drains UI commands one at a time. A pending computer turn is finished
/// before the next command is read, so clicks made while the computer is
/// "thinking" land on the board the computer left behind.
pub async fn local_game_task<P>(
    presenter: P,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    computer_move_delay: Duration,
) -> TicTacToeSession<P>
where
    P: GamePresenter + Send,
{
    let mut session = TicTacToeSession::new(presenter);

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::StartGame { mode } => session.start_game(mode),
            ClientCommand::CellClicked { index } => {
                let outcome = session.handle_click(index);
                if outcome == TurnOutcome::ComputerTurnPending {
                    play_computer_turn(&mut session, computer_move_delay).await;
                }
            }
            ClientCommand::Reset => session.reset(),
            ClientCommand::Shutdown => break,
        }
    }

    session
}

async fn play_computer_turn<P: GamePresenter>(
    session: &mut TicTacToeSession<P>,
    delay: Duration,
) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let Some(input) = session.bot_input() else {
        return;
    };

    match tokio::task::spawn_blocking(move || calculate_move(input)).await {
        Ok(Some(index)) => {
            session.apply_computer_move(index);
        }
        Ok(None) => {}
        Err(e) => log!("Computer move task failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SharedState;
    use common::games::tictactoe::{GameMode, Mark};

    fn send_all(commands: &[ClientCommand]) -> mpsc::UnboundedReceiver<ClientCommand> {
        let (tx, rx) = mpsc::unbounded_channel();
        for &command in commands {
            tx.send(command).unwrap();
        }
        tx.send(ClientCommand::Shutdown).unwrap();
        rx
    }

    #[tokio::test]
    async fn test_computer_moves_before_queued_click() {
        let shared = SharedState::new();
        let rx = send_all(&[
            ClientCommand::StartGame { mode: GameMode::HumanVsComputer },
            ClientCommand::CellClicked { index: 4 },
            ClientCommand::CellClicked { index: 0 },
        ]);

        local_game_task(shared.clone(), rx, Duration::from_millis(10)).await;

        let view = shared.view();
        assert_eq!(view.cells[4], Mark::X);
        assert_eq!(view.cells[0], Mark::O);
        assert_eq!(view.cells.iter().filter(|c| !c.is_empty()).count(), 2);
        assert!(view.board_visible);
        assert!(!view.message_visible);
    }

    #[tokio::test]
    async fn test_two_player_game_ends_with_message() {
        let shared = SharedState::new();
        let clicks = [0, 3, 1, 4, 2].map(|index| ClientCommand::CellClicked { index });
        let mut commands = vec![ClientCommand::StartGame { mode: GameMode::HumanVsHuman }];
        commands.extend(clicks);
        let rx = send_all(&commands);

        let session = local_game_task(shared.clone(), rx, Duration::ZERO).await;

        let view = shared.view();
        assert_eq!(view.message.as_deref(), Some("X Wins!"));
        assert!(view.message_visible);
        assert!(view.reset_visible);
        assert_eq!(view.winning_line.map(|line| line.cells), Some([0, 1, 2]));
        assert!(session.game().unwrap().status().is_over());
    }

    #[tokio::test]
    async fn test_reset_shows_mode_selection() {
        let shared = SharedState::new();
        let rx = send_all(&[
            ClientCommand::StartGame { mode: GameMode::HumanVsHuman },
            ClientCommand::CellClicked { index: 8 },
            ClientCommand::Reset,
        ]);

        let session = local_game_task(shared.clone(), rx, Duration::ZERO).await;

        let view = shared.view();
        assert!(view.mode_selection_visible);
        assert!(!view.board_visible);
        assert!(!view.reset_visible);
        assert!(session.game().is_none());
    }

    #[tokio::test]
    async fn test_computer_game_never_lets_scripted_human_win() {
        let shared = SharedState::new();
        let mut commands = vec![ClientCommand::StartGame { mode: GameMode::HumanVsComputer }];
        // Occupied or late clicks are dropped by the session.
        commands.extend((0..9).map(|index| ClientCommand::CellClicked { index }));
        let rx = send_all(&commands);

        local_game_task(shared.clone(), rx, Duration::ZERO).await;

        let view = shared.view();
        assert!(matches!(
            view.message.as_deref(),
            Some("O Wins!") | Some("It's a Draw!")
        ));
        assert!(view.reset_visible);
    }
}
