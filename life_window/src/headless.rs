// headless.rs - Timer-driven loop without a window

use std::time::Duration;

use life_engine::Simulation;
use tokio::task::JoinError;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

const REPORT_EVERY: u64 = 100;
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Plays `simulation` for `generations` steps, one per `interval`, and hands
/// it back paused. Ctrl-C pauses early. Intervals below 1 ms are raised to
/// 1 ms.
///
/// Steps run on the blocking pool since they fan out over rayon.
pub async fn run(
    mut simulation: Simulation,
    generations: u64,
    interval: Duration,
) -> Result<Simulation, JoinError> {
    let board = simulation.board();
    info!(
        length = board.length(),
        width = board.width(),
        chunks = board.partition().chunk_count(board.length()),
        generations,
        "headless run"
    );

    let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    simulation.play();
    while simulation.generation() < generations {
        tokio::select! {
            _ = ticker.tick() => {
                simulation = tokio::task::spawn_blocking(move || {
                    simulation.tick();
                    simulation
                })
                .await?;

                let generation = simulation.generation();
                if generation % REPORT_EVERY == 0 {
                    let board = simulation.board();
                    info!(generation, population = board.population(), "progress");
                    debug!(generation, changed = board.changed_cells().count(), "last step");
                }
            }
            _ = &mut interrupt => {
                info!(generation = simulation.generation(), "interrupted");
                break;
            }
        }
    }
    simulation.pause();

    Ok(simulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::Board;

    #[tokio::test]
    async fn runs_requested_generations_then_pauses() {
        let board = Board::new(5, 5, |row, col| row == 1 && col < 3);
        let start = board.cells().to_vec();

        let simulation = run(Simulation::new(board), 4, Duration::from_millis(1))
            .await
            .unwrap();

        assert_eq!(simulation.generation(), 4);
        assert!(!simulation.is_playing());
        // Blinker: period 2
        assert_eq!(simulation.board().cells(), &start[..]);
    }

    #[tokio::test]
    async fn zero_interval_is_raised_to_minimum() {
        let board = Board::new(5, 5, |row, col| row == 1 && col < 3);
        let simulation = run(Simulation::new(board), 2, Duration::ZERO).await.unwrap();
        assert_eq!(simulation.generation(), 2);
    }

    #[tokio::test]
    async fn zero_generations_does_nothing() {
        let simulation = Simulation::new(Board::new(3, 3, |_, _| true));
        let simulation = run(simulation, 0, Duration::from_millis(1)).await.unwrap();
        assert_eq!(simulation.generation(), 0);
        assert_eq!(simulation.board().population(), 9);
    }
}
