use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use wadreader_core::{GestureId, Msg, TICK_PERIOD_MS};

/// Guard for the periodic elapsed-time task of one gesture.
///
/// The task reports observed wall time every 500ms. Dropping the guard
/// cancels the task, so no settlement path can leak a running ticker.
pub struct Ticker {
    cancel_tx: mpsc::Sender<()>,
}

impl Ticker {
    pub fn spawn(gesture_id: GestureId, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel();
        thread::spawn(move || {
            let started = Instant::now();
            loop {
                match cancel_rx.recv_timeout(Duration::from_millis(TICK_PERIOD_MS)) {
                    Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let elapsed_ms = started.elapsed().as_millis() as u64;
                        if msg_tx
                            .send(Msg::TickerTick {
                                gesture_id,
                                elapsed_ms,
                            })
                            .is_err()
                        {
                            break;
                        }
                    }
                }
            }
        });
        Self { cancel_tx }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        let _ = self.cancel_tx.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_ticks_and_stops_on_drop() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let ticker = Ticker::spawn(7, msg_tx);

        let first = msg_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("first tick");
        match first {
            Msg::TickerTick {
                gesture_id,
                elapsed_ms,
            } => {
                assert_eq!(gesture_id, 7);
                assert!(elapsed_ms >= TICK_PERIOD_MS);
            }
            other => panic!("unexpected message {other:?}"),
        }

        drop(ticker);
        // Drain whatever was already in flight, then the channel must go quiet.
        while msg_rx.recv_timeout(Duration::from_millis(700)).is_ok() {}
        assert!(msg_rx
            .recv_timeout(Duration::from_millis(700))
            .is_err());
    }
}
