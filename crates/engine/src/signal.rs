//! Signal delivery from the input listener to the simulation loop.
//!
//! One single-slot queue per signal kind. Sending never blocks, so it is safe
//! from a plain OS thread; a signal sent while the same kind is still pending
//! is merged into it.

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::types::Signal;

/// Create a connected sender/receiver pair.
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    let (quit_tx, quit_rx) = mpsc::channel(1);
    let (reignite_tx, reignite_rx) = mpsc::channel(1);
    (
        SignalSender {
            quit: quit_tx,
            reignite: reignite_tx,
        },
        SignalReceiver {
            quit: quit_rx,
            reignite: reignite_rx,
        },
    )
}

#[derive(Debug, Clone)]
pub struct SignalSender {
    quit: mpsc::Sender<()>,
    reignite: mpsc::Sender<()>,
}

impl SignalSender {
    /// Queue `signal` without blocking.
    ///
    /// Returns `false` once the receiver is gone.
    pub fn send(&self, signal: Signal) -> bool {
        let tx = match signal {
            Signal::Quit => &self.quit,
            Signal::Reignite => &self.reignite,
        };
        match tx.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => true,
            Err(TrySendError::Closed(())) => false,
        }
    }
}

#[derive(Debug)]
pub struct SignalReceiver {
    quit: mpsc::Receiver<()>,
    reignite: mpsc::Receiver<()>,
}

impl SignalReceiver {
    /// Wait for the next signal, preferring a pending Quit.
    ///
    /// Returns `None` once every sender is dropped and nothing is pending.
    /// Cancel safe.
    pub async fn recv(&mut self) -> Option<Signal> {
        tokio::select! {
            biased;
            Some(()) = self.quit.recv() => Some(Signal::Quit),
            Some(()) = self.reignite.recv() => Some(Signal::Reignite),
            else => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn repeated_signals_coalesce() {
        let (tx, mut rx) = signal_channel();
        assert!(tx.send(Signal::Reignite));
        assert!(tx.send(Signal::Reignite));
        assert!(tx.send(Signal::Reignite));
        drop(tx);

        assert_eq!(rx.recv().await, Some(Signal::Reignite));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn quit_jumps_the_queue() {
        let (tx, mut rx) = signal_channel();
        tx.send(Signal::Reignite);
        tx.send(Signal::Quit);

        assert_eq!(rx.recv().await, Some(Signal::Quit));
        assert_eq!(rx.recv().await, Some(Signal::Reignite));
    }

    #[test]
    fn send_reports_a_dropped_receiver() {
        let (tx, rx) = signal_channel();
        drop(rx);
        assert!(!tx.send(Signal::Quit));
        assert!(!tx.send(Signal::Reignite));
    }

    #[tokio::test]
    async fn sender_works_from_a_plain_thread() {
        let (tx, mut rx) = signal_channel();
        std::thread::spawn(move || tx.send(Signal::Quit))
            .join()
            .unwrap();
        assert_eq!(rx.recv().await, Some(Signal::Quit));
        assert_eq!(rx.recv().await, None);
    }
}
