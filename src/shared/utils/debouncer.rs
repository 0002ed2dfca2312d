use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Delays propagation of a rapidly-changing value until it has been stable
/// for the configured interval.
///
/// Intermediate values are superseded and never emitted. Cancelling the
/// token (or dropping the handle) tears down any pending emission, so a
/// consumer never observes a value produced after teardown.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task. Returns the input handle and the channel on
    /// which stable values are delivered.
    pub fn spawn(delay: Duration, cancel: CancellationToken) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input_tx, mut input_rx) = mpsc::unbounded_channel::<T>();
        let (output_tx, output_rx) = mpsc::unbounded_channel::<T>();

        tokio::spawn(async move {
            loop {
                let mut latest = tokio::select! {
                    _ = cancel.cancelled() => break,
                    value = input_rx.recv() => match value {
                        Some(v) => v,
                        None => break,
                    },
                };

                // Quiescence loop: keep absorbing newer values until the
                // delay elapses without a change.
                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => return,
                        value = input_rx.recv() => match value {
                            Some(v) => latest = v,
                            None => return,
                        },
                        _ = sleep(delay) => break,
                    }
                }

                if output_tx.send(latest).is_err() {
                    break;
                }
            }
            debug!("Debouncer task stopped");
        });

        (Self { input: input_tx }, output_rx)
    }

    /// Feed a new value, superseding any value still waiting out its delay.
    pub fn push(&self, value: T) {
        let _ = self.input.send(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Duration};

    #[tokio::test(start_paused = true)]
    async fn test_emits_only_after_quiescence() {
        let (debouncer, mut rx) = Debouncer::spawn(
            Duration::from_millis(500),
            CancellationToken::new(),
        );

        debouncer.push("na");
        advance(Duration::from_millis(200)).await;
        debouncer.push("nar");
        advance(Duration::from_millis(200)).await;
        debouncer.push("naruto");

        // Nothing stable yet
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(501)).await;
        assert_eq!(rx.recv().await, Some("naruto"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_suppresses_pending_value() {
        let cancel = CancellationToken::new();
        let (debouncer, mut rx) = Debouncer::spawn(Duration::from_millis(500), cancel.clone());

        debouncer.push("pending");
        advance(Duration::from_millis(100)).await;
        cancel.cancel();
        advance(Duration::from_millis(1000)).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_successive_stable_values_all_emitted() {
        let (debouncer, mut rx) = Debouncer::spawn(
            Duration::from_millis(500),
            CancellationToken::new(),
        );

        debouncer.push(1);
        advance(Duration::from_millis(501)).await;
        assert_eq!(rx.recv().await, Some(1));

        debouncer.push(2);
        advance(Duration::from_millis(501)).await;
        assert_eq!(rx.recv().await, Some(2));
    }
}
