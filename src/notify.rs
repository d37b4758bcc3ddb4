//! Completion notification delivery

use tracing::info;

/// Receives the completion event when a run reaches zero.
///
/// The timer invokes this synchronously from inside its state lock, exactly
/// once per run. Implementations must return promptly and must not call back
/// into the timer; hand the event off to a channel or task if the real work
/// is slow.
pub trait CompletionNotifier: Send + Sync {
    fn notify_completion(&self);
}

/// Default notifier that prints the completion alert to the terminal.
pub struct AlertNotifier;

impl CompletionNotifier for AlertNotifier {
    fn notify_completion(&self) {
        println!("Таймер завершен: Обратный отсчет завершен!");
        info!("Completion alert delivered");
    }
}
