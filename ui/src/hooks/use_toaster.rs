use std::time::Duration;

use dioxus::prelude::*;
use futures::StreamExt;
use upi::notice::Followup;
use upi::notice::Notice;

/// How long a toast stays on screen before it dismisses itself.
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Handle for showing toasts from any component below the provider.
///
/// Timers run in the provider's scope, so a pending advisory still appears
/// after the component that scheduled it has been unmounted.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    queue: Coroutine<Followup>,
}

impl Toaster {
    pub fn follow_up(&self, followup: Followup) {
        self.queue.send(followup);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    /// Returns the signal holding the visible toasts, oldest first.
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts
    }
}

/// Creates the toaster and provides it to the component tree.
pub fn use_toaster_provider() -> Toaster {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);

    let queue = use_coroutine(move |mut rx: UnboundedReceiver<Followup>| async move {
        while let Some(followup) = rx.next().await {
            // every followup gets its own timer; nothing is cancelled or merged
            spawn(async move {
                let mut toasts = toasts;
                let mut next_id = next_id;
                let notice = match followup {
                    Followup::Delayed(notice, delay) => {
                        crate::compat::sleep(delay).await;
                        notice
                    }
                    Followup::Immediate(notice) => notice,
                };

                let id = *next_id.peek();
                next_id.set(id + 1);
                toasts.write().push(Toast { id, notice });

                crate::compat::sleep(TOAST_LIFETIME).await;
                toasts.write().retain(|t| t.id != id);
            });
        }
    });

    use_context_provider(|| Toaster { toasts, queue })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
