use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// At most this many toasts are on screen; older ones are dropped first
pub const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Transient notifications (toasts).
///
/// Every notification expires after `timeout_ms`; it can also be closed by hand.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            timeout_ms,
        }
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            NotificationKind::Error => log::error!("{}", message),
            NotificationKind::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        if self.timeout_ms > 0 {
            let svc = *self;
            let timeout = self.timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout).await;
                svc.dismiss(id);
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        let present = self
            .queue
            .try_with_untracked(|q| q.items().iter().any(|n| n.id == id))
            .unwrap_or(false);
        if present {
            self.queue.update(|q| {
                q.dismiss(id);
            });
        }
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

fn intent(kind: NotificationKind) -> MessageBarIntent {
    match kind {
        NotificationKind::Success => MessageBarIntent::Success,
        NotificationKind::Info => MessageBarIntent::Info,
        NotificationKind::Warning => MessageBarIntent::Warning,
        NotificationKind::Error => MessageBarIntent::Error,
    }
}

/// Renders the toast stack in the bottom-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || svc.items()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class="notification">
                            <MessageBar intent=intent(n.kind)>
                                <span class="notification__text">{n.message.clone()}</span>
                                <button
                                    class="notification__close"
                                    title="Close"
                                    on:click=move |_| svc.dismiss(id)
                                >
                                    "×"
                                </button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationKind::Success, "Saved");
        let b = queue.push(NotificationKind::Error, "Failed");
        assert_ne!(a, b);
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "Failed");
    }

    #[test]
    fn test_oldest_dropped_beyond_limit() {
        let mut queue = NotificationQueue::default();
        for i in 0..(MAX_VISIBLE + 2) {
            queue.push(NotificationKind::Info, format!("n{}", i));
        }
        assert_eq!(queue.items().len(), MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "n2");
    }
}
