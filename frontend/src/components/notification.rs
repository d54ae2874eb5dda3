use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew_hooks::use_update;

use crate::config::NOTIFICATION_TTL_MS;
use crate::timer::{BrowserScheduler, Scheduler};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Error => "#ef4444",
            NotificationKind::Success => "#10b981",
            NotificationKind::Info => "#3b82f6",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Error => "notification-error",
            NotificationKind::Success => "notification-success",
            NotificationKind::Info => "notification-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self { message: message.into(), kind }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Holds at most one visible notification. Showing a new one evicts the
/// previous immediately; there is no queue.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Option<(NotificationId, Notification)>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn show(&mut self, notification: Notification) -> NotificationId {
        if let Some((previous, _)) = self.active.take() {
            debug!("Replacing notification {}", previous);
        }
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.active = Some((id, notification));
        id
    }

    /// Removes `id` if it is still the one on screen. Returns whether
    /// anything was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &self.active {
            Some((active, _)) if *active == id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> Option<(NotificationId, &Notification)> {
        self.active.as_ref().map(|(id, n)| (*id, n))
    }
}

/// Shared handle to the page's notification center. Arms the auto-dismiss
/// timer for every notification it shows.
#[derive(Clone)]
pub struct Notifier<S: Scheduler> {
    center: Rc<RefCell<NotificationCenter>>,
    scheduler: S,
    on_change: Callback<()>,
}

pub type SiteNotifier = Notifier<BrowserScheduler>;

impl<S: Scheduler> Notifier<S> {
    pub fn new(scheduler: S, on_change: Callback<()>) -> Self {
        Self {
            center: Rc::new(RefCell::new(NotificationCenter::default())),
            scheduler,
            on_change,
        }
    }

    pub fn show(&self, notification: Notification) -> NotificationId {
        debug!("Showing {:?} notification", notification.kind);
        let id = self.center.borrow_mut().show(notification);
        self.on_change.emit(());

        let notifier = self.clone();
        self.scheduler.defer(
            NOTIFICATION_TTL_MS,
            Box::new(move || {
                notifier.dismiss(id);
            }),
        );
        id
    }

    pub fn dismiss(&self, id: NotificationId) {
        let removed = self.center.borrow_mut().dismiss(id);
        if removed {
            debug!("Dismissed notification {}", id);
            self.on_change.emit(());
        }
    }

    pub fn active(&self) -> Option<(NotificationId, Notification)> {
        self.center
            .borrow()
            .active()
            .map(|(id, n)| (id, n.clone()))
    }
}

impl<S: Scheduler> PartialEq for Notifier<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.center, &other.center)
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Makes a [`SiteNotifier`] available to every child and renders the
/// active notification on top of the page.
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let update = use_update();
    let notifier = use_state(move || {
        SiteNotifier::new(BrowserScheduler, Callback::from(move |_| update()))
    });

    let toast = match notifier.active() {
        Some((id, notification)) => {
            let on_close = {
                let notifier = (*notifier).clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    notifier.dismiss(id);
                })
            };
            let style = format!(
                "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
                 padding: 1rem; border-radius: 0.5rem; box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1); \
                 z-index: 1000; max-width: 400px; animation: slideIn 0.3s ease-out;",
                notification.kind.background()
            );
            html! {
                <div class={classes!("notification", notification.kind.class())} style={style} role="alert">
                    <div class="notification-content">
                        <span class="notification-message">
                            { for notification.message.split('\n').enumerate().map(|(i, line)| html! {
                                <>
                                    { if i > 0 { html! { <br /> } } else { html! {} } }
                                    { line }
                                </>
                            }) }
                        </span>
                        <button class="notification-close" onclick={on_close}>{"×"}</button>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<SiteNotifier> context={(*notifier).clone()}>
            <style>
                {r#"
                    @keyframes slideIn {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .notification-content {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.25rem;
                        line-height: 1;
                        cursor: pointer;
                    }
                "#}
            </style>
            { for props.children.iter() }
            { toast }
        </ContextProvider<SiteNotifier>>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::timer::testing::ManualScheduler;

    fn notifier() -> (Notifier<ManualScheduler>, ManualScheduler, Rc<Cell<u32>>) {
        let scheduler = ManualScheduler::new();
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        let notifier = Notifier::new(
            scheduler.clone(),
            Callback::from(move |_| counter.set(counter.get() + 1)),
        );
        (notifier, scheduler, renders)
    }

    #[test]
    fn showing_twice_leaves_only_the_second() {
        let mut center = NotificationCenter::default();
        center.show(Notification::new("first", NotificationKind::Info));
        let second = center.show(Notification::error("second"));

        let (id, active) = center.active().unwrap();
        assert_eq!(id, second);
        assert_eq!(active.message, "second");
        assert_eq!(active.kind, NotificationKind::Error);
    }

    #[test]
    fn dismissing_a_replaced_notification_is_a_no_op() {
        let mut center = NotificationCenter::default();
        let first = center.show(Notification::new("first", NotificationKind::Info));
        center.show(Notification::new("second", NotificationKind::Info));

        assert!(!center.dismiss(first));
        assert_eq!(center.active().unwrap().1.message, "second");
    }

    #[test]
    fn auto_dismisses_after_ttl() {
        let (notifier, scheduler, _) = notifier();
        notifier.show(Notification::success("saved"));

        scheduler.advance(u64::from(NOTIFICATION_TTL_MS) - 1);
        assert!(notifier.active().is_some());
        scheduler.advance(1);
        assert!(notifier.active().is_none());
    }

    #[test]
    fn timer_after_manual_dismiss_does_nothing() {
        let (notifier, scheduler, renders) = notifier();
        let id = notifier.show(Notification::new("hello", NotificationKind::Info));
        notifier.dismiss(id);
        assert_eq!(renders.get(), 2);

        scheduler.advance(u64::from(NOTIFICATION_TTL_MS));
        assert!(notifier.active().is_none());
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn stale_timer_keeps_newer_notification() {
        let (notifier, scheduler, _) = notifier();
        notifier.show(Notification::new("first", NotificationKind::Info));
        scheduler.advance(3_000);
        notifier.show(Notification::new("second", NotificationKind::Info));

        scheduler.advance(2_000);
        assert_eq!(notifier.active().unwrap().1.message, "second");
        scheduler.advance(3_000);
        assert!(notifier.active().is_none());
    }

    #[test]
    fn colours_follow_kind() {
        assert_eq!(NotificationKind::Error.background(), "#ef4444");
        assert_eq!(NotificationKind::Success.background(), "#10b981");
        assert_eq!(NotificationKind::Info.background(), "#3b82f6");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }
}
