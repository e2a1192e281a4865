use gloo::timers::callback::Timeout;
use shared::Notification;
use std::rc::Rc;
use yew::prelude::*;

/// Notifications currently on screen, oldest first
#[derive(Debug, Default, PartialEq)]
pub struct NotificationQueue {
    pub entries: Vec<(u32, Notification)>,
}

pub enum NotificationAction {
    Push(u32, Notification),
    Dismiss(u32),
}

impl Reducible for NotificationQueue {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut entries = self.entries.clone();
        match action {
            NotificationAction::Push(id, notification) => entries.push((id, notification)),
            NotificationAction::Dismiss(id) => entries.retain(|(entry_id, _)| *entry_id != id),
        }
        Rc::new(Self { entries })
    }
}

pub struct UseNotificationsResult {
    pub entries: Vec<(u32, Notification)>,
    pub notify: Callback<Notification>,
}

/// Each notification removes itself after `timeout_ms`; there is no early dismissal
#[hook]
pub fn use_notifications(timeout_ms: u32) -> UseNotificationsResult {
    let queue = use_reducer(NotificationQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let notify = {
        let dispatcher = queue.dispatcher();
        use_callback(timeout_ms, move |notification: Notification, timeout_ms| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };

            dispatcher.dispatch(NotificationAction::Push(id, notification));

            let dispatcher = dispatcher.clone();
            Timeout::new(*timeout_ms, move || {
                dispatcher.dispatch(NotificationAction::Dismiss(id));
            })
            .forget();
        })
    };

    UseNotificationsResult {
        entries: queue.entries.clone(),
        notify,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let queue = Rc::new(NotificationQueue::default());
        let queue = queue.reduce(NotificationAction::Push(1, Notification::success("saved")));
        let queue = queue.reduce(NotificationAction::Push(2, Notification::error("failed")));
        assert_eq!(queue.entries.len(), 2);

        let queue = queue.reduce(NotificationAction::Dismiss(1));
        assert_eq!(queue.entries, vec![(2, Notification::error("failed"))]);

        let queue = queue.reduce(NotificationAction::Dismiss(42));
        assert_eq!(queue.entries.len(), 1);
    }
}
