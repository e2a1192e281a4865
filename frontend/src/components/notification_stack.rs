use shared::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub entries: Vec<(u32, Notification)>,
}

#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    html! {
        <div class="notification-stack">
            {for props.entries.iter().map(|(id, notification)| html! {
                <div key={*id} class={classes!("notification", notification.kind.css_class())}>
                    {&notification.message}
                </div>
            })}
        </div>
    }
}
