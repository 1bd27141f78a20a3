use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_alerts::Alert;

#[derive(Properties, PartialEq)]
pub struct AlertStackProps {
    pub alerts: Vec<Alert>,
    pub on_dismiss: Callback<u64>,
    pub timeout_ms: u32,
}

/// Dismissible alerts shown at the top of the content area
#[function_component(AlertStack)]
pub fn alert_stack(props: &AlertStackProps) -> Html {
    html! {
        <div class="alert-stack">
            {for props.alerts.iter().map(|alert| html! {
                <AlertItem
                    key={alert.id}
                    alert={alert.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                    timeout_ms={props.timeout_ms}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AlertItemProps {
    alert: Alert,
    on_dismiss: Callback<u64>,
    timeout_ms: u32,
}

#[function_component(AlertItem)]
fn alert_item(props: &AlertItemProps) -> Html {
    // Auto remove after the configured timeout
    {
        let id = props.alert.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((id, props.timeout_ms), move |(id, timeout_ms)| {
            let id = *id;
            let timeout = Timeout::new(*timeout_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let id = props.alert.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind = props.alert.kind;
    html! {
        <div class={classes!("alert", kind.css_class(), "alert-dismissible", "fade", "show")} role="alert">
            <i class={classes!("bi", kind.icon(), "me-2")}></i>
            {&props.alert.message}
            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
