use std::rc::Rc;
use yew::prelude::*;

/// Bootstrap alert flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Danger => "alert-danger",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "bi-check-circle-fill",
            AlertKind::Danger | AlertKind::Warning => "bi-exclamation-triangle-fill",
            AlertKind::Info => "bi-info-circle-fill",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
}

/// Alerts currently on screen, newest first
#[derive(Debug, Default, PartialEq)]
pub struct AlertList {
    pub alerts: Vec<Alert>,
    next_id: u64,
}

pub enum AlertAction {
    Push(AlertKind, String),
    Dismiss(u64),
}

impl Reducible for AlertList {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AlertAction::Push(kind, message) => {
                let mut alerts = Vec::with_capacity(self.alerts.len() + 1);
                alerts.push(Alert {
                    id: self.next_id,
                    kind,
                    message,
                });
                alerts.extend(self.alerts.iter().cloned());
                Rc::new(AlertList {
                    alerts,
                    next_id: self.next_id + 1,
                })
            }
            AlertAction::Dismiss(id) => {
                if !self.alerts.iter().any(|alert| alert.id == id) {
                    return self;
                }
                Rc::new(AlertList {
                    alerts: self.alerts.iter().filter(|a| a.id != id).cloned().collect(),
                    next_id: self.next_id,
                })
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAlertsHandle {
    pub alerts: Vec<Alert>,
    pub push: Callback<(AlertKind, String)>,
    pub dismiss: Callback<u64>,
}

#[hook]
pub fn use_alerts() -> UseAlertsHandle {
    let list = use_reducer(AlertList::default);

    let push = {
        let dispatcher = list.dispatcher();
        use_callback((), move |(kind, message): (AlertKind, String), _| {
            dispatcher.dispatch(AlertAction::Push(kind, message));
        })
    };

    let dismiss = {
        let dispatcher = list.dispatcher();
        use_callback((), move |id: u64, _| {
            dispatcher.dispatch(AlertAction::Dismiss(id));
        })
    };

    UseAlertsHandle {
        alerts: list.alerts.clone(),
        push,
        dismiss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_alert_icons() {
        assert_eq!(AlertKind::Success.icon(), "bi-check-circle-fill");
        assert_eq!(AlertKind::Danger.icon(), "bi-exclamation-triangle-fill");
        assert_eq!(AlertKind::Warning.icon(), "bi-exclamation-triangle-fill");
        assert_eq!(AlertKind::Info.icon(), "bi-info-circle-fill");
        assert_eq!(AlertKind::Danger.css_class(), "alert-danger");
    }

    #[wasm_bindgen_test]
    fn test_newest_alert_first_and_dismiss() {
        let list = Rc::new(AlertList::default());
        let list = list.reduce(AlertAction::Push(AlertKind::Info, "first".to_string()));
        let list = list.reduce(AlertAction::Push(AlertKind::Danger, "second".to_string()));

        let messages: Vec<&str> = list.alerts.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);

        let first_id = list.alerts[1].id;
        let list = list.reduce(AlertAction::Dismiss(first_id));
        assert_eq!(list.alerts.len(), 1);
        assert_eq!(list.alerts[0].message, "second");

        // Dismissing twice is harmless
        let list = list.reduce(AlertAction::Dismiss(first_id));
        assert_eq!(list.alerts.len(), 1);
    }
}
