use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_alerts::AlertKind;
use crate::services::api::ApiActivity;

/// Number of API requests still waiting for a response
#[derive(Debug, Default, PartialEq)]
pub struct PendingRequests(pub u32);

impl Reducible for PendingRequests {
    type Action = ApiActivity;

    fn reduce(self: Rc<Self>, action: ApiActivity) -> Rc<Self> {
        let count = match action {
            ApiActivity::Started => self.0 + 1,
            ApiActivity::Finished | ApiActivity::Failed { .. } => self.0.saturating_sub(1),
        };
        Rc::new(PendingRequests(count))
    }
}

pub struct UseApiActivityHandle {
    /// True while at least one request is in flight
    pub loading: bool,
    pub on_activity: Callback<ApiActivity>,
}

/// Tracks request activity for the loading overlay and turns failures into alerts
#[hook]
pub fn use_api_activity(push_alert: Callback<(AlertKind, String)>) -> UseApiActivityHandle {
    let pending = use_reducer(PendingRequests::default);

    let on_activity = {
        let dispatcher = pending.dispatcher();
        use_callback(push_alert, move |activity: ApiActivity, push_alert| {
            if let Some(message) = activity.alert_message() {
                push_alert.emit((AlertKind::Danger, message));
            }
            dispatcher.dispatch(activity);
        })
    };

    UseApiActivityHandle {
        loading: pending.0 > 0,
        on_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::RequestKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_pending_request_counter() {
        let pending = Rc::new(PendingRequests::default());
        let pending = pending.reduce(ApiActivity::Started);
        let pending = pending.reduce(ApiActivity::Started);
        assert_eq!(pending.0, 2);

        let pending = pending.reduce(ApiActivity::Failed {
            kind: RequestKind::Save,
            message: "HTTP error! status: 500".to_string(),
        });
        let pending = pending.reduce(ApiActivity::Finished);
        assert_eq!(pending.0, 0);

        // An unmatched finish never underflows
        let pending = pending.reduce(ApiActivity::Finished);
        assert_eq!(pending.0, 0);
    }
}
