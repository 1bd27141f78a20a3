use yew::prelude::*;

/// Open/close state for a modal dialog
#[derive(Clone, PartialEq)]
pub struct UseModalHandle {
    pub is_open: bool,
    pub show: Callback<()>,
    pub hide: Callback<()>,
}

#[hook]
pub fn use_modal() -> UseModalHandle {
    let is_open = use_state(|| false);

    let show = {
        let is_open = is_open.clone();
        use_callback((), move |_: (), _| is_open.set(true))
    };

    let hide = {
        let is_open = is_open.clone();
        use_callback((), move |_: (), _| is_open.set(false))
    };

    UseModalHandle {
        is_open: *is_open,
        show,
        hide,
    }
}
