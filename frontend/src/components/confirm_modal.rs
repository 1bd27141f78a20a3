use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/cancel dialog used before destructive actions
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop-custom" onclick={on_backdrop_click}>
            <div class="modal-dialog" onclick={on_dialog_click}>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{props.title.to_string()}</h5>
                        <button type="button" class="btn-close" onclick={on_cancel.clone()}></button>
                    </div>
                    <div class="modal-body">
                        {props.message.to_string()}
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Batal"}</button>
                        <button type="button" class="btn btn-danger" onclick={on_confirm}>{"Ya"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
