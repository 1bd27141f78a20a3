use shared::{validate_product, Product, ProductDraft};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::products::ProductService;

#[derive(Properties, PartialEq)]
pub struct ProductFormModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    /// Product being edited; `None` creates a new one
    #[prop_or_default]
    pub editing: Option<Product>,
    pub on_saved: Callback<Product>,
    pub on_close: Callback<()>,
}

#[function_component(ProductFormModal)]
pub fn product_form_modal(props: &ProductFormModalProps) -> Html {
    let name = use_state(String::new);
    let price = use_state(String::new);
    let stock = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let submitting = use_state(|| false);

    {
        let name = name.clone();
        let price = price.clone();
        let stock = stock.clone();
        let errors = errors.clone();
        use_effect_with(
            (props.is_open, props.editing.clone()),
            move |(is_open, editing)| {
                if *is_open {
                    let draft = editing
                        .as_ref()
                        .map(ProductDraft::from_product)
                        .unwrap_or_default();
                    name.set(draft.name);
                    price.set(draft.price.map(|p| p.to_string()).unwrap_or_default());
                    stock.set(draft.stock.map(|s| s.to_string()).unwrap_or_default());
                    errors.set(Vec::new());
                }
                || ()
            },
        );
    }

    let input_setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let editing_id = props.editing.as_ref().and_then(|p| p.id);

    let on_submit = {
        let api_client = props.api_client.clone();
        let draft = ProductDraft::from_inputs(&name, &price, &stock);
        let errors = errors.clone();
        let submitting = submitting.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = validate_product(&draft);
            if !validation.is_valid() {
                errors.set(validation.messages());
                return;
            }

            errors.set(Vec::new());
            submitting.set(true);

            let product = draft.clone().into_product(editing_id);
            let service = ProductService::new(api_client.clone());
            let errors = errors.clone();
            let submitting = submitting.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => service.update(id, &product).await,
                    None => service.create(&product).await,
                };

                match result {
                    Ok(saved) => {
                        Logger::info_with_component(
                            "product-form",
                            &format!("Saved product {:?} ({})", saved.id, saved.name),
                        );
                        on_saved.emit(saved);
                    }
                    Err(e) => errors.set(vec![e.to_string()]),
                }
                submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop-custom">
            <div class="modal-dialog">
                <div class="modal-content">
                    <form onsubmit={on_submit}>
                        <div class="modal-header">
                            <h5 class="modal-title">
                                {if editing_id.is_some() { "Edit Produk" } else { "Tambah Produk" }}
                            </h5>
                            <button type="button" class="btn-close" onclick={on_cancel.clone()}></button>
                        </div>
                        <div class="modal-body">
                            {if !errors.is_empty() {
                                html! {
                                    <div class="alert alert-danger">
                                        <ul class="mb-0">
                                            {for errors.iter().map(|error| html! { <li>{error}</li> })}
                                        </ul>
                                    </div>
                                }
                            } else { html! {} }}

                            <div class="mb-3">
                                <label for="product-name" class="form-label">{"Nama Produk"}</label>
                                <input id="product-name" type="text" class="form-control"
                                    value={(*name).clone()} onchange={input_setter(&name)} disabled={*submitting} />
                            </div>
                            <div class="mb-3">
                                <label for="product-price" class="form-label">{"Harga"}</label>
                                <input id="product-price" type="number" min="1" class="form-control"
                                    value={(*price).clone()} onchange={input_setter(&price)} disabled={*submitting} />
                            </div>
                            <div class="mb-3">
                                <label for="product-stock" class="form-label">{"Stok"}</label>
                                <input id="product-stock" type="number" min="0" class="form-control"
                                    value={(*stock).clone()} onchange={input_setter(&stock)} disabled={*submitting} />
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*submitting}>{"Batal"}</button>
                            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                                {if *submitting { "Menyimpan..." } else { "Simpan" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
