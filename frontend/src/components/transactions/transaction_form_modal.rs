use shared::format::format_currency;
use shared::{validate_transaction, Product, Transaction, TransactionDraft, TransactionType};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::products::ProductService;
use crate::services::transactions::TransactionService;

#[derive(Properties, PartialEq)]
pub struct TransactionFormModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub products: Vec<Product>,
    pub on_saved: Callback<Transaction>,
    pub on_close: Callback<()>,
    /// Edit this transaction instead of recording a new one
    #[prop_or_default]
    pub editing: Option<Transaction>,
}

/// Records a sale or purchase for one product
#[function_component(TransactionFormModal)]
pub fn transaction_form_modal(props: &TransactionFormModalProps) -> Html {
    let product_id = use_state(String::new);
    let quantity = use_state(String::new);
    let transaction_type = use_state(|| TransactionType::Sale.as_str().to_string());
    let description = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let submitting = use_state(|| false);

    // Reset or prefill state when modal opens
    {
        let product_id = product_id.clone();
        let quantity = quantity.clone();
        let transaction_type = transaction_type.clone();
        let description = description.clone();
        let errors = errors.clone();
        use_effect_with(
            (props.is_open, props.editing.clone()),
            move |(is_open, editing)| {
                if *is_open {
                    let initial = editing
                        .as_ref()
                        .map(TransactionDraft::from_transaction)
                        .unwrap_or_default();
                    product_id.set(initial.product_id.map(|id| id.to_string()).unwrap_or_default());
                    quantity.set(initial.quantity.map(|q| q.to_string()).unwrap_or_default());
                    transaction_type.set(
                        initial
                            .transaction_type
                            .unwrap_or(TransactionType::Sale)
                            .as_str()
                            .to_string(),
                    );
                    description.set(initial.description);
                    errors.set(Vec::new());
                }
                || ()
            },
        );
    }

    let editing_id = props.editing.as_ref().and_then(|t| t.id);

    let draft = TransactionDraft::from_inputs(&product_id, &quantity, &transaction_type, &description);
    let selected_product = draft
        .product_id
        .and_then(|id| props.products.iter().find(|p| p.id == Some(id)).cloned());
    let total_preview = selected_product
        .as_ref()
        .and_then(|product| draft.total_price(product.price));

    let on_product_change = {
        let product_id = product_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            product_id.set(select.value());
        })
    };

    let on_type_change = {
        let transaction_type = transaction_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            transaction_type.set(select.value());
        })
    };

    let on_quantity_change = {
        let quantity = quantity.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            quantity.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let on_saved = props.on_saved.clone();
        let unit_price = selected_product.as_ref().map(|p| p.price);
        let editing = props.editing.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = validate_transaction(&draft);
            if !validation.is_valid() {
                errors.set(validation.messages());
                return;
            }

            let (Some(product_id), Some(quantity), Some(transaction_type)) =
                (draft.product_id, draft.quantity, draft.transaction_type)
            else {
                return;
            };
            let update_request = editing
                .as_ref()
                .and_then(|previous| draft.clone().into_update_request(unit_price, previous));
            let description = draft.description.trim().to_string();

            errors.set(Vec::new());
            submitting.set(true);

            let api_client = api_client.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let products = ProductService::new(api_client.clone());
                let transactions = TransactionService::new(api_client);

                if let (Some(id), Some(request)) = (editing_id, update_request.as_ref()) {
                    match transactions.update(id, request).await {
                        Ok(transaction) => {
                            Logger::info_with_component(
                                "transaction-form",
                                &format!("Updated transaction {}", id),
                            );
                            on_saved.emit(transaction);
                        }
                        Err(e) => errors.set(vec![e.to_string()]),
                    }
                    submitting.set(false);
                    return;
                }

                if transaction_type == TransactionType::Sale {
                    if let Ok(false) = products.check_availability(product_id, quantity).await {
                        errors.set(vec!["Stok tidak mencukupi untuk penjualan ini".to_string()]);
                        submitting.set(false);
                        return;
                    }
                }

                let description = Some(description.as_str()).filter(|d| !d.is_empty());
                let result = match transaction_type {
                    TransactionType::Sale => {
                        transactions.create_sale(product_id, quantity, description).await
                    }
                    TransactionType::Purchase => {
                        transactions.create_purchase(product_id, quantity, description).await
                    }
                };

                match result {
                    Ok(transaction) => {
                        Logger::info_with_component(
                            "transaction-form",
                            &format!("Recorded {} of {} for product {}", transaction_type, quantity, product_id),
                        );
                        on_saved.emit(transaction);
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
                                {if editing_id.is_some() { "Edit Transaksi" } else { "Transaksi Baru" }}
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
                                <label for="transaction-product" class="form-label">{"Produk"}</label>
                                <select id="transaction-product" class="form-select" onchange={on_product_change} disabled={*submitting}>
                                    <option value="" selected={product_id.is_empty()}>{"-- Pilih produk --"}</option>
                                    {for props.products.iter().filter_map(|product| {
                                        let id = product.id?;
                                        Some(html! {
                                            <option value={id.to_string()} selected={*product_id == id.to_string()}>
                                                {format!("{} (stok {})", product.name, product.stock)}
                                            </option>
                                        })
                                    })}
                                </select>
                            </div>

                            <div class="mb-3">
                                <label for="transaction-type" class="form-label">{"Tipe"}</label>
                                <select id="transaction-type" class="form-select" onchange={on_type_change} disabled={*submitting}>
                                    {for TransactionType::ALL.iter().map(|kind| html! {
                                        <option value={kind.as_str()} selected={*transaction_type == kind.as_str()}>
                                            {kind.label()}
                                        </option>
                                    })}
                                </select>
                            </div>

                            <div class="mb-3">
                                <label for="transaction-quantity" class="form-label">{"Jumlah"}</label>
                                <input
                                    id="transaction-quantity"
                                    type="number"
                                    min="1"
                                    class="form-control"
                                    value={(*quantity).clone()}
                                    onchange={on_quantity_change}
                                    disabled={*submitting}
                                />
                            </div>

                            <div class="mb-3">
                                <label for="transaction-description" class="form-label">{"Keterangan"}</label>
                                <input
                                    id="transaction-description"
                                    type="text"
                                    class="form-control"
                                    value={(*description).clone()}
                                    onchange={on_description_change}
                                    disabled={*submitting}
                                />
                            </div>

                            {if let Some(total) = total_preview {
                                html! {
                                    <div class="total-preview">
                                        {"Total: "}<strong>{format_currency(total)}</strong>
                                    </div>
                                }
                            } else { html! {} }}
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
