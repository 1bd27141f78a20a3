use shared::export::{export_filename, TRANSACTION_EXPORT_HEADERS};
use shared::{ExportFormat, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{TransactionFilters, TransactionFormModal, TransactionTable};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::export_buttons::ExportButtons;
use crate::hooks::use_alerts::AlertKind;
use crate::hooks::use_modal::use_modal;
use crate::hooks::use_products::{use_products, ProductFilter};
use crate::hooks::use_transactions::{use_transactions, TransactionFilter};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::download::{download_csv, download_json};
use crate::services::logging::Logger;
use crate::services::transactions::TransactionService;

#[derive(Properties, PartialEq)]
pub struct TransactionPageProps {
    pub api_client: ApiClient,
    pub on_notify: Callback<(AlertKind, String)>,
}

#[function_component(TransactionPage)]
pub fn transaction_page(props: &TransactionPageProps) -> Html {
    let filter = use_state(|| TransactionFilter::All);
    let transactions = use_transactions(&props.api_client, (*filter).clone());
    let products = use_products(&props.api_client, ProductFilter::All);
    let form_modal = use_modal();
    let editing = use_state(|| Option::<Transaction>::None);
    let pending_delete = use_state(|| Option::<Transaction>::None);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: TransactionFilter| filter.set(next))
    };

    let on_new = {
        let editing = editing.clone();
        let show = form_modal.show.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            show.emit(());
        })
    };

    // Fetch the latest copy before editing
    let on_edit = {
        let api_client = props.api_client.clone();
        let editing = editing.clone();
        let show = form_modal.show.clone();
        Callback::from(move |transaction: Transaction| {
            let Some(id) = transaction.id else {
                return;
            };
            let service = TransactionService::new(api_client.clone());
            let editing = editing.clone();
            let show = show.clone();
            spawn_local(async move {
                if let Ok(latest) = service.get_by_id(id).await {
                    editing.set(Some(latest));
                    show.emit(());
                }
            });
        })
    };

    let on_repeat = {
        let api_client = props.api_client.clone();
        let refresh_transactions = transactions.refresh.clone();
        let refresh_products = products.refresh.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |transaction: Transaction| {
            let Some(request) = transaction.repeat_request() else {
                on_notify.emit((AlertKind::Warning, "Produk transaksi ini sudah tidak ada".to_string()));
                return;
            };
            let service = TransactionService::new(api_client.clone());
            let refresh_transactions = refresh_transactions.clone();
            let refresh_products = refresh_products.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                if service.create(&request).await.is_ok() {
                    on_notify.emit((AlertKind::Success, "Transaksi berhasil diulang".to_string()));
                    refresh_transactions.emit(());
                    refresh_products.emit(());
                }
            });
        })
    };

    let on_saved = {
        let hide = form_modal.hide.clone();
        let editing = editing.clone();
        let refresh_transactions = transactions.refresh.clone();
        let refresh_products = products.refresh.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: Transaction| {
            let message = if editing.is_some() {
                "Transaksi berhasil diupdate"
            } else {
                "Transaksi berhasil disimpan"
            };
            on_notify.emit((AlertKind::Success, message.to_string()));
            editing.set(None);
            hide.emit(());
            refresh_transactions.emit(());
            refresh_products.emit(());
        })
    };

    let on_close = {
        let hide = form_modal.hide.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            hide.emit(());
        })
    };

    let on_delete_request = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |transaction: Transaction| pending_delete.set(Some(transaction)))
    };

    let on_delete_confirm = {
        let api_client = props.api_client.clone();
        let pending_delete = pending_delete.clone();
        let refresh_transactions = transactions.refresh.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: ()| {
            let Some(id) = (*pending_delete).as_ref().and_then(|t| t.id) else {
                pending_delete.set(None);
                return;
            };
            pending_delete.set(None);

            let service = TransactionService::new(api_client.clone());
            let refresh_transactions = refresh_transactions.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                if service.delete(id).await.is_ok() {
                    on_notify.emit((AlertKind::Success, "Transaksi berhasil dihapus".to_string()));
                    refresh_transactions.emit(());
                }
            });
        })
    };

    let on_delete_cancel = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_export = {
        let rows = transactions.transactions.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |format: ExportFormat| {
            let filename = export_filename("transactions", format, today());
            let result = match format {
                ExportFormat::Csv => download_csv(&rows, &TRANSACTION_EXPORT_HEADERS, &filename),
                ExportFormat::Json => download_json(&rows, &filename),
            };
            match result {
                Ok(()) => on_notify.emit((AlertKind::Success, format!("Data diexport ke {}", filename))),
                Err(e) => {
                    Logger::error_with_component("transaction-page", &format!("Export failed: {}", e));
                    on_notify.emit((AlertKind::Danger, format!("Gagal export data: {}", e)));
                }
            }
        })
    };

    html! {
        <section class="transactions-page">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2>{"Transaksi"}</h2>
                <div class="d-flex gap-2">
                    <ExportButtons on_export={on_export} disabled={transactions.transactions.is_empty()} />
                    <button class="btn btn-primary btn-sm" onclick={on_new}>
                        <i class="bi bi-plus-lg me-1"></i>{"Transaksi Baru"}
                    </button>
                </div>
            </div>

            <TransactionFilters products={products.products.clone()} on_change={on_filter_change} />

            <TransactionTable
                title={format!("{} ({})", describe(&filter), transactions.transactions.len())}
                transactions={transactions.transactions.clone()}
                loading={transactions.loading}
                on_edit={on_edit}
                on_repeat={on_repeat}
                on_delete={on_delete_request}
            />

            <TransactionFormModal
                is_open={form_modal.is_open}
                api_client={props.api_client.clone()}
                products={products.products.clone()}
                editing={(*editing).clone()}
                on_saved={on_saved}
                on_close={on_close}
            />

            <ConfirmModal
                is_open={pending_delete.is_some()}
                title="Hapus Transaksi"
                message="Apakah Anda yakin ingin menghapus transaksi ini?"
                on_confirm={on_delete_confirm}
                on_cancel={on_delete_cancel}
            />
        </section>
    }
}

fn describe(filter: &TransactionFilter) -> String {
    match filter {
        TransactionFilter::All => "Semua Transaksi".to_string(),
        TransactionFilter::ByType(transaction_type) => transaction_type.label().to_string(),
        TransactionFilter::ByProduct(id) => format!("Transaksi Produk #{}", id),
        TransactionFilter::DateRange(range) => format!(
            "{} - {}",
            range.start.format("%d/%m/%Y"),
            range.end.format("%d/%m/%Y")
        ),
        TransactionFilter::Recent => "Transaksi Terbaru".to_string(),
    }
}
