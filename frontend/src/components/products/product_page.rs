use shared::export::{export_filename, PRODUCT_EXPORT_HEADERS};
use shared::{ClientConfig, ExportFormat, Product};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{ProductFilters, ProductFormModal, ProductTable};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::export_buttons::ExportButtons;
use crate::hooks::use_alerts::AlertKind;
use crate::hooks::use_modal::use_modal;
use crate::hooks::use_products::{use_products, ProductFilter};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::download::{download_csv, download_json};
use crate::services::logging::Logger;
use crate::services::products::ProductService;

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    pub api_client: ApiClient,
    pub config: ClientConfig,
    pub on_notify: Callback<(AlertKind, String)>,
}

#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    let filter = use_state(|| ProductFilter::All);
    let products = use_products(&props.api_client, (*filter).clone());
    let form_modal = use_modal();
    let editing = use_state(|| Option::<Product>::None);
    let pending_delete = use_state(|| Option::<Product>::None);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: ProductFilter| filter.set(next))
    };

    let on_new = {
        let editing = editing.clone();
        let show = form_modal.show.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            show.emit(());
        })
    };

    let on_edit = {
        let api_client = props.api_client.clone();
        let editing = editing.clone();
        let show = form_modal.show.clone();
        Callback::from(move |product: Product| {
            let Some(id) = product.id else {
                return;
            };
            let service = ProductService::new(api_client.clone());
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

    let on_saved = {
        let hide = form_modal.hide.clone();
        let editing = editing.clone();
        let refresh = products.refresh.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |product: Product| {
            let message = if editing.is_some() {
                format!("Produk \"{}\" berhasil diupdate", product.name)
            } else {
                format!("Produk \"{}\" berhasil ditambahkan", product.name)
            };
            on_notify.emit((AlertKind::Success, message));
            editing.set(None);
            hide.emit(());
            refresh.emit(());
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
        Callback::from(move |product: Product| pending_delete.set(Some(product)))
    };

    let on_delete_confirm = {
        let api_client = props.api_client.clone();
        let pending_delete = pending_delete.clone();
        let refresh = products.refresh.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: ()| {
            let target = (*pending_delete).clone();
            pending_delete.set(None);
            let Some((id, name)) = target.and_then(|p| Some((p.id?, p.name))) else {
                return;
            };

            let service = ProductService::new(api_client.clone());
            let refresh = refresh.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                if service.delete(id).await.is_ok() {
                    on_notify.emit((AlertKind::Success, format!("Produk \"{}\" berhasil dihapus", name)));
                    refresh.emit(());
                }
            });
        })
    };

    let on_delete_cancel = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_export = {
        let rows = products.products.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |format: ExportFormat| {
            let filename = export_filename("products", format, today());
            let result = match format {
                ExportFormat::Csv => download_csv(&rows, &PRODUCT_EXPORT_HEADERS, &filename),
                ExportFormat::Json => download_json(&rows, &filename),
            };
            match result {
                Ok(()) => on_notify.emit((AlertKind::Success, format!("Data diexport ke {}", filename))),
                Err(e) => {
                    Logger::error_with_component("product-page", &format!("Export failed: {}", e));
                    on_notify.emit((AlertKind::Danger, format!("Gagal export data: {}", e)));
                }
            }
        })
    };

    let delete_message = (*pending_delete)
        .as_ref()
        .map(|p| format!("Apakah Anda yakin ingin menghapus produk \"{}\"?", p.name))
        .unwrap_or_default();

    html! {
        <section class="products-page">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2>{"Produk"}</h2>
                <div class="d-flex gap-2">
                    <ExportButtons on_export={on_export} disabled={products.products.is_empty()} />
                    <button class="btn btn-primary btn-sm" onclick={on_new}>
                        <i class="bi bi-plus-lg me-1"></i>{"Tambah Produk"}
                    </button>
                </div>
            </div>

            <ProductFilters
                on_change={on_filter_change}
                low_stock_threshold={props.config.low_stock_threshold}
                search_debounce_ms={props.config.search_debounce_ms}
            />

            <h5 class="text-muted">{format!("{} ({})", filter.describe(), products.products.len())}</h5>

            <ProductTable
                products={products.products.clone()}
                loading={products.loading}
                low_stock_threshold={props.config.low_stock_threshold}
                on_edit={on_edit}
                on_delete={on_delete_request}
            />

            <ProductFormModal
                is_open={form_modal.is_open}
                api_client={props.api_client.clone()}
                editing={(*editing).clone()}
                on_saved={on_saved}
                on_close={on_close}
            />

            <ConfirmModal
                is_open={pending_delete.is_some()}
                title="Hapus Produk"
                message={delete_message}
                on_confirm={on_delete_confirm}
                on_cancel={on_delete_cancel}
            />
        </section>
    }
}
