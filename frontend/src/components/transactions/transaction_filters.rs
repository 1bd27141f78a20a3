use shared::{DateRange, Product, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_transactions::TransactionFilter;
use crate::services::date_utils::{parse_date_input, to_date_input, today};

#[derive(Properties, PartialEq)]
pub struct TransactionFiltersProps {
    pub products: Vec<Product>,
    pub on_change: Callback<TransactionFilter>,
}

/// Filter modes offered by the mode dropdown
const MODES: [(&str, &str); 6] = [
    ("all", "Semua transaksi"),
    ("recent", "Terbaru"),
    ("sale", "Penjualan"),
    ("purchase", "Pembelian"),
    ("product", "Per produk"),
    ("date", "Rentang tanggal"),
];

/// Build the filter for the current inputs, or a message explaining what is missing.
fn build_filter(mode: &str, product_id: &str, from: &str, to: &str) -> Result<TransactionFilter, String> {
    match mode {
        "recent" => Ok(TransactionFilter::Recent),
        "sale" => Ok(TransactionFilter::ByType(TransactionType::Sale)),
        "purchase" => Ok(TransactionFilter::ByType(TransactionType::Purchase)),
        "product" => product_id
            .parse()
            .map(TransactionFilter::ByProduct)
            .map_err(|_| "Pilih produk terlebih dahulu".to_string()),
        "date" => {
            let (Some(from), Some(to)) = (parse_date_input(from), parse_date_input(to)) else {
                return Err("Isi tanggal awal dan akhir".to_string());
            };
            DateRange::from_dates(from, to)
                .map(TransactionFilter::DateRange)
                .ok_or_else(|| "Tanggal awal harus sebelum tanggal akhir".to_string())
        }
        _ => Ok(TransactionFilter::All),
    }
}

#[function_component(TransactionFilters)]
pub fn transaction_filters(props: &TransactionFiltersProps) -> Html {
    let mode = use_state(|| "all".to_string());
    let product_id = use_state(String::new);
    let from = use_state(|| to_date_input(today()));
    let to = use_state(|| to_date_input(today()));
    let error = use_state(|| Option::<String>::None);

    let apply = {
        let on_change = props.on_change.clone();
        let error = error.clone();
        Callback::from(move |(mode, product_id, from, to): (String, String, String, String)| {
            match build_filter(&mode, &product_id, &from, &to) {
                Ok(filter) => {
                    error.set(None);
                    on_change.emit(filter);
                }
                Err(message) => error.set(Some(message)),
            }
        })
    };

    let on_mode_change = {
        let mode = mode.clone();
        let product_id = product_id.clone();
        let from = from.clone();
        let to = to.clone();
        let apply = apply.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            mode.set(value.clone());
            // Product and date modes wait for their inputs
            if value != "product" && value != "date" {
                apply.emit((value, (*product_id).clone(), (*from).clone(), (*to).clone()));
            }
        })
    };

    let on_product_change = {
        let product_id = product_id.clone();
        let apply = apply.clone();
        let (from, to) = (from.clone(), to.clone());
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            product_id.set(value.clone());
            apply.emit(("product".to_string(), value, (*from).clone(), (*to).clone()));
        })
    };

    let on_from_change = {
        let from = from.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            from.set(input.value());
        })
    };

    let on_to_change = {
        let to = to.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            to.set(input.value());
        })
    };

    let on_apply_dates = {
        let product_id = product_id.clone();
        let (from, to) = (from.clone(), to.clone());
        Callback::from(move |_: MouseEvent| {
            apply.emit(("date".to_string(), (*product_id).clone(), (*from).clone(), (*to).clone()));
        })
    };

    html! {
        <div class="transaction-filters row g-2 align-items-end mb-3">
            <div class="col-md-3">
                <label class="form-label small">{"Filter"}</label>
                <select class="form-select form-select-sm" onchange={on_mode_change}>
                    {for MODES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={*mode == *value}>{*label}</option>
                    })}
                </select>
            </div>

            {match mode.as_str() {
                "product" => html! {
                    <div class="col-md-4">
                        <label class="form-label small">{"Produk"}</label>
                        <select class="form-select form-select-sm" onchange={on_product_change}>
                            <option value="" selected={product_id.is_empty()}>{"-- Pilih produk --"}</option>
                            {for props.products.iter().filter_map(|product| {
                                let id = product.id?;
                                Some(html! {
                                    <option value={id.to_string()} selected={*product_id == id.to_string()}>
                                        {&product.name}
                                    </option>
                                })
                            })}
                        </select>
                    </div>
                },
                "date" => html! {
                    <>
                        <div class="col-md-3">
                            <label class="form-label small">{"Dari"}</label>
                            <input type="date" class="form-control form-control-sm" value={(*from).clone()} onchange={on_from_change} />
                        </div>
                        <div class="col-md-3">
                            <label class="form-label small">{"Sampai"}</label>
                            <input type="date" class="form-control form-control-sm" value={(*to).clone()} onchange={on_to_change} />
                        </div>
                        <div class="col-md-2">
                            <button class="btn btn-sm btn-outline-primary w-100" onclick={on_apply_dates}>{"Terapkan"}</button>
                        </div>
                    </>
                },
                _ => html! {},
            }}

            {if let Some(message) = &*error {
                html! { <div class="col-12 text-danger small">{message}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_build_filter_modes() {
        assert_eq!(build_filter("all", "", "", ""), Ok(TransactionFilter::All));
        assert_eq!(build_filter("recent", "", "", ""), Ok(TransactionFilter::Recent));
        assert_eq!(
            build_filter("purchase", "", "", ""),
            Ok(TransactionFilter::ByType(TransactionType::Purchase))
        );
        assert_eq!(build_filter("product", "12", "", ""), Ok(TransactionFilter::ByProduct(12)));
        assert!(build_filter("product", "", "", "").is_err());
    }

    #[wasm_bindgen_test]
    fn test_build_filter_date_range() {
        let filter = build_filter("date", "", "2024-03-01", "2024-03-31");
        assert!(matches!(filter, Ok(TransactionFilter::DateRange(_))));

        assert_eq!(
            build_filter("date", "", "2024-03-31", "2024-03-01"),
            Err("Tanggal awal harus sebelum tanggal akhir".to_string())
        );
        assert!(build_filter("date", "", "", "2024-03-01").is_err());
    }
}
