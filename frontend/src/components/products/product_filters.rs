use shared::PriceRange;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_debounce::use_debounce;
use crate::hooks::use_products::ProductFilter;

#[derive(Properties, PartialEq)]
pub struct ProductFiltersProps {
    pub on_change: Callback<ProductFilter>,
    pub low_stock_threshold: i32,
    pub search_debounce_ms: u32,
}

const STOCK_MODES: [(&str, &str); 4] = [
    ("all", "Semua stok"),
    ("in-stock", "Tersedia"),
    ("low-stock", "Stok rendah"),
    ("out-of-stock", "Stok habis"),
];

fn stock_filter(mode: &str, low_stock_threshold: i32) -> ProductFilter {
    match mode {
        "in-stock" => ProductFilter::InStock,
        "low-stock" => ProductFilter::LowStock(low_stock_threshold),
        "out-of-stock" => ProductFilter::OutOfStock,
        _ => ProductFilter::All,
    }
}

fn price_range(min: &str, max: &str) -> Result<PriceRange, String> {
    let (Ok(min), Ok(max)) = (min.trim().parse::<i64>(), max.trim().parse::<i64>()) else {
        return Err("Isi harga minimum dan maksimum".to_string());
    };
    if min < 0 || max < min {
        return Err("Rentang harga tidak valid".to_string());
    }
    Ok(PriceRange { min, max })
}

#[function_component(ProductFilters)]
pub fn product_filters(props: &ProductFiltersProps) -> Html {
    let search = use_state(String::new);
    let min_price = use_state(String::new);
    let max_price = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let debounced_search = use_debounce((*search).clone(), props.search_debounce_ms);
    let first_run = use_mut_ref(|| true);

    // Search as the user types, once typing pauses
    {
        let on_change = props.on_change.clone();
        use_effect_with(debounced_search, move |query| {
            let initial = std::mem::replace(&mut *first_run.borrow_mut(), false);
            if !initial {
                on_change.emit(ProductFilter::Search(query.clone()));
            }
            || ()
        });
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_stock_change = {
        let on_change = props.on_change.clone();
        let threshold = props.low_stock_threshold;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(stock_filter(&select.value(), threshold));
        })
    };

    let price_setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_apply_price = {
        let on_change = props.on_change.clone();
        let (min_price, max_price) = (min_price.clone(), max_price.clone());
        let error = error.clone();
        Callback::from(move |_: MouseEvent| match price_range(&min_price, &max_price) {
            Ok(range) => {
                error.set(None);
                on_change.emit(ProductFilter::PriceRange(range));
            }
            Err(message) => error.set(Some(message)),
        })
    };

    html! {
        <div class="product-filters row g-2 align-items-end mb-3">
            <div class="col-md-4">
                <label class="form-label small">{"Cari produk"}</label>
                <input type="search" class="form-control form-control-sm" placeholder="Nama produk..."
                    value={(*search).clone()} oninput={on_search_input} />
            </div>
            <div class="col-md-2">
                <label class="form-label small">{"Stok"}</label>
                <select class="form-select form-select-sm" onchange={on_stock_change}>
                    {for STOCK_MODES.iter().map(|(value, label)| html! {
                        <option value={*value}>{*label}</option>
                    })}
                </select>
            </div>
            <div class="col-md-2">
                <label class="form-label small">{"Harga min"}</label>
                <input type="number" min="0" class="form-control form-control-sm"
                    value={(*min_price).clone()} onchange={price_setter(&min_price)} />
            </div>
            <div class="col-md-2">
                <label class="form-label small">{"Harga maks"}</label>
                <input type="number" min="0" class="form-control form-control-sm"
                    value={(*max_price).clone()} onchange={price_setter(&max_price)} />
            </div>
            <div class="col-md-2">
                <button class="btn btn-sm btn-outline-primary w-100" onclick={on_apply_price}>{"Filter harga"}</button>
            </div>

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
    fn test_stock_filter() {
        assert_eq!(stock_filter("low-stock", 5), ProductFilter::LowStock(5));
        assert_eq!(stock_filter("out-of-stock", 5), ProductFilter::OutOfStock);
        assert_eq!(stock_filter("anything", 5), ProductFilter::All);
    }

    #[wasm_bindgen_test]
    fn test_price_range() {
        assert_eq!(price_range("1000", " 5000 "), Ok(PriceRange { min: 1000, max: 5000 }));
        assert!(price_range("5000", "1000").is_err());
        assert!(price_range("", "1000").is_err());
    }
}
