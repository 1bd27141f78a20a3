use shared::format::format_currency;
use shared::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductTableProps {
    pub products: Vec<Product>,
    pub loading: bool,
    pub low_stock_threshold: i32,
    pub on_edit: Callback<Product>,
    pub on_delete: Callback<Product>,
}

/// Badge class and label for a stock level
fn stock_badge(stock: i32, low_stock_threshold: i32) -> (&'static str, &'static str) {
    if stock <= 0 {
        ("badge bg-danger", "Habis")
    } else if stock <= low_stock_threshold {
        ("badge bg-warning text-dark", "Rendah")
    } else {
        ("badge bg-success", "Tersedia")
    }
}

#[function_component(ProductTable)]
pub fn product_table(props: &ProductTableProps) -> Html {
    if props.loading && props.products.is_empty() {
        return html! { <div class="loading">{"Memuat produk..."}</div> };
    }

    if props.products.is_empty() {
        return html! { <div class="text-muted">{"Tidak ada produk"}</div> };
    }

    html! {
        <div class="table-responsive">
            <table class="table table-hover products-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Nama"}</th>
                        <th class="text-end">{"Harga"}</th>
                        <th class="text-end">{"Stok"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.products.iter().map(|product| {
                        let (badge_class, badge_label) = stock_badge(product.stock, props.low_stock_threshold);

                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let product = product.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(product.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let product = product.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(product.clone()))
                        };

                        html! {
                            <tr>
                                <td>{product.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                <td>{&product.name}</td>
                                <td class="text-end">{format_currency(product.price as f64)}</td>
                                <td class="text-end">{product.stock}</td>
                                <td><span class={badge_class}>{badge_label}</span></td>
                                <td class="text-end text-nowrap">
                                    <button class="btn btn-sm btn-outline-secondary" title="Edit" onclick={on_edit}>
                                        <i class="bi bi-pencil"></i>
                                    </button>
                                    <button class="btn btn-sm btn-outline-danger ms-1" title="Hapus" onclick={on_delete}>
                                        <i class="bi bi-trash"></i>
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_stock_badge_levels() {
        assert_eq!(stock_badge(0, 10).1, "Habis");
        assert_eq!(stock_badge(10, 10).1, "Rendah");
        assert_eq!(stock_badge(11, 10).1, "Tersedia");
    }
}
