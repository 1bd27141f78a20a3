use shared::format::{format_currency, format_date};
use shared::{Transaction, TransactionType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub title: AttrValue,
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    #[prop_or_default]
    pub on_edit: Option<Callback<Transaction>>,
    /// Records the same transaction again
    #[prop_or_default]
    pub on_repeat: Option<Callback<Transaction>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<Transaction>>,
}

fn action_button(
    callback: &Option<Callback<Transaction>>,
    transaction: &Transaction,
    class: &'static str,
    icon: &'static str,
    title: &'static str,
) -> Html {
    let Some(callback) = callback.clone() else {
        return html! {};
    };
    let transaction = transaction.clone();
    let onclick = Callback::from(move |_: MouseEvent| callback.emit(transaction.clone()));

    html! {
        <button class={classes!("btn", "btn-sm", "ms-1", class)} {title} {onclick}>
            <i class={classes!("bi", icon)}></i>
        </button>
    }
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let has_actions =
        props.on_edit.is_some() || props.on_repeat.is_some() || props.on_delete.is_some();

    html! {
        <section class="transactions-section">
            <h4>{props.title.to_string()}</h4>

            {if props.loading && props.transactions.is_empty() {
                html! { <div class="loading">{"Memuat transaksi..."}</div> }
            } else if props.transactions.is_empty() {
                html! { <div class="text-muted">{"Belum ada transaksi"}</div> }
            } else {
                html! {
                    <div class="table-responsive">
                        <table class="table table-striped transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Tanggal"}</th>
                                    <th>{"Produk"}</th>
                                    <th>{"Tipe"}</th>
                                    <th class="text-end">{"Jumlah"}</th>
                                    <th class="text-end">{"Total"}</th>
                                    <th>{"Keterangan"}</th>
                                    {if has_actions { html! { <th></th> } } else { html! {} }}
                                </tr>
                            </thead>
                            <tbody>
                                {for props.transactions.iter().map(|transaction| {
                                    let badge_class = match transaction.transaction_type {
                                        TransactionType::Sale => "badge bg-success",
                                        TransactionType::Purchase => "badge bg-primary",
                                    };
                                    let created = transaction
                                        .created_at
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());

                                    html! {
                                        <tr>
                                            <td class="date">{created}</td>
                                            <td>{transaction.product_name()}</td>
                                            <td><span class={badge_class}>{transaction.transaction_type.label()}</span></td>
                                            <td class="text-end">{transaction.quantity}</td>
                                            <td class="text-end">{format_currency(transaction.total_price)}</td>
                                            <td class="description">{transaction.description.clone().unwrap_or_default()}</td>
                                            {if has_actions {
                                                html! {
                                                    <td class="text-end text-nowrap">
                                                        {action_button(&props.on_edit, transaction, "btn-outline-secondary", "bi-pencil", "Edit")}
                                                        {action_button(&props.on_repeat, transaction, "btn-outline-primary", "bi-arrow-repeat", "Ulangi")}
                                                        {action_button(&props.on_delete, transaction, "btn-outline-danger", "bi-trash", "Hapus")}
                                                    </td>
                                                }
                                            } else {
                                                html! {}
                                            }}
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
