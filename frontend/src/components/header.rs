use yew::prelude::*;

/// Top-level pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Products,
    Transactions,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Products, Page::Transactions];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Products => "Produk",
            Page::Transactions => "Transaksi",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "bi-speedometer2",
            Page::Products => "bi-box-seam",
            Page::Transactions => "bi-receipt",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header navbar navbar-expand navbar-dark bg-primary">
            <div class="container">
                <span class="navbar-brand">
                    <i class="bi bi-shop me-2"></i>
                    {"Manajemen Inventori"}
                </span>
                <ul class="navbar-nav">
                    {for Page::ALL.iter().map(|page| {
                        let page = *page;
                        let is_active = page == props.active_page;
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(page);
                            })
                        };
                        html! {
                            <li class="nav-item">
                                <a href="#" class={classes!("nav-link", is_active.then_some("active"))} {onclick}>
                                    <i class={classes!("bi", page.icon(), "me-1")}></i>
                                    {page.title()}
                                </a>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </header>
    }
}
