use shared::ClientConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::products::ProductPage;
use components::transactions::TransactionPage;
use components::{AlertStack, DashboardPage, Header, LoadingOverlay, Page};
use hooks::use_alerts::use_alerts;
use hooks::use_api_activity::use_api_activity;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ClientConfig::from_build_env());
    let alerts = use_alerts();
    let activity = use_api_activity(alerts.push.clone());
    let page = use_state(|| Page::Dashboard);

    let api_client = {
        let config = config.clone();
        use_memo(activity.on_activity.clone(), move |on_activity| {
            ApiClient::new(&config).with_activity(on_activity.clone())
        })
    };

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            Logger::debug_with_component("app", &format!("Navigating to {:?}", next));
            page.set(next);
        })
    };

    let content = match *page {
        Page::Dashboard => html! {
            <DashboardPage api_client={(*api_client).clone()} config={(*config).clone()} />
        },
        Page::Products => html! {
            <ProductPage
                api_client={(*api_client).clone()}
                config={(*config).clone()}
                on_notify={alerts.push.clone()}
            />
        },
        Page::Transactions => html! {
            <TransactionPage api_client={(*api_client).clone()} on_notify={alerts.push.clone()} />
        },
    };

    html! {
        <div class="app">
            <Header active_page={*page} on_navigate={on_navigate} />
            <main class="container mt-4">
                <AlertStack
                    alerts={alerts.alerts.clone()}
                    on_dismiss={alerts.dismiss.clone()}
                    timeout_ms={config.alert_timeout_ms}
                />
                {content}
            </main>
            <LoadingOverlay visible={activity.loading} />
        </div>
    }
}

fn main() {
    Logger::init();
    Logger::info_with_component("app", "Starting inventory frontend");
    yew::Renderer::<App>::new().render();
}
