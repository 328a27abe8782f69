mod api;
mod components;
mod config;
mod error;
mod fetch;
mod filters;
mod format;
mod hooks;
mod icons;
mod layout;
mod models;
mod pages;

use std::rc::Rc;

use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::layout::{Layout, Page};
use crate::pages::{AnalyticsPage, AutomationPage, DashboardPage, OverduePage, SubscriptionsPage};

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Dashboard);
    let api = use_memo(|_| ApiClient::new(ApiConfig::default()), ());

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Subscriptions => html! { <SubscriptionsPage /> },
        Page::Overdue => html! { <OverduePage /> },
        Page::Automation => html! { <AutomationPage /> },
        Page::Analytics => html! { <AnalyticsPage /> },
    };

    html! {
        <ContextProvider<Rc<ApiClient>> context={api}>
            <Layout active_page={*active_page} on_select={on_select}>
                { content }
            </Layout>
        </ContextProvider<Rc<ApiClient>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
