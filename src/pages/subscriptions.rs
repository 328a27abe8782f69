use yew::prelude::*;

use crate::components::SubscriptionsTable;
use crate::layout::page_shell;

#[function_component(SubscriptionsPage)]
pub fn subscriptions_page() -> Html {
    page_shell(
        "Suscripciones",
        html! {},
        html! { <SubscriptionsTable /> },
    )
}
