//! Filterable, paginated subscriptions table with expandable installment rows.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::filters::{SubscriptionFilters, SubscriptionQuery};
use crate::format::{format_currency, format_date};
use crate::hooks::{use_api, use_data_fetching};
use crate::icons::{icon_chevron_down, icon_chevron_up};
use crate::models::{InstallmentStatus, Subscription, SubscriptionStatus};

const PAGE_SIZES: [usize; 3] = [5, 10, 25];

const STATUSES: [SubscriptionStatus; 4] = [
    SubscriptionStatus::Active,
    SubscriptionStatus::Completed,
    SubscriptionStatus::EndingSoon,
    SubscriptionStatus::Canceled,
];

fn status_badge(status: SubscriptionStatus) -> Html {
    let class = match status {
        SubscriptionStatus::Active => "bg-emerald-100 text-emerald-700",
        SubscriptionStatus::Completed => "bg-blue-100 text-blue-700",
        SubscriptionStatus::EndingSoon => "bg-amber-100 text-amber-700",
        SubscriptionStatus::Canceled => "bg-rose-100 text-rose-700",
    };
    html! {
        <span class={format!("px-3 py-1 rounded-full text-[10px] font-bold {}", class)}>
            { status.label() }
        </span>
    }
}

fn installment_badge(status: InstallmentStatus) -> Html {
    let class = match status {
        InstallmentStatus::Paid => "bg-emerald-100 text-emerald-700",
        InstallmentStatus::Pending => "bg-amber-100 text-amber-700",
        InstallmentStatus::Overdue => "bg-rose-100 text-rose-700",
    };
    html! {
        <span class={format!("px-2 py-0.5 rounded-full text-[10px] font-bold {}", class)}>
            { status.label() }
        </span>
    }
}

fn subscription_detail(subscription: &Subscription) -> Html {
    html! {
        <div class="flex items-center gap-6 text-xs text-slate-500 py-2">
            <span>{ format!("{} unidades", subscription.units) }</span>
            <span>{ format!("Inicio: {}", format_date(&subscription.start_date)) }</span>
            <span>{ format!("Fin: {}", format_date(&subscription.end_date)) }</span>
            <span>{ format!("Por pagar: {}", format_currency(subscription.total_remaining)) }</span>
        </div>
    }
}

fn installments_subtable(subscription: &Subscription) -> Html {
    if subscription.installments.is_empty() {
        return html! {
            <p class="text-sm text-slate-400 py-3">{"Sin cuotas registradas"}</p>
        };
    }

    html! {
        <table class="w-full text-left">
            <thead>
                <tr class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">
                    <th class="px-4 py-2">{"Cuota"}</th>
                    <th class="px-4 py-2">{"Vencimiento"}</th>
                    <th class="px-4 py-2">{"Monto"}</th>
                    <th class="px-4 py-2">{"Estado"}</th>
                    <th class="px-4 py-2">{"Fecha de pago"}</th>
                </tr>
            </thead>
            <tbody>
                { for subscription.installments.iter().enumerate().map(|(idx, installment)| html! {
                    <tr key={installment.id} class="text-sm">
                        <td class="px-4 py-2 text-slate-500">{ idx + 1 }</td>
                        <td class="px-4 py-2 text-slate-700">{ format_date(&installment.due_date) }</td>
                        <td class="px-4 py-2 text-slate-700">{ format_currency(installment.amount) }</td>
                        <td class="px-4 py-2">{ installment_badge(installment.status) }</td>
                        <td class="px-4 py-2 text-slate-500">
                            {
                                installment
                                    .payment_date
                                    .as_deref()
                                    .map(format_date)
                                    .unwrap_or_else(|| "—".to_string())
                            }
                        </td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[function_component(SubscriptionsTable)]
pub fn subscriptions_table() -> Html {
    let api = use_api();
    let filters = use_state(SubscriptionFilters::default);
    let page = use_state(|| 1usize);
    let page_size = use_state(|| 10usize);
    let expanded = use_state(|| None::<i64>);

    let query = SubscriptionQuery::from_filters(&filters);
    let subscriptions = use_data_fetching(Vec::new(), query.clone(), {
        let api = api.clone();
        move || async move { api.subscriptions(&query).await }
    });

    // Any filter edit starts a fresh result set, so jump back to page one.
    let edit_filters = {
        let filters = filters.clone();
        let page = page.clone();
        let expanded = expanded.clone();
        Callback::from(move |next: SubscriptionFilters| {
            filters.set(next);
            page.set(1);
            expanded.set(None);
        })
    };

    let on_email = {
        let filters = filters.clone();
        let edit_filters = edit_filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_filters.emit(SubscriptionFilters {
                email: input.value(),
                ..(*filters).clone()
            });
        })
    };

    let on_project = {
        let filters = filters.clone();
        let edit_filters = edit_filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_filters.emit(SubscriptionFilters {
                project: input.value(),
                ..(*filters).clone()
            });
        })
    };

    let on_status = {
        let filters = filters.clone();
        let edit_filters = edit_filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit_filters.emit(SubscriptionFilters {
                status: select.value(),
                ..(*filters).clone()
            });
        })
    };

    let on_overdue_range = {
        let filters = filters.clone();
        let edit_filters = edit_filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit_filters.emit(SubscriptionFilters {
                overdue_range: select.value(),
                ..(*filters).clone()
            });
        })
    };

    let on_page_size = {
        let page = page.clone();
        let page_size = page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let size = select.value().parse::<usize>().unwrap_or(10);
            page_size.set(size);
            page.set(1);
        })
    };

    let data = subscriptions.data();
    let total = data.len();
    let total_pages = (total.max(1) + *page_size - 1) / *page_size;
    let current_page = (*page).min(total_pages);
    let visible = data
        .iter()
        .skip((current_page - 1) * *page_size)
        .take(*page_size)
        .cloned()
        .collect::<Vec<_>>();

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                page.set(current_page - 1);
            }
        })
    };
    let on_next = {
        let page = page.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                page.set(current_page + 1);
            }
        })
    };

    html! {
        <div class="bg-white rounded-[10px] shadow-sm border border-slate-200">
            <div class="p-4 border-b border-slate-200 grid grid-cols-1 md:grid-cols-4 gap-3">
                <input
                    type="text"
                    placeholder="Buscar por email"
                    class="border border-slate-200 rounded-lg px-3 py-2 text-sm"
                    value={filters.email.clone()}
                    oninput={on_email}
                />
                <select class="border border-slate-200 rounded-lg px-3 py-2 text-sm" onchange={on_status}>
                    <option value="" selected={filters.status.is_empty()}>{"Todos los estados"}</option>
                    { for STATUSES.iter().map(|status| html! {
                        <option value={status.as_str()} selected={filters.status == status.as_str()}>
                            { status.label() }
                        </option>
                    }) }
                </select>
                <input
                    type="text"
                    placeholder="Buscar por proyecto"
                    class="border border-slate-200 rounded-lg px-3 py-2 text-sm"
                    value={filters.project.clone()}
                    oninput={on_project}
                />
                <select class="border border-slate-200 rounded-lg px-3 py-2 text-sm" onchange={on_overdue_range}>
                    <option value="" selected={filters.overdue_range.is_empty()}>{"Toda la mora"}</option>
                    <option value="0" selected={filters.overdue_range == "0"}>{"Sin mora"}</option>
                    <option value="1-500000" selected={filters.overdue_range == "1-500000"}>{"$ 1 - $ 500.000"}</option>
                    <option value="500001-1000000" selected={filters.overdue_range == "500001-1000000"}>{"$ 500.001 - $ 1.000.000"}</option>
                    <option value="1000001+" selected={filters.overdue_range == "1000001+"}>{"Más de $ 1.000.000"}</option>
                </select>
            </div>

            {
                if let Some(error) = subscriptions.error() {
                    html! {
                        <div class="mx-4 mt-4 px-4 py-3 bg-rose-50 border border-rose-200 text-rose-700 text-sm rounded-lg">
                            { error.to_string() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead>
                        <tr class="text-[10px] font-bold text-slate-400 uppercase tracking-widest border-b border-slate-100">
                            <th class="px-6 py-3">{"Email"}</th>
                            <th class="px-6 py-3">{"Proyecto"}</th>
                            <th class="px-6 py-3">{"Estado"}</th>
                            <th class="px-6 py-3">{"Inversión"}</th>
                            <th class="px-6 py-3">{"Cuotas"}</th>
                            <th class="px-6 py-3">{"Mora"}</th>
                            <th class="px-6 py-3">{"Pagado"}</th>
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if subscriptions.loading() && data.is_empty() {
                                html! {
                                    <tr>
                                        <td colspan="8" class="px-6 py-8 text-center text-sm text-slate-400">
                                            {"Cargando suscripciones..."}
                                        </td>
                                    </tr>
                                }
                            } else if visible.is_empty() {
                                html! {
                                    <tr>
                                        <td colspan="8" class="px-6 py-8 text-center text-sm text-slate-400">
                                            {"No se encontraron suscripciones"}
                                        </td>
                                    </tr>
                                }
                            } else {
                                html! {
                                    <>
                                        { for visible.iter().map(|sub| {
                                            let is_expanded = *expanded == Some(sub.id);
                                            let on_toggle = {
                                                let expanded = expanded.clone();
                                                let id = sub.id;
                                                Callback::from(move |_| {
                                                    expanded.set(if *expanded == Some(id) { None } else { Some(id) });
                                                })
                                            };

                                            html! {
                                                <>
                                                    <tr key={sub.id} class="text-sm border-b border-slate-50 hover:bg-slate-50 transition-colors cursor-pointer" onclick={on_toggle}>
                                                        <td class="px-6 py-4 text-slate-700">{ &sub.email }</td>
                                                        <td class="px-6 py-4 text-slate-700">{ &sub.project }</td>
                                                        <td class="px-6 py-4">{ status_badge(sub.status) }</td>
                                                        <td class="px-6 py-4 text-slate-700">{ format_currency(sub.investment) }</td>
                                                        <td class="px-6 py-4 text-slate-500">
                                                            { format!("{} / {}", sub.installments.iter().filter(|i| i.status == InstallmentStatus::Paid).count(), sub.total_installments) }
                                                        </td>
                                                        <td class={if sub.overdue > 0 { "px-6 py-4 text-rose-600 font-semibold" } else { "px-6 py-4 text-slate-500" }}>
                                                            { format_currency(sub.overdue) }
                                                        </td>
                                                        <td class="px-6 py-4 text-slate-700">{ format_currency(sub.total_paid) }</td>
                                                        <td class="px-6 py-4 text-slate-400">
                                                            { if is_expanded { icon_chevron_up() } else { icon_chevron_down() } }
                                                        </td>
                                                    </tr>
                                                    {
                                                        if is_expanded {
                                                            html! {
                                                                <tr class="bg-slate-50/50">
                                                                    <td colspan="8" class="px-6 py-3">
                                                                        { subscription_detail(sub) }
                                                                        { installments_subtable(sub) }
                                                                    </td>
                                                                </tr>
                                                            }
                                                        } else {
                                                            html! {}
                                                        }
                                                    }
                                                </>
                                            }
                                        }) }
                                    </>
                                }
                            }
                        }
                    </tbody>
                </table>
            </div>

            <div class="px-6 py-4 border-t border-slate-200 flex items-center justify-between text-sm text-slate-500">
                <div class="flex items-center gap-2">
                    <span>{"Mostrar"}</span>
                    <select class="border border-slate-200 rounded-lg px-2 py-1 text-sm" onchange={on_page_size}>
                        { for PAGE_SIZES.iter().map(|size| html! {
                            <option value={size.to_string()} selected={*page_size == *size}>{ *size }</option>
                        }) }
                    </select>
                    <span>{ format!("de {} suscripciones", total) }</span>
                </div>
                <div class="flex items-center gap-3">
                    <button
                        class="px-3 py-1 border border-slate-200 rounded-lg disabled:opacity-40"
                        disabled={current_page <= 1}
                        onclick={on_prev}
                    >
                        {"Anterior"}
                    </button>
                    <span>{ format!("Página {} de {}", current_page, total_pages) }</span>
                    <button
                        class="px-3 py-1 border border-slate-200 rounded-lg disabled:opacity-40"
                        disabled={current_page >= total_pages}
                        onclick={on_next}
                    >
                        {"Siguiente"}
                    </button>
                </div>
            </div>
        </div>
    }
}
