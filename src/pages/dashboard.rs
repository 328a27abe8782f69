use yew::prelude::*;

use crate::components::{
    ComparisonChart, MonthlyOverdueChart, ProjectOverdueChart, StatCard, StatIcon, StatusChart,
    SubscriptionsTable,
};
use crate::format::{format_currency, format_percent};
use crate::hooks::{use_api, use_data_fetching};
use crate::icons::icon_refresh;
use crate::layout::page_shell;
use crate::models::DashboardStats;

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Overview,
    Overdue,
    Subscriptions,
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api();
    let tab = use_state(|| DashboardTab::Overview);
    // Bumped by the refresh button; every fetch below depends on it.
    let version = use_state(|| 0u32);

    let stats = use_data_fetching(DashboardStats::default(), *version, {
        let api = api.clone();
        move || async move { api.dashboard_stats().await }
    });

    let distribution = use_data_fetching(Vec::new(), *version, {
        let api = api.clone();
        move || async move { api.active_subscriptions().await }
    });

    let comparison = use_data_fetching(Vec::new(), *version, {
        let api = api.clone();
        move || async move { api.expected_vs_actual(None).await }
    });

    let monthly_overdue = use_data_fetching(Vec::new(), *version, {
        let api = api.clone();
        move || async move { api.monthly_overdue(None).await }
    });

    let project_overdue = use_data_fetching(Vec::new(), *version, {
        let api = api.clone();
        move || async move { api.overdue_by_project(None).await }
    });

    let on_refresh = {
        let version = version.clone();
        Callback::from(move |_| version.set(*version + 1))
    };

    let refresh_button = html! {
        <button
            class="flex items-center gap-2 px-4 py-2 bg-indigo-600 text-white text-sm font-medium rounded-lg hover:bg-indigo-700 transition-colors disabled:opacity-60"
            disabled={stats.loading()}
            onclick={on_refresh}
        >
            { icon_refresh() }
            { if stats.loading() { "Actualizando..." } else { "Actualizar" } }
        </button>
    };

    let tab_button = |label: &'static str, target: DashboardTab| {
        let tab = tab.clone();
        let is_active = *tab == target;
        let class = if is_active {
            "px-4 py-2 text-sm font-medium rounded-lg bg-indigo-50 text-indigo-700"
        } else {
            "px-4 py-2 text-sm font-medium rounded-lg text-slate-500 hover:text-slate-900"
        };
        html! {
            <button class={class} onclick={Callback::from(move |_| tab.set(target))}>
                { label }
            </button>
        }
    };

    let stats_error = stats
        .error()
        .map(|error| {
            html! {
                <div class="px-4 py-3 bg-rose-50 border border-rose-200 text-rose-700 text-sm rounded-lg">
                    { error.to_string() }
                </div>
            }
        })
        .unwrap_or_default();

    let body = html! {
        <>
            { stats_error }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard title="Ingresos totales" value={format_currency(stats.data().total_revenue)} icon={StatIcon::Dollar} />
                <StatCard title="Suscripciones activas" value={stats.data().active_subscriptions.to_string()} icon={StatIcon::Users} />
                <StatCard title="Mora total" value={format_currency(stats.data().total_overdue)} icon={StatIcon::Alert} />
                <StatCard title="Tasa de recaudo" value={format_percent(stats.data().collection_rate)} icon={StatIcon::Percent} />
            </div>

            <div class="flex items-center gap-2">
                { tab_button("Visión General", DashboardTab::Overview) }
                { tab_button("Mora y Pagos", DashboardTab::Overdue) }
                { tab_button("Suscripciones", DashboardTab::Subscriptions) }
            </div>

            {
                match *tab {
                    DashboardTab::Overview => html! {
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                            <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200">
                                <h3 class="text-sm font-bold text-slate-900 mb-4">{"Ingresos esperados vs recaudados"}</h3>
                                {
                                    if comparison.loading() && comparison.data().is_empty() {
                                        html! { <p class="text-sm text-slate-400 py-8 text-center">{"Cargando..."}</p> }
                                    } else {
                                        html! { <ComparisonChart data={comparison.data().clone()} /> }
                                    }
                                }
                            </div>
                            <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200">
                                <h3 class="text-sm font-bold text-slate-900 mb-4">{"Distribución por estado"}</h3>
                                {
                                    if distribution.loading() && distribution.data().is_empty() {
                                        html! { <p class="text-sm text-slate-400 py-8 text-center">{"Cargando..."}</p> }
                                    } else {
                                        html! { <StatusChart data={distribution.data().clone()} /> }
                                    }
                                }
                            </div>
                        </div>
                    },
                    DashboardTab::Overdue => html! {
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                            <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200">
                                <h3 class="text-sm font-bold text-slate-900 mb-4">{"Mora generada por mes"}</h3>
                                <MonthlyOverdueChart data={monthly_overdue.data().clone()} />
                            </div>
                            <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200">
                                <h3 class="text-sm font-bold text-slate-900 mb-4">{"Mora por proyecto"}</h3>
                                <ProjectOverdueChart data={project_overdue.data().clone()} />
                            </div>
                        </div>
                    },
                    DashboardTab::Subscriptions => html! { <SubscriptionsTable /> },
                }
            }
        </>
    };

    page_shell("Dashboard", refresh_button, body)
}
