use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{ComparisonChart, MonthlyOverdueChart, ProjectOverdueChart};
use crate::hooks::{use_api, use_data_fetching};
use crate::layout::page_shell;

const YEARS: [i32; 3] = [2023, 2024, 2025];

#[function_component(OverduePage)]
pub fn overdue_page() -> Html {
    let api = use_api();
    let year = use_state(|| 2025i32);

    let comparison = use_data_fetching(Vec::new(), *year, {
        let api = api.clone();
        let year = *year;
        move || async move { api.expected_vs_actual(Some(year)).await }
    });

    let monthly = use_data_fetching(Vec::new(), *year, {
        let api = api.clone();
        let year = *year;
        move || async move { api.monthly_overdue(Some(year)).await }
    });

    let by_project = use_data_fetching(Vec::new(), *year, {
        let api = api.clone();
        let year = *year;
        move || async move { api.overdue_by_project(Some(year)).await }
    });

    let on_year = {
        let year = year.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = select.value().parse::<i32>() {
                year.set(selected);
            }
        })
    };

    let year_select = html! {
        <select class="border border-slate-200 rounded-lg px-3 py-2 text-sm bg-white" onchange={on_year}>
            { for YEARS.iter().map(|y| html! {
                <option value={y.to_string()} selected={*year == *y}>{ *y }</option>
            }) }
        </select>
    };

    let chart_card = |title: &'static str, error: Option<String>, loading: bool, chart: Html| {
        html! {
            <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200">
                <h3 class="text-sm font-bold text-slate-900 mb-4">{ title }</h3>
                {
                    if let Some(message) = error {
                        html! {
                            <div class="px-4 py-3 bg-rose-50 border border-rose-200 text-rose-700 text-sm rounded-lg">
                                { message }
                            </div>
                        }
                    } else if loading {
                        html! { <p class="text-sm text-slate-400 py-8 text-center">{"Cargando..."}</p> }
                    } else {
                        chart
                    }
                }
            </div>
        }
    };

    let body = html! {
        <>
            { chart_card(
                "Ingresos esperados vs recaudados",
                comparison.error().map(ToString::to_string),
                comparison.loading() && comparison.data().is_empty(),
                html! { <ComparisonChart data={comparison.data().clone()} /> },
            ) }
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                { chart_card(
                    "Mora generada por mes",
                    monthly.error().map(ToString::to_string),
                    monthly.loading() && monthly.data().is_empty(),
                    html! { <MonthlyOverdueChart data={monthly.data().clone()} /> },
                ) }
                { chart_card(
                    "Mora por proyecto",
                    by_project.error().map(ToString::to_string),
                    by_project.loading() && by_project.data().is_empty(),
                    html! { <ProjectOverdueChart data={by_project.data().clone()} /> },
                ) }
            </div>
        </>
    };

    page_shell("Mora y Pagos", year_select, body)
}
