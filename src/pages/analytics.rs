use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::format::{format_currency, format_percent};
use crate::hooks::{use_api, use_data_fetching};
use crate::layout::page_shell;
use crate::models::{CustomerSegment, CustomerSegmentation};

const PERIODS: [(&str, &str); 3] = [
    ("3months", "Últimos 3 meses"),
    ("6months", "Últimos 6 meses"),
    ("1year", "Último año"),
];

fn segment_card(segment: &CustomerSegment) -> Html {
    html! {
        <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200">
            <div class="flex items-center gap-2 mb-1">
                <span class="w-3 h-3 rounded-full" style={format!("background-color: {}", segment.color)}></span>
                <h3 class="text-sm font-bold text-slate-900">{ &segment.name }</h3>
                <span class="ml-auto text-xs text-slate-400">{ format!("{} clientes", segment.count) }</span>
            </div>
            <p class="text-xs text-slate-500 mb-4">{ &segment.description }</p>
            <div class="grid grid-cols-3 gap-3 text-sm">
                <div>
                    <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-1">{"Inversión"}</p>
                    <p class="text-slate-900 font-semibold">{ format_currency(segment.total_investment) }</p>
                    <p class="text-xs text-slate-400">{ format_percent(segment.investment_percentage) }</p>
                </div>
                <div>
                    <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-1">{"Mora"}</p>
                    <p class="text-slate-900 font-semibold">{ format_currency(segment.total_overdue) }</p>
                    <p class="text-xs text-slate-400">{ format_percent(segment.overdue_percentage) }</p>
                </div>
                <div>
                    <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-1">{"Atraso medio"}</p>
                    <p class="text-slate-900 font-semibold">{ format!("{:.1} días", segment.average_payment_delay) }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let api = use_api();
    let period = use_state(|| "6months".to_string());

    let segmentation = use_data_fetching(CustomerSegmentation::default(), (*period).clone(), {
        let api = api.clone();
        let period = (*period).clone();
        move || async move { api.customer_segmentation(&period).await }
    });

    let on_period = {
        let period = period.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            period.set(select.value());
        })
    };

    let period_select = html! {
        <select class="border border-slate-200 rounded-lg px-3 py-2 text-sm bg-white" onchange={on_period}>
            { for PERIODS.iter().map(|(value, label)| html! {
                <option value={*value} selected={period.as_str() == *value}>{ *label }</option>
            }) }
        </select>
    };

    let body = {
        if let Some(error) = segmentation.error() {
            html! {
                <div class="px-4 py-3 bg-rose-50 border border-rose-200 text-rose-700 text-sm rounded-lg">
                    { error.to_string() }
                </div>
            }
        } else if segmentation.loading() && segmentation.data().segments.is_empty() {
            html! { <p class="text-sm text-slate-400 py-8 text-center">{"Analizando clientes..."}</p> }
        } else if segmentation.data().segments.is_empty() {
            html! { <p class="text-sm text-slate-400 py-8 text-center">{"Sin datos suficientes para segmentar"}</p> }
        } else {
            html! {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                    { for segmentation.data().segments.iter().map(segment_card) }
                </div>
            }
        }
    };

    page_shell("Insights de Clientes", period_select, body)
}
