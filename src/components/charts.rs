//! Presentational charts. Data arrives via props; fetching stays in the pages.

use yew::prelude::*;

use crate::format::{format_currency, format_percent};
use crate::models::{MonthlyComparison, MonthlyOverdue, ProjectOverdue, StatusSlice};

fn empty_chart(message: &'static str) -> Html {
    html! {
        <div class="h-48 flex items-center justify-center text-sm text-slate-400">
            { message }
        </div>
    }
}

fn bar_height(value: i64, max: i64) -> String {
    if max <= 0 {
        return "height: 0%".to_string();
    }
    format!("height: {:.0}%", (value as f64 / max as f64) * 100.0)
}

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    pub data: Vec<MonthlyComparison>,
}

/// Expected vs actual income per month, as grouped vertical bars.
#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &ComparisonChartProps) -> Html {
    if props.data.is_empty() {
        return empty_chart("Sin datos de ingresos para este año");
    }

    let max = props
        .data
        .iter()
        .map(|m| m.expected.max(m.actual))
        .max()
        .unwrap_or(0);

    html! {
        <div>
            <div class="flex items-center gap-4 mb-4 text-xs text-slate-500">
                <span class="flex items-center gap-1.5">
                    <span class="w-3 h-3 rounded-sm bg-indigo-300"></span>{"Esperado"}
                </span>
                <span class="flex items-center gap-1.5">
                    <span class="w-3 h-3 rounded-sm bg-indigo-600"></span>{"Recaudado"}
                </span>
            </div>
            <div class="h-48 flex items-end gap-2">
                { for props.data.iter().map(|month| html! {
                    <div class="flex-1 flex flex-col items-center gap-1">
                        <div class="w-full h-40 flex items-end justify-center gap-1" title={format!("{}: {} / {}", month.month, format_currency(month.expected), format_currency(month.actual))}>
                            <div class="w-3 bg-indigo-300 rounded-t" style={bar_height(month.expected, max)}></div>
                            <div class="w-3 bg-indigo-600 rounded-t" style={bar_height(month.actual, max)}></div>
                        </div>
                        <span class="text-[10px] text-slate-400">{ &month.month }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthlyOverdueChartProps {
    pub data: Vec<MonthlyOverdue>,
}

/// Overdue generated per month; the running accumulated total rides in the
/// bar tooltip.
#[function_component(MonthlyOverdueChart)]
pub fn monthly_overdue_chart(props: &MonthlyOverdueChartProps) -> Html {
    if props.data.is_empty() {
        return empty_chart("Sin datos de mora para este año");
    }

    let max = props.data.iter().map(|m| m.overdue).max().unwrap_or(0);

    html! {
        <div class="h-48 flex items-end gap-2">
            { for props.data.iter().map(|month| html! {
                <div class="flex-1 flex flex-col items-center gap-1">
                    <div class="w-full h-40 flex items-end justify-center" title={format!("{}: {} (acumulado {})", month.month, format_currency(month.overdue), format_currency(month.accumulated))}>
                        <div class="w-5 bg-rose-500 rounded-t" style={bar_height(month.overdue, max)}></div>
                    </div>
                    <span class="text-[10px] text-slate-400">{ &month.month }</span>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectOverdueChartProps {
    pub data: Vec<ProjectOverdue>,
}

/// Horizontal bars, one per project, sized by its share of total overdue.
#[function_component(ProjectOverdueChart)]
pub fn project_overdue_chart(props: &ProjectOverdueChartProps) -> Html {
    if props.data.is_empty() {
        return empty_chart("Sin mora registrada por proyecto");
    }

    html! {
        <div class="space-y-3">
            { for props.data.iter().map(|project| html! {
                <div>
                    <div class="flex items-center justify-between text-sm mb-1">
                        <span class="text-slate-700">{ &project.project_name }</span>
                        <span class="text-slate-500">
                            { format!("{} · {}", format_currency(project.overdue_amount), format_percent(project.percentage)) }
                        </span>
                    </div>
                    <div class="h-2 bg-slate-100 rounded-full overflow-hidden">
                        <div class="h-full bg-rose-500 rounded-full" style={format!("width: {:.1}%", project.percentage)}></div>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusChartProps {
    pub data: Vec<StatusSlice>,
}

/// Count of subscriptions per status.
#[function_component(StatusChart)]
pub fn status_chart(props: &StatusChartProps) -> Html {
    if props.data.is_empty() {
        return empty_chart("Sin suscripciones activas");
    }

    let total: u32 = props.data.iter().map(|slice| slice.count).sum();

    html! {
        <div class="space-y-3">
            { for props.data.iter().map(|slice| {
                let share = if total > 0 {
                    (slice.count as f64 / total as f64) * 100.0
                } else {
                    0.0
                };
                html! {
                    <div>
                        <div class="flex items-center justify-between text-sm mb-1">
                            <span class="text-slate-700">{ slice.status.label() }</span>
                            <span class="text-slate-500">{ slice.count }</span>
                        </div>
                        <div class="h-2 bg-slate-100 rounded-full overflow-hidden">
                            <div class="h-full bg-indigo-500 rounded-full" style={format!("width: {:.1}%", share)}></div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
