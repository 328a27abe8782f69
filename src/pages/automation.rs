use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::format::format_date;
use crate::hooks::{use_api, use_data_fetching};
use crate::icons::{icon_database, icon_download, icon_mail};
use crate::layout::page_shell;
use crate::models::ExecutionStatus;

#[derive(Clone, Copy, PartialEq)]
enum Job {
    Report,
    Emails,
    Table,
}

/// `2025-04-22T09:30:00Z` becomes `22/04/2025 09:30`.
fn format_timestamp(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, time)) => {
            let hhmm = time.chars().take(5).collect::<String>();
            format!("{} {}", format_date(date), hhmm)
        }
        None => timestamp.to_string(),
    }
}

#[function_component(AutomationPage)]
pub fn automation_page() -> Html {
    let api = use_api();
    let running = use_state(|| None::<Job>);
    let outcome = use_state(|| None::<(bool, String)>);
    let report_format = use_state(|| "excel".to_string());
    let email_frequency = use_state(|| "manual".to_string());
    // Bumped after every job so the history below refetches.
    let history_version = use_state(|| 0u32);

    let history = use_data_fetching(Vec::new(), *history_version, {
        let api = api.clone();
        move || async move { api.execution_history().await }
    });

    let run_job = {
        let api = api.clone();
        let running = running.clone();
        let outcome = outcome.clone();
        let history_version = history_version.clone();
        let report_format = report_format.clone();

        move |job: Job| {
            let api = api.clone();
            let running = running.clone();
            let outcome = outcome.clone();
            let history_version = history_version.clone();
            let report_format = report_format.clone();

            Callback::from(move |_| {
                if running.is_some() {
                    return;
                }
                running.set(Some(job));
                outcome.set(None);

                let api: Rc<ApiClient> = api.clone();
                let running = running.clone();
                let outcome = outcome.clone();
                let history_version = history_version.clone();
                let format = (*report_format).clone();

                spawn_local(async move {
                    let result = match job {
                        Job::Report => api.generate_report(&format).await.map(|report| {
                            format!("Reporte generado: {}", report.file_path)
                        }),
                        Job::Emails => api.send_overdue_emails().await.map(|sent| {
                            format!("Se enviaron {} correos de alerta", sent.emails_sent)
                        }),
                        Job::Table => api.update_overdue_table().await.map(|refresh| {
                            format!("Tabla de mora actualizada para {} usuarios", refresh.users_count)
                        }),
                    };

                    match result {
                        Ok(message) => outcome.set(Some((true, message))),
                        Err(err) => outcome.set(Some((false, err.to_string()))),
                    }
                    running.set(None);
                    history_version.set(*history_version + 1);
                });
            })
        }
    };

    let on_report = run_job(Job::Report);
    let on_emails = run_job(Job::Emails);
    let on_table = run_job(Job::Table);

    let on_format = {
        let report_format = report_format.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            report_format.set(select.value());
        })
    };

    let on_frequency = {
        let api = api.clone();
        let email_frequency = email_frequency.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let frequency = select.value();
            email_frequency.set(frequency.clone());

            let api = api.clone();
            let outcome = outcome.clone();
            spawn_local(async move {
                match api.set_email_frequency(&frequency).await {
                    Ok(()) => outcome.set(Some((
                        true,
                        format!("Frecuencia de envío configurada: {}", frequency),
                    ))),
                    Err(err) => outcome.set(Some((false, err.to_string()))),
                }
            });
        })
    };

    let busy = running.is_some();
    let job_card = |title: &'static str,
                    description: &'static str,
                    icon: Html,
                    action: Html| {
        html! {
            <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200 flex flex-col gap-4">
                <div class="flex items-center gap-3">
                    <div class="p-3 bg-indigo-50 text-indigo-600 rounded-[10px]">{ icon }</div>
                    <div>
                        <h3 class="text-sm font-bold text-slate-900">{ title }</h3>
                        <p class="text-xs text-slate-500">{ description }</p>
                    </div>
                </div>
                <div class="mt-auto">{ action }</div>
            </div>
        }
    };

    let banner = outcome
        .as_ref()
        .map(|(success, message)| {
            let class = if *success {
                "px-4 py-3 bg-emerald-50 border border-emerald-200 text-emerald-700 text-sm rounded-lg"
            } else {
                "px-4 py-3 bg-rose-50 border border-rose-200 text-rose-700 text-sm rounded-lg"
            };
            html! { <div class={class}>{ message }</div> }
        })
        .unwrap_or_default();

    let body = html! {
        <>
            { banner }

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                { job_card(
                    "Reporte de cobranza",
                    "Genera el reporte completo de suscripciones y mora",
                    icon_download(),
                    html! {
                        <div class="flex items-center gap-2">
                            <select class="border border-slate-200 rounded-lg px-2 py-2 text-sm flex-1" onchange={on_format}>
                                <option value="excel" selected={report_format.as_str() == "excel"}>{"Excel"}</option>
                                <option value="pdf" selected={report_format.as_str() == "pdf"}>{"PDF"}</option>
                            </select>
                            <button
                                class="px-4 py-2 bg-indigo-600 text-white text-sm font-medium rounded-lg hover:bg-indigo-700 transition-colors disabled:opacity-60"
                                disabled={busy}
                                onclick={on_report}
                            >
                                { if *running == Some(Job::Report) { "Generando..." } else { "Generar" } }
                            </button>
                        </div>
                    },
                ) }
                { job_card(
                    "Alertas por email",
                    "Envía recordatorios a los clientes con cuotas en mora",
                    icon_mail(),
                    html! {
                        <div class="flex items-center gap-2">
                            <select class="border border-slate-200 rounded-lg px-2 py-2 text-sm flex-1" onchange={on_frequency}>
                                <option value="manual" selected={email_frequency.as_str() == "manual"}>{"Manual"}</option>
                                <option value="daily" selected={email_frequency.as_str() == "daily"}>{"Diaria"}</option>
                                <option value="weekly" selected={email_frequency.as_str() == "weekly"}>{"Semanal"}</option>
                            </select>
                            <button
                                class="px-4 py-2 bg-indigo-600 text-white text-sm font-medium rounded-lg hover:bg-indigo-700 transition-colors disabled:opacity-60"
                                disabled={busy}
                                onclick={on_emails}
                            >
                                { if *running == Some(Job::Emails) { "Enviando..." } else { "Enviar" } }
                            </button>
                        </div>
                    },
                ) }
                { job_card(
                    "Tabla de mora",
                    "Recalcula la mora acumulada de todos los usuarios",
                    icon_database(),
                    html! {
                        <button
                            class="w-full px-4 py-2 bg-indigo-600 text-white text-sm font-medium rounded-lg hover:bg-indigo-700 transition-colors disabled:opacity-60"
                            disabled={busy}
                            onclick={on_table}
                        >
                            { if *running == Some(Job::Table) { "Actualizando..." } else { "Actualizar" } }
                        </button>
                    },
                ) }
            </div>

            <div class="bg-white rounded-[10px] shadow-sm border border-slate-200">
                <div class="px-6 py-4 border-b border-slate-200">
                    <h3 class="text-sm font-bold text-slate-900">{"Historial de ejecuciones"}</h3>
                </div>
                {
                    if let Some(error) = history.error() {
                        html! {
                            <div class="m-4 px-4 py-3 bg-rose-50 border border-rose-200 text-rose-700 text-sm rounded-lg">
                                { error.to_string() }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <table class="w-full text-left">
                    <thead>
                        <tr class="text-[10px] font-bold text-slate-400 uppercase tracking-widest border-b border-slate-100">
                            <th class="px-6 py-3">{"Tarea"}</th>
                            <th class="px-6 py-3">{"Estado"}</th>
                            <th class="px-6 py-3">{"Mensaje"}</th>
                            <th class="px-6 py-3">{"Fecha"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if history.loading() && history.data().is_empty() {
                                html! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-8 text-center text-sm text-slate-400">
                                            {"Cargando historial..."}
                                        </td>
                                    </tr>
                                }
                            } else if history.data().is_empty() {
                                html! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-8 text-center text-sm text-slate-400">
                                            {"Aún no hay ejecuciones registradas"}
                                        </td>
                                    </tr>
                                }
                            } else {
                                html! {
                                    <>
                                        { for history.data().iter().map(|record| {
                                            let badge = match record.status {
                                                ExecutionStatus::Success => html! {
                                                    <span class="px-3 py-1 rounded-full text-[10px] font-bold bg-emerald-100 text-emerald-700">{"Exitosa"}</span>
                                                },
                                                ExecutionStatus::Error => html! {
                                                    <span class="px-3 py-1 rounded-full text-[10px] font-bold bg-rose-100 text-rose-700">{"Fallida"}</span>
                                                },
                                            };
                                            html! {
                                                <tr key={record.id} class="text-sm border-b border-slate-50">
                                                    <td class="px-6 py-4 text-slate-700">{ record.kind.label() }</td>
                                                    <td class="px-6 py-4">{ badge }</td>
                                                    <td class="px-6 py-4 text-slate-500">{ &record.message }</td>
                                                    <td class="px-6 py-4 text-slate-500">{ format_timestamp(&record.timestamp) }</td>
                                                </tr>
                                            }
                                        }) }
                                    </>
                                }
                            }
                        }
                    </tbody>
                </table>
            </div>
        </>
    };

    page_shell("Automatizaciones", html! {}, body)
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn timestamps_render_date_and_time() {
        assert_eq!(format_timestamp("2025-04-22T09:30:00Z"), "22/04/2025 09:30");
    }

    #[test]
    fn plain_strings_pass_through() {
        assert_eq!(format_timestamp("hace un momento"), "hace un momento");
    }
}
