use yew::prelude::*;

use crate::icons::{icon_alert_triangle, icon_dollar_sign, icon_percent, icon_users};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Dollar,
    Users,
    Alert,
    Percent,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    /// Pre-formatted value (currency, count or percentage).
    pub value: String,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-[10px] shadow-sm border border-slate-200 flex justify-between items-start">
            <div>
                <p class="text-slate-400 text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class="text-2xl font-bold text-slate-900 tracking-tight">{ &props.value }</h3>
            </div>
            <div class="p-3 bg-indigo-50 text-indigo-600 rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Dollar => icon_dollar_sign(),
                        StatIcon::Users => icon_users(),
                        StatIcon::Alert => icon_alert_triangle(),
                        StatIcon::Percent => icon_percent(),
                    }
                }
            </div>
        </div>
    }
}
