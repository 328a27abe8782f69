//! Application chrome: sidebar navigation, header and the page shell.

use yew::prelude::*;

use crate::icons::{
    icon_alert_triangle, icon_credit_card, icon_layout_grid, icon_pie_chart, icon_zap,
};

#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Dashboard,
    Subscriptions,
    Overdue,
    Automation,
    Analytics,
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-slate-50">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="bg-white border-b border-slate-200 h-16 flex items-center justify-between px-6">
            <p class="text-sm text-slate-500">{"Panel de gestión de suscripciones y cobranza"}</p>
            <div class="flex items-center gap-3">
                <div class="w-9 h-9 bg-indigo-100 text-indigo-700 rounded-full flex items-center justify-center text-sm font-bold">
                    {"AD"}
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Suscripciones",
            page: Page::Subscriptions,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Mora",
            page: Page::Overdue,
            icon: icon_alert_triangle,
        },
        NavItem {
            label: "Automatizaciones",
            page: Page::Automation,
            icon: icon_zap,
        },
        NavItem {
            label: "Insights",
            page: Page::Analytics,
            icon: icon_pie_chart,
        },
    ];

    html! {
        <div class="w-[220px] h-screen bg-white border-r border-slate-200 p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-10 h-10 bg-indigo-600 rounded-xl flex items-center justify-center text-white text-lg font-black">
                    {"L"}
                </div>
                <span class="text-slate-900 text-2xl font-black tracking-tight">{"LOKL"}</span>
            </div>

            <nav class="flex-1 space-y-1">
                { for nav_items.iter().map(|item| {
                    let is_active = item.page == props.active_page;
                    let class_name = if is_active {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-indigo-50 text-indigo-700 w-full"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-500 hover:bg-slate-50 hover:text-slate-900 w-full"
                    };
                    let on_select = props.on_select.clone();
                    let page = item.page;

                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                        </button>
                    }
                }) }
            </nav>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-slate-200">
                <h1 class="text-2xl font-bold text-slate-900">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}
