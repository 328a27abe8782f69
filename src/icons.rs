//! Inline SVG icons, all drawn from single-path 24x24 strokes.

use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_alert_triangle() -> Html {
    icon_base("M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0zM12 9v4M12 17h.01")
}
pub fn icon_zap() -> Html {
    icon_base("M13 2L3 14h9l-1 8 10-12h-9l1-8z")
}
pub fn icon_pie_chart() -> Html {
    icon_base("M21.21 15.89A10 10 0 118 2.83M22 12A10 10 0 0012 2v10z")
}
pub fn icon_dollar_sign() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6")
}
pub fn icon_users() -> Html {
    icon_base("M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8M23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75")
}
pub fn icon_percent() -> Html {
    icon_base("M19 5L5 19M6.5 9a2.5 2.5 0 100-5 2.5 2.5 0 000 5M17.5 20a2.5 2.5 0 100-5 2.5 2.5 0 000 5")
}
pub fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3")
}
pub fn icon_mail() -> Html {
    icon_base("M4 4h16a2 2 0 012 2v12a2 2 0 01-2 2H4a2 2 0 01-2-2V6a2 2 0 012-2zM22 6l-10 7L2 6")
}
pub fn icon_database() -> Html {
    icon_base("M12 2C7.58 2 4 3.34 4 5v14c0 1.66 3.58 3 8 3s8-1.34 8-3V5c0-1.66-3.58-3-8-3zM4 5c0 1.66 3.58 3 8 3s8-1.34 8-3M4 12c0 1.66 3.58 3 8 3s8-1.34 8-3")
}
pub fn icon_chevron_down() -> Html {
    icon_base("M6 9l6 6 6-6")
}
pub fn icon_chevron_up() -> Html {
    icon_base("M18 15l-6-6-6 6")
}
pub fn icon_refresh() -> Html {
    icon_base("M23 4v6h-6M1 20v-6h6M3.51 9a9 9 0 0114.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0020.49 15")
}
