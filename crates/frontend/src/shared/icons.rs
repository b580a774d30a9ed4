use leptos::prelude::*;

/// Inline SVG icon by name; unknown names render an empty box
pub fn icon(name: &str) -> AnyView {
    let paths: &'static [&'static str] = match name {
        "home" => &["M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
        "file-text" => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
            "M16 13H8",
            "M16 17H8",
        ],
        "sun" => &[
            "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
            "M12 1v2",
            "M12 21v2",
            "M4.22 4.22l1.42 1.42",
            "M18.36 18.36l1.42 1.42",
            "M1 12h2",
            "M21 12h2",
        ],
        "zap" => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        "award" => &["M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14z", "M8.21 13.89L7 23l5-3 5 3-1.21-9.12"],
        "receipt" => &["M4 2v20l3-2 3 2 3-2 3 2 3-2 1 .67V2l-3 2-3-2-3 2-3-2-3 2z", "M8 8h8", "M8 12h8"],
        "clipboard" => &[
            "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
            "M9 2h6v4H9z",
        ],
        "activity" => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        "users" => &[
            "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
        ],
        "database" => &["M12 8c4.97 0 9-1.34 9-3s-4.03-3-9-3-9 1.34-9 3 4.03 3 9 3z", "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.51 9a9 9 0 0 1 14.85-3.36L23 10", "M1 14l4.64 4.36A9 9 0 0 0 20.49 15"],
        "download" => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3"],
        "upload" => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M17 8l-5-5-5 5", "M12 3v12"],
        "check" => &["M20 6L9 17l-5-5"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "clock" => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        "log-out" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        "user" => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"],
        _ => &["M3 3h18v18H3z"],
    };

    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
