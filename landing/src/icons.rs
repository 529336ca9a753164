//! Stroke icons looked up by name.
//!
//! Shapes follow the [Lucide](https://lucide.dev/) set (24×24 grid, 2px
//! stroke). Circles and rects are written as paths so every icon is a plain
//! list of `d` strings. Unknown names render nothing.

use leptos::prelude::*;

pub const ICON_PACKAGE: &[&str] = &[
    "M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73z",
    "M12 22V12",
    "m3.3 7 7.703 4.734a2 2 0 0 0 1.994 0L20.7 7",
    "m7.5 4.27 9 5.15",
];

pub const ICON_LAYOUT_GRID: &[&str] = &[
    "M4 3h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
    "M15 3h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
    "M15 14h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1v-5a1 1 0 0 1 1-1z",
    "M4 14h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1v-5a1 1 0 0 1 1-1z",
];

pub const ICON_PALETTE: &[&str] = &[
    "M12 22a1 1 0 0 1 0-20 10 9 0 0 1 10 9 5 5 0 0 1-5 5h-2.25a1.75 1.75 0 0 0-1.4 2.8l.3.4a1.75 1.75 0 0 1-1.4 2.8z",
    "M13.5 6.5h.01",
    "M17.5 10.5h.01",
    "M8.5 7.5h.01",
    "M6.5 12.5h.01",
];

pub const ICON_BUILDING_2: &[&str] = &[
    "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
    "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
    "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
    "M10 6h4",
    "M10 10h4",
    "M10 14h4",
    "M10 18h4",
];

pub const ICON_WAREHOUSE: &[&str] = &[
    "M22 8.35V20a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8.35A2 2 0 0 1 3.26 6.5l8-3.2a2 2 0 0 1 1.48 0l8 3.2A2 2 0 0 1 22 8.35Z",
    "M6 18h12",
    "M6 14h12",
    "M6 10h12v12H6z",
];

pub const ICON_TRUCK: &[&str] = &[
    "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
    "M15 18H9",
    "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
    "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
    "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
];

pub const ICON_CLIPBOARD_LIST: &[&str] = &[
    "M9 2h6a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1z",
    "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
    "M12 11h4",
    "M12 16h4",
    "M8 11h.01",
    "M8 16h.01",
];

pub const ICON_CONTAINER: &[&str] = &[
    "M22 7.7c0-.6-.4-1.2-.8-1.5l-6.3-3.9a1.72 1.72 0 0 0-1.7 0l-10.3 6c-.5.2-.9.8-.9 1.4v6.6c0 .5.4 1.2.8 1.5l6.3 3.9a1.72 1.72 0 0 0 1.7 0l10.3-6c.5-.3.9-1 .9-1.5Z",
    "M10 21.9V14L2.1 9.1",
    "m10 14 11.9-6.9",
    "M14 19.8v-8.1",
    "M18 17.5V9.4",
];

pub const ICON_BUILDING: &[&str] = &[
    "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
    "M9 22v-4h6v4",
    "M8 6h.01",
    "M16 6h.01",
    "M12 6h.01",
    "M12 10h.01",
    "M12 14h.01",
    "M16 10h.01",
    "M16 14h.01",
    "M8 10h.01",
    "M8 14h.01",
];

pub const ICON_USER: &[&str] = &[
    "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
    "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
];

pub const ICON_MAP_PIN: &[&str] = &[
    "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0",
    "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
];

pub const ICON_PHONE: &[&str] = &[
    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
];

pub const ICON_MESSAGE_CIRCLE: &[&str] = &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"];

/// Path list for an icon name (PascalCase, as in the Lucide catalogue).
pub fn icon_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths = match name {
        "Package" => ICON_PACKAGE,
        "LayoutGrid" => ICON_LAYOUT_GRID,
        "Palette" => ICON_PALETTE,
        "Building2" => ICON_BUILDING_2,
        "Warehouse" => ICON_WAREHOUSE,
        "Truck" => ICON_TRUCK,
        "ClipboardList" => ICON_CLIPBOARD_LIST,
        "Container" => ICON_CONTAINER,
        "Building" => ICON_BUILDING,
        "User" => ICON_USER,
        "MapPin" => ICON_MAP_PIN,
        "Phone" => ICON_PHONE,
        "MessageCircle" => ICON_MESSAGE_CIRCLE,
        _ => return None,
    };
    Some(paths)
}

/// Inline SVG icon.
///
/// ```rust,ignore
/// view! { <Icon name="Truck" size=24 class="icon-white" /> }
/// ```
#[component]
pub fn Icon(
    /// Lucide icon name
    name: &'static str,
    /// Width and height in pixels
    #[prop(default = 24)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    icon_paths(name).map(|paths| {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=size.clone()
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class=class
            >
                {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
            </svg>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_icon_resolves() {
        for name in [
            "Package",
            "LayoutGrid",
            "Palette",
            "Building2",
            "Warehouse",
            "Truck",
            "ClipboardList",
            "Container",
            "Building",
            "User",
            "MapPin",
            "Phone",
            "MessageCircle",
        ] {
            let paths = icon_paths(name).unwrap_or_default();
            assert!(!paths.is_empty(), "missing icon {name}");
        }
    }

    #[test]
    fn unknown_icon_is_none() {
        assert!(icon_paths("Rocket").is_none());
        assert!(icon_paths("package").is_none());
    }
}
