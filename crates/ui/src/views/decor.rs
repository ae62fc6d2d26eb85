use dioxus::prelude::*;

/// Drifting background shapes behind the welcome and dashboard screens.
///
/// Purely decorative; positions are fixed and the motion comes from CSS.
#[component]
pub(crate) fn FloatingShapes() -> Element {
    let shapes = [
        ("⭐", "6%", "18%", "shape shape--slow"),
        ("🔷", "82%", "12%", "shape"),
        ("🟡", "14%", "72%", "shape shape--fast"),
        ("🧩", "74%", "68%", "shape shape--slow"),
        ("🔺", "44%", "8%", "shape"),
        ("💫", "90%", "44%", "shape shape--fast"),
        ("🟢", "28%", "40%", "shape"),
        ("🔶", "60%", "86%", "shape shape--slow"),
    ];
    rsx! {
        div { class: "floating-shapes", aria_hidden: "true",
            for (glyph, left, top, class) in shapes {
                span { class: "{class}", style: "left: {left}; top: {top};", "{glyph}" }
            }
        }
    }
}

/// A row of earned and unearned stars.
#[component]
pub(crate) fn StarRow(earned: u32, total: u32) -> Element {
    let earned = earned.min(total);
    let dim = total - earned;
    rsx! {
        div { class: "star-row", aria_label: "{earned} of {total} stars",
            for _ in 0..earned {
                span { class: "star star--earned", "⭐" }
            }
            for _ in 0..dim {
                span { class: "star star--dim", "☆" }
            }
        }
    }
}
