use leptos::prelude::*;

use crate::theme::{ColorMode, ThemeContext};

/// Icon shown on the switch thumb: the mode a click switches to
fn thumb_icon(is_dark: bool) -> &'static str {
    if is_dark {
        "/icons/sun.svg"
    } else {
        "/icons/moon.svg"
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let toggle = move |_| {
        let next = theme.mode.get_untracked().toggled();

        // Persist so the server renders the same mode next time
        #[cfg(target_arch = "wasm32")]
        {
            use leptos::wasm_bindgen::prelude::wasm_bindgen;

            #[wasm_bindgen(
                inline_js = "export function set_cookie(name, value) { document.cookie = name + '=' + value + '; path=/; max-age=31536000; samesite=lax'; }"
            )]
            extern "C" {
                fn set_cookie(name: &str, value: &str);
            }

            set_cookie(crate::theme::THEME_COOKIE, &next.to_string());
        }

        theme.set_mode.set(next);
    };

    let is_dark = move || theme.mode.get() == ColorMode::Dark;

    let label = move || {
        if is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            class=move || if is_dark() { "theme-toggle theme-toggle--dark" } else { "theme-toggle theme-toggle--light" }
            role="switch"
            aria-checked=move || is_dark().to_string()
            on:click=toggle
            aria-label=label
            title=label
        >
            <span class="theme-toggle__track" aria-hidden="true">
                <img class="theme-toggle__thumb" src=move || thumb_icon(is_dark()) alt="" />
            </span>
        </button>
    }
}
