use leptos::prelude::*;

use crate::theme::ThemeContext;

#[component]
pub fn AccentPicker() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let swatch_style = move || format!("background-color: {}", theme.accent.get().color());

    view! {
        <div class="accent-picker">
            <button
                class="accent-picker__arrow"
                aria-label="Previous accent color"
                on:click=move |_| theme.set_accent.update(|a| *a = a.prev())
            >
                "<"
            </button>
            <span
                class="accent-picker__swatch"
                style=swatch_style
                title=move || theme.accent.get().color()
            />
            <button
                class="accent-picker__arrow"
                aria-label="Next accent color"
                on:click=move |_| theme.set_accent.update(|a| *a = a.next())
            >
                ">"
            </button>
        </div>
        <p class="accent-picker__caption">"Ocean colors set the page accent"</p>
    }
}
