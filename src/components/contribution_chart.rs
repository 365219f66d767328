use leptos::prelude::*;

use crate::chart::{bar_fractions, height_percent, random_palette, ChartEntry};

#[component]
pub fn ContributionChart(entries: Vec<ChartEntry>) -> impl IntoView {
    let counts: Vec<u32> = entries.iter().map(|e| e.count).collect();
    let heights = bar_fractions(&counts);

    // Colors are drawn after hydration so server and client markup agree
    let (colors, set_colors) = signal(Vec::<String>::new());
    let bar_count = entries.len();
    Effect::new(move |_| {
        set_colors.set(random_palette(&mut rand::thread_rng(), bar_count));
    });

    let bars = entries
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (entry, fraction))| {
            let height = height_percent(fraction);
            let count = entry.count;
            let style = move || {
                let color = colors.with(|c| c.get(index).cloned().unwrap_or_default());
                format!("height: {height}; background-color: {color}")
            };

            view! {
                <div class="chart__column">
                    <div class="chart__bar" style=style></div>
                    <span class="chart__tooltip">{count} " contributions"</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let legend = entries
        .into_iter()
        .map(|entry| view! { <span class="chart__label">{entry.name}</span> })
        .collect::<Vec<_>>();

    view! {
        <div class="chart">
            <h2 class="chart__title">"Contributions by contributor"</h2>
            <div class="chart__bars">{bars}</div>
            <div class="chart__legend">{legend}</div>
        </div>
    }
}
