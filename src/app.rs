use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::api::get_contributors;
use crate::chart::ChartEntry;
use crate::components::{
    ContributionChart, ContributorGrid, ContributorGridEmpty, ContributorsPlaceholder, Header,
};
use crate::theme::{initial_color_mode, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = ThemeContext::provide(initial_color_mode());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/showcase.css"/>

        <Title text="Project Contributors"/>

        <Router>
            <div class=move || theme.mode.get().class() style=move || theme.root_style()>
                <main class="container">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=ContributorsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn ContributorsPage() -> impl IntoView {
    let contributors = Resource::new(
        || (),
        |()| async move {
            get_contributors().await.unwrap_or_else(|e| {
                leptos::logging::error!("failed to fetch contributors: {e}");
                Vec::new()
            })
        },
    );

    view! {
        <Header />
        <Suspense fallback=|| view! { <ContributorsPlaceholder /> }>
            {move || Suspend::new(async move {
                let list = contributors.await;
                if list.is_empty() {
                    view! { <ContributorGridEmpty /> }.into_any()
                } else {
                    let entries: Vec<ChartEntry> = list.iter().map(ChartEntry::from).collect();
                    view! {
                        <section class="contributors">
                            <ContributorGrid contributors=list />
                        </section>
                        <section class="chart-section">
                            <ContributionChart entries=entries />
                        </section>
                    }
                    .into_any()
                }
            })}
        </Suspense>
    }
}
