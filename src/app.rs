mod blog;
mod footer;
mod header;
mod homepage;
mod resume;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use blog::BlogPage;
use footer::Footer;
use header::Navbar;
use homepage::HomePage;
use resume::{EducationPage, ExperiencePage, ProjectsPage, SkillsPage};

use crate::content::OWNER;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (dark_mode, set_dark_mode) = signal(false);

    // theme is restored after hydration so server and client markup agree
    #[cfg(feature = "hydrate")]
    {
        let (stored_dark, set_stored_dark, _) =
            use_local_storage::<bool, JsonSerdeWasmCodec>("dark_mode");
        Effect::watch(
            || (),
            move |_, _, _| {
                set_dark_mode.set(stored_dark.get_untracked());
            },
            true,
        );
        Effect::watch(
            move || dark_mode.get(),
            move |dark, _, _| {
                set_stored_dark.set(*dark);
            },
            false,
        );
    }

    let dark_mode = Signal::from(dark_mode);

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <div class=move || {
                if dark_mode.get() {
                    "min-h-screen flex flex-col bg-gray-900 text-white"
                } else {
                    "min-h-screen flex flex-col bg-gray-100 text-gray-900"
                }
            }>
                <Navbar dark_mode set_dark_mode />
                <main class="flex-grow">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=move || view! { <HomePage dark_mode /> } />
                        <Route
                            path=path!("/education")
                            view=move || view! { <EducationPage dark_mode /> }
                        />
                        <Route
                            path=path!("/skills")
                            view=move || view! { <SkillsPage dark_mode /> }
                        />
                        <Route
                            path=path!("/experience")
                            view=move || view! { <ExperiencePage dark_mode /> }
                        />
                        <Route
                            path=path!("/projects")
                            view=move || view! { <ProjectsPage dark_mode /> }
                        />
                        <Route path=path!("/blog") view=move || view! { <BlogPage dark_mode /> } />
                    </Routes>
                </main>
                <Footer dark_mode />
            </div>
        </Router>
    }
}

/// Picks the dark or light variant of a class list.
fn themed(
    dark_mode: Signal<bool>,
    dark: &'static str,
    light: &'static str,
) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || if dark_mode.get() { dark } else { light }
}
