use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{OWNER, RESUME_URL, SHOWCASE_IMAGES, TAGLINE};

use super::themed;

#[component]
pub fn HomePage(dark_mode: Signal<bool>) -> impl IntoView {
    let page_class = themed(
        dark_mode,
        "min-h-screen flex flex-col items-center justify-center bg-gradient-to-b from-gray-900 via-purple-900 to-violet-900",
        "min-h-screen flex flex-col items-center justify-center bg-gradient-to-b from-blue-400 via-teal-400 to-green-400",
    );
    let heading_class = themed(
        dark_mode,
        "text-6xl font-bold mb-4 text-indigo-300 page-content",
        "text-6xl font-bold mb-4 text-white page-content",
    );
    let button_class = themed(
        dark_mode,
        "inline-block px-8 py-3 rounded-full text-lg font-semibold mb-8 transition-all duration-200 hover:scale-110 bg-indigo-600 hover:bg-indigo-700 text-white",
        "inline-block px-8 py-3 rounded-full text-lg font-semibold mb-8 transition-all duration-200 hover:scale-110 bg-white hover:bg-gray-100 text-indigo-600",
    );

    view! {
        <Title text="Home" />
        <div class=page_class>
            <section class="w-full text-center p-10">
                <h1 class=heading_class>{format!("Welcome to {OWNER}'s Portfolio")}</h1>
                <p class="text-2xl mb-6 text-gray-300 section-content">{TAGLINE}</p>
                <a href=RESUME_URL target="_blank" rel="noopener noreferrer" class=button_class>
                    "Download Resume"
                </a>
            </section>
            <section class="flex flex-col md:flex-row justify-center items-center gap-4 section-content">
                {SHOWCASE_IMAGES
                    .iter()
                    .map(|(src, alt)| {
                        view! {
                            <img
                                src=*src
                                alt=*alt
                                class="w-full md:w-1/2 h-auto transition-transform duration-300 hover:scale-110"
                            />
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
