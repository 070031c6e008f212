use leptos::prelude::*;

use crate::content::{build_date, copyright_year, OWNER, SOCIAL_LINKS};

use super::themed;

#[component]
pub fn Footer(dark_mode: Signal<bool>) -> impl IntoView {
    let footer_class = themed(
        dark_mode,
        "bg-gradient-to-r from-gray-900 to-black text-white p-6 text-center w-full",
        "bg-gradient-to-r from-purple-600 to-blue-600 text-white p-6 text-center w-full",
    );

    view! {
        <footer class=footer_class>
            <div class="flex justify-center gap-6 mb-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class=format!(
                                    "text-white text-3xl transition-transform duration-300 hover:scale-125 {}",
                                    link.hover_class,
                                )
                                aria-label=link.label
                            >
                                <i class=link.icon_class></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="text-sm">
                {format!("© {} {OWNER}. All rights reserved.", copyright_year())}
            </p>
            {build_date().map(|date| view! { <p class="text-xs opacity-70 mt-1">"Built " {date}</p> })}
        </footer>
    }
}
