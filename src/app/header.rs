use leptos::{either::Either, prelude::*};
use leptos_router::components::*;

use crate::content::{NavLink, NAV_LINKS};

use super::themed;

#[component]
pub fn Navbar(dark_mode: Signal<bool>, set_dark_mode: WriteSignal<bool>) -> impl IntoView {
    let nav_class = themed(
        dark_mode,
        "bg-gradient-to-r from-purple-900 to-indigo-900 p-4 text-white fixed w-full z-50 shadow-lg",
        "bg-gradient-to-r from-pink-500 via-red-500 to-yellow-500 p-4 text-white fixed w-full z-50 shadow-lg",
    );

    view! {
        <nav class=nav_class>
            <ul class="flex flex-wrap justify-center items-center gap-x-6 gap-y-2">
                {NAV_LINKS.iter().map(|link| view! { <NavItem link=*link /> }).collect_view()}
                <li>
                    <button
                        on:click=move |_| set_dark_mode.update(|dark| *dark = !*dark)
                        class="p-2 rounded-full bg-white/20 hover:bg-white/40 transition-all duration-300 hover:rotate-180"
                        aria-label="Toggle dark mode"
                    >
                        {move || {
                            if dark_mode.get() {
                                Either::Left(view! { <span class="text-yellow-300">"☀"</span> })
                            } else {
                                Either::Right(view! { <span class="text-purple-300">"☾"</span> })
                            }
                        }}
                    </button>
                </li>
            </ul>
        </nav>
        // keeps content clear of the fixed bar
        <div class="h-16"></div>
    }
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    view! {
        <li>
            <A
                href=link.path
                attr:class="flex items-center hover:text-yellow-300 transition-colors duration-200"
            >
                <span class="mr-2">{link.icon}</span>
                <span>{link.label}</span>
            </A>
        </li>
    }
}
