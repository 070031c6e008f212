use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{EDUCATION, EXPERIENCE, PROJECTS, SKILL_CATEGORIES};

use super::themed;

#[component]
fn Card(dark_mode: Signal<bool>, children: Children) -> impl IntoView {
    let card_class = themed(
        dark_mode,
        "bg-gray-800 p-6 rounded-lg shadow-lg transition-transform duration-200 hover:scale-105",
        "bg-white p-6 rounded-lg shadow-lg transition-transform duration-200 hover:scale-105",
    );
    view! { <div class=card_class>{children()}</div> }
}

#[component]
pub fn EducationPage(dark_mode: Signal<bool>) -> impl IntoView {
    let page_class = themed(
        dark_mode,
        "min-h-screen p-10 pt-20 bg-gradient-to-b from-gray-900 via-purple-900 to-indigo-900",
        "min-h-screen p-10 pt-20 bg-gradient-to-b from-green-400 via-teal-400 to-blue-500",
    );
    let heading_class = themed(
        dark_mode,
        "text-4xl font-bold mb-6 text-center text-green-300",
        "text-4xl font-bold mb-6 text-center text-white",
    );

    view! {
        <Title text="Education" />
        <div class=page_class>
            <h2 class=heading_class>"Education"</h2>
            <ul class="space-y-4 section-content">
                {EDUCATION
                    .iter()
                    .map(|edu| {
                        view! {
                            <li>
                                <Card dark_mode>
                                    <h3 class="text-2xl font-semibold">{edu.title}</h3>
                                    <p class="mt-2 text-lg">{edu.details}</p>
                                </Card>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn SkillsPage(dark_mode: Signal<bool>) -> impl IntoView {
    let page_class = themed(
        dark_mode,
        "min-h-screen p-10 pt-20 bg-gradient-to-b from-gray-900 via-purple-900 to-indigo-900",
        "min-h-screen p-10 pt-20 bg-gradient-to-b from-yellow-400 via-orange-400 to-red-500",
    );
    let heading_class = themed(
        dark_mode,
        "text-4xl font-bold mb-6 text-center text-yellow-300",
        "text-4xl font-bold mb-6 text-center text-white",
    );
    let skill_class = themed(dark_mode, "hover:text-blue-400", "hover:text-blue-500");

    view! {
        <Title text="Skills" />
        <div class=page_class>
            <h2 class=heading_class>"Skills"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 section-content">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <Card dark_mode>
                                <h3 class="text-2xl font-semibold mb-4">{category.name}</h3>
                                <ul class="list-disc list-inside">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <li class=skill_class>{*skill}</li> })
                                        .collect_view()}
                                </ul>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ExperiencePage(dark_mode: Signal<bool>) -> impl IntoView {
    let page_class = themed(
        dark_mode,
        "min-h-screen flex flex-col items-center justify-center gap-8 p-10 pt-20 bg-gradient-to-b from-gray-900 via-purple-900 to-indigo-900",
        "min-h-screen flex flex-col items-center justify-center gap-8 p-10 pt-20 bg-gradient-to-b from-pink-400 via-purple-400 to-indigo-500",
    );
    let heading_class = themed(
        dark_mode,
        "text-4xl font-bold mb-6 text-center text-pink-300",
        "text-4xl font-bold mb-6 text-center text-purple-600",
    );
    let muted_class = themed(dark_mode, "text-gray-300", "text-gray-600");

    view! {
        <Title text="Experience" />
        <div class=page_class>
            {EXPERIENCE
                .iter()
                .map(|role| {
                    view! {
                        <div class="max-w-3xl w-full section-content">
                            <Card dark_mode>
                                <h2 class=heading_class>"Experience"</h2>
                                <h3 class="text-3xl font-semibold mb-4">{role.title}</h3>
                                <h4 class="text-2xl mb-2">{role.company}</h4>
                                <p class=muted_class>{role.period}</p>
                                <ul class="list-disc list-inside text-lg mt-4">
                                    {role
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li class=muted_class>{*h}</li> })
                                        .collect_view()}
                                </ul>
                            </Card>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectsPage(dark_mode: Signal<bool>) -> impl IntoView {
    let page_class = themed(
        dark_mode,
        "min-h-screen flex items-center justify-center p-10 bg-gray-800 text-white",
        "min-h-screen flex items-center justify-center p-10 bg-gradient-to-b from-blue-400 to-green-500",
    );
    let heading_class = themed(
        dark_mode,
        "text-4xl font-bold mb-6 text-center text-blue-300",
        "text-4xl font-bold mb-6 text-center text-white",
    );
    let muted_class = themed(dark_mode, "text-gray-300 mb-4", "text-gray-600 mb-4");

    view! {
        <Title text="Projects" />
        <div class=page_class>
            <div class="max-w-6xl w-full">
                <h2 class=heading_class>"Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 section-content">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <Card dark_mode>
                                    <h3 class="text-2xl font-semibold mb-2">{project.title}</h3>
                                    <p class=muted_class>{project.description}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-2 py-1 bg-blue-500 text-white rounded-full text-sm">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
