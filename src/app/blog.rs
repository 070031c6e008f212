use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::blog::{BlogConfig, Post, PostCollection, PostStore};
use crate::pagination::{PageNav, Paginator};

use super::themed;

#[cfg(feature = "hydrate")]
type SiteStorage = crate::storage::BrowserStorage;
#[cfg(not(feature = "hydrate"))]
type SiteStorage = crate::storage::MemoryStore;

#[component]
pub fn BlogPage(dark_mode: Signal<bool>) -> impl IntoView {
    let config = BlogConfig::default();
    let (posts, set_posts) = signal(PostCollection::seeded());
    let (pager, set_pager) = signal(Paginator::new(config.page_size));
    let store = StoredValue::new_local(None::<PostStore<SiteStorage>>);

    // storage is only read once hydrated, the server always renders the seed posts
    Effect::new(move |_| {
        let mut post_store = PostStore::from_config(SiteStorage::default(), &config);
        let loaded = post_store.posts().clone();
        set_pager.update(|p| {
            p.clamp(&loaded);
        });
        set_posts.set(loaded);
        post_store.subscribe(move |snapshot| {
            set_pager.update(|p| {
                p.clamp(snapshot);
            });
            set_posts.set(snapshot.clone());
        });
        store.set_value(Some(post_store));
    });

    let title_ref = NodeRef::<html::Input>::new();
    let content_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(title_el), Some(content_el)) =
            (title_ref.get_untracked(), content_ref.get_untracked())
        else {
            return;
        };
        let before = posts.with_untracked(|p| p.len());
        store.update_value(|s| {
            if let Some(s) = s {
                s.append(&title_el.value(), &content_el.value());
            }
        });
        if posts.with_untracked(|p| p.len()) > before {
            title_el.set_value("");
            content_el.set_value("");
        }
    };

    let navigate = move |nav: PageNav| {
        set_pager.update(|p| {
            posts.with_untracked(|posts| p.step(nav, posts));
        });
    };

    let page_class = themed(
        dark_mode,
        "p-10 pt-20 bg-gray-800 text-white",
        "p-10 pt-20 bg-gradient-to-b from-gray-100 to-gray-300",
    );
    let heading_class = themed(
        dark_mode,
        "text-4xl font-bold mb-6 text-center text-gray-300",
        "text-4xl font-bold mb-6 text-center text-gray-700",
    );
    let field_class = themed(
        dark_mode,
        "w-full p-2 mb-2 border rounded bg-gray-700 border-gray-600 text-white",
        "w-full p-2 mb-2 border rounded bg-white border-gray-300",
    );
    let submit_class = themed(
        dark_mode,
        "w-full p-2 rounded text-white bg-blue-600 hover:bg-blue-700 transition-transform duration-200 hover:scale-105",
        "w-full p-2 rounded text-white bg-blue-500 hover:bg-blue-600 transition-transform duration-200 hover:scale-105",
    );
    let nav_class = themed(
        dark_mode,
        "px-4 py-2 mx-2 rounded-md text-white bg-blue-600 hover:bg-blue-600 disabled:opacity-50",
        "px-4 py-2 mx-2 rounded-md text-white bg-blue-500 hover:bg-blue-600 disabled:opacity-50",
    );
    let page_number_class = themed(dark_mode, "mx-2 text-gray-300", "mx-2 text-gray-700");

    view! {
        <Title text="Blog" />
        <div class=page_class>
            <h2 class=heading_class>"Blog"</h2>
            <form class="mb-6 section-content" on:submit=on_submit>
                <input node_ref=title_ref class=field_class type="text" placeholder="Post Title" />
                <textarea
                    node_ref=content_ref
                    class=field_class
                    placeholder="Post Content"
                ></textarea>
                <button class=submit_class type="submit">
                    "Add Post"
                </button>
            </form>
            <div class="section-content">
                {move || {
                    let pager = pager.get();
                    posts
                        .with(|posts| {
                            pager
                                .visible(posts)
                                .iter()
                                .map(|post| view! { <PostCard post=post.clone() dark_mode /> })
                                .collect_view()
                        })
                }}
            </div>
            <div class="flex justify-center items-center mt-4">
                <button
                    class=nav_class
                    on:click=move |_| navigate(PageNav::Previous)
                    disabled=move || !pager.get().can_go_previous()
                >
                    "Previous"
                </button>
                <span class=page_number_class>{move || pager.get().current()}</span>
                <button
                    class=nav_class
                    on:click=move |_| navigate(PageNav::Next)
                    disabled=move || {
                        let pager = pager.get();
                        posts.with(|posts| !pager.can_go_next(posts))
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PostCard(post: Post, dark_mode: Signal<bool>) -> impl IntoView {
    let card_class = themed(
        dark_mode,
        "mb-4 p-4 rounded shadow bg-gray-700",
        "mb-4 p-4 rounded shadow bg-white",
    );
    let content_class = themed(dark_mode, "text-gray-300", "text-gray-600");
    view! {
        <div class=card_class>
            <h3 class="text-xl font-semibold mb-2">{post.title}</h3>
            <p class=content_class>{post.content}</p>
        </div>
    }
}
