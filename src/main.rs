use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod lead;
mod components {
    pub mod book_cover;
    pub mod icons;
    pub mod opt_in_form;
}
mod pages {
    pub mod landing;
}

use components::icons::Icon;
use pages::landing::Landing;

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 10);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #fff;
                    border-bottom: 1px solid #f3f4f6;
                    padding: 1rem 1.5rem;
                }
                .top-nav.scrolled {
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-brand-mark {
                    width: 32px;
                    height: 32px;
                    border-radius: 8px;
                    background: #15803d;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .nav-brand-icon {
                    width: 20px;
                    height: 20px;
                    color: #fff;
                }
                .nav-brand-name {
                    font-weight: 700;
                    font-size: 1.25rem;
                    letter-spacing: -0.02em;
                    color: #111827;
                }
                .nav-brand-name span { color: #15803d; }
                .nav-cta {
                    background: #15803d;
                    color: #fff;
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    font-weight: 600;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: background 0.2s;
                }
                .nav-cta:hover { background: #166534; }
                @media (max-width: 767px) {
                    .nav-cta { display: none; }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-brand">
                    <div class="nav-brand-mark">
                        { Icon::TrendingUp.render("nav-brand-icon") }
                    </div>
                    <span class="nav-brand-name">
                        {"PB Mastery"}<span>{"50+"}</span>
                    </span>
                </div>
                <a href="#download" class="nav-cta">{"Get the Free Guide"}</a>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
