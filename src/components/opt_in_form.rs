use gloo_console::error;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, RequestMode};
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::config;
use crate::lead::{Lead, SubmissionStatus};

#[derive(Properties, PartialEq)]
pub struct OptInFormProps {
    /// Distinguishes the hero and footer instances; also keys the input ids.
    pub id: String,
}

/// The lead-capture form. Two independent instances live on the page; each
/// keeps its own fields and status.
#[function_component(OptInForm)]
pub fn opt_in_form(props: &OptInFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let status = use_state(|| SubmissionStatus::Idle);
    let submitted_email = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let status = status.clone();
        let submitted_email = submitted_email.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = name.clone();
            let email = email.clone();
            let status = status.clone();
            let submitted_email = submitted_email.clone();

            status.set(SubmissionStatus::Submitting);
            spawn_local(async move {
                let entered_email = (*email).clone();
                let lead = Lead::new((*name).clone(), entered_email.clone());

                // The mailing-list script lives on another origin and sends no
                // CORS headers, so the request goes out opaque: the response
                // can never be read, and a completed dispatch counts as
                // delivered. Transport errors are logged and swallowed.
                match lead.to_form_body() {
                    Ok(body) => {
                        if let Err(e) = Request::post(config::get_action_url())
                            .mode(RequestMode::NoCors)
                            .header("Content-Type", "application/x-www-form-urlencoded")
                            .body(body)
                            .send()
                            .await
                        {
                            error!("Lead submission failed:", e.to_string());
                        }
                    }
                    Err(e) => {
                        error!("Failed to encode lead:", e.to_string());
                    }
                }

                submitted_email.set(entered_email);
                status.set(SubmissionStatus::Success);
                name.set(String::new());
                email.set(String::new());
            });
        })
    };

    if *status == SubmissionStatus::Success {
        let onclick = {
            let status = status.clone();
            Callback::from(move |_| status.set(SubmissionStatus::Idle))
        };
        let shown_email = if submitted_email.is_empty() {
            "your email".to_string()
        } else {
            (*submitted_email).clone()
        };
        return html! {
            <div id={props.id.clone()} class="opt-in opt-in-success">
                <div class="success-badge">
                    { Icon::CheckCircle.render("success-icon") }
                </div>
                <h3>{"You're All Set!"}</h3>
                <p>
                    {"Check your inbox. We've sent your copy of "}
                    <em>{"The Road to 4.5"}</em>
                    {" to "}
                    <strong>{shown_email}</strong>
                    {"."}
                </p>
                <button class="opt-in-reset" onclick={onclick}>
                    {"Send to another email?"}
                </button>
            </div>
        };
    }

    html! {
        <div id={props.id.clone()} class="opt-in">
            <h3>{"Stop Stalling at 3.5"}</h3>
            <p class="opt-in-lead-in">
                {"Join 5,000+ players over 50 playing smarter, not harder."}
            </p>
            <form onsubmit={onsubmit}>
                <div class="opt-in-field">
                    { Icon::User.render("field-icon") }
                    <input
                        type="text"
                        id={format!("name-{}", props.id)}
                        required=true
                        placeholder="First Name"
                        value={(*name).clone()}
                        oninput={let name = name.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />
                </div>
                <div class="opt-in-field">
                    { Icon::Mail.render("field-icon") }
                    <input
                        type="email"
                        id={format!("email-{}", props.id)}
                        required=true
                        placeholder="Email Address"
                        value={(*email).clone()}
                        oninput={let email = email.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                </div>
                <button type="submit" disabled={status.is_submitting()}>
                    {
                        if status.is_submitting() {
                            html! { {"Processing..."} }
                        } else {
                            html! {
                                <>
                                    {"Send Me The Free PDF"}
                                    { Icon::ChevronRight.render("button-icon") }
                                </>
                            }
                        }
                    }
                </button>
                <p class="opt-in-footnote">{"Instant Access. 100% Free. Unsubscribe anytime."}</p>
            </form>
        </div>
    }
}
