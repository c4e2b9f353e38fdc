use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::ToastNotifier;
use crate::waitlist::controller;
use crate::waitlist::state::{FormAction, FormState};
use crate::waitlist::transport::SimulatedTransport;

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    pub notifier: ToastNotifier,
    #[prop_or_else(SimulatedTransport::from_config)]
    pub transport: SimulatedTransport,
}

#[function_component]
pub fn WaitlistForm(props: &WaitlistFormProps) -> Html {
    let form = use_reducer(FormState::default);

    let onsubmit = {
        let form = form.clone();
        let notifier = props.notifier.clone();
        let transport = props.transport.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            let notifier = notifier.clone();
            let transport = transport.clone();
            spawn_local(async move {
                if let Err(e) = controller::submit(&form, &notifier, &transport).await {
                    log::warn!("Waitlist submission rejected: {}", e);
                }
            });
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::EmailChanged(input.value()));
        })
    };

    let on_company_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::CompanyChanged(input.value()));
        })
    };

    let busy = form.is_submitting;

    html! {
        <form class="waitlist-form" {onsubmit} novalidate=true>
            <style>{WAITLIST_CSS}</style>
            <div class="waitlist-fields">
                <label for="email" class="sr-only">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="name@company.com"
                    value={form.email.clone()}
                    oninput={on_email_input}
                    disabled={busy}
                />
                <label for="company" class="sr-only">{"Company (optional)"}</label>
                <input
                    id="company"
                    type="text"
                    placeholder="Company (optional)"
                    value={form.company.clone()}
                    oninput={on_company_input}
                    disabled={busy}
                />
            </div>
            <button type="submit" class="waitlist-submit" disabled={busy}>
                {
                    if busy {
                        html! {
                            <>
                                <i class="fas fa-spinner fa-spin"></i>
                                {" Processing..."}
                            </>
                        }
                    } else {
                        html! { {"Join Waitlist"} }
                    }
                }
            </button>
        </form>
    }
}

const WAITLIST_CSS: &str = r#"
    .waitlist-form {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        max-width: 28rem;
        margin: 0 auto;
    }
    .waitlist-fields {
        flex: 1;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        min-width: 14rem;
    }
    .waitlist-form input {
        height: 2.5rem;
        padding: 0 0.75rem;
        border-radius: 8px;
        border: 1px solid #1e293b;
        background: rgba(15, 23, 42, 0.5);
        color: #fff;
        transition: border-color 0.3s ease;
    }
    .waitlist-form input::placeholder { color: #64748b; }
    .waitlist-form input:focus {
        outline: none;
        border-color: #3b82f6;
    }
    .waitlist-submit {
        height: 2.5rem;
        padding: 0 1.5rem;
        border: none;
        border-radius: 8px;
        background: #2563eb;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.3s ease, background 0.3s ease;
    }
    .waitlist-submit:hover:not(:disabled) {
        background: #1d4ed8;
        transform: scale(1.05);
    }
    .waitlist-form :disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
    }
    @media (max-width: 640px) {
        .waitlist-form { flex-direction: column; }
        .waitlist-submit { width: 100%; }
    }
"#;
