use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::waitlist::controller::Notifier;

/// Older toasts are pushed out once this many are on screen.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Show(ToastKind, String),
    Dismiss(u32),
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn show(&mut self, kind: ToastKind, message: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, kind, message });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show(kind, message) => {
                next.show(kind, message);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

/// [`Notifier`] that surfaces messages through the page's [`Toaster`].
#[derive(Clone, PartialEq)]
pub struct ToastNotifier {
    queue: UseReducerHandle<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(queue: UseReducerHandle<ToastQueue>) -> Self {
        Self { queue }
    }
}

impl Notifier for ToastNotifier {
    fn notify_success(&self, message: &str) {
        self.queue.dispatch(ToastAction::Show(ToastKind::Success, message.to_string()));
    }

    fn notify_failure(&self, message: &str) {
        self.queue.dispatch(ToastAction::Show(ToastKind::Failure, message.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub queue: UseReducerHandle<ToastQueue>,
    pub duration_ms: u32,
}

#[function_component]
pub fn Toaster(props: &ToasterProps) -> Html {
    let on_dismiss = {
        let queue = props.queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster" aria-live="polite">
            <style>{TOAST_CSS}</style>
            {
                props.queue.toasts().iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id}
                        toast={toast.clone()}
                        duration_ms={props.duration_ms}
                        on_dismiss={on_dismiss.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    duration_ms: u32,
    on_dismiss: Callback<u32>,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    // Dismissing an id that is already gone is a no-op, so the timer is never cancelled.
    {
        let id = props.toast.id;
        let duration_ms = props.duration_ms;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    TimeoutFuture::new(duration_ms).await;
                    on_dismiss.emit(id);
                });
                || ()
            },
            id,
        );
    }

    let (class, icon) = match props.toast.kind {
        ToastKind::Success => ("toast toast-success", "fas fa-circle-check"),
        ToastKind::Failure => ("toast toast-failure", "fas fa-circle-exclamation"),
    };
    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={class} role="status">
            <i class={icon}></i>
            <span class="toast-message">{&props.toast.message}</span>
            <button class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}

const TOAST_CSS: &str = r#"
    .toaster {
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        z-index: 100;
    }
    .toast {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        min-width: 280px;
        padding: 0.85rem 1rem;
        border-radius: 10px;
        background: #0f172a;
        border: 1px solid #1e293b;
        color: #f1f5f9;
        font-size: 0.9rem;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
        animation: toast-in 0.25s ease-out;
    }
    .toast-success i { color: #4ade80; }
    .toast-failure i { color: #f87171; }
    .toast-message { flex: 1; }
    .toast-close {
        background: none;
        border: none;
        color: #64748b;
        font-size: 1.1rem;
        cursor: pointer;
    }
    .toast-close:hover { color: #f1f5f9; }
    @keyframes toast-in {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;
