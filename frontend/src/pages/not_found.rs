use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; background: #020617; color: #fff;">
            <h1>{"404"}</h1>
            <p style="color: #9ca3af;">{"This page does not exist."}</p>
            <Link<Route> to={Route::Landing}>
                {"Back to TrustShield"}
            </Link<Route>>
        </div>
    }
}
