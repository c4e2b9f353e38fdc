use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;

pub mod waitlist {
    pub mod controller;
    pub mod state;
    pub mod transport;
    pub mod validation;
}

pub mod components {
    pub mod code_preview;
    pub mod toast;
    pub mod waitlist_form;
}

pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
