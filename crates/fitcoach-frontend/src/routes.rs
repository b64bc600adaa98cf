use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Guarded;
use crate::pages::{ClassesPage, HomePage, LoginPage, RegisterPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/")]
    Root,
    #[at("/home")]
    Home,
    #[at("/classes")]
    Classes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Root | Route::Home => html! { <Guarded><HomePage /></Guarded> },
        Route::Classes => html! { <Guarded><ClassesPage /></Guarded> },
        Route::NotFound => html! { <div>{ "404 Not Found" }</div> },
    }
}
