use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::session::use_session;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub children: Children,
}

/// Route guard: renders its children only while the session holds a token,
/// otherwise redirects to the login page. Token presence is the whole check;
/// an expired token gets through here and is rejected by the server on the
/// next call.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let session = use_session();

    if session.session.is_authenticated() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
