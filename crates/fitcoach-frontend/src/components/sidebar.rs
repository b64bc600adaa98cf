use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <nav class="w-48 bg-gray-800 text-gray-100 p-4 space-y-1">
            <Link<Route>
                to={Route::Home}
                classes="block px-3 py-2 rounded hover:bg-gray-700"
            >
                { "Home" }
            </Link<Route>>
            <Link<Route>
                to={Route::Classes}
                classes="block px-3 py-2 rounded hover:bg-gray-700"
            >
                { "Classes" }
            </Link<Route>>
        </nav>
    }
}
