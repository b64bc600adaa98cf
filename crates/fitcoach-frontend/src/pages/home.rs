use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::session::use_session;
use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("HomePage rendered outside a router");

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.logout.emit(());
            navigator.push(&Route::Login);
        })
    };

    let go_to_classes = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Classes))
    };

    html! {
        <div class="max-w-2xl">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{ "Home Page" }</h1>
            <p class="text-gray-700 mb-6">
                { "Welcome to the home page of the Fitness Coaching App!" }
            </p>

            <div class="space-x-2">
                <button
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    onclick={go_to_classes}
                >
                    { "See Available Classes" }
                </button>
                <button
                    class="px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    onclick={on_logout}
                >
                    { "Logout" }
                </button>
            </div>
        </div>
    }
}
