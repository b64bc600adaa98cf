use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use fitcoach::{async_callback, log::warn};

use crate::providers::api;
use crate::providers::session::use_session;
use crate::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_memo((), |_| api::auth());
    let session = use_session();
    let navigator = use_navigator().expect("LoginPage rendered outside a router");

    // Form state
    let username = use_state(String::new);
    let password = use_state(String::new);

    // UI state
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let on_username_change = {
        let username = username.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let submit_login: Callback<()> = async_callback!([
        auth,
        session,
        navigator,
        username,
        password,
        loading,
        error_msg,
    ] {
        if username.is_empty() || password.is_empty() {
            error_msg.set(Some("Username and password are required".to_string()));
            return;
        }
        if *loading {
            return;
        }

        loading.set(true);
        error_msg.set(None);

        match auth.sign_in(&username, &password).await {
            Ok(new_session) => {
                session.login.emit(new_session);
                navigator.push(&Route::Home);
            }
            Err(err) => {
                warn!("sign-in failed: {err}");
                loading.set(false);
                error_msg.set(Some(err.to_string()));
            }
        }
    });

    let on_submit = {
        let submit_login = submit_login.clone();
        Callback::from(move |e: SubmitEvent| {
            // preventDefault has to happen before the handler yields.
            e.prevent_default();
            submit_login.emit(());
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-12 bg-white border border-gray-200 rounded-lg p-6">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{ "Log In" }</h1>

            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="username" class="block text-sm font-medium text-gray-700 mb-1">
                        { "Username" }
                    </label>
                    <input
                        id="username"
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*username).clone()}
                        oninput={on_username_change}
                        disabled={*loading}
                        required={true}
                    />
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 mb-1">
                        { "Password" }
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*password).clone()}
                        oninput={on_password_change}
                        disabled={*loading}
                        required={true}
                    />
                </div>

                // Error display
                {
                    if let Some(error) = error_msg.as_ref() {
                        html! {
                            <div class="p-3 bg-red-50 border border-red-200 rounded-md">
                                <p class="text-sm text-red-700">{ error }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button
                    type="submit"
                    class="w-full px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                    disabled={*loading}
                >
                    { if *loading { "Logging in..." } else { "Log In" } }
                </button>
            </form>

            <p class="mt-4 text-sm text-gray-600">
                { "No account yet? " }
                <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                    { "Register" }
                </Link<Route>>
            </p>
        </div>
    }
}
