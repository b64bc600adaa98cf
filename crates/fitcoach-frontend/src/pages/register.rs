use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use fitcoach::async_callback;

use crate::providers::api;
use crate::routes::Route;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let api = use_memo((), |_| api::create());
    let navigator = use_navigator().expect("RegisterPage rendered outside a router");

    // Form state
    let username = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);

    // UI state
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);
    let success_msg = use_state(|| None::<String>);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let on_username_change = text_input(&username);
    let on_password_change = text_input(&password);
    let on_confirm_change = text_input(&confirm_password);

    let submit_signup: Callback<()> = async_callback!([
        api,
        navigator,
        username,
        password,
        confirm_password,
        loading,
        error_msg,
        success_msg,
    ] {
        if *loading {
            return;
        }

        loading.set(true);
        error_msg.set(None);
        success_msg.set(None);

        // The mismatch check lives in the service so it short-circuits
        // before any request goes out; the error lands here either way.
        match api.signup(&username, &password, &confirm_password).await {
            Ok(_) => {
                success_msg.set(Some(
                    "Registration successful. You can now log in.".to_string(),
                ));
                navigator.push(&Route::Login);
            }
            Err(err) => {
                loading.set(false);
                error_msg.set(Some(err.to_string()));
            }
        }
    });

    let on_submit = {
        let submit_signup = submit_signup.clone();
        Callback::from(move |e: SubmitEvent| {
            // preventDefault has to happen before the handler yields.
            e.prevent_default();
            submit_signup.emit(());
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-12 bg-white border border-gray-200 rounded-lg p-6">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{ "Register" }</h1>

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

                <div>
                    <label for="confirm-password" class="block text-sm font-medium text-gray-700 mb-1">
                        { "Confirm Password" }
                    </label>
                    <input
                        id="confirm-password"
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*confirm_password).clone()}
                        oninput={on_confirm_change}
                        disabled={*loading}
                        required={true}
                    />
                </div>

                // Error display: either the local mismatch error or the
                // server's own message, verbatim.
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

                // Success display
                {
                    if let Some(message) = success_msg.as_ref() {
                        html! {
                            <div class="p-3 bg-green-50 border border-green-200 rounded-md">
                                <p class="text-sm text-green-700">{ message }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button
                    type="submit"
                    class="w-full px-4 py-2 text-sm font-medium text-white bg-teal-600 rounded-md hover:bg-teal-700 focus:outline-none focus:ring-2 focus:ring-teal-500 disabled:opacity-50"
                    disabled={*loading}
                >
                    { if *loading { "Registering..." } else { "Register" } }
                </button>
            </form>
        </div>
    }
}
