use std::collections::HashSet;

use yew::prelude::*;

use fitcoach::{async_callback, log::warn};

use crate::providers::api;

/// Outcomes are reported with a blocking browser alert, matching the rest of
/// the page's deliberately plain interaction model.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(ClassesPage)]
pub fn classes_page() -> Html {
    let api = use_memo((), |_| api::create());

    let classes = use_state(Vec::new);
    let registered = use_state(HashSet::<i64>::new);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);

    use_effect_with((), {
        let api = api.clone();
        let classes = classes.clone();
        let registered = registered.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();

        move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error_msg.set(None);

                match api.classes().await {
                    Ok(list) => {
                        classes.set(list);
                        loading.set(false);
                    }
                    Err(err) => {
                        warn!("class list fetch failed: {err}");
                        loading.set(false);
                        error_msg.set(Some("Could not fetch classes".to_string()));
                        return;
                    }
                }

                // Own registrations only drive the Cancel buttons; losing
                // them must not take down the whole page.
                match api.registrations().await {
                    Ok(list) => {
                        registered.set(list.into_iter().map(|reg| reg.class_id).collect());
                    }
                    Err(err) => warn!("registrations fetch failed: {err}"),
                }
            });
        }
    });

    if *loading {
        return html! {
            <p class="text-gray-600">{ "Loading classes..." }</p>
        };
    }

    if let Some(error) = error_msg.as_ref() {
        return html! {
            <div class="p-4 bg-red-50 border border-red-200 rounded-md max-w-xl">
                <p class="text-red-700">{ error }</p>
            </div>
        };
    }

    html! {
        <div class="max-w-2xl">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{ "Available Classes" }</h1>

            {
                if classes.is_empty() {
                    html! { <p class="text-gray-600">{ "No classes available." }</p> }
                } else {
                    html! {
                        <ul class="space-y-4">
                            {
                                classes.iter().map(|class| {
                                    let action = match class.class_id {
                                        Some(class_id) if registered.contains(&class_id) => {
                                            let on_cancel = async_callback!([api, registered, class_id] {
                                                match api.cancel_registration(class_id).await {
                                                    Ok(()) => {
                                                        alert("Registration cancelled.");
                                                        let mut ids = (*registered).clone();
                                                        ids.remove(&class_id);
                                                        registered.set(ids);
                                                    }
                                                    Err(err) => {
                                                        alert(&format!("Could not cancel registration: {err}"));
                                                    }
                                                }
                                            });
                                            html! {
                                                <button
                                                    class="mt-2 px-3 py-1.5 text-sm font-medium text-white bg-red-600 rounded-md hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500"
                                                    onclick={on_cancel}
                                                >
                                                    { "Cancel Registration" }
                                                </button>
                                            }
                                        }
                                        Some(class_id) => {
                                            let on_register = async_callback!([api, registered, class_id] {
                                                match api.register_for_class(class_id).await {
                                                    Ok(_) => {
                                                        alert("Registered for class.");
                                                        let mut ids = (*registered).clone();
                                                        ids.insert(class_id);
                                                        registered.set(ids);
                                                    }
                                                    Err(err) => {
                                                        alert(&format!("Could not register: {err}"));
                                                    }
                                                }
                                            });
                                            html! {
                                                <button
                                                    class="mt-2 px-3 py-1.5 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                                    onclick={on_register}
                                                >
                                                    { "Register" }
                                                </button>
                                            }
                                        }
                                        None => html! {},
                                    };

                                    html! {
                                        <li class="bg-white border border-gray-200 rounded-lg p-4">
                                            <h2 class="text-lg font-semibold text-gray-900">{ &class.class_type }</h2>
                                            <p class="text-sm text-gray-600">{ format!("Coach: {}", class.coach_id) }</p>
                                            <p class="text-sm text-gray-600">{ format!("Start Time: {}", class.start_time) }</p>
                                            <p class="text-sm text-gray-600">{ format!("End Time: {}", class.end_time) }</p>
                                            { action }
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                }
            }
        </div>
    }
}
