#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// This macro simplifies the creation of async callbacks by automatically
/// handling the cloning of variables and the spawning of async tasks.
///
/// ## With the macro
/// The macro can be used in two forms:
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let fetch_classes = async_callback!([api, classes, loading, error_msg] {
///     loading.set(true);
///     error_msg.set(None);
///     match api.classes().await {
///         Ok(data) => {
///             classes.set(data);
///             loading.set(false);
///         }
///         Err(err) => {
///             loading.set(false);
///             error_msg.set(Some(format!("Could not fetch classes: {err}")));
///         }
///     }
/// });
/// ```
///
/// 2. With an event parameter (typically a form submit; annotate the
///    `Callback` type so the event type is inferred):
/// ```compile_fail
/// let on_submit: Callback<SubmitEvent> = async_callback!([auth, session, error_msg] |e| {
///     e.prevent_default();
///     error_msg.set(None);
///     match auth.sign_in(&username, &password).await {
///         Ok(new_session) => session.login.emit(new_session),
///         Err(err) => error_msg.set(Some(err.to_string())),
///     }
/// });
/// ```
///
/// ## Without the macro
/// Each captured handle has to be cloned once for the `Callback` closure and
/// again for the spawned future, which buries the handler logic in
/// boilerplate.
macro_rules! async_callback {
    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version with event parameter
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
