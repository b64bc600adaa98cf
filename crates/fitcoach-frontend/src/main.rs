mod components;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use components::Sidebar;
use providers::SessionProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <div class="flex min-h-screen bg-gray-50">
                    <Sidebar />
                    <main class="flex-1 p-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    fitcoach::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
