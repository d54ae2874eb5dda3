use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod page;
mod timer;
mod components {
    pub mod anchor;
    pub mod contact_form;
    pub mod faq;
    pub mod footer;
    pub mod nav;
    pub mod notification;
}
mod contact {
    pub mod phone;
    pub mod submission;
    pub mod validation;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod services;
}

use components::{
    footer::Footer,
    nav::Nav,
    notification::NotificationProvider,
};
use pages::{
    about::About,
    contact::Contact,
    faq::Faq,
    home::Home,
    services::Services,
};

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/about.html")]
    About,
    #[at("/services.html")]
    Services,
    #[at("/faq.html")]
    Faq,
    #[at("/contact.html")]
    Contact,
    #[not_found]
    #[at("/404.html")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Index => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div class="page not-found-page">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </NotificationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    gloo_console::log!("K2 Insurance site starting");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
