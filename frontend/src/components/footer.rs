use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
            </div>
            <p>
                {"© "}<span id="current-year">{year}</span>{" K2 Insurance. All rights reserved."}
            </p>
        </footer>
    }
}
