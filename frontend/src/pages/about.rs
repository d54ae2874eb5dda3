use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <section class="page-hero">
                <h1>{"About K2 Insurance"}</h1>
                <p>{"A family-owned independent agency serving our neighbours since 1998."}</p>
            </section>
            <section class="page-section">
                <h2>{"Our approach"}</h2>
                <p>
                    {"We represent more than a dozen carriers. That means we work for you, not for an insurer, \
                      and we'll tell you when a cheaper policy covers the same risks."}
                </p>
                <h2>{"Licensed and accountable"}</h2>
                <p>
                    {"Every agent on our team is licensed in property, casualty, life and health lines \
                      and completes continuing education every year."}
                </p>
            </section>
        </div>
    }
}
