use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor::SmoothAnchor;
use crate::Route;

struct Service {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        id: "auto",
        title: "Auto Insurance",
        summary: "Liability, collision and comprehensive coverage with multi-car and safe driver discounts.",
    },
    Service {
        id: "home",
        title: "Home & Renters",
        summary: "Protect the structure, your belongings and your liability if someone is hurt on your property.",
    },
    Service {
        id: "life",
        title: "Life Insurance",
        summary: "Term and whole life options sized to your family's needs, not a sales quota.",
    },
    Service {
        id: "business",
        title: "Business Insurance",
        summary: "General liability, commercial property and workers' compensation for small businesses.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="page services-page">
            <section class="page-hero">
                <h1>{"Our Services"}</h1>
                <nav class="service-index">
                    { for SERVICES.iter().map(|s| html! {
                        <SmoothAnchor href={format!("#{}", s.id)}>{s.title}</SmoothAnchor>
                    }) }
                </nav>
            </section>
            <section class="page-section">
                { for SERVICES.iter().map(|s| html! {
                    <article class="service-card" id={s.id}>
                        <h2>{s.title}</h2>
                        <p>{s.summary}</p>
                        <SmoothAnchor href="#">{"Back to top"}</SmoothAnchor>
                    </article>
                }) }
            </section>
            <section class="cta">
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Request a quote"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .service-index {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .service-card {
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
