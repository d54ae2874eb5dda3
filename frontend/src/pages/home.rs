use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor::SmoothAnchor;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Coverage that keeps up with you"}</h1>
                <p class="hero-subtitle">
                    {"Auto, home, life and business insurance from an independent agency that shops the market for you."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        {"Get a Free Quote"}
                    </Link<Route>>
                    <SmoothAnchor href="#why-k2" class="btn btn-secondary">
                        {"Why K2?"}
                    </SmoothAnchor>
                </div>
            </section>

            <section class="features" id="why-k2">
                <h2>{"Why K2 Insurance"}</h2>
                <div class="features-grid">
                    <div class="feature-item">
                        <h3>{"Independent"}</h3>
                        <p>{"We compare carriers side by side so you don't have to."}</p>
                    </div>
                    <div class="feature-item">
                        <h3>{"Local"}</h3>
                        <p>{"A real agent who answers the phone and knows your area."}</p>
                    </div>
                    <div class="feature-item">
                        <h3>{"Claims support"}</h3>
                        <p>{"We stay with you from first notice of loss until the check clears."}</p>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to review your coverage?"}</h2>
                <Link<Route> to={Route::Services} classes="btn btn-primary">
                    {"See our services"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .hero {
                    text-align: center;
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #1e3a8a, #3b82f6);
                    color: #fff;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    font-size: 1.2rem;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .features {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .cta {
                    text-align: center;
                    padding: 4rem 2rem;
                    background: #f1f5f9;
                }
                "#}
            </style>
        </div>
    }
}
