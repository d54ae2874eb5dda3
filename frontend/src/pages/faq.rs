use yew::prelude::*;

use crate::components::faq::{FaqAccordion, FaqEntry};

fn entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "How much coverage do I need?",
            "It depends on what you own and what you could be sued for. We'll walk through your assets and recommend limits that protect them.",
        ),
        FaqEntry::new(
            "Can I bundle home and auto?",
            "Yes. Most of our carriers discount both policies when they're written together, often by 10 to 25 percent.",
        ),
        FaqEntry::new(
            "What happens when I file a claim?",
            "Call us first. We help you report the loss, document the damage and follow up with the adjuster until it's settled.",
        ),
        FaqEntry::new(
            "Does an agent cost more than buying direct?",
            "No. Agents are paid by the carrier, and because we compare several of them you frequently pay less.",
        ),
        FaqEntry::new(
            "How often should I review my policies?",
            "Once a year, and any time you move, buy a car, renovate, marry or start a business.",
        ),
    ]
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Straight answers about insurance, claims and working with K2."}</p>
            </section>

            <section class="faq-section">
                <FaqAccordion entries={entries()} />
            </section>

            <style>
                {r#"
                .faq-hero {
                    text-align: center;
                    padding: 4rem 2rem;
                }

                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-toggle {
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .faq-toggle.active {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    display: none;
                    padding-bottom: 1.25rem;
                    color: #475569;
                }

                .faq-answer.active {
                    display: block;
                }
                "#}
            </style>
        </div>
    }
}
