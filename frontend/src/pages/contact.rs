use yew::prelude::*;

use crate::components::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page contact-page">
            <section class="page-hero">
                <h1>{"Contact Us"}</h1>
                <p>{"Tell us what you'd like covered and an agent will get back to you within one business day."}</p>
            </section>
            <section class="page-section contact-layout">
                <ContactForm />
                <aside class="contact-details">
                    <h3>{"Office"}</h3>
                    <p>{"120 Main Street, Suite 4"}</p>
                    <h3>{"Hours"}</h3>
                    <p>{"Monday to Friday, 8:30 to 5:30"}</p>
                </aside>
            </section>
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .contact-form button[disabled] {
                    opacity: 0.6;
                    cursor: wait;
                }
                @media (max-width: 768px) {
                    .contact-layout { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
