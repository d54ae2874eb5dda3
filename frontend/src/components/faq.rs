use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Which entry of a fixed question list is expanded. At most one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Closes everything, then opens `index` unless it was the one open.
    pub fn toggle(self, index: usize) -> Self {
        let was_open = self.is_open(index);
        let closed = Self { open: None };
        if was_open {
            closed
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_entry(&self) -> Option<usize> {
        self.open
    }
}

impl Reducible for Accordion {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let next = self.toggle(index);
        debug!("FAQ entry {} clicked, open entry now {:?}", index, next.open_entry());
        Rc::new(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

impl FaqEntry {
    pub fn new(question: &'static str, answer: &'static str) -> Self {
        Self {
            question: AttrValue::Static(question),
            answer: AttrValue::Static(answer),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(index);
                    })
                };
                html! {
                    <div class={classes!("faq-item", open.then_some("open"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{entry.question.clone()}</span>
                            <span class={classes!("faq-toggle", open.then_some("active"))}>
                                {if open { "−" } else { "+" }}
                            </span>
                        </button>
                        <div class={classes!("faq-answer", open.then_some("active"))}>
                            <p>{entry.answer.clone()}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
