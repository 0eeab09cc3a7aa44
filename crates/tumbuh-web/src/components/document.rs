//! Long-form Page
//!
//! Renders the about, terms and privacy copy.

use leptos::prelude::*;

use crate::content::{Document, Item, Section};

#[component]
pub fn DocumentView(document: Document) -> impl IntoView {
    view! {
        <article class="document">
            <header class="document-header">
                <h1>{document.title}</h1>
                <p class="muted">{document.subtitle}</p>
            </header>
            <div class="prose">
                {document.sections.iter().copied().map(section_view).collect_view()}
            </div>
        </article>
    }
}

fn section_view(section: Section) -> impl IntoView {
    view! {
        <section>
            <h2>{section.heading}</h2>
            {section.paragraph.map(|text| view! { <p>{text}</p> })}
            {(!section.items.is_empty())
                .then(|| view! { <ul>{section.items.iter().copied().map(item_view).collect_view()}</ul> })}
        </section>
    }
}

fn item_view(item: Item) -> impl IntoView {
    view! {
        <li>
            {item.term.map(|term| view! { <strong>{term}</strong>" " })}
            {item.text}
        </li>
    }
}
