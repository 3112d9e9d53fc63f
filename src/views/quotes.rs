//! Quote page.

use leptos::prelude::*;

use super::layout::Layout;
use super::render_document;
use crate::quotes::Quote;

pub const LOADING_MESSAGE: &str = "Quote is loading...";
pub const ERROR_MESSAGE: &str = "Something went wrong, please try again later.";

/// What the quote panel can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotePanel {
    /// Nothing to show yet (the feed came back empty).
    Loading,
    Loaded(Vec<Quote>),
    Failed,
}

impl From<Vec<Quote>> for QuotePanel {
    fn from(quotes: Vec<Quote>) -> Self {
        if quotes.is_empty() { Self::Loading } else { Self::Loaded(quotes) }
    }
}

#[component]
pub fn Quotes(panel: QuotePanel) -> impl IntoView {
    match panel {
        QuotePanel::Loading => view! { <p class="loading">{LOADING_MESSAGE}</p> }.into_any(),
        QuotePanel::Failed => view! { <p class="error">{ERROR_MESSAGE}</p> }.into_any(),
        QuotePanel::Loaded(quotes) => view! {
            <div class="quotes">
                {quotes
                    .into_iter()
                    .map(|q| {
                        view! {
                            <blockquote class="quote">
                                <p>{q.quote}</p>
                                <footer>{q.author}</footer>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[must_use]
pub fn render(panel: QuotePanel) -> String {
    render_document(move || {
        view! {
            <Layout title="Quote" active="/quote">
                <section class="quote-page">
                    <Quotes panel=panel/>
                </section>
            </Layout>
        }
    })
}
