//! Fallback page for unmatched paths.

use leptos::prelude::*;

use super::layout::Layout;
use super::render_document;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Page not found"</h2>
            <p>
                <a href="/">"Back home"</a>
            </p>
        </section>
    }
}

#[must_use]
pub fn render() -> String {
    render_document(|| {
        view! {
            <Layout title="Not found" active="">
                <NotFound/>
            </Layout>
        }
    })
}
