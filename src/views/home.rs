//! Welcome page.

use leptos::prelude::*;

use super::layout::Layout;
use super::render_document;

const INTRO: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer tempus, \
    nisl in pulvinar feugiat, purus odio dignissim arcu, sed tempor lacus lectus at justo. \
    Vestibulum ante ipsum primis in faucibus orci luctus et ultrices posuere cubilia curae.";

const OUTRO: &str = "Mauris vehicula mi quis neque rhoncus, nec pretium sem facilisis. Nunc \
    sodales velit a turpis placerat, id facilisis nulla luctus. Curabitur vel lorem eget \
    metus finibus venenatis.";

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="home">
            <h2>"Welcome to Math World!"</h2>
            <p>{INTRO}</p>
            <p>{OUTRO}</p>
        </section>
    }
}

#[must_use]
pub fn render() -> String {
    render_document(|| {
        view! {
            <Layout title="Home" active="/">
                <Home/>
            </Layout>
        }
    })
}
