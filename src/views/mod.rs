//! Server-rendered pages built from Leptos components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page shares one `Layout`: the "Math Magicians" `Navbar` inside a
//! `<nav>` followed by the page body inside a `<main>`. Components are
//! rendered to HTML strings on the server with no hydration; handlers wrap
//! the result in `Html`. Leptos escapes text and attribute values.

pub mod calculator;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod quotes;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

/// Render a view to an HTML fragment under a throwaway reactive owner.
pub(crate) fn render_fragment<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| build().to_html())
}

/// Render a full document. `build` should produce a [`layout::Layout`].
pub fn render_document<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    format!("<!DOCTYPE html>{}", render_fragment(build))
}
