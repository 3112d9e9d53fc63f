//! Page shell and navbar.

use leptos::prelude::*;

/// Navigation entries: (path, label).
pub const NAV_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/calculator", "Calculator"), ("/quote", "Quote")];

/// Brand heading plus one link per page. `active` is the current path.
#[component]
pub fn Navbar(active: &'static str) -> impl IntoView {
    view! {
        <nav class="navbar">
            <h1>"Math Magicians"</h1>
            <ul>
                {NAV_LINKS
                    .iter()
                    .map(|&(path, label)| {
                        view! {
                            <li>
                                <a href=path class:active=path == active>{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Shared document shell: head, navbar, then `children` inside `<main>`.
#[component]
pub fn Layout(#[prop(into)] title: String, active: &'static str, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{format!("{title} | Math Magicians")}</title>
                <link rel="stylesheet" href="/static/styles.css"/>
            </head>
            <body>
                <Navbar active=active/>
                <main>{children()}</main>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{render_document, render_fragment};

    #[test]
    fn navbar_has_brand_and_links() {
        let html = render_fragment(|| view! { <Navbar active="/"/> });
        assert!(html.starts_with("<nav"));
        assert!(html.contains("<h1>Math Magicians</h1>"));
        assert!(html.contains(r#"href="/calculator""#));
        assert!(html.contains(r#"href="/quote""#));
        assert!(html.contains(r#"class="active">Home</a>"#));
    }

    #[test]
    fn navbar_marks_only_active_link() {
        let html = render_fragment(|| view! { <Navbar active="/quote"/> });
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(html.contains(r#"class="active">Quote</a>"#));
    }

    #[test]
    fn layout_wraps_children_in_main() {
        let html = render_document(|| {
            view! {
                <Layout title="Home" active="/">
                    <p>"hi"</p>
                </Layout>
            }
        });
        let main = html.find("<main>").unwrap();
        assert!(html[main..].contains("<p>hi</p>"));
        assert!(html.contains("<title>Home | Math Magicians</title>"));
        assert!(html.contains(r#"href="/static/styles.css""#));
        assert!(html.find("<nav").unwrap() < html.find("<main>").unwrap());
    }
}
