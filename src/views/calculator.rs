//! Calculator page: display plus the 19-button keypad.
//!
//! Each button is a submit button carrying its token, posted back to the
//! owning session. The server answers with a redirect to the same page, so
//! a refresh never replays a press.

use leptos::prelude::*;
use uuid::Uuid;

use super::layout::Layout;
use super::render_document;
use crate::calc::{Button, CalculatorState};

/// Keypad tokens in display order, four per row.
pub const KEYPAD: [&str; 19] = [
    "AC", "+/-", "%", "÷", "7", "8", "9", "x", "4", "5", "6", "-", "1", "2", "3", "+", "0", ".", "=",
];

/// CSS classes for a keypad button.
#[must_use]
pub fn item_class(token: &str) -> &'static str {
    match Button::from_token(token) {
        Button::Operator(_) | Button::Equals => "calc-item operator",
        Button::Digit('0') => "calc-item wide",
        _ => "calc-item",
    }
}

/// One keypad button.
#[component]
pub fn CalcItem(token: &'static str) -> impl IntoView {
    view! {
        <button type="submit" name="token" value=token class=item_class(token)>
            {token}
        </button>
    }
}

#[component]
pub fn Calculator(session_id: Uuid, display: String) -> impl IntoView {
    let action = format!("/calculator/{session_id}");
    view! {
        <section class="calculator">
            <h2>"Let's do some math!"</h2>
            <form class="calc-container" method="post" action=action>
                <div class="output">{display}</div>
                {KEYPAD.into_iter().map(|token| view! { <CalcItem token=token/> }).collect_view()}
            </form>
            <div class="calc-footer"></div>
        </section>
    }
}

#[must_use]
pub fn render(session_id: Uuid, state: &CalculatorState) -> String {
    let display = state.display();
    render_document(move || {
        view! {
            <Layout title="Calculator" active="/calculator">
                <Calculator session_id=session_id display=display/>
            </Layout>
        }
    })
}
