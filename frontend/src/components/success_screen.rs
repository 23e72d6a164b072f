use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SuccessScreenProps {
    pub on_reset: Callback<()>,
}

/// Shown after the optimistic submit transition; offers a reset back to a
/// fresh form.
#[function_component(SuccessScreen)]
pub fn success_screen(props: &SuccessScreenProps) -> Html {
    let onclick = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="success-screen">
            <div class="success-icon">{"✓"}</div>
            <h2>{"Thank you!"}</h2>
            <p>{"Entry recorded successfully."}</p>
            <button class="btn btn-primary" {onclick}>
                {"Submit Another Entry"}
            </button>
        </div>
    }
}
