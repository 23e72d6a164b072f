use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub minister_display_name: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <span class="brand">{"Word Sanctuary"}</span>
                <h1 class="portal-title">{"Attending Minister Portal"}</h1>
                <div class="login-status">
                    {"Logged in as "}
                    <span class="minister-name">{&props.minister_display_name}</span>
                </div>
            </div>
        </nav>
    }
}
