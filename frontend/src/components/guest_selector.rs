use shared::{pending_candidates, Guest};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuestSelectorProps {
    pub guests: Vec<Guest>,
    pub loading: bool,
    pub selected_guest_id: String,
    pub on_select: Callback<String>,
    pub on_refresh: Callback<()>,
}

/// Select control over the guests awaiting follow-up, plus a manual refresh.
#[function_component(GuestSelector)]
pub fn guest_selector(props: &GuestSelectorProps) -> Html {
    let pending = pending_candidates(&props.guests);

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    let on_refresh_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <section class="card guest-selector-card">
            <div class="card-header">
                <h2>{"Select Guest"}</h2>
                <p>{"Choose a first-time guest to follow up with"}</p>
                <button class="btn btn-secondary refresh-btn" onclick={on_refresh_click}>
                    {"Refresh"}
                </button>
            </div>
            <div class="card-body">
                <div class="form-group">
                    <label for="guest">{"Guest Name"}</label>
                    <select
                        id="guest"
                        value={props.selected_guest_id.clone()}
                        {onchange}
                        disabled={props.loading}
                    >
                        <option value="" selected={props.selected_guest_id.is_empty()}>
                            {if props.loading {
                                "Loading guests..."
                            } else {
                                "Click here to select a guest"
                            }}
                        </option>
                        {for pending.iter().map(|guest| {
                            html! {
                                <option
                                    value={guest.id.clone()}
                                    selected={guest.id == props.selected_guest_id}
                                >
                                    {format!(
                                        "{} ({} • {})",
                                        guest.full_name, guest.email, guest.phone_number
                                    )}
                                </option>
                            }
                        })}
                        {if pending.is_empty() && !props.loading {
                            html! {
                                <option value="" disabled=true>
                                    {"No pending guests found"}
                                </option>
                            }
                        } else {
                            html! {}
                        }}
                    </select>
                </div>
                {if !props.guests.is_empty() {
                    html! {
                        <p class="pending-count">
                            {format!("Found {} guests pending follow-up", pending.len())}
                        </p>
                    }
                } else {
                    html! {}
                }}
            </div>
        </section>
    }
}
