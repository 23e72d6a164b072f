mod components;
mod config;
mod hooks;
mod services;

use components::follow_up_form::FollowUpForm;
use components::guest_info::GuestInfo;
use components::guest_selector::GuestSelector;
use components::header::Header;
use components::success_screen::SuccessScreen;
use config::AppConfig;
use hooks::use_follow_up_form::use_follow_up_form;
use hooks::use_guests::use_guests;
use services::api::ApiClient;
use shared::DraftField;
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = ApiClient::with_base_url(props.config.api_base_url.clone());

    let guests = use_guests(&api_client);
    let form = use_follow_up_form(
        &api_client,
        &guests.state.guests,
        &guests.actions.refresh_guests,
    );

    let on_select = {
        let set_field = form.actions.set_field.clone();
        Callback::from(move |id: String| set_field.emit((DraftField::GuestId, id)))
    };

    if form.state.is_submitted {
        return html! {
            <>
                <Header minister_display_name={props.config.minister_display_name.clone()} />
                <SuccessScreen on_reset={form.actions.reset.clone()} />
            </>
        };
    }

    html! {
        <>
            <Header minister_display_name={props.config.minister_display_name.clone()} />
            <main class="main">
                <div class="container">
                    <h2 class="page-title">{"First Time Guests"}</h2>
                    <div class="portal-grid">
                        <div class="guest-column">
                            <GuestSelector
                                guests={guests.state.guests.clone()}
                                loading={guests.state.loading}
                                selected_guest_id={form.state.draft.guest_id.clone()}
                                {on_select}
                                on_refresh={guests.actions.refresh_guests.clone()}
                            />
                            {if let Some(guest) = form.state.selected_guest.clone() {
                                html! { <GuestInfo {guest} /> }
                            } else {
                                html! {}
                            }}
                        </div>
                        <FollowUpForm
                            draft={form.state.draft.clone()}
                            selected_guest={form.state.selected_guest.clone()}
                            is_submitting={form.state.is_submitting}
                            on_field_change={form.actions.set_field.clone()}
                            on_submit={form.actions.submit.clone()}
                        />
                    </div>
                    <p class="footer-notice">
                        {"This portal is for attending ministers only. Do not share this link publicly."}
                    </p>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
