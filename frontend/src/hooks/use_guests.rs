use crate::services::api::ApiClient;
use shared::Guest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone)]
pub struct GuestDirectoryState {
    pub guests: Vec<Guest>,
    pub loading: bool,
}

pub struct UseGuestsResult {
    pub state: GuestDirectoryState,
    pub actions: UseGuestsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseGuestsActions {
    pub refresh_guests: Callback<()>,
}

/// Loads the guest directory on mount and exposes a background refresh.
/// A failed fetch is logged and leaves the operator with an empty list; there
/// is no retry.
#[hook]
pub fn use_guests(api_client: &ApiClient) -> UseGuestsResult {
    let guests = use_state(Vec::<Guest>::new);
    let loading = use_state(|| true);

    let refresh_guests = {
        let api_client = api_client.clone();
        let guests = guests.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let guests = guests.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_guests().await {
                    Ok(data) => {
                        guests.set(data);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch guests:", e);
                        guests.set(Vec::new());
                    }
                }

                loading.set(false);
            });
        })
    };

    // Initial directory load gates the guest selector.
    use_effect_with((), {
        let refresh_guests = refresh_guests.clone();
        move |_| {
            refresh_guests.emit(());
            || ()
        }
    });

    let state = GuestDirectoryState {
        guests: (*guests).clone(),
        loading: *loading,
    };

    let actions = UseGuestsActions { refresh_guests };

    UseGuestsResult { state, actions }
}
