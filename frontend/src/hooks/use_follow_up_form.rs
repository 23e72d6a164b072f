use crate::services::api::ApiClient;
use shared::{build_update_request, find_guest, DraftField, FollowUpDraft, Guest};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long after submit the success screen is shown. Deliberately not tied
/// to the outcome of the write: the portal trades write confirmation for
/// perceived responsiveness.
const SUCCESS_FEEDBACK_MS: u32 = 600;

/// Edits applied to the draft. Routed through a reducer so edits queued
/// before a re-render each see the latest draft instead of a render-time
/// snapshot.
enum DraftAction {
    Set(DraftField, String),
    Reset,
}

#[derive(Default, PartialEq)]
struct DraftState {
    draft: FollowUpDraft,
}

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: DraftAction) -> Rc<Self> {
        match action {
            DraftAction::Set(field, value) => {
                let mut draft = self.draft.clone();
                draft.set(field, value);
                Rc::new(DraftState { draft })
            }
            DraftAction::Reset => Rc::new(DraftState::default()),
        }
    }
}

#[derive(Clone)]
pub struct FollowUpFormState {
    pub draft: FollowUpDraft,
    pub selected_guest: Option<Guest>,
    pub is_submitting: bool,
    pub is_submitted: bool,
}

pub struct UseFollowUpFormResult {
    pub state: FollowUpFormState,
    pub actions: UseFollowUpFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFollowUpFormActions {
    pub set_field: Callback<(DraftField, String)>,
    pub submit: Callback<()>,
    pub reset: Callback<()>,
}

/// Owns the follow-up draft, the resolved guest selection, and the
/// submission flow.
#[hook]
pub fn use_follow_up_form(
    api_client: &ApiClient,
    guests: &[Guest],
    refresh_guests: &Callback<()>,
) -> UseFollowUpFormResult {
    let draft = use_reducer(DraftState::default);
    let selected_guest = use_state(|| Option::<Guest>::None);
    let is_submitting = use_state(|| false);
    let is_submitted = use_state(|| false);

    // Field edits go through the shared mutator inside the reducer; picking a
    // guest id re-resolves the selection against the current directory.
    let set_field = {
        let draft = draft.clone();
        let selected_guest = selected_guest.clone();

        use_callback(
            guests.to_vec(),
            move |(field, value): (DraftField, String), guests| {
                if field == DraftField::GuestId {
                    selected_guest.set(find_guest(guests, &value).cloned());
                }
                draft.dispatch(DraftAction::Set(field, value));
            },
        )
    };

    let submit = {
        let api_client = api_client.clone();
        let is_submitting = is_submitting.clone();
        let is_submitted = is_submitted.clone();
        let refresh_guests = refresh_guests.clone();

        use_callback(
            (draft.draft.clone(), (*selected_guest).clone()),
            move |_, (draft, selected)| {
                // The submit control is disabled without a selection, but the
                // contract is a no-op either way.
                let Some(request) = build_update_request(draft, selected.as_ref()) else {
                    return;
                };

                is_submitting.set(true);

                match api_client.prepare_update_guest(&request) {
                    Ok(pending) => {
                        // Optimistic success: flip to the success screen after a
                        // short delay and refresh the directory in the background.
                        {
                            let is_submitted = is_submitted.clone();
                            let refresh_guests = refresh_guests.clone();
                            spawn_local(async move {
                                gloo::timers::future::TimeoutFuture::new(SUCCESS_FEEDBACK_MS)
                                    .await;
                                is_submitted.set(true);
                                refresh_guests.emit(());
                            });
                        }

                        // Fire-and-forget write. A rejection after dispatch is
                        // logged only; the operator has already seen success.
                        spawn_local(async move {
                            if let Err(e) = pending.send().await {
                                gloo::console::error!("Background submission error:", e);
                            }
                        });
                    }
                    Err(e) => {
                        // Nothing was dispatched; roll back and tell the operator.
                        is_submitting.set(false);
                        is_submitted.set(false);
                        gloo::console::error!("Error submitting minister data:", e);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(
                                "There was an error submitting the data. Please try again.",
                            );
                        }
                    }
                }
            },
        )
    };

    let reset = {
        let draft = draft.clone();
        let selected_guest = selected_guest.clone();
        let is_submitting = is_submitting.clone();
        let is_submitted = is_submitted.clone();

        use_callback((), move |_, _| {
            draft.dispatch(DraftAction::Reset);
            selected_guest.set(None);
            is_submitting.set(false);
            is_submitted.set(false);
        })
    };

    let state = FollowUpFormState {
        draft: draft.draft.clone(),
        selected_guest: (*selected_guest).clone(),
        is_submitting: *is_submitting,
        is_submitted: *is_submitted,
    };

    let actions = UseFollowUpFormActions {
        set_field,
        submit,
        reset,
    };

    UseFollowUpFormResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_edits_each_see_the_latest_draft() {
        // Two edits reduced back to back, as when both are dispatched before
        // the next render: neither may clobber the other.
        let state = Rc::new(DraftState::default());
        let state = state.reduce(DraftAction::Set(
            DraftField::MinisterName,
            "Minister A".to_string(),
        ));
        let state = state.reduce(DraftAction::Set(
            DraftField::HodInCharge,
            "HOD B".to_string(),
        ));

        assert_eq!(state.draft.minister_name, "Minister A");
        assert_eq!(state.draft.hod_in_charge, "HOD B");
    }

    #[test]
    fn test_reducer_applies_override_clearing_rule() {
        let state = Rc::new(DraftState::default());
        let state = state.reduce(DraftAction::Set(
            DraftField::Department,
            shared::OTHERS.to_string(),
        ));
        let state = state.reduce(DraftAction::Set(
            DraftField::CustomDepartment,
            "Protocol".to_string(),
        ));
        let state = state.reduce(DraftAction::Set(
            DraftField::Department,
            "choir".to_string(),
        ));

        assert_eq!(state.draft.department, "choir");
        assert_eq!(state.draft.custom_department, "");
    }

    #[test]
    fn test_reset_returns_empty_draft() {
        let state = Rc::new(DraftState::default());
        let state = state.reduce(DraftAction::Set(DraftField::GuestId, "g1".to_string()));
        let state = state.reduce(DraftAction::Reset);

        assert_eq!(state.draft, FollowUpDraft::default());
    }
}
