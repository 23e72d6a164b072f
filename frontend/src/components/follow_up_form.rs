use shared::{department_options, DraftField, FollowUpDraft, Guest, OTHERS, SERVICE_DAY_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FollowUpFormProps {
    pub draft: FollowUpDraft,
    pub selected_guest: Option<Guest>,
    pub is_submitting: bool,
    pub on_field_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
}

fn input_handler(on_change: &Callback<(DraftField, String)>, field: DraftField) -> Callback<Event> {
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit((field, input.value()));
    })
}

fn select_handler(on_change: &Callback<(DraftField, String)>, field: DraftField) -> Callback<Event> {
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_change.emit((field, select.value()));
    })
}

fn textarea_handler(
    on_change: &Callback<(DraftField, String)>,
    field: DraftField,
) -> Callback<Event> {
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        on_change.emit((field, textarea.value()));
    })
}

/// The minister's questionnaire: service day, names, church/department
/// placement, and comments.
#[function_component(FollowUpForm)]
pub fn follow_up_form(props: &FollowUpFormProps) -> Html {
    let draft = &props.draft;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="card follow-up-card">
            <div class="card-header">
                <h2>{"Minister's Follow-Up"}</h2>
                <p>{"Fill this after attending to the guest"}</p>
            </div>
            <div class="card-body">
                <form {onsubmit}>
                    <div class="form-group">
                        <label for="service-day">{"Service Day"}<span class="required">{"*"}</span></label>
                        <select
                            id="service-day"
                            required=true
                            onchange={select_handler(&props.on_field_change, DraftField::ServiceDay)}
                        >
                            <option value="" selected={draft.service_day.is_empty()} disabled=true>
                                {"Select service day"}
                            </option>
                            {for SERVICE_DAY_OPTIONS.iter().map(|day| {
                                html! {
                                    <option
                                        value={day.value}
                                        selected={draft.service_day == day.value}
                                    >
                                        {day.label}
                                    </option>
                                }
                            })}
                        </select>
                    </div>

                    {if draft.service_day == OTHERS {
                        html! {
                            <div class="form-group override-group">
                                <label for="custom-service-day">
                                    {"Specify Service Day"}<span class="required">{"*"}</span>
                                </label>
                                <input
                                    type="text"
                                    id="custom-service-day"
                                    placeholder="Enter service day (e.g., Saturday, Monday, etc.)"
                                    value={draft.custom_service_day.clone()}
                                    onchange={input_handler(&props.on_field_change, DraftField::CustomServiceDay)}
                                    required=true
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label for="minister-name">
                            {"Minister Who Attended to FTG"}<span class="required">{"*"}</span>
                        </label>
                        <input
                            type="text"
                            id="minister-name"
                            placeholder="Enter minister's name"
                            value={draft.minister_name.clone()}
                            onchange={input_handler(&props.on_field_change, DraftField::MinisterName)}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="life-class-teacher">
                            {"Life Class Teacher"}<span class="required">{"*"}</span>
                        </label>
                        <input
                            type="text"
                            id="life-class-teacher"
                            placeholder="Enter teacher's name"
                            value={draft.life_class_teacher.clone()}
                            onchange={input_handler(&props.on_field_change, DraftField::LifeClassTeacher)}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="joined-church">
                            {"Joined the Church?"}<span class="required">{"*"}</span>
                        </label>
                        <select
                            id="joined-church"
                            required=true
                            onchange={select_handler(&props.on_field_change, DraftField::JoinedChurch)}
                        >
                            <option value="" selected={draft.joined_church.is_empty()} disabled=true>
                                {"Select option"}
                            </option>
                            <option value="yes" selected={draft.joined_church == "yes"}>{"Yes"}</option>
                            <option value="no" selected={draft.joined_church == "no"}>{"No"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="department">
                            {"Department Assigned"}<span class="required">{"*"}</span>
                        </label>
                        {if let Some(guest) = props.selected_guest.as_ref() {
                            html! {
                                <p class="original-choice-hint">
                                    <strong>{"Guest's Original Choice: "}</strong>
                                    {guest.original_department_choice()}
                                </p>
                            }
                        } else {
                            html! {}
                        }}
                        <select
                            id="department"
                            required=true
                            onchange={select_handler(&props.on_field_change, DraftField::Department)}
                        >
                            <option value="" selected={draft.department.is_empty()} disabled=true>
                                {"Select department"}
                            </option>
                            {for department_options(props.selected_guest.as_ref()).iter().map(|dept| {
                                html! {
                                    <option
                                        value={dept.value}
                                        selected={draft.department == dept.value}
                                    >
                                        {dept.label}
                                    </option>
                                }
                            })}
                        </select>
                    </div>

                    {if draft.department == OTHERS {
                        html! {
                            <div class="form-group override-group">
                                <label for="custom-department">
                                    {"Specify Department"}<span class="required">{"*"}</span>
                                </label>
                                <input
                                    type="text"
                                    id="custom-department"
                                    placeholder="Enter department name"
                                    value={draft.custom_department.clone()}
                                    onchange={input_handler(&props.on_field_change, DraftField::CustomDepartment)}
                                    required=true
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label for="hod-in-charge">
                            {"HOD in Charge of Department"}<span class="required">{"*"}</span>
                        </label>
                        <input
                            type="text"
                            id="hod-in-charge"
                            placeholder="Enter HOD's name"
                            value={draft.hod_in_charge.clone()}
                            onchange={input_handler(&props.on_field_change, DraftField::HodInCharge)}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="minister-comment">
                            {"Minister's Comments"}<span class="required">{"*"}</span>
                        </label>
                        <textarea
                            id="minister-comment"
                            placeholder="Enter your comments about the guest interaction..."
                            value={draft.minister_comment.clone()}
                            onchange={textarea_handler(&props.on_field_change, DraftField::MinisterComment)}
                            required=true
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary submit-btn"
                        disabled={props.selected_guest.is_none() || props.is_submitting}
                    >
                        {if props.is_submitting {
                            "Saving..."
                        } else {
                            "Submit Office Data"
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}
