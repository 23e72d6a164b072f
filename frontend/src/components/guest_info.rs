use shared::Guest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuestInfoProps {
    pub guest: Guest,
}

fn info_row(label: &str, value: &str) -> Html {
    html! {
        <p><strong>{label}{": "}</strong>{value.to_string()}</p>
    }
}

fn optional_row(label: &str, value: Option<&str>) -> Html {
    match value {
        Some(v) if !v.is_empty() => info_row(label, v),
        _ => html! {},
    }
}

/// Read-only projection of the selected guest's intake answers.
#[function_component(GuestInfo)]
pub fn guest_info(props: &GuestInfoProps) -> Html {
    let guest = &props.guest;

    let email = if guest.email.is_empty() {
        "Not provided"
    } else {
        &guest.email
    };

    html! {
        <div class="guest-info">
            <h3>{"Guest Information"}</h3>
            <div class="guest-info-rows">
                {info_row("Name", &guest.full_name)}
                {info_row("Phone", &guest.phone_number)}
                {info_row("WhatsApp", &guest.whatsapp_number)}
                {info_row("Email", email)}
                {info_row("Profession", &guest.profession)}
                {optional_row("School Level", guest.school_level.as_deref())}
                {optional_row("School Department", guest.school_department.as_deref())}
                {info_row("Gender", &guest.gender)}
                {info_row("Marital Status", &guest.marital_status)}
                {info_row("How they heard about us", &guest.how_did_you_hear)}
                {optional_row("Invited By", Some(guest.invited_by.as_str()))}
                {info_row("Home Address", &guest.house_address)}
                {optional_row("Office Address", guest.office_address.as_deref())}
                {info_row("Birthday", &guest.birthday)}
                {info_row("Best Contact Method", &guest.best_reach_method)}
                {info_row("Wants to Join Church", &guest.join_church)}
                {info_row("Wants to Join Department", &guest.join_department)}
                {optional_row("Preferred Department", guest.selected_department.as_deref())}
                {info_row("What Blessed Them", &guest.blessings)}
            </div>
        </div>
    }
}
