use serde::{Deserialize, Serialize};

/// Status value marking a guest as awaiting minister follow-up.
pub const STATUS_PENDING_FOLLOW_UP: &str = "Pending Minister Follow-up";
/// Status value set once the minister's follow-up has been recorded.
pub const STATUS_COMPLETED: &str = "Completed";

/// Sentinel select value meaning "free-text override in the paired field".
pub const OTHERS: &str = "others";

/// Snapshot of a first-time guest's intake answers, owned by the guest
/// service. The service has emitted both camelCase and all-lowercase keys
/// over its lifetime, so every field accepts either spelling on the way in
/// and is normalized to one canonical struct here, at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guest {
    pub id: String,
    #[serde(rename = "fullName", alias = "fullname")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber", alias = "phonenumber")]
    pub phone_number: String,
    #[serde(rename = "whatsappNumber", alias = "whatsappnumber")]
    pub whatsapp_number: String,
    pub profession: String,
    #[serde(rename = "schoolLevel", alias = "schoollevel")]
    pub school_level: Option<String>,
    #[serde(rename = "schoolDepartment", alias = "schooldepartment")]
    pub school_department: Option<String>,
    pub birthday: String,
    #[serde(rename = "invitedBy", alias = "invitedby")]
    pub invited_by: String,
    #[serde(rename = "howDidYouHear", alias = "howdidyouhear")]
    pub how_did_you_hear: String,
    pub gender: String,
    #[serde(rename = "maritalStatus", alias = "maritalstatus")]
    pub marital_status: String,
    #[serde(rename = "houseAddress", alias = "houseaddress")]
    pub house_address: String,
    #[serde(rename = "officeAddress", alias = "officeaddress")]
    pub office_address: Option<String>,
    #[serde(rename = "bestReachMethod", alias = "bestreachmethod")]
    pub best_reach_method: String,
    #[serde(rename = "joinChurch", alias = "joinchurch")]
    pub join_church: String,
    #[serde(rename = "joinDepartment", alias = "joindepartment")]
    pub join_department: String,
    #[serde(rename = "selectedDepartment", alias = "selecteddepartment")]
    pub selected_department: Option<String>,
    pub blessings: String,
    #[serde(rename = "submissionDate", alias = "submissiondate")]
    pub submission_date: String,
    pub status: String,
}

impl Guest {
    /// A guest is a follow-up candidate iff their status is exactly
    /// [`STATUS_PENDING_FOLLOW_UP`]. Other status values exist in the store
    /// but are not meaningful to this portal.
    pub fn is_pending_follow_up(&self) -> bool {
        self.status == STATUS_PENDING_FOLLOW_UP
    }

    /// Human-readable summary of what the guest answered on their intake
    /// form about joining a department, shown as a hint next to the
    /// minister's department assignment.
    pub fn original_department_choice(&self) -> String {
        if self.join_department == "no" {
            "Did not want to join a department".to_string()
        } else {
            match self.selected_department.as_deref() {
                Some(dept) if !dept.is_empty() => format!("Wanted to join: {}", dept),
                _ => "Wanted to join: Any department".to_string(),
            }
        }
    }
}

/// Guests currently awaiting minister follow-up, in directory order.
pub fn pending_candidates(guests: &[Guest]) -> Vec<&Guest> {
    guests.iter().filter(|g| g.is_pending_follow_up()).collect()
}

/// Resolve a guest identifier against the directory. An unknown or empty id
/// yields `None`, which clears the selection.
pub fn find_guest<'a>(guests: &'a [Guest], id: &str) -> Option<&'a Guest> {
    guests.iter().find(|g| g.id == id)
}

/// One field of the follow-up draft. Keeping this an enum makes the mutation
/// rules in [`FollowUpDraft::set`] a closed decision table instead of string
/// dispatch scattered through the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    GuestId,
    ServiceDay,
    CustomServiceDay,
    MinisterName,
    LifeClassTeacher,
    JoinedChurch,
    Department,
    CustomDepartment,
    HodInCharge,
    MinisterComment,
}

/// The minister's in-progress follow-up answers. Lives only in memory;
/// `Default` is the empty form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowUpDraft {
    pub guest_id: String,
    pub service_day: String,
    pub custom_service_day: String,
    pub minister_name: String,
    pub life_class_teacher: String,
    pub joined_church: String,
    pub department: String,
    pub custom_department: String,
    pub hod_in_charge: String,
    pub minister_comment: String,
}

impl FollowUpDraft {
    /// Apply one field edit. Two fields carry a cross-field rule: moving a
    /// select away from the `others` sentinel clears its free-text override
    /// so a stale override can never be submitted. Repeated sets are
    /// idempotent.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::GuestId => self.guest_id = value,
            DraftField::ServiceDay => {
                if value != OTHERS {
                    self.custom_service_day.clear();
                }
                self.service_day = value;
            }
            DraftField::CustomServiceDay => self.custom_service_day = value,
            DraftField::MinisterName => self.minister_name = value,
            DraftField::LifeClassTeacher => self.life_class_teacher = value,
            DraftField::JoinedChurch => self.joined_church = value,
            DraftField::Department => {
                if value != OTHERS {
                    self.custom_department.clear();
                }
                self.department = value;
            }
            DraftField::CustomDepartment => self.custom_department = value,
            DraftField::HodInCharge => self.hod_in_charge = value,
            DraftField::MinisterComment => self.minister_comment = value,
        }
    }

    /// Service day actually submitted: the free-text override supersedes the
    /// select when the select is `others`; the sentinel itself is never sent.
    pub fn effective_service_day(&self) -> &str {
        if self.service_day == OTHERS {
            &self.custom_service_day
        } else {
            &self.service_day
        }
    }

    /// Department actually submitted, same override rule as the service day.
    pub fn effective_department(&self) -> &str {
        if self.department == OTHERS {
            &self.custom_department
        } else {
            &self.department
        }
    }
}

/// Follow-up answers as they go over the wire, camelCase keys, with the
/// service day and department already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinisterData {
    pub guest_id: String,
    pub service_day: String,
    pub custom_service_day: String,
    pub minister_name: String,
    pub life_class_teacher: String,
    pub joined_church: String,
    pub department: String,
    pub custom_department: String,
    pub hod_in_charge: String,
    pub minister_comment: String,
}

/// Body of `POST /api/update-guest`: merge the minister's answers into the
/// guest record and move it to [`STATUS_COMPLETED`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestRequest {
    pub guest_id: String,
    pub minister_data: MinisterData,
    pub status: String,
}

/// Build the submission payload. Returns `None` when no guest is selected;
/// submitting without a selection is a no-op by contract.
pub fn build_update_request(
    draft: &FollowUpDraft,
    selected: Option<&Guest>,
) -> Option<UpdateGuestRequest> {
    let guest = selected?;
    Some(UpdateGuestRequest {
        guest_id: guest.id.clone(),
        minister_data: MinisterData {
            guest_id: draft.guest_id.clone(),
            service_day: draft.effective_service_day().to_string(),
            custom_service_day: draft.custom_service_day.clone(),
            minister_name: draft.minister_name.clone(),
            life_class_teacher: draft.life_class_teacher.clone(),
            joined_church: draft.joined_church.clone(),
            department: draft.effective_department().to_string(),
            custom_department: draft.custom_department.clone(),
            hod_in_charge: draft.hod_in_charge.clone(),
            minister_comment: draft.minister_comment.clone(),
        },
        status: STATUS_COMPLETED.to_string(),
    })
}

/// A value/label pair for a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Service days offered on the follow-up form.
pub const SERVICE_DAY_OPTIONS: [SelectOption; 4] = [
    SelectOption { value: "friday", label: "Friday" },
    SelectOption { value: "sunday", label: "Sunday" },
    SelectOption { value: "wednesday", label: "Wednesday" },
    SelectOption { value: OTHERS, label: "Others (Specify)" },
];

/// The ministry departments a guest can be placed into.
pub const STANDARD_DEPARTMENTS: [SelectOption; 11] = [
    SelectOption { value: "media", label: "Media" },
    SelectOption { value: "choir", label: "Choir" },
    SelectOption { value: "power-sound", label: "Power and Sound" },
    SelectOption { value: "ushering", label: "Ushering" },
    SelectOption { value: "love-care", label: "Love and Care" },
    SelectOption { value: "zoe", label: "Zoe" },
    SelectOption { value: "sid", label: "SID" },
    SelectOption { value: "drama", label: "Drama" },
    SelectOption { value: "evangelism", label: "Evangelism" },
    SelectOption { value: "orison", label: "Orison" },
    SelectOption { value: "decoration", label: "Decoration" },
];

const NO_DEPARTMENT_OPTION: SelectOption = SelectOption {
    value: "none",
    label: "No Department (Guest's Original Choice)",
};

const OTHERS_OPTION: SelectOption = SelectOption {
    value: OTHERS,
    label: "Others (Specify)",
};

/// Department choices offered to the minister for the current selection.
///
/// The minister may always override what the guest originally asked for; the
/// only branch is that a guest who declined a department gets their original
/// "none" answer surfaced as the first, distinguished option.
pub fn department_options(selected: Option<&Guest>) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(STANDARD_DEPARTMENTS.len() + 2);
    if let Some(guest) = selected {
        if guest.join_department == "no" {
            options.push(NO_DEPARTMENT_OPTION);
        }
    }
    options.extend_from_slice(&STANDARD_DEPARTMENTS);
    options.push(OTHERS_OPTION);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_guest(id: &str) -> Guest {
        Guest {
            id: id.to_string(),
            full_name: "Test Guest".to_string(),
            status: STATUS_PENDING_FOLLOW_UP.to_string(),
            ..Guest::default()
        }
    }

    #[test]
    fn test_guest_deserializes_camel_case_keys() {
        let guest: Guest = serde_json::from_str(
            r#"{
                "id": "g1",
                "fullName": "Ada Obi",
                "phoneNumber": "0801",
                "whatsappNumber": "0802",
                "joinDepartment": "yes",
                "selectedDepartment": "choir",
                "status": "Pending Minister Follow-up"
            }"#,
        )
        .unwrap();

        assert_eq!(guest.full_name, "Ada Obi");
        assert_eq!(guest.phone_number, "0801");
        assert_eq!(guest.selected_department.as_deref(), Some("choir"));
        assert!(guest.is_pending_follow_up());
    }

    #[test]
    fn test_guest_deserializes_lowercase_keys() {
        let guest: Guest = serde_json::from_str(
            r#"{
                "id": "g2",
                "fullname": "Ben Eze",
                "phonenumber": "0803",
                "whatsappnumber": "0804",
                "maritalstatus": "Single",
                "joindepartment": "no",
                "status": "Pending Minister Follow-up"
            }"#,
        )
        .unwrap();

        assert_eq!(guest.full_name, "Ben Eze");
        assert_eq!(guest.phone_number, "0803");
        assert_eq!(guest.marital_status, "Single");
        assert_eq!(guest.join_department, "no");
    }

    #[test]
    fn test_pending_candidates_filters_by_status_across_casings() {
        let guests: Vec<Guest> = serde_json::from_str(
            r#"[
                {"id": "g1", "fullName": "Ada", "status": "Pending Minister Follow-up"},
                {"id": "g2", "fullname": "Ben", "status": "Pending Minister Follow-up"},
                {"id": "g3", "fullName": "Chi", "status": "Completed"},
                {"id": "g4", "fullname": "Dan", "status": "Archived"}
            ]"#,
        )
        .unwrap();

        let pending = pending_candidates(&guests);
        let ids: Vec<&str> = pending.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
        assert_eq!(pending[1].full_name, "Ben");
    }

    #[test]
    fn test_find_guest_unknown_id_is_none() {
        let guests = vec![pending_guest("g1"), pending_guest("g2")];
        assert!(find_guest(&guests, "g3").is_none());
        assert!(find_guest(&guests, "").is_none());
        assert_eq!(find_guest(&guests, "g2").map(|g| g.id.as_str()), Some("g2"));
    }

    #[test]
    fn test_leaving_others_clears_custom_department() {
        let mut draft = FollowUpDraft::default();
        draft.set(DraftField::Department, OTHERS);
        draft.set(DraftField::CustomDepartment, "Protocol");
        assert_eq!(draft.custom_department, "Protocol");

        draft.set(DraftField::Department, "choir");
        assert_eq!(draft.department, "choir");
        assert_eq!(draft.custom_department, "");

        // Idempotent: setting again leaves the cleared state unchanged.
        draft.set(DraftField::Department, "choir");
        assert_eq!(draft.custom_department, "");
    }

    #[test]
    fn test_leaving_others_clears_custom_service_day() {
        let mut draft = FollowUpDraft::default();
        draft.set(DraftField::ServiceDay, OTHERS);
        draft.set(DraftField::CustomServiceDay, "Saturday");

        draft.set(DraftField::ServiceDay, "sunday");
        assert_eq!(draft.service_day, "sunday");
        assert_eq!(draft.custom_service_day, "");

        draft.set(DraftField::ServiceDay, "sunday");
        assert_eq!(draft.custom_service_day, "");
    }

    #[test]
    fn test_others_keeps_overrides_in_place() {
        let mut draft = FollowUpDraft::default();
        draft.set(DraftField::ServiceDay, OTHERS);
        draft.set(DraftField::CustomServiceDay, "Saturday");
        draft.set(DraftField::Department, OTHERS);
        draft.set(DraftField::CustomDepartment, "Protocol");

        assert_eq!(draft.effective_service_day(), "Saturday");
        assert_eq!(draft.effective_department(), "Protocol");
    }

    #[test]
    fn test_build_update_request_resolves_overrides() {
        let mut draft = FollowUpDraft::default();
        draft.set(DraftField::GuestId, "g1");
        draft.set(DraftField::ServiceDay, OTHERS);
        draft.set(DraftField::CustomServiceDay, "Saturday");
        draft.set(DraftField::Department, "choir");
        draft.set(DraftField::MinisterName, "Minister A");

        let guest = pending_guest("g1");
        let request = build_update_request(&draft, Some(&guest)).unwrap();

        assert_eq!(request.guest_id, "g1");
        assert_eq!(request.status, STATUS_COMPLETED);
        assert_eq!(request.minister_data.service_day, "Saturday");
        assert_eq!(request.minister_data.department, "choir");
        assert_eq!(request.minister_data.minister_name, "Minister A");
    }

    #[test]
    fn test_update_request_wire_format_is_camel_case() {
        let mut draft = FollowUpDraft::default();
        draft.set(DraftField::ServiceDay, "friday");
        let guest = pending_guest("g1");

        let request = build_update_request(&draft, Some(&guest)).unwrap();
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();

        assert_eq!(json["guestId"], "g1");
        assert_eq!(json["status"], "Completed");
        assert_eq!(json["ministerData"]["serviceDay"], "friday");
        assert!(json["ministerData"].get("lifeClassTeacher").is_some());
        // The sentinel value never appears as a resolved service day.
        assert_ne!(json["ministerData"]["serviceDay"], OTHERS);
    }

    #[test]
    fn test_build_update_request_requires_selection() {
        let mut draft = FollowUpDraft::default();
        draft.set(DraftField::ServiceDay, "sunday");
        assert!(build_update_request(&draft, None).is_none());
    }

    #[test]
    fn test_department_options_without_selection() {
        let options = department_options(None);
        assert_eq!(options.len(), STANDARD_DEPARTMENTS.len() + 1);
        assert_eq!(options.first().unwrap().value, "media");
        assert_eq!(options.last().unwrap().value, OTHERS);
    }

    #[test]
    fn test_department_options_guest_declined_gets_none_first() {
        let mut guest = pending_guest("g1");
        guest.join_department = "no".to_string();

        let options = department_options(Some(&guest));
        assert_eq!(options.len(), STANDARD_DEPARTMENTS.len() + 2);
        assert_eq!(options[0].value, "none");
        assert!(options[0].label.contains("Guest's Original Choice"));
        assert_eq!(options[1].value, "media");
        assert_eq!(options.last().unwrap().value, OTHERS);
    }

    #[test]
    fn test_department_options_permissive_default_for_other_answers() {
        for answer in ["yes", "", "maybe"] {
            let mut guest = pending_guest("g1");
            guest.join_department = answer.to_string();
            let options = department_options(Some(&guest));
            assert_eq!(options.len(), STANDARD_DEPARTMENTS.len() + 1);
            assert_eq!(options.last().unwrap().value, OTHERS);
        }
    }

    #[test]
    fn test_original_department_choice_summary() {
        let mut guest = pending_guest("g1");
        guest.join_department = "no".to_string();
        assert_eq!(guest.original_department_choice(), "Did not want to join a department");

        guest.join_department = "yes".to_string();
        guest.selected_department = Some("choir".to_string());
        assert_eq!(guest.original_department_choice(), "Wanted to join: choir");

        guest.selected_department = None;
        assert_eq!(guest.original_department_choice(), "Wanted to join: Any department");
    }

    #[test]
    fn test_default_draft_is_empty() {
        let mut draft = FollowUpDraft::default();
        draft.set(DraftField::GuestId, "g1");
        draft.set(DraftField::MinisterComment, "met after service");

        draft = FollowUpDraft::default();
        assert_eq!(draft, FollowUpDraft::default());
        assert_eq!(draft.guest_id, "");
        assert_eq!(draft.effective_service_day(), "");
        assert_eq!(draft.effective_department(), "");
    }
}
