//! Registration draft and the rules for editing and submitting it.

use crate::api::ApiError;
use crate::models::{
    IndividualDraft, IndividualField, IndividualRegistration, MemberField, RegistrationResponse,
    RegistrationType, TeamDraft, TeamField, TeamRegistration, MAX_TEAM_MEMBERS,
};

pub const MISSING_INDIVIDUAL_FIELDS: &str = "Please fill in your name, email, password and expertise.";
pub const MISSING_TEAM_FIELDS: &str = "Please provide a team name and a team password.";
pub const MISSING_MEMBER_FIELDS: &str = "Every team member needs a name, email and expertise.";
pub const TEAM_SIZE_ERROR: &str = "A team must have between 1 and 4 members.";
pub const LAST_MEMBER_ERROR: &str = "A team needs at least one member.";

pub fn member_limit_notice() -> String {
    format!("You can add a maximum of {} team members.", MAX_TEAM_MEMBERS)
}

/// What a validated draft turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationRequest {
    Individual(IndividualRegistration),
    Team(TeamRegistration),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub registration_type: RegistrationType,
    pub individual: IndividualDraft,
    pub team: TeamDraft,
    /// Blocking problem shown above the form.
    pub error: Option<String>,
    /// Non-blocking notice about the member cap.
    pub limit_notice: Option<String>,
    pub success: Option<String>,
    pub loading: bool,
    pub submitted: bool,
}

impl RegistrationForm {
    /// Switch between individual and team sign-up. Entered values survive.
    pub fn select_type(&mut self, registration_type: RegistrationType) {
        self.registration_type = registration_type;
        self.error = None;
        self.success = None;
        self.limit_notice = None;
    }

    pub fn set_individual_field(&mut self, field: IndividualField, value: String) {
        *self.individual.field_mut(field) = value;
    }

    pub fn set_team_field(&mut self, field: TeamField, value: String) {
        *self.team.field_mut(field) = value;
    }

    pub fn set_member_field(&mut self, index: usize, field: MemberField, value: String) {
        if let Some(member) = self.team.members.get_mut(index) {
            *member.field_mut(field) = value;
        }
    }

    pub fn add_member(&mut self) -> bool {
        if !self.team.can_add_member() {
            self.limit_notice = Some(member_limit_notice());
            return false;
        }
        self.team.members.push(Default::default());
        self.limit_notice = None;
        true
    }

    pub fn remove_member(&mut self, index: usize) -> bool {
        if self.team.members.len() <= 1 {
            self.error = Some(LAST_MEMBER_ERROR.to_string());
            return false;
        }
        if index >= self.team.members.len() {
            return false;
        }
        self.team.members.remove(index);
        self.limit_notice = None;
        true
    }

    pub fn validate(&self) -> Result<RegistrationRequest, String> {
        match self.registration_type {
            RegistrationType::Individual => {
                if IndividualField::ALL.iter().any(|f| is_blank(self.individual.field(*f))) {
                    return Err(MISSING_INDIVIDUAL_FIELDS.to_string());
                }
                Ok(RegistrationRequest::Individual((&self.individual).into()))
            }
            RegistrationType::Team => {
                if is_blank(&self.team.team_name) || is_blank(&self.team.team_password) {
                    return Err(MISSING_TEAM_FIELDS.to_string());
                }
                if !(1..=MAX_TEAM_MEMBERS).contains(&self.team.members.len()) {
                    return Err(TEAM_SIZE_ERROR.to_string());
                }
                let incomplete = self
                    .team
                    .members
                    .iter()
                    .any(|m| MemberField::ALL.iter().any(|f| is_blank(m.field(*f))));
                if incomplete {
                    return Err(MISSING_MEMBER_FIELDS.to_string());
                }
                Ok(RegistrationRequest::Team((&self.team).into()))
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.submitted
    }

    /// Validate and, if the draft is good, mark the form as loading and
    /// hand back the request to send. `None` means nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<RegistrationRequest> {
        if !self.can_submit() {
            return None;
        }

        self.success = None;
        match self.validate() {
            Ok(request) => {
                self.error = None;
                self.loading = true;
                Some(request)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<RegistrationResponse, ApiError>) {
        self.loading = false;
        match result {
            Ok(response) => {
                let default_message = match self.registration_type {
                    RegistrationType::Individual => "Registration successful!",
                    RegistrationType::Team => "Team registered successfully!",
                };
                self.success = Some(response.message.unwrap_or_else(|| default_message.to_string()));
                self.error = None;
                self.limit_notice = None;
                self.submitted = true;
                self.individual = IndividualDraft::default();
                self.team = TeamDraft::default();
            }
            Err(e) => {
                self.error = Some(e.message().to_string());
            }
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamMember;

    fn member(name: &str) -> TeamMember {
        TeamMember {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            expertise: "Data".to_string(),
        }
    }

    fn complete_individual() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.set_individual_field(IndividualField::Name, "Ada".to_string());
        form.set_individual_field(IndividualField::Email, "ada@example.com".to_string());
        form.set_individual_field(IndividualField::Password, "S3cure!Passw0rd".to_string());
        form.set_individual_field(IndividualField::Expertise, "ML".to_string());
        form
    }

    fn complete_team(members: usize) -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.select_type(RegistrationType::Team);
        form.set_team_field(TeamField::TeamName, "Byte Club".to_string());
        form.set_team_field(TeamField::TeamPassword, "S3cure!Passw0rd".to_string());
        form.team.members = (0..members).map(|i| member(&format!("M{}", i))).collect();
        form
    }

    #[test]
    fn test_add_member_up_to_limit() {
        let mut form = RegistrationForm::default();
        for expected in 2..=MAX_TEAM_MEMBERS {
            assert!(form.add_member());
            assert_eq!(form.team.members.len(), expected);
        }
        assert_eq!(form.limit_notice, None);
    }

    #[test]
    fn test_fifth_member_is_rejected_with_notice() {
        let mut form = complete_team(MAX_TEAM_MEMBERS);
        let before = form.team.clone();

        assert!(!form.add_member());
        assert_eq!(form.team, before);
        assert_eq!(form.limit_notice, Some(member_limit_notice()));
        // The notice does not block submission.
        assert_eq!(form.error, None);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_removing_sole_member_is_blocked() {
        let mut form = RegistrationForm::default();
        form.select_type(RegistrationType::Team);
        form.set_member_field(0, MemberField::Name, "Solo".to_string());
        let before = form.team.clone();

        assert!(!form.remove_member(0));
        assert_eq!(form.team, before);
        assert_eq!(form.error.as_deref(), Some(LAST_MEMBER_ERROR));
    }

    #[test]
    fn test_remove_member_keeps_order_and_clears_notice() {
        let mut form = complete_team(MAX_TEAM_MEMBERS);
        form.add_member();
        assert!(form.limit_notice.is_some());

        assert!(form.remove_member(1));
        let names: Vec<&str> = form.team.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["M0", "M2", "M3"]);
        assert_eq!(form.limit_notice, None);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut form = complete_team(2);
        let before = form.team.clone();
        assert!(!form.remove_member(5));
        assert_eq!(form.team, before);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_member_edit_touches_only_target() {
        let mut form = complete_team(3);
        let before = form.team.clone();

        form.set_member_field(1, MemberField::Email, "new@example.com".to_string());

        assert_eq!(form.team.members[1].email, "new@example.com");
        assert_eq!(form.team.members[1].name, before.members[1].name);
        assert_eq!(form.team.members[1].expertise, before.members[1].expertise);
        assert_eq!(form.team.members[0], before.members[0]);
        assert_eq!(form.team.members[2], before.members[2]);
        assert_eq!(form.team.team_name, before.team_name);
        assert_eq!(form.individual, IndividualDraft::default());
    }

    #[test]
    fn test_individual_edit_touches_only_target() {
        let mut form = complete_individual();
        let before = form.individual.clone();

        form.set_individual_field(IndividualField::Expertise, "Compilers".to_string());

        for field in IndividualField::ALL {
            if field == IndividualField::Expertise {
                assert_eq!(form.individual.field(field), "Compilers");
            } else {
                assert_eq!(form.individual.field(field), before.field(field));
            }
        }
        assert_eq!(form.team, TeamDraft::default());
    }

    #[test]
    fn test_member_edit_out_of_range_is_ignored() {
        let mut form = complete_team(1);
        let before = form.clone();
        form.set_member_field(3, MemberField::Name, "Ghost".to_string());
        assert_eq!(form, before);
    }

    #[test]
    fn test_type_switch_preserves_values_and_clears_messages() {
        let mut form = complete_individual();
        form.error = Some("old".to_string());
        form.success = Some("old".to_string());
        form.limit_notice = Some("old".to_string());
        form.set_team_field(TeamField::TeamName, "Byte Club".to_string());

        form.select_type(RegistrationType::Team);
        assert_eq!(form.error, None);
        assert_eq!(form.success, None);
        assert_eq!(form.limit_notice, None);

        form.select_type(RegistrationType::Individual);
        assert_eq!(form.individual.name, "Ada");
        assert_eq!(form.team.team_name, "Byte Club");
    }

    #[test]
    fn test_individual_missing_any_field_sends_nothing() {
        for missing in IndividualField::ALL {
            let mut form = complete_individual();
            form.set_individual_field(missing, "   ".to_string());

            assert_eq!(form.begin_submit(), None, "{:?} missing should block", missing);
            assert_eq!(form.error.as_deref(), Some(MISSING_INDIVIDUAL_FIELDS));
            assert!(!form.loading);
        }
    }

    #[test]
    fn test_team_missing_password_sends_nothing() {
        let mut form = complete_team(2);
        form.set_team_field(TeamField::TeamPassword, String::new());

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.error.as_deref(), Some(MISSING_TEAM_FIELDS));
        assert!(!form.loading);
    }

    #[test]
    fn test_team_member_missing_field_sends_nothing() {
        for index in 0..3 {
            for field in MemberField::ALL {
                let mut form = complete_team(3);
                form.set_member_field(index, field, String::new());

                assert_eq!(form.begin_submit(), None);
                assert_eq!(form.error.as_deref(), Some(MISSING_MEMBER_FIELDS));
            }
        }
    }

    #[test]
    fn test_team_description_is_optional() {
        let mut form = complete_team(1);
        match form.begin_submit() {
            Some(RegistrationRequest::Team(payload)) => {
                assert_eq!(payload.description, "");
                assert_eq!(payload.members.len(), 1);
            }
            other => panic!("expected team request, got {:?}", other),
        }
        assert!(form.loading);
    }

    #[test]
    fn test_oversized_team_is_rejected() {
        let mut form = complete_team(MAX_TEAM_MEMBERS + 1);
        assert_eq!(form.validate(), Err(TEAM_SIZE_ERROR.to_string()));
    }

    #[test]
    fn test_submit_is_gated_while_loading() {
        let mut form = complete_individual();
        assert!(matches!(form.begin_submit(), Some(RegistrationRequest::Individual(_))));
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn test_successful_submit_resets_and_disables() {
        let mut form = complete_individual();
        form.begin_submit();
        form.finish_submit(Ok(RegistrationResponse {
            success: true,
            message: Some("Individual registered successfully".to_string()),
            user: None,
            team_id: None,
        }));

        assert!(!form.loading);
        assert!(form.submitted);
        assert!(!form.can_submit());
        assert_eq!(form.success.as_deref(), Some("Individual registered successfully"));
        assert_eq!(form.individual, IndividualDraft::default());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn test_failed_submit_surfaces_message() {
        let mut form = complete_team(2);
        form.begin_submit();
        form.finish_submit(Err(ApiError::Rejected {
            message: "User with email m0@example.com already exists".to_string(),
            status: 400,
        }));

        assert!(!form.loading);
        assert!(!form.submitted);
        assert_eq!(form.error.as_deref(), Some("User with email m0@example.com already exists"));
        assert_eq!(form.team.members.len(), 2);
        assert!(form.can_submit());
    }
}
