use serde::{Deserialize, Serialize};

/// Upper bound on members per team; the backend enforces the same range.
pub const MAX_TEAM_MEMBERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationType {
    #[default]
    Individual,
    Team,
}

impl RegistrationType {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationType::Individual => "Register Individual",
            RegistrationType::Team => "Register Team",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndividualField {
    Name,
    Email,
    Password,
    Expertise,
}

impl IndividualField {
    pub const ALL: [IndividualField; 4] = [
        IndividualField::Name,
        IndividualField::Email,
        IndividualField::Password,
        IndividualField::Expertise,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndividualDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub expertise: String,
}

impl IndividualDraft {
    pub fn field(&self, field: IndividualField) -> &str {
        match field {
            IndividualField::Name => &self.name,
            IndividualField::Email => &self.email,
            IndividualField::Password => &self.password,
            IndividualField::Expertise => &self.expertise,
        }
    }

    pub fn field_mut(&mut self, field: IndividualField) -> &mut String {
        match field {
            IndividualField::Name => &mut self.name,
            IndividualField::Email => &mut self.email,
            IndividualField::Password => &mut self.password,
            IndividualField::Expertise => &mut self.expertise,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    TeamName,
    TeamPassword,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Email,
    Expertise,
}

impl MemberField {
    pub const ALL: [MemberField; 3] = [MemberField::Name, MemberField::Email, MemberField::Expertise];
}

/// A team member as entered and as sent; members have no password of
/// their own, the team password covers all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    pub expertise: String,
}

impl TeamMember {
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Expertise => &self.expertise,
        }
    }

    pub fn field_mut(&mut self, field: MemberField) -> &mut String {
        match field {
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
            MemberField::Expertise => &mut self.expertise,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDraft {
    pub team_name: String,
    pub team_password: String,
    pub description: String,
    pub members: Vec<TeamMember>,
}

impl Default for TeamDraft {
    fn default() -> Self {
        TeamDraft {
            team_name: String::new(),
            team_password: String::new(),
            description: String::new(),
            members: vec![TeamMember::default()],
        }
    }
}

impl TeamDraft {
    pub fn field(&self, field: TeamField) -> &str {
        match field {
            TeamField::TeamName => &self.team_name,
            TeamField::TeamPassword => &self.team_password,
            TeamField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: TeamField) -> &mut String {
        match field {
            TeamField::TeamName => &mut self.team_name,
            TeamField::TeamPassword => &mut self.team_password,
            TeamField::Description => &mut self.description,
        }
    }

    pub fn can_add_member(&self) -> bool {
        self.members.len() < MAX_TEAM_MEMBERS
    }
}

/// Body of `POST /api/auth/register/individual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub expertise: String,
}

impl From<&IndividualDraft> for IndividualRegistration {
    fn from(draft: &IndividualDraft) -> Self {
        IndividualRegistration {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            password: draft.password.clone(),
            expertise: draft.expertise.trim().to_string(),
        }
    }
}

/// Body of `POST /api/auth/register/team`, using the backend's key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRegistration {
    pub team_name: String,
    pub team_password: String,
    pub description: String,
    pub members: Vec<TeamMember>,
}

impl From<&TeamDraft> for TeamRegistration {
    fn from(draft: &TeamDraft) -> Self {
        TeamRegistration {
            team_name: draft.team_name.trim().to_string(),
            team_password: draft.team_password.clone(),
            description: draft.description.trim().to_string(),
            members: draft
                .members
                .iter()
                .map(|m| TeamMember {
                    name: m.name.trim().to_string(),
                    email: m.email.trim().to_string(),
                    expertise: m.expertise.trim().to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub expertise: Option<String>,
}

/// Success body of either registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<RegisteredUser>,
    #[serde(default)]
    pub team_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_payload_uses_backend_keys() {
        let draft = TeamDraft {
            team_name: " Byte Club ".to_string(),
            team_password: "S3cure!Passw0rd".to_string(),
            description: String::new(),
            members: vec![TeamMember {
                name: "Ada".to_string(),
                email: "ada@example.com ".to_string(),
                expertise: "ML".to_string(),
            }],
        };

        let payload = serde_json::to_value(TeamRegistration::from(&draft)).unwrap();
        assert_eq!(
            payload,
            json!({
                "team_name": "Byte Club",
                "team_password": "S3cure!Passw0rd",
                "description": "",
                "members": [{"name": "Ada", "email": "ada@example.com", "expertise": "ML"}]
            })
        );
    }

    #[test]
    fn test_individual_payload_keeps_password_verbatim() {
        let draft = IndividualDraft {
            name: "Grace ".to_string(),
            email: "grace@example.com".to_string(),
            password: " spaced pass ".to_string(),
            expertise: "Compilers".to_string(),
        };
        let payload = IndividualRegistration::from(&draft);
        assert_eq!(payload.name, "Grace");
        assert_eq!(payload.password, " spaced pass ");
    }

    #[test]
    fn test_new_team_draft_has_one_member() {
        let draft = TeamDraft::default();
        assert_eq!(draft.members.len(), 1);
        assert!(draft.can_add_member());
    }

    #[test]
    fn test_registration_response_parses_team_reply() {
        let response: RegistrationResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Team registered successfully",
            "team_id": 7
        }))
        .unwrap();
        assert_eq!(response.team_id, Some(7));
        assert!(response.user.is_none());
    }
}
