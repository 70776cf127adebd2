//! # Request and response payloads for the auth endpoints
//!
//! The registration form is a discriminated union — the fields a user fills
//! in depend on the role they picked — while the backend wants one flat
//! request shape. [`RegisterForm::into_request`] is the single place that
//! flattening happens: it emits exactly the fields relevant to the chosen
//! role (everything else is `None` and skipped during serialization) and
//! synthesizes the recruiter identifier the backend requires but the form
//! never collects.

use serde::{Deserialize, Serialize};

use super::role::UserRole;
use super::user::UserInfo;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful response of `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// Role-specific part of the registration form.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleProfile {
    Student {
        student_id: String,
        university_id: String,
    },
    Recruiter {
        company_id: String,
    },
    UniversityAdmin {
        university_id: String,
    },
}

impl RoleProfile {
    /// The role this profile registers as.
    pub fn role(&self) -> UserRole {
        match self {
            RoleProfile::Student { .. } => UserRole::Student,
            RoleProfile::Recruiter { .. } => UserRole::Recruiter,
            RoleProfile::UniversityAdmin { .. } => UserRole::UniversityAdmin,
        }
    }
}

/// What the registration form collects.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile: RoleProfile,
}

impl RegisterForm {
    /// Flatten into the backend's request shape.
    pub fn into_request(self) -> RegisterRequest {
        let role = self.profile.role();
        let mut request = RegisterRequest {
            name: self.name,
            email: self.email,
            password: self.password,
            role: role.as_str().to_string(),
            student_id: None,
            university_id: None,
            company_id: None,
            recruiter_id: None,
        };
        match self.profile {
            RoleProfile::Student {
                student_id,
                university_id,
            } => {
                request.student_id = Some(student_id);
                request.university_id = Some(university_id);
            }
            RoleProfile::Recruiter { company_id } => {
                // The backend insists on a recruiter identifier the form does
                // not collect; derive one from the email local part.
                let local = request
                    .email
                    .split('@')
                    .next()
                    .unwrap_or(request.email.as_str());
                request.recruiter_id = Some(local.to_string());
                request.company_id = Some(company_id);
            }
            RoleProfile::UniversityAdmin { university_id } => {
                request.university_id = Some(university_id);
            }
        }
        request
    }
}

/// Flat body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(profile: RoleProfile) -> RegisterForm {
        RegisterForm {
            name: "Ada".to_string(),
            email: "ada@example.edu".to_string(),
            password: "hunter22".to_string(),
            profile,
        }
    }

    #[test]
    fn test_student_request_carries_student_fields_only() {
        let request = form(RoleProfile::Student {
            student_id: "S-42".to_string(),
            university_id: "U-7".to_string(),
        })
        .into_request();

        assert_eq!(request.role, "student");
        assert_eq!(request.student_id.as_deref(), Some("S-42"));
        assert_eq!(request.university_id.as_deref(), Some("U-7"));
        assert_eq!(request.company_id, None);
        assert_eq!(request.recruiter_id, None);

        // None fields must not appear on the wire at all.
        let json = serde_json::to_value(&request).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert!(keys.contains(&"studentId"));
        assert!(keys.contains(&"universityId"));
        assert!(!keys.contains(&"companyId"));
        assert!(!keys.contains(&"recruiterId"));
    }

    #[test]
    fn test_recruiter_request_synthesizes_recruiter_id() {
        let request = form(RoleProfile::Recruiter {
            company_id: "C-9".to_string(),
        })
        .into_request();

        assert_eq!(request.role, "recruiter");
        assert_eq!(request.company_id.as_deref(), Some("C-9"));
        assert_eq!(request.recruiter_id.as_deref(), Some("ada"));
        assert_eq!(request.student_id, None);
        assert_eq!(request.university_id, None);
    }

    #[test]
    fn test_university_admin_request_carries_university_id_only() {
        let request = form(RoleProfile::UniversityAdmin {
            university_id: "U-7".to_string(),
        })
        .into_request();

        assert_eq!(request.role, "university_admin");
        assert_eq!(request.university_id.as_deref(), Some("U-7"));
        assert_eq!(request.student_id, None);
        assert_eq!(request.company_id, None);
        assert_eq!(request.recruiter_id, None);
    }
}
