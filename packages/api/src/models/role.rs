//! # Role normalization and the canonical role set
//!
//! The backend stores roles under inconsistent spellings (`"Student"`,
//! `"UniversityAdmin"`, `"platform_admin"`, ...). Everything in the frontend
//! compares roles through one boundary:
//!
//! 1. [`normalize_role`] folds any spelling into a lowercase,
//!    underscore-delimited token.
//! 2. [`UserRole::parse`] validates that token against the four canonical
//!    roles and yields a [`UserRole`], the sum type the rest of the app
//!    matches on exhaustively.
//!
//! `normalize_role` is pure and total: garbage in, garbage out. Callers that
//! need a *valid* role go through `UserRole::parse` and handle `None`.

use std::fmt;

/// Fold a raw role string into a lowercase, underscore-delimited token.
///
/// Inputs that already contain an underscore are lowercased as-is. Anything
/// else is treated as PascalCase/camelCase: an underscore is inserted before
/// every ASCII uppercase letter (independent of adjacency, so `"UIAdmin"`
/// becomes `"u_i_admin"`), the result is lowercased, and a single leading
/// underscore is stripped.
pub fn normalize_role(raw: &str) -> String {
    if raw.contains('_') {
        return raw.to_lowercase();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for c in raw.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    match out.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}

/// The four canonical roles of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Student,
    Recruiter,
    UniversityAdmin,
    PlatformAdmin,
}

impl UserRole {
    /// Every canonical role, in display order.
    pub const ALL: [UserRole; 4] = [
        UserRole::Student,
        UserRole::Recruiter,
        UserRole::UniversityAdmin,
        UserRole::PlatformAdmin,
    ];

    /// Parse an untrusted role string into a canonical role.
    ///
    /// Accepts any spelling [`normalize_role`] can fold into a canonical
    /// token, plus the underscore-free variants (`"universityadmin"`,
    /// `"platformadmin"`) so role sets configured either way agree.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_role(raw).as_str() {
            "student" => Some(UserRole::Student),
            "recruiter" => Some(UserRole::Recruiter),
            "university_admin" | "universityadmin" => Some(UserRole::UniversityAdmin),
            "platform_admin" | "platformadmin" => Some(UserRole::PlatformAdmin),
            _ => None,
        }
    }

    /// The canonical token for this role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Recruiter => "recruiter",
            UserRole::UniversityAdmin => "university_admin",
            UserRole::PlatformAdmin => "platform_admin",
        }
    }

    /// Human-readable label for forms and headers.
    pub const fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Recruiter => "Recruiter",
            UserRole::UniversityAdmin => "University Admin",
            UserRole::PlatformAdmin => "Platform Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_input_is_lowercased_as_is() {
        assert_eq!(normalize_role("university_admin"), "university_admin");
        assert_eq!(normalize_role("university_Admin"), "university_admin");
        assert_eq!(normalize_role("PLATFORM_ADMIN"), "platform_admin");
    }

    #[test]
    fn test_pascal_case_gets_underscore_before_every_capital() {
        assert_eq!(normalize_role("Student"), "student");
        assert_eq!(normalize_role("UniversityAdmin"), "university_admin");
        // Consecutive capitals each get their own underscore.
        assert_eq!(normalize_role("UIAdmin"), "u_i_admin");
        assert_eq!(normalize_role("platformAdmin"), "platform_admin");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Student", "UniversityAdmin", "UIAdmin", "recruiter", "weird_Thing"] {
            let once = normalize_role(raw);
            assert_eq!(normalize_role(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_parse_canonical_roles() {
        assert_eq!(UserRole::parse("Student"), Some(UserRole::Student));
        assert_eq!(UserRole::parse("recruiter"), Some(UserRole::Recruiter));
        assert_eq!(
            UserRole::parse("UniversityAdmin"),
            Some(UserRole::UniversityAdmin)
        );
        assert_eq!(
            UserRole::parse("platform_admin"),
            Some(UserRole::PlatformAdmin)
        );
    }

    #[test]
    fn test_parse_accepts_underscore_free_spellings() {
        // A role set written as "universityadmin" must match a user whose
        // role arrives as "UniversityAdmin".
        assert_eq!(
            UserRole::parse("universityadmin"),
            UserRole::parse("UniversityAdmin")
        );
        assert_eq!(
            UserRole::parse("platformadmin"),
            UserRole::parse("PlatformAdmin")
        );
    }

    #[test]
    fn test_parse_rejects_unknown_roles() {
        assert_eq!(UserRole::parse(""), None);
        assert_eq!(UserRole::parse("superuser"), None);
        assert_eq!(UserRole::parse("u_i_admin"), None);
    }

    #[test]
    fn test_labels_are_distinct_human_spellings() {
        let labels: Vec<&str> = UserRole::ALL.iter().map(|role| role.label()).collect();
        for (i, a) in labels.iter().enumerate() {
            assert!(!a.is_empty());
            assert_ne!(*a, UserRole::ALL[i].as_str());
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(UserRole::UniversityAdmin.label(), "University Admin");
    }

    #[test]
    fn test_display_uses_canonical_token() {
        assert_eq!(UserRole::Student.to_string(), "student");
        assert_eq!(UserRole::UniversityAdmin.to_string(), "university_admin");
    }
}
