use serde::Serialize;

use crate::StoredIdentity;

/// Outcome of evaluating a stored identity on entry to the claims screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationVerdict {
    /// Identity is complete; the caller may render claims content.
    Allow,

    /// Identity is missing or incomplete; the caller must transfer control to
    /// the login flow before any claims content becomes visible.
    RedirectToLogin,
}

/// Decide whether the requesting screen may proceed.
///
/// - No IO
/// - No panics
/// - No side effects (launching the login screen is the caller's job)
///
/// A session is valid only when **both** identity fields are present and
/// non-blank; either field missing on its own forces the redirect. Missing or
/// blank fields are expected inputs, never errors.
pub fn evaluate(identity: &StoredIdentity) -> NavigationVerdict {
    if identity.has_user_id() && identity.has_user_name() {
        NavigationVerdict::Allow
    } else {
        NavigationVerdict::RedirectToLogin
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gate Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Identity field found absent or blank during evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    UserId,
    UserName,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::UserId => "user_id",
            MissingField::UserName => "user_name",
        }
    }
}

/// Detailed explanation of a gate decision.
///
/// This answers "why was this screen entry allowed/redirected?" for audit and
/// debug logging. `verdict` always agrees with [`evaluate`] on the same
/// snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct GateExplanation {
    /// The verdict the gate reached.
    pub verdict: NavigationVerdict,

    /// Fields that were absent or blank in the snapshot.
    pub missing: Vec<MissingField>,

    /// Human-readable reason for the decision.
    pub reason: String,
}

/// Explain a gate decision for the given snapshot.
pub fn explain(identity: &StoredIdentity) -> GateExplanation {
    let mut missing = Vec::new();
    if !identity.has_user_id() {
        missing.push(MissingField::UserId);
    }
    if !identity.has_user_name() {
        missing.push(MissingField::UserName);
    }

    if missing.is_empty() {
        return GateExplanation {
            verdict: NavigationVerdict::Allow,
            missing,
            reason: "stored identity is complete".to_string(),
        };
    }

    let fields: Vec<&str> = missing.iter().map(MissingField::as_str).collect();
    GateExplanation {
        verdict: NavigationVerdict::RedirectToLogin,
        reason: format!("stored identity is incomplete: {} absent or blank", fields.join(", ")),
        missing,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn identity(user_id: Option<&str>, user_name: Option<&str>) -> StoredIdentity {
        StoredIdentity {
            user_id: user_id.map(str::to_string),
            user_name: user_name.map(str::to_string),
        }
    }

    #[test]
    fn missing_user_id_redirects_to_login() {
        let verdict = evaluate(&identity(None, Some("alice")));
        assert_eq!(verdict, NavigationVerdict::RedirectToLogin);
    }

    #[test]
    fn missing_user_name_redirects_to_login() {
        let verdict = evaluate(&identity(Some("u123"), None));
        assert_eq!(verdict, NavigationVerdict::RedirectToLogin);
    }

    #[test]
    fn empty_fields_redirect_to_login() {
        let verdict = evaluate(&identity(Some(""), Some("")));
        assert_eq!(verdict, NavigationVerdict::RedirectToLogin);
    }

    #[test]
    fn both_fields_absent_redirect_to_login() {
        assert_eq!(evaluate(&StoredIdentity::empty()), NavigationVerdict::RedirectToLogin);
    }

    #[test]
    fn complete_identity_is_allowed() {
        let verdict = evaluate(&identity(Some("u123"), Some("alice")));
        assert_eq!(verdict, NavigationVerdict::Allow);
    }

    #[test]
    fn blank_fields_count_as_absent() {
        assert_eq!(
            evaluate(&identity(Some("   "), Some("alice"))),
            NavigationVerdict::RedirectToLogin
        );
        assert_eq!(
            evaluate(&identity(Some("u123"), Some("\t\n"))),
            NavigationVerdict::RedirectToLogin
        );
    }

    #[test]
    fn repeated_evaluation_yields_same_verdict() {
        let snapshot = identity(Some("u123"), None);
        assert_eq!(evaluate(&snapshot), evaluate(&snapshot));
    }

    #[test]
    fn explanation_agrees_with_verdict() {
        let snapshots = [
            identity(None, None),
            identity(None, Some("alice")),
            identity(Some("u123"), None),
            identity(Some("u123"), Some("alice")),
            identity(Some(" "), Some("alice")),
        ];

        for snapshot in &snapshots {
            assert_eq!(explain(snapshot).verdict, evaluate(snapshot));
        }
    }

    #[test]
    fn explanation_lists_exactly_the_missing_fields() {
        let explanation = explain(&identity(None, Some("alice")));
        assert_eq!(explanation.missing, vec![MissingField::UserId]);
        assert!(explanation.reason.contains("user_id"));

        let explanation = explain(&identity(Some("u123"), Some("  ")));
        assert_eq!(explanation.missing, vec![MissingField::UserName]);

        let explanation = explain(&StoredIdentity::empty());
        assert_eq!(
            explanation.missing,
            vec![MissingField::UserId, MissingField::UserName]
        );

        let explanation = explain(&identity(Some("u123"), Some("alice")));
        assert!(explanation.missing.is_empty());
    }

    fn field_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None::<String>),
            Just(Some(String::new())),
            Just(Some("   ".to_string())),
            Just(Some("\t\n".to_string())),
            "[a-zA-Z0-9._-]{1,16}".prop_map(Some),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the verdict is `Allow` exactly when both fields carry a
        /// non-blank value.
        #[test]
        fn verdict_matches_field_presence(
            user_id in field_strategy(),
            user_name in field_strategy(),
        ) {
            let snapshot = StoredIdentity {
                user_id: user_id.clone(),
                user_name: user_name.clone(),
            };

            let both_present = user_id.as_deref().is_some_and(|v| !v.trim().is_empty())
                && user_name.as_deref().is_some_and(|v| !v.trim().is_empty());

            let expected = if both_present {
                NavigationVerdict::Allow
            } else {
                NavigationVerdict::RedirectToLogin
            };

            prop_assert_eq!(evaluate(&snapshot), expected);
        }

        /// Property: evaluation has no hidden state; a snapshot maps to one
        /// verdict no matter how often it is evaluated.
        #[test]
        fn evaluation_is_idempotent(
            user_id in field_strategy(),
            user_name in field_strategy(),
        ) {
            let snapshot = StoredIdentity { user_id, user_name };
            prop_assert_eq!(evaluate(&snapshot), evaluate(&snapshot));
        }
    }
}
