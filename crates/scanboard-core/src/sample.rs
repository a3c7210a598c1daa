//! Built-in synthetic findings for demos and tests.
//!
//! Mirrors the output of one Azure assessment run: 21 checks, 20 FAIL and
//! 1 PASS, weighted toward high-severity monitor alert checks. Timestamps
//! descend one minute per row from a caller-supplied base instant, so
//! fixtures stay reproducible while live demos track the clock.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Finding, RawFinding, Severity, Status};

/// (status, severity, service, check_id) for each sample row.
const ROWS: [(Status, Severity, &str, &str); 21] = [
    (
        Status::Fail,
        Severity::Medium,
        "network",
        "network_bastion_host_exists",
    ),
    (
        Status::Fail,
        Severity::High,
        "iam",
        "iam_custom_role_has_permissions_to_administer_resource_locks",
    ),
    (
        Status::Fail,
        Severity::Low,
        "appinsights",
        "appinsights_ensure_is_configured",
    ),
    (
        Status::Fail,
        Severity::Medium,
        "monitor",
        "monitor_diagnostic_setting_with_appropriate_categories",
    ),
    (
        Status::Fail,
        Severity::Medium,
        "monitor",
        "monitor_diagnostic_settings_exists",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_create_update_nsg",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_create_update_public_ip_address_rule",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_create_update_security_solution",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_create_update_sqlserver_fr",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_create_policy_assignment",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_delete_nsg",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_delete_policy_assignment",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_delete_public_ip_address_rule",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_delete_security_solution",
    ),
    (
        Status::Fail,
        Severity::High,
        "monitor",
        "monitor_alert_delete_sqlserver_fr",
    ),
    (
        Status::Fail,
        Severity::Medium,
        "defender",
        "defender_ensure_mcas_is_enabled",
    ),
    (
        Status::Fail,
        Severity::Medium,
        "defender",
        "defender_ensure_wdatp_is_enabled",
    ),
    (
        Status::Fail,
        Severity::High,
        "defender",
        "defender_ensure_iot_hub_defender_is_on",
    ),
    (
        Status::Fail,
        Severity::Medium,
        "network",
        "network_watcher_enabled",
    ),
    (
        Status::Fail,
        Severity::Medium,
        "iam",
        "iam_subscription_roles_owner_custom_not_created",
    ),
    (Status::Pass, Severity::High, "iam", "iam_test"),
];

/// The sample findings, with row `i` stamped `base - i` minutes.
#[must_use]
pub fn findings_at(base: DateTime<Utc>) -> Vec<Finding> {
    ROWS.iter()
        .enumerate()
        .map(|(i, &(status, severity, service, check_id))| Finding {
            status,
            severity,
            service: service.to_string(),
            check_id: check_id.to_string(),
            timestamp: base - Duration::minutes(i as i64),
        })
        .collect()
}

/// The sample findings anchored at the current time.
#[must_use]
pub fn findings() -> Vec<Finding> {
    findings_at(Utc::now())
}

/// The sample data in the raw wire shape, as an external scanner would
/// hand it over.
#[must_use]
pub fn raw_findings_at(base: DateTime<Utc>) -> Vec<RawFinding> {
    findings_at(base).into_iter().map(RawFinding::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sample_shape() {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let findings = findings_at(base);

        assert_eq!(findings.len(), 21);
        assert_eq!(
            findings.iter().filter(|f| f.status == Status::Fail).count(),
            20
        );
        assert_eq!(
            findings.iter().filter(|f| f.status == Status::Pass).count(),
            1
        );
        assert_eq!(
            findings
                .iter()
                .filter(|f| f.severity == Severity::High)
                .count(),
            13
        );
        assert_eq!(
            findings
                .iter()
                .filter(|f| f.severity == Severity::Medium)
                .count(),
            7
        );
        assert_eq!(
            findings
                .iter()
                .filter(|f| f.severity == Severity::Low)
                .count(),
            1
        );
    }

    #[test]
    fn test_timestamps_descend_by_minute() {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let findings = findings_at(base);

        assert_eq!(findings[0].timestamp, base);
        assert_eq!(findings[1].timestamp, base - Duration::minutes(1));
        assert_eq!(findings[20].timestamp, base - Duration::minutes(20));
    }

    #[test]
    fn test_raw_round_trips_cleanly() {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let raw = raw_findings_at(base);
        let (parsed, excluded) = crate::types::parse_findings(raw);

        assert_eq!(excluded, 0);
        assert_eq!(parsed, findings_at(base));
    }
}
