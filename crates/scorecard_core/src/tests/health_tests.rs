use super::*;

#[test]
fn health_rating_thresholds() {
    assert_eq!(HealthRating::from_score(80.0), HealthRating::Excellent);
    assert_eq!(HealthRating::from_score(79.9), HealthRating::Healthy);
    assert_eq!(HealthRating::from_score(60.0), HealthRating::Healthy);
    assert_eq!(HealthRating::from_score(40.0), HealthRating::AtRisk);
    assert_eq!(HealthRating::from_score(39.0), HealthRating::Poor);
    assert_eq!(HealthRating::AtRisk.label(), "AT RISK");
    assert_eq!(HealthRating::AtRisk.score_class(), "score-display score-at-risk");
    assert_eq!(
        HealthRating::Poor.badge_class(),
        "slds-badge slds-badge_inverse badge-poor"
    );
}

#[test]
fn missing_details_render_neutral() {
    let health = AccountHealth::new(None);
    assert_eq!(health.overall_score(), 0.0);
    assert_eq!(health.rating(), HealthRating::Poor);
    assert_eq!(health.sales_tile(), TileStatus::Neutral);
    assert_eq!(health.support_tile(), TileStatus::Neutral);
    assert_eq!(health.completeness_tile(), TileStatus::Neutral);
    assert!(health.case_status().is_none());
    assert!(health.missing_fields().is_empty());
}

#[test]
fn tiles_follow_account_details() {
    let health = AccountHealth::new(Some(AccountHealthDetails {
        overall_health_score: 65.0,
        open_opps_value: 1_500_000.0,
        open_opps_count: 2,
        open_cases_count: Some(3),
        contact_count: 6,
        completeness_score: 12.0,
        missing_fields: vec!["Website".to_string()],
    }));

    assert_eq!(health.rating(), HealthRating::Healthy);
    assert_eq!(health.sales_tile(), TileStatus::Success);
    assert_eq!(health.support_tile(), TileStatus::Error);
    assert_eq!(health.engagement_tile(), TileStatus::Success);
    assert_eq!(health.completeness_tile(), TileStatus::Warning);
    assert_eq!(health.completeness_percent(), 60.0);
    assert_eq!(health.case_status(), Some(CaseStatus::NeedsAttention));
    assert_eq!(CaseStatus::from_open_cases(2).text(), "Under Control");
    assert_eq!(TileStatus::Warning.class(), "health-tile tile-warning");
}

#[test]
fn lead_quality_from_field_checks() {
    let checks = vec![
        FieldCheck::new("Nama", Some("Budi".to_string())),
        FieldCheck::new("Perusahaan", Some("PT Maju".to_string())),
        FieldCheck::new("Email", None),
        FieldCheck::new("Telepon", Some("  ".to_string())),
        FieldCheck::new("Industri", Some("Retail".to_string())),
    ];

    let score = quality_score(&checks);
    assert_eq!(score, 60);
    assert_eq!(QualityRating::from_score(f64::from(score)), QualityRating::Fair);
    assert_eq!(QualityRating::from_score(f64::from(score)).label(), "Cukup");

    let missing = recommendations(&checks);
    assert_eq!(missing, ["Email", "Telepon"]);
    assert_eq!(
        recommendation_text(&missing).as_deref(),
        Some("Lengkapi field: Email, Telepon.")
    );
    assert_eq!(
        recommendation_text(&["Email"]).as_deref(),
        Some("Lengkapi field Email.")
    );
    assert!(recommendation_text(&[]).is_none());
}

#[test]
fn quality_rating_thresholds() {
    assert_eq!(QualityRating::from_score(100.0).label(), "Luar Biasa");
    assert_eq!(QualityRating::from_score(90.0), QualityRating::Outstanding);
    assert_eq!(QualityRating::from_score(70.0), QualityRating::Good);
    assert_eq!(QualityRating::from_score(49.0), QualityRating::NeedsAttention);
    assert_eq!(quality_score(&[]), 0);
}

#[test]
fn average_quality_uses_fractional_thresholds() {
    assert_eq!(QualityRating::from_score(89.9), QualityRating::Good);
    assert_eq!(QualityRating::from_score(49.5), QualityRating::NeedsAttention);
}

#[test]
fn opportunity_value_formats_as_rupiah() {
    assert_eq!(format_idr(0.0), "Rp\u{a0}0");
    assert_eq!(format_idr(950.0), "Rp\u{a0}950");
    assert_eq!(format_idr(1_500_000.4), "Rp\u{a0}1.500.000");
    assert_eq!(format_idr(249_999_999.6), "Rp\u{a0}250.000.000");
    assert_eq!(format_idr(-12_345.0), "-Rp\u{a0}12.345");

    let health = AccountHealth::new(Some(AccountHealthDetails {
        open_opps_value: 250_000_000.0,
        ..AccountHealthDetails::default()
    }));
    assert_eq!(health.formatted_opp_value(), "Rp\u{a0}250.000.000");
    assert_eq!(AccountHealth::new(None).formatted_opp_value(), "Rp\u{a0}0");
}
