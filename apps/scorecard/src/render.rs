//! Plain-text rendering of the scorecard display contract.

use std::fmt::{self, Write as _};

use scorecard_core::{
    health::{
        quality_score, recommendation_text, recommendations, AccountHealth, FieldCheck,
        QualityRating,
    },
    LeadSummaryView, ScorecardView,
};

pub fn summary(view: &ScorecardView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for card in &view.categories {
        writeln!(out, "{:<14} {:>5}  ({})", card.label, card.count, card.style.icon_name)?;
    }
    writeln!(out, "{:<14} {:>5}", "Total", view.total_records)?;
    writeln!(out, "{:<14} {:>5}", "Avg score", view.average_score)?;
    match view.last_updated {
        Some(at) => writeln!(out, "Last updated   {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?,
        None => writeln!(out, "Last updated   never")?,
    }
    Ok(out)
}

pub fn list(view: &ScorecardView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "[{}]", view.active_label)?;
    if view.rows.is_empty() {
        writeln!(out, "No records.")?;
        return Ok(out);
    }

    writeln!(
        out,
        "{:<20} {:<28} {:<16} {:>6}  Missing",
        "Id", "Name", "Owner", "Score"
    )?;
    for row in &view.rows {
        writeln!(
            out,
            "{:<20} {:<28} {:<16} {:>6.0}  {}",
            row.id, row.name, row.owner_name, row.completeness_score, row.missing_fields
        )?;
    }

    let pagination = &view.pagination;
    write!(
        out,
        "Showing {}-{} of {}",
        pagination.start_record, pagination.end_record, pagination.total_records
    )?;
    if pagination.show_pagination {
        write!(out, "  ({})", pagination.label)?;
    }
    out.push('\n');
    Ok(out)
}

pub fn health(health: &AccountHealth) -> Result<String, fmt::Error> {
    let rating = health.rating();
    let mut out = String::new();
    writeln!(out, "Overall      {:.0} {}", health.overall_score(), rating.label())?;
    writeln!(
        out,
        "Sales        {:?} {}",
        health.sales_tile(),
        health.formatted_opp_value()
    )?;
    writeln!(out, "Support      {:?}", health.support_tile())?;
    writeln!(out, "Engagement   {:?}", health.engagement_tile())?;
    writeln!(
        out,
        "Completeness {:?} ({:.0}%)",
        health.completeness_tile(),
        health.completeness_percent()
    )?;
    if let Some(status) = health.case_status() {
        writeln!(out, "Cases        {}", status.text())?;
    }
    if !health.missing_fields().is_empty() {
        writeln!(
            out,
            "Missing      {} ({})",
            health.missing_fields().join(", "),
            health.missing_fields().len()
        )?;
    }
    Ok(out)
}

pub fn lead_quality(checks: &[FieldCheck]) -> Result<String, fmt::Error> {
    let score = quality_score(checks);
    let mut out = String::new();
    writeln!(
        out,
        "Score {score} ({})",
        QualityRating::from_score(f64::from(score)).label()
    )?;
    for check in checks {
        let value = if check.is_filled() {
            check.value.as_deref().unwrap_or_default()
        } else {
            "[Kosong]"
        };
        writeln!(out, "  {:<12} {value}", check.label)?;
    }
    if let Some(text) = recommendation_text(&recommendations(checks)) {
        writeln!(out, "{text}")?;
    }
    Ok(out)
}

pub fn lead_summary(view: &LeadSummaryView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if let Some(error) = &view.error {
        writeln!(out, "Error: {error}")?;
        return Ok(out);
    }
    if let (Some(average), Some(rating)) = (view.average_score, view.rating) {
        writeln!(out, "Average lead score {average:.1} ({rating})")?;
    }
    if view.rows.is_empty() {
        writeln!(out, "No poor leads.")?;
        return Ok(out);
    }
    for row in &view.rows {
        writeln!(out, "  {:<24} {:>5.0}  {}", row.name, row.score, row.owner_name)?;
    }
    if view.show_pagination {
        writeln!(out, "{}", view.page_label)?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
