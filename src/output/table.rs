use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::astro::{MoonPhaseData, SolunarPeriods, SolunarRating};
use crate::catalog::FlyPattern;
use crate::types::{RecommendationResponse, Suggestion};

pub fn render_suggestions_table(response: &RecommendationResponse) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Fly", "Type", "Size", "Color", "Confidence", "Why"]);

    for (idx, s) in response.suggestions.iter().enumerate() {
        table.add_row(Row::from(vec![
            Cell::new((idx + 1).to_string()),
            Cell::new(&s.fly.name),
            Cell::new(s.fly.fly_type.label()),
            Cell::new(s.fly.size.to_string()),
            Cell::new(&s.fly.color),
            confidence_cell(s),
            Cell::new(&s.reason),
        ]));
    }

    let mut out = table.to_string();
    if let Some(usage) = &response.usage {
        out.push_str(&format!(
            "\nRequests today: {}/{} ({} remaining)",
            usage.requests_used, usage.daily_limit, usage.remaining
        ));
    }
    out
}

fn confidence_cell(s: &Suggestion) -> Cell {
    let label = format!("{}%", s.confidence);
    if s.confidence >= 70 {
        Cell::new(label).fg(Color::Green)
    } else if s.confidence >= 40 {
        Cell::new(label).fg(Color::Yellow)
    } else {
        Cell::new(label).fg(Color::Red)
    }
}

pub fn render_moon_table(moon: &MoonPhaseData) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Phase", "Age (days)", "Illumination", "Feeding", "Quality"]);
    table.add_row(vec![
        moon.phase.label().to_string(),
        format!("{:.1}", moon.age_days),
        format!("{:.0}%", moon.illumination_pct),
        format!("{:?}", moon.feeding_activity).to_uppercase(),
        format!("{:?}", moon.fishing_quality).to_uppercase(),
    ]);
    table.to_string()
}

pub fn render_solunar_table(periods: &SolunarPeriods, rating: Option<&SolunarRating>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Window", "Kind", "Start (UTC)", "End (UTC)"]);
    for w in periods.major_windows.iter().chain(&periods.minor_windows) {
        table.add_row(vec![
            w.label.clone(),
            format!("{:?}", w.kind).to_uppercase(),
            w.start.format("%H:%M").to_string(),
            w.end.format("%H:%M").to_string(),
        ]);
    }

    let mut out = format!(
        "Sunrise {} | Sunset {} (approximate)\n{}",
        periods.sunrise.format("%H:%M"),
        periods.sunset.format("%H:%M"),
        table
    );
    if let Some(rating) = rating {
        out.push_str(&format!(
            "\nDay rating now: {:.0}/100 ({})",
            rating.score, rating.label
        ));
    }
    out
}

pub fn render_catalog_table(patterns: &[FlyPattern]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Type", "Size", "Color", "Description"]);
    for p in patterns {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.fly_type.label().to_string(),
            p.size.to_string(),
            p.color.clone(),
            p.description.clone(),
        ]);
    }
    table.to_string()
}
