use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{AuthenticityReport, CreatorTier, ScoreGrade, ValueScoreResult};

const MAX_BAR_WIDTH: usize = 40;
const MIN_BAR_WIDTH: usize = 10;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a counter in compact notation (2.5M, 8.5k, 847)
pub fn format_count(value: f64) -> String {
    let formatted = if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    };

    // Trim trailing .0 (e.g., "125.0k" -> "125k")
    formatted.replace(".0M", "M").replace(".0k", "k")
}

/// Format a 0-100 score with one decimal
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Render a proportional bar for a 0-100 score
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn bar_width() -> usize {
    get_terminal_width()
        .map(|w| w.saturating_sub(4).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH))
        .unwrap_or(MAX_BAR_WIDTH)
}

/// Color text by grade: green, blue, yellow, red from best to worst
fn paint(text: &str, grade: ScoreGrade, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match grade {
        ScoreGrade::Excellent => text.green().to_string(),
        ScoreGrade::Good => text.blue().to_string(),
        ScoreGrade::Fair => text.yellow().to_string(),
        ScoreGrade::NeedsImprovement => text.red().to_string(),
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn component_line(label: &str, inputs: &str, contribution: f64) -> String {
    format!("  {:<26}{:<16}{:>8}", label, inputs, format!("+{:.2}", contribution))
}

/// Format a value score with its breakdown and the metrics it came from
pub fn format_value_report(result: &ValueScoreResult, use_colors: bool) -> String {
    let grade = ScoreGrade::for_value_score(result.score);
    let breakdown = &result.breakdown;
    let metrics = &result.metrics;

    let mut lines = vec![
        format!(
            "{} {} / 100  {}",
            heading("TVS", use_colors),
            paint(&format_score(result.score), grade, use_colors),
            paint(grade.label(), grade, use_colors)
        ),
        format!("  {}", paint(&score_bar(result.score, bar_width()), grade, use_colors)),
        String::new(),
        component_line(
            "Engagement x Watch time",
            &format!("{:.1} x {:.1}", result.engagement, result.watch_time_factor),
            breakdown.engagement_component,
        ),
        component_line(
            "Ripple x Sentiment",
            &format!("{:.1} x {:.1}", result.ripple_effect, result.sentiment),
            breakdown.ripple_component,
        ),
        component_line(
            "Authenticity bonus",
            &format_score(result.authenticity_score),
            breakdown.authenticity_bonus,
        ),
        component_line(
            "Diversity bonus",
            &format_score(result.diversity_score),
            breakdown.diversity_bonus,
        ),
        component_line(
            "Social good bonus",
            &format_score(result.social_good_score),
            breakdown.social_good_bonus,
        ),
    ];

    if result.raw_total > 100.0 {
        lines.push(format!(
            "  Raw total {:.2}, capped at 100",
            result.raw_total
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Views {}  Likes {}  Comments {}  Shares {}",
        format_count(metrics.views),
        format_count(metrics.likes),
        format_count(metrics.comments),
        format_count(metrics.shares)
    ));
    lines.push(format!(
        "  Watched {}s of {}s  Stitches {}  Duets {}  Remixes {}",
        metrics.watch_time,
        metrics.video_length,
        format_count(metrics.stitches),
        format_count(metrics.duets),
        format_count(metrics.remixes)
    ));

    lines.join("\n")
}

/// Format a value score as one tab-separated line for scripting
/// Columns: score, engagement, watch time factor, ripple effect, sentiment
pub fn format_value_tsv(result: &ValueScoreResult) -> String {
    format!(
        "{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
        result.score,
        result.engagement,
        result.watch_time_factor,
        result.ripple_effect,
        result.sentiment
    )
}

/// Format the three authenticity sub-scores with grades and the creator tier
pub fn format_authenticity_report(report: &AuthenticityReport, use_colors: bool) -> String {
    let overall = report.overall();
    let tier = CreatorTier::from_authenticity(overall);

    let rows = [
        ("Audio", report.audio.score),
        ("Filters", report.filter.score),
        ("Content", report.content.score),
    ];

    let mut lines = vec![heading("Authenticity", use_colors)];
    for (label, score) in rows {
        let grade = ScoreGrade::for_authenticity(score);
        lines.push(format!(
            "  {:<10}{:>6}  {}",
            label,
            paint(&format_score(score), grade, use_colors),
            paint(grade.label(), grade, use_colors)
        ));
    }

    let grade = ScoreGrade::for_authenticity(overall);
    lines.push(format!(
        "  {:<10}{:>6}  {}",
        "Overall",
        paint(&format_score(overall), grade, use_colors),
        paint(grade.label(), grade, use_colors)
    ));
    lines.push(format!(
        "  Tier: {} (x{:.1} diamonds)",
        tier.name(),
        tier.diamond_multiplier()
    ));

    lines.join("\n")
}

/// Format a creator tier and, when earnings are given, the projection
pub fn format_tier(authenticity: f64, monthly_earnings: Option<f64>, use_colors: bool) -> String {
    let tier = CreatorTier::from_authenticity(authenticity);
    let grade = ScoreGrade::for_authenticity(authenticity);

    let mut lines = vec![
        format!(
            "{} {}",
            heading("Tier:", use_colors),
            paint(tier.name(), grade, use_colors)
        ),
        format!("  Authenticity {}", format_score(authenticity)),
        format!("  Diamond multiplier x{:.1}", tier.diamond_multiplier()),
    ];

    if let Some(earnings) = monthly_earnings {
        lines.push(format!(
            "  Projected earnings ${:.2} (from ${:.2})",
            tier.project_earnings(earnings),
            earnings
        ));
    }

    lines.join("\n")
}
