use chrono::{DateTime, Utc};

use super::AnalysisReport;
use crate::report_helpers;

fn date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn print_report(report: &AnalysisReport, top: usize) {
    println!("Repository: {}", report.source);
    if report.commit_count == 0 {
        println!("No commits found.");
        return;
    }

    let span = match (report.first_commit, report.last_commit) {
        (Some(first), Some(last)) => format!(" ({} \u{2192} {})", date(first), date(last)),
        _ => String::new(),
    };
    println!("Commits: {}{span}", report.commit_count);
    println!("Average complexity: {:.1} / 100", report.average_complexity);

    print_authors(report, top);
    print_features(report);
    print_categories(report);
}

fn print_authors(report: &AnalysisReport, top: usize) {
    let mut authors: Vec<_> = report.aggregate.author_contributions.iter().collect();
    authors.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));
    let shown = authors.len().min(top);

    let width = report_helpers::max_label_width(
        authors.iter().take(shown).map(|a| a.author.as_str()),
        6,
    );
    // 1 (leading space) + author + 2 + 7 + 1 + 13 + 1 + 6 = author + 31
    let separator = report_helpers::separator((width + 31).max(50));

    println!();
    if shown < authors.len() {
        println!("Authors (top {shown} of {})", authors.len());
    } else {
        println!("Authors");
    }
    println!("{separator}");
    println!(
        " {:<width$}  {:>7} {:>13} {:>6}",
        "Author", "Commits", "Lines Changed", "Share"
    );
    println!("{separator}");

    for a in authors.iter().take(shown) {
        let share = a.commit_count as f64 * 100.0 / report.commit_count as f64;
        println!(
            " {:<width$}  {:>7} {:>13} {:>5.1}%",
            a.author, a.commit_count, a.total_lines_changed, share
        );
    }
}

fn print_features(report: &AnalysisReport) {
    let features = &report.aggregate.business_features;
    let width = report_helpers::max_label_width(
        features.iter().map(|f| f.feature.label()),
        7,
    );
    let separator = report_helpers::separator((width + 34).max(50));

    println!();
    println!("Business Features");
    println!("{separator}");
    println!(
        " {:<width$}  {:>7} {:>10} {:>10}",
        "Feature", "Commits", "First", "Last"
    );
    println!("{separator}");

    for f in features {
        // Timestamps are chronological, so first/last bracket the activity.
        let first = f.timestamps.first().map(|t| date(*t)).unwrap_or_default();
        let last = f.timestamps.last().map(|t| date(*t)).unwrap_or_default();
        println!(
            " {:<width$}  {:>7} {:>10} {:>10}",
            f.feature.label(),
            f.commit_hashes.len(),
            first,
            last
        );
    }
}

fn print_categories(report: &AnalysisReport) {
    let width = report_helpers::max_label_width(
        report.categories.iter().map(|c| c.category.label()),
        8,
    );
    let separator = report_helpers::separator((width + 28).max(50));

    println!();
    println!("Categories");
    println!("{separator}");
    println!(
        " {:<width$}  {:>15} {:>7}",
        "Category", "Impact", "Commits"
    );
    println!("{separator}");

    for c in &report.categories {
        println!(
            " {:<width$}  {:>15} {:>7}",
            c.category.label(),
            c.impact.label(),
            c.count
        );
    }
}
