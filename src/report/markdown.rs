use crate::analyze::{sum_story_points, CategoryTotals, DeveloperStats, SprintAnalyzed};
use crate::error::{Error, Result};
use crate::model::{Issue, UNASSIGNED_NAME};
use itertools::Itertools;
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fs;
use std::path::{Path, PathBuf};

const SUMMARY_LIMIT: usize = 50;
const SUMMARY_CUT: usize = 47;

const ORIGINAL: &str = "Planned (original)";
const ADDED_LATER: &str = "Unplanned (added later)";
const CARRIED_OVER: &str = "Carried over from previous sprints";
const CLOSED_PLANNED: &str = "Planned and closed";
const CLOSED_UNPLANNED: &str = "Unplanned but closed";

pub trait MarkdownReport {
    fn report_render(&self) -> Result<String>;

    /// Writes the report as `<sprint name>.md` into `dir`.
    fn report_create(&self, dir: &Path) -> Result<PathBuf>;
}

impl MarkdownReport for SprintAnalyzed {
    fn report_render(&self) -> Result<String> {
        let mut doc = Markdown::new();

        doc.header1(format!("Sprint report: {}", self.sprint.name));
        doc.paragraph(format!("Period: {}", self.sprint.period()));

        let developers = self
            .developers
            .values()
            .filter(|stats| !stats.is_unassigned())
            .sorted_by(|a, b| a.display_name().cmp(b.display_name()));
        for stats in developers {
            doc.add_developer(stats)?;
        }
        let unassigned = self.unassigned().collect::<Vec<_>>();
        if !unassigned.is_empty() {
            doc.add_unassigned(&unassigned)?;
        }
        doc.add_team_totals(&self.team_totals())?;

        Ok(doc.render())
    }

    fn report_create(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.md", file_stem(&self.sprint.name)));
        fs::write(&path, self.report_render()?)?;
        Ok(path)
    }
}

trait MarkdownExt {
    fn add_developer(&mut self, stats: &DeveloperStats) -> Result<()>;
    fn add_unassigned(&mut self, buckets: &[&DeveloperStats]) -> Result<()>;
    fn add_issues(&mut self, title: &str, issues: &[Issue]) -> Result<()>;
    fn add_team_totals(&mut self, totals: &CategoryTotals) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_developer(&mut self, stats: &DeveloperStats) -> Result<()> {
        self.header2(format!("Developer: {}", stats.display_name()));
        self.add_issues(ORIGINAL, &stats.original)?;
        self.add_issues(ADDED_LATER, &stats.added_later)?;
        self.add_issues(CARRIED_OVER, &stats.carried_over)?;
        self.add_issues(CLOSED_PLANNED, &stats.closed_planned)?;
        self.add_issues(CLOSED_UNPLANNED, &stats.closed_unplanned)
    }

    // Unassigned work is only listed; its closures still count in the team totals.
    fn add_unassigned(&mut self, buckets: &[&DeveloperStats]) -> Result<()> {
        let original = buckets
            .iter()
            .flat_map(|stats| stats.original.iter().cloned())
            .collect::<Vec<_>>();
        let added_later = buckets
            .iter()
            .flat_map(|stats| stats.added_later.iter().cloned())
            .collect::<Vec<_>>();
        self.header2(format!("Without assignee ({UNASSIGNED_NAME})"));
        self.add_issues(ORIGINAL, &original)?;
        self.add_issues(ADDED_LATER, &added_later)
    }

    fn add_issues(&mut self, title: &str, issues: &[Issue]) -> Result<()> {
        if issues.is_empty() {
            self.paragraph(format!("**{title}**: no issues"));
            return Ok(());
        }

        let total = sum_story_points(issues);
        self.paragraph(format!(
            "**{title}** ({} issues, {total:.1} SP)",
            issues.len()
        ));

        let header = vec![
            Heading::new("Key".to_string(), None),
            Heading::new("SP".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("Summary".to_string(), None),
        ];
        let mut table = issues
            .iter()
            .sorted_by(|a, b| a.key.cmp(&b.key))
            .map(|issue| {
                vec![
                    issue.key.clone(),
                    format!("{:.1}", issue.points()),
                    escape_cell(&truncate_summary(&issue.summary)),
                ]
            })
            .collect::<Vec<_>>();
        table.push(vec![
            "**Total**".to_string(),
            format!("**{total:.1}**"),
            String::new(),
        ]);

        self.paragraph(render_table(table, header)?);
        Ok(())
    }

    fn add_team_totals(&mut self, totals: &CategoryTotals) -> Result<()> {
        self.header2("Team totals");
        let header = vec![
            Heading::new("Category".to_string(), None),
            Heading::new("SP".to_string(), Some(HeadingAlignment::Center)),
        ];
        let table = [
            (ORIGINAL, totals.original),
            (ADDED_LATER, totals.added_later),
            (CARRIED_OVER, totals.carried_over),
            (CLOSED_PLANNED, totals.closed_planned),
            (CLOSED_UNPLANNED, totals.closed_unplanned),
        ]
        .iter()
        .map(|(title, points)| vec![title.to_string(), format!("{points:.1}")])
        .collect::<Vec<_>>();

        self.paragraph(render_table(table, header)?);
        Ok(())
    }
}

fn render_table(rows: Vec<Vec<String>>, header: Vec<Heading>) -> Result<String> {
    let mut md_table = MarkdownTable::new(rows);
    md_table.with_headings(header);
    md_table
        .as_markdown()
        .map_err(|e| Error::Render(format!("{e:?}")))
}

pub fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_LIMIT {
        format!("{}...", summary.chars().take(SUMMARY_CUT).collect::<String>())
    } else {
        summary.to_string()
    }
}

// The table renderer clips cells holding an escaped pipe.
fn escape_cell(text: &str) -> String {
    text.replace('|', "/")
}

fn file_stem(sprint_name: &str) -> String {
    sprint_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
