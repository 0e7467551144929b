//! Plain-text rendering of pages for the terminal.

use crate::client::Gateway;
use crate::form::FieldErrors;
use crate::models::{AttendanceRecord, AttendanceStatus, Employee};
use crate::pages::{AttendancePage, DashboardView};
use crate::presence::{employee_department, employee_name};
use crate::theme::ThemeContext;

/// Longest bar drawn in chart summaries.
const BAR_WIDTH: usize = 30;

/// Render rows as an aligned table with a heading row.
pub fn table(ctx: &ThemeContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(col) {
                *w = (*w).max(visible_width(cell));
            }
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell}{}", " ".repeat(w.saturating_sub(visible_width(cell)))))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![ctx.heading(&format_row(&header_cells))];
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

/// Display width of `text`, ignoring ANSI color sequences.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in text.chars() {
        if in_escape {
            in_escape = c != 'm';
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}

pub fn employee_table(ctx: &ThemeContext, employees: &[Employee]) -> String {
    if employees.is_empty() {
        return ctx.muted("No employees found");
    }

    let rows: Vec<Vec<String>> = employees
        .iter()
        .map(|e| vec![e.id.clone(), e.name.clone(), e.email.clone(), e.department.clone()])
        .collect();
    let mut out = table(ctx, &["ID", "Name", "Email", "Department"], &rows);
    out.push_str(&format!("\n{}", ctx.muted(&format!("{} employee(s)", employees.len()))));
    out
}

pub fn attendance_table(ctx: &ThemeContext, records: &[AttendanceRecord], employees: &[Employee]) -> String {
    if records.is_empty() {
        return ctx.muted("No attendance records found");
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|a| {
            vec![
                a.date.to_string(),
                a.employee_id.clone(),
                employee_name(&a.employee_id, employees).to_string(),
                employee_department(&a.employee_id, employees).to_string(),
                status_label(ctx, Some(a.status)),
            ]
        })
        .collect();
    table(ctx, &["Date", "Employee ID", "Name", "Department", "Status"], &rows)
}

/// Today's status of every employee with the actions still available.
pub fn marking_roster<G: Gateway>(ctx: &ThemeContext, page: &AttendancePage<G>) -> String {
    if page.employees().is_empty() {
        return ctx.muted("No employees found");
    }

    let rows: Vec<Vec<String>> = page
        .employees()
        .iter()
        .map(|e| {
            let buttons = page.buttons_for(&e.id);
            let actions: Vec<&str> = [AttendanceStatus::Present, AttendanceStatus::Absent]
                .into_iter()
                .filter(|s| buttons.allows(*s))
                .map(|s| s.as_str())
                .collect();
            vec![
                e.id.clone(),
                e.name.clone(),
                e.department.clone(),
                status_label(ctx, page.status_for(&e.id)),
                actions.join(" / "),
            ]
        })
        .collect();

    let title = ctx.heading(&format!("Mark attendance for {}", page.today()));
    format!(
        "{title}\n{}",
        table(ctx, &["ID", "Name", "Department", "Today", "Can mark"], &rows)
    )
}

fn status_label(ctx: &ThemeContext, status: Option<AttendanceStatus>) -> String {
    match status {
        Some(AttendanceStatus::Present) => ctx.success("Present"),
        Some(AttendanceStatus::Absent) => ctx.error("Absent"),
        None => ctx.muted("Not marked"),
    }
}

/// Labelled horizontal bars scaled to the largest value.
pub fn bar_chart(ctx: &ThemeContext, items: &[(String, u64)]) -> String {
    let max = items.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = items.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    items
        .iter()
        .map(|(label, value)| {
            let len = if max == 0 {
                0
            } else {
                ((*value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
            };
            format!("{label:<label_width$}  {} {value}", ctx.accent(&"#".repeat(len)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn dashboard(ctx: &ThemeContext, view: &DashboardView) -> String {
    let stats = &view.stats;
    let mut sections = vec![
        ctx.heading("Dashboard"),
        format!(
            "Total employees: {}   Present today: {}   Absent today: {}   Departments: {}",
            stats.total_employees, stats.present_today, stats.absent_today, stats.total_departments
        ),
    ];

    if !stats.weekly_trend.is_empty() {
        let items: Vec<(String, u64)> = stats.weekly_trend.iter().map(|p| (p.day.clone(), p.present)).collect();
        sections.push(format!("{}\n{}", ctx.heading("Weekly attendance"), bar_chart(ctx, &items)));
    }

    if !stats.department_distribution.is_empty() {
        let items: Vec<(String, u64)> = stats
            .department_distribution
            .iter()
            .map(|d| (d.name.clone(), d.value))
            .collect();
        sections.push(format!("{}\n{}", ctx.heading("Departments"), bar_chart(ctx, &items)));
    }

    if !stats.today_attendance_status.is_empty() {
        let items: Vec<(String, u64)> = stats
            .today_attendance_status
            .iter()
            .map(|s| (s.name.clone(), s.count))
            .collect();
        sections.push(format!("{}\n{}", ctx.heading("Today"), bar_chart(ctx, &items)));
    }

    sections.push(format!(
        "{}\n{}",
        ctx.heading("Recent employees"),
        employee_table(ctx, &view.recent_employees)
    ));

    sections.join("\n\n")
}

/// One line per failed field.
pub fn field_errors(ctx: &ThemeContext, errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, msg)| format!("  {}: {}", field, ctx.error(msg)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate;
    use crate::models::{DashboardStats, EmployeeDraft, TrendPoint};
    use crate::theme::Theme;

    fn plain() -> ThemeContext {
        ThemeContext::new(Theme::Light, false)
    }

    #[test]
    fn test_table_alignment() {
        let rows = vec![
            vec!["E1".to_string(), "Ann".to_string()],
            vec!["E100".to_string(), "Bo".to_string()],
        ];
        let out = table(&plain(), &["ID", "Name"], &rows);

        assert_eq!(out, "ID    Name\nE1    Ann\nE100  Bo");
    }

    #[test]
    fn test_colored_cells_keep_alignment() {
        let ctx = ThemeContext::new(Theme::Dark, true);
        let rows = vec![vec![ctx.success("Present"), "x".to_string()]];
        let out = table(&plain(), &["Status", "Col"], &rows);

        assert_eq!(visible_width(&rows[0][0]), 7);
        assert!(out.ends_with("\x1b[0m  x"));
    }

    #[test]
    fn test_empty_employee_table() {
        assert_eq!(employee_table(&plain(), &[]), "No employees found");
    }

    #[test]
    fn test_bar_chart_scales_to_max() {
        let out = bar_chart(&plain(), &[("Mon".to_string(), 10), ("Tue".to_string(), 5)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], format!("Mon  {} 10", "#".repeat(30)));
        assert_eq!(lines[1], format!("Tue  {} 5", "#".repeat(15)));
    }

    #[test]
    fn test_bar_chart_all_zero() {
        let out = bar_chart(&plain(), &[("Mon".to_string(), 0)]);
        assert_eq!(out, "Mon   0");
    }

    #[test]
    fn test_dashboard_sections() {
        let view = DashboardView {
            stats: DashboardStats {
                total_employees: 2,
                weekly_trend: vec![TrendPoint {
                    day: "Mon".to_string(),
                    present: 2,
                }],
                ..Default::default()
            },
            recent_employees: Vec::new(),
        };
        let out = dashboard(&plain(), &view);

        assert!(out.starts_with("Dashboard\n\nTotal employees: 2"));
        assert!(out.contains("Weekly attendance\nMon"));
        assert!(!out.contains("Departments\n"));
        assert!(out.ends_with("Recent employees\nNo employees found"));
    }

    #[test]
    fn test_field_errors() {
        let errors = validate(&EmployeeDraft::new("Ann", "", "HR"));
        assert_eq!(field_errors(&plain(), &errors), "  email: Email is required");
    }
}
