//! Rendering responses for the terminal

use crate::session::{Response, StudentView};
use colored::Colorize;
use sisfila_core::domain::{QueueStatus, ServiceRecord};
use sisfila_core::Result;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "Registration")]
    registration_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Position")]
    position: i64,
}

impl From<&StudentView> for StudentRow {
    fn from(view: &StudentView) -> Self {
        Self {
            registration_id: view.registration_id.clone(),
            name: view.name.clone(),
            status: view.status.to_string(),
            position: view.position,
        }
    }
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Ticket")]
    ticket: u64,
    #[tabled(rename = "Registration")]
    registration_id: String,
    #[tabled(rename = "Called at")]
    called_at: String,
}

impl From<&ServiceRecord> for HistoryRow {
    fn from(record: &ServiceRecord) -> Self {
        Self {
            ticket: record.ticket,
            registration_id: record.registration_id.clone(),
            called_at: format_millis(record.called_at_millis),
        }
    }
}

fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}

fn status_label(status: QueueStatus) -> String {
    let label = status.to_string();
    match status {
        QueueStatus::CurrentlyServed => label.green().bold().to_string(),
        QueueStatus::Waiting => label.yellow().to_string(),
        QueueStatus::AlreadyServed => label.blue().to_string(),
        QueueStatus::NotInQueue => label.dimmed().to_string(),
    }
}

fn student_line(view: &StudentView) -> String {
    format!(
        "{} {} ({})",
        view.registration_id.bold(),
        view.name,
        status_label(view.status)
    )
}

/// Render a response as one JSON line or as human-readable text
pub fn render(response: &Response, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(response)?);
    }
    Ok(render_text(response))
}

fn render_text(response: &Response) -> String {
    match response {
        Response::Registered { student } => format!(
            "{} {}",
            "✓ Registered".green().bold(),
            student_line(student)
        ),

        Response::Renamed { student } => format!(
            "{} {}",
            "✓ Renamed".green().bold(),
            student_line(student)
        ),

        Response::Enqueued { student } => format!(
            "{} {} at position {}",
            "✓ Enqueued".green().bold(),
            student_line(student),
            student.position
        ),

        Response::Called {
            student: Some(student),
            ticket,
        } => {
            let ticket = ticket.map(|t| format!("#{} ", t)).unwrap_or_default();
            format!(
                "{} {}{}",
                "▶ Now serving".cyan().bold(),
                ticket,
                student_line(student)
            )
        }
        Response::Called { student: None, .. } => "Queue is empty".yellow().to_string(),

        Response::Peeked { student } => match student {
            Some(student) => format!("{} {}", "Next:".bold(), student_line(student)),
            None => "Queue is empty".yellow().to_string(),
        },

        Response::Current { student } => match student {
            Some(student) => format!("{} {}", "Serving:".bold(), student_line(student)),
            None => "Nobody is being served".yellow().to_string(),
        },

        Response::Status {
            registration_id,
            status,
        } => format!("{} {}", registration_id.bold(), status_label(*status)),

        Response::Position {
            registration_id,
            position,
        } => format!("{} {}", registration_id.bold(), position),

        Response::Found { student } => {
            let department = student.department.as_deref().unwrap_or("-");
            format!(
                "{} {}\n  {} {}",
                "Found".bold(),
                student_line(student),
                "Department:".bold(),
                department
            )
        }

        Response::Students { students } | Response::Waiting { students } => {
            if students.is_empty() {
                return "No students".dimmed().to_string();
            }
            let rows: Vec<StudentRow> = students.iter().map(StudentRow::from).collect();
            Table::new(rows).to_string()
        }

        Response::History { records } => {
            if records.is_empty() {
                return "No calls yet".dimmed().to_string();
            }
            let rows: Vec<HistoryRow> = records.iter().map(HistoryRow::from).collect();
            Table::new(rows).to_string()
        }

        Response::Stats { stats } => {
            let valid = if stats.valid {
                "valid".green()
            } else {
                "INVALID".red()
            };
            [
                format!("{} - {}", stats.code, stats.name)
                    .cyan()
                    .bold()
                    .to_string(),
                format!("  {} {}", "Code:".bold(), valid),
                format!("  {} {}", "Registered:".bold(), stats.registered),
                format!("  {} {}", "Waiting:".bold(), stats.waiting),
                format!("  {} {}", "Students served:".bold(), stats.students_ever_served),
                format!("  {} {}", "Calls made:".bold(), stats.service_count),
            ]
            .join("\n")
        }

        Response::Rejected { error, .. } => format!("{} {}", "✗".red(), error),

        Response::Invalid { message } => message.clone(),

        Response::Bye => "Bye".dimmed().to_string(),
    }
}
