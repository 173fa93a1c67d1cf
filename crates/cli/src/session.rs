//! Command interpreter driving one department

use clap::{Parser, Subcommand};
use serde::Serialize;
use sisfila_core::domain::{
    Department, DomainError, QueueStatus, ServiceRecord, Student, Ticket,
};
use sisfila_core::{AppError, Result};

// One input line, parsed with the first token as the command name
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new student with this department
    Register {
        /// 9-digit registration number
        registration_id: String,

        /// Full name
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Change a registered student's name
    Rename {
        /// 9-digit registration number
        registration_id: String,

        /// New full name
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Put a registered student at the back of the queue
    Enqueue { registration_id: String },

    /// Call the next waiting student
    Next,

    /// Show who is next without calling them
    Peek,

    /// Show the student being served
    Current,

    /// Show a student's queue status
    Status { registration_id: String },

    /// Show a student's queue position (0 = being served, -1 = not waiting)
    Position { registration_id: String },

    /// Look up a registered student
    Find { registration_id: String },

    /// List registered students
    Students,

    /// List waiting students in order
    Waiting,

    /// Show every call made so far
    History,

    /// Show department counters
    Stats,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Parse a raw input line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    Line::try_parse_from(trimmed.split_whitespace())
        .map(|line| Some(line.command))
        .map_err(|e| AppError::Parse(e.render().to_string()))
}

/// Student as shown to the user, with its live queue status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentView {
    pub registration_id: String,
    pub name: String,
    pub department: Option<String>,
    pub status: QueueStatus,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStats {
    pub code: String,
    pub name: String,
    pub valid: bool,
    pub registered: usize,
    pub waiting: usize,
    pub students_ever_served: usize,
    pub service_count: u64,
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    Registered { student: StudentView },
    Renamed { student: StudentView },
    Enqueued { student: StudentView },
    Called { student: Option<StudentView>, ticket: Option<Ticket> },
    Peeked { student: Option<StudentView> },
    Current { student: Option<StudentView> },
    Status { registration_id: String, status: QueueStatus },
    Position { registration_id: String, position: i64 },
    Found { student: StudentView },
    Students { students: Vec<StudentView> },
    Waiting { students: Vec<StudentView> },
    History { records: Vec<ServiceRecord> },
    Stats { stats: DepartmentStats },
    Rejected { error: String, status: Option<QueueStatus> },
    Invalid { message: String },
    Bye,
}

impl Response {
    pub fn is_quit(&self) -> bool {
        matches!(self, Response::Bye)
    }

    /// Wrap a parse failure (including `help` output) as a response
    pub fn invalid(message: impl AsRef<str>) -> Self {
        Response::Invalid {
            message: message.as_ref().trim_end().to_string(),
        }
    }
}

impl From<DomainError> for Response {
    fn from(err: DomainError) -> Self {
        Response::Rejected {
            status: err.status(),
            error: err.to_string(),
        }
    }
}

/// Front-desk session over a single department
pub struct Session {
    department: Department,
}

impl Session {
    pub fn new(department: Department) -> Self {
        Self { department }
    }

    pub fn department(&self) -> &Department {
        &self.department
    }

    /// Execute a command; domain errors become `Response::Rejected`
    pub fn execute(&mut self, command: Command) -> Response {
        match self.try_execute(command) {
            Ok(response) => response,
            Err(err) => err.into(),
        }
    }

    fn try_execute(&mut self, command: Command) -> std::result::Result<Response, DomainError> {
        let response = match command {
            Command::Register {
                registration_id,
                name,
            } => {
                let mut student = Student::new(registration_id, name.join(" "));
                self.department.register(&mut student)?;
                Response::Registered {
                    student: self.view(&student),
                }
            }

            Command::Rename {
                registration_id,
                name,
            } => {
                self.department
                    .rename_student(&registration_id, name.join(" "))?;
                let student = self.department.find_student_or_err(&registration_id)?;
                Response::Renamed {
                    student: self.view(student),
                }
            }

            Command::Enqueue { registration_id } => {
                self.department.enqueue(&registration_id)?;
                let student = self.department.find_student_or_err(&registration_id)?;
                Response::Enqueued {
                    student: self.view(student),
                }
            }

            Command::Next => {
                let called = self.department.call_next().cloned();
                let ticket = called
                    .as_ref()
                    .and_then(|_| self.department.service_history().last())
                    .map(|record| record.ticket);
                Response::Called {
                    student: called.as_ref().map(|s| self.view(s)),
                    ticket,
                }
            }

            Command::Peek => Response::Peeked {
                student: self.department.peek_next().map(|s| self.view(s)),
            },

            Command::Current => Response::Current {
                student: self.department.current_student().map(|s| self.view(s)),
            },

            Command::Status { registration_id } => Response::Status {
                status: self.department.queue_status(&registration_id),
                registration_id,
            },

            Command::Position { registration_id } => Response::Position {
                position: self.department.queue_position(&registration_id).as_i64(),
                registration_id,
            },

            Command::Find { registration_id } => {
                let student = self.department.find_student_or_err(&registration_id)?;
                Response::Found {
                    student: self.view(student),
                }
            }

            Command::Students => Response::Students {
                students: self
                    .department
                    .registered_students()
                    .map(|s| self.view(s))
                    .collect(),
            },

            Command::Waiting => Response::Waiting {
                students: self
                    .department
                    .waiting_students()
                    .map(|s| self.view(s))
                    .collect(),
            },

            Command::History => Response::History {
                records: self.department.service_history().to_vec(),
            },

            Command::Stats => Response::Stats {
                stats: self.stats(),
            },

            Command::Quit => Response::Bye,
        };

        Ok(response)
    }

    fn view(&self, student: &Student) -> StudentView {
        let id = student.registration_id();
        StudentView {
            registration_id: id.to_string(),
            name: student.name().to_string(),
            department: student.department().map(str::to_string),
            status: self.department.queue_status(id),
            position: self.department.queue_position(id).as_i64(),
        }
    }

    fn stats(&self) -> DepartmentStats {
        let dept = &self.department;
        DepartmentStats {
            code: dept.code().to_string(),
            name: dept.name().to_string(),
            valid: dept.is_valid(),
            registered: dept.registered_students().count(),
            waiting: dept.total_waiting(),
            students_ever_served: dept.total_students_ever_served(),
            service_count: dept.total_service_count(),
        }
    }
}
