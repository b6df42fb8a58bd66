//! Core game logic: commands, the investigation session and the report

pub mod command;
pub mod report;
pub mod session;

pub use command::{Command, CommandSource, Script};
pub use report::{InvestigationReport, ReportGenerator, SuspectSummary};
pub use session::{
    suspect_for, Discovery, Ending, InvestigationSession, SessionEvent, SessionState,
    SessionSummary,
};
