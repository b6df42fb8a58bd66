//! End of investigation report

use crate::data::*;
use crate::game::{Discovery, InvestigationSession, SessionSummary};
use serde::{Deserialize, Serialize};

pub const CLUES_HEADER: &str = "--- Evidencias Coletadas (Em Ordem Alfabetica) ---";
pub const CLUES_FOOTER: &str = "--------------------------------------------------";
pub const NO_CLUES: &str = "Nenhuma pista coletada.";
pub const ASSOCIATIONS_HEADER: &str = "--- Associacoes Suspeito x Pistas ---";
pub const ASSOCIATIONS_FOOTER: &str = "-------------------------------------";
pub const NO_SUSPECT: &str = "Nao ha suspeitos com pistas suficientes.";

/// A suspect as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectSummary {
    pub name: String,
    pub clue_count: usize,
    /// Most recent first
    pub clues: Vec<String>,
}

/// Everything the report says, ready for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationReport {
    pub session: Option<SessionSummary>,
    pub clues: Vec<String>,
    pub suspects: Vec<SuspectSummary>,
    pub verdict: Option<Verdict>,
    pub journal: Vec<Discovery>,
}

/// Read-only view over the collected evidence
#[derive(Debug, Clone, Copy)]
pub struct ReportGenerator<'a> {
    clues: &'a ClueIndex,
    suspects: &'a SuspectRegistry,
    session: Option<&'a InvestigationSession<'a>>,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(clues: &'a ClueIndex, suspects: &'a SuspectRegistry) -> Self {
        Self {
            clues,
            suspects,
            session: None,
        }
    }

    pub fn for_session(session: &'a InvestigationSession<'a>) -> Self {
        Self {
            clues: session.clues(),
            suspects: session.suspects(),
            session: Some(session),
        }
    }

    /// Alphabetical clue listing
    pub fn list_clues(&self) -> Vec<String> {
        let mut lines = vec![CLUES_HEADER.to_string()];
        match self.clues.list_in_order() {
            None => lines.push(NO_CLUES.to_string()),
            Some(clues) => {
                lines.extend(clues.map(|clue| format!("- {}", clue)));
                lines.push(CLUES_FOOTER.to_string());
            }
        }
        lines
    }

    /// Suspects in registry order, each followed by its clues
    pub fn list_associations(&self) -> Vec<String> {
        let mut lines = vec![ASSOCIATIONS_HEADER.to_string()];
        for suspect in self.suspects.iter() {
            lines.push(String::new());
            lines.push(format!(
                "Suspeito: {} (Pistas: {})",
                suspect.name(),
                suspect.clue_count()
            ));
            lines.extend(suspect.clues().map(|clue| format!("  -> {}", clue)));
        }
        lines.push(ASSOCIATIONS_FOOTER.to_string());
        lines
    }

    pub fn verdict(&self) -> String {
        match self.suspects.most_likely() {
            Some(verdict) => format!(
                "SUSPEITO MAIS PROVAVEL: {} (com {} pistas associadas).",
                verdict.suspect, verdict.clue_count
            ),
            None => NO_SUSPECT.to_string(),
        }
    }

    /// The whole text report: clues, associations, verdict
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.list_clues();
        lines.push(String::new());
        lines.extend(self.list_associations());
        lines.push(String::new());
        lines.push(self.verdict());
        lines
    }

    pub fn report(&self) -> InvestigationReport {
        InvestigationReport {
            session: self.session.map(InvestigationSession::summary),
            clues: self.clues.iter().map(String::from).collect(),
            suspects: self
                .suspects
                .iter()
                .map(|suspect| SuspectSummary {
                    name: suspect.name().to_string(),
                    clue_count: suspect.clue_count(),
                    clues: suspect.clues().map(String::from).collect(),
                })
                .collect(),
            verdict: self.suspects.most_likely(),
            journal: self
                .session
                .map(|session| session.journal().to_vec())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report() {
        let clues = ClueIndex::new();
        let suspects = SuspectRegistry::new();
        let report = ReportGenerator::new(&clues, &suspects);

        assert_eq!(report.list_clues(), vec![CLUES_HEADER, NO_CLUES]);
        assert_eq!(report.list_associations(), vec![ASSOCIATIONS_HEADER, ASSOCIATIONS_FOOTER]);
        assert_eq!(report.verdict(), NO_SUSPECT);

        let snapshot = report.report();
        assert!(snapshot.clues.is_empty());
        assert!(snapshot.session.is_none());
        assert_eq!(snapshot.verdict, None);
    }

    #[test]
    fn associations_list_newest_clue_first() {
        let clues = ClueIndex::new();
        let mut suspects = SuspectRegistry::new();
        suspects.attribute("Vizinho", "primeira");
        suspects.attribute("Vizinho", "segunda");

        let report = ReportGenerator::new(&clues, &suspects);
        assert_eq!(
            report.list_associations(),
            vec![
                ASSOCIATIONS_HEADER,
                "",
                "Suspeito: Vizinho (Pistas: 2)",
                "  -> segunda",
                "  -> primeira",
                ASSOCIATIONS_FOOTER,
            ]
        );
        assert_eq!(
            report.verdict(),
            "SUSPEITO MAIS PROVAVEL: Vizinho (com 2 pistas associadas)."
        );
    }
}
