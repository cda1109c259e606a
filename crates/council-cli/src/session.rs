//! Interactive terminal session driving a single election view.
//!
//! The user plays both sides: they push status and results the way the
//! election service would, and press the view's buttons with `start` and
//! `proceed`.

use std::path::PathBuf;

use council_core::{
    CouncilConfig, CouncilError, ElectionHandler, ElectionResults, ElectionStatus, ElectionView,
    ElectionWidget, Intent, Result,
};
use tracing::info;

use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status(String),
    Results(PathBuf),
    ClearResults,
    Start,
    Proceed,
    Show,
    Help,
    Clear,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Ok(None);
        };

        let cmd = match first.to_lowercase().as_str() {
            "status" | "st" => match parts.get(1) {
                Some(status) => Command::Status(status.to_string()),
                None => return Err(CouncilError::Command("Usage: status <pending|running|completed>".into())),
            },
            "results" | "r" => match parts.get(1) {
                Some(path) => Command::Results(PathBuf::from(path)),
                None => return Err(CouncilError::Command("Usage: results <file.json>".into())),
            },
            "clear-results" => Command::ClearResults,
            "start" | "s" => Command::Start,
            "proceed" | "p" => Command::Proceed,
            "show" | "view" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "clear" | "cls" => Command::Clear,
            "exit" | "quit" | "q" => Command::Quit,
            other => {
                return Err(CouncilError::Command(format!(
                    "Unknown command: {}. Type 'help' for available commands.",
                    other
                )))
            }
        };
        Ok(Some(cmd))
    }
}

/// Reports the view's notifications on the terminal.
#[derive(Debug, Default)]
pub struct ConsoleHandler {
    pub starts: u32,
    pub proceeds: u32,
}

impl ElectionHandler for ConsoleHandler {
    fn start_election(&mut self) {
        self.starts += 1;
        info!(count = self.starts, "start requested");
        println!("  >> start requested");
    }

    fn proceed(&mut self) {
        self.proceeds += 1;
        info!(count = self.proceeds, "proceed requested");
        println!("  >> proceed requested");
    }
}

pub enum Step {
    Print(String),
    Quit,
}

pub struct Session<H> {
    widget: ElectionWidget<H>,
    config: CouncilConfig,
    status: String,
    results: Option<ElectionResults>,
}

impl<H: ElectionHandler> Session<H> {
    pub fn new(handler: H, config: CouncilConfig) -> Self {
        Self {
            widget: ElectionWidget::new(handler),
            config,
            status: ElectionStatus::Pending.as_str().to_string(),
            results: None,
        }
    }

    pub fn widget(&self) -> &ElectionWidget<H> {
        &self.widget
    }

    pub fn execute(&mut self, command: Command) -> Result<Step> {
        match command {
            Command::Status(status) => self.apply(status, self.results.clone()),
            Command::Results(path) => {
                let results = self.config.prepare_results(ElectionResults::from_path(&path)?);
                self.apply(self.status.clone(), Some(results))
            }
            Command::ClearResults => self.apply(self.status.clone(), None),
            Command::Start => self.press(Intent::StartElection),
            Command::Proceed => self.press(Intent::Proceed),
            Command::Show => Ok(Step::Print(self.render())),
            Command::Help => Ok(Step::Print(help_text())),
            Command::Clear => Ok(Step::Print("\x1B[2J\x1B[1;1H".to_string())),
            Command::Quit => Ok(Step::Quit),
        }
    }

    fn press(&mut self, intent: Intent) -> Result<Step> {
        if self.widget.dispatch(intent) {
            Ok(Step::Print(self.render()))
        } else {
            Ok(Step::Print(format!("  (no {:?} control available)", intent)))
        }
    }

    /// Push new service state into the view. Nothing changes if strict mode rejects it.
    fn apply(&mut self, status: String, results: Option<ElectionResults>) -> Result<Step> {
        if self.config.results.strict {
            let parsed: ElectionStatus = status.parse()?;
            ElectionView::try_from_parts(parsed, results.clone())?;
        }
        self.widget.update_wire(&status, results.clone());
        self.status = status;
        self.results = results;
        Ok(Step::Print(self.render()))
    }

    pub fn render(&self) -> String {
        let text = render::to_text(&self.widget.screen(), &self.config.display);
        if text.is_empty() {
            "  (nothing to show)".to_string()
        } else {
            text
        }
    }
}

pub fn help_text() -> String {
    [
        "",
        "Available Commands:",
        "  status, st <value>     Set the election status (pending, running, completed)",
        "  results, r <file>      Load election results from a JSON file",
        "  clear-results          Drop the loaded results",
        "  start, s               Press the start control",
        "  proceed, p             Press the proceed control",
        "  show                   Render the current view",
        "  clear, cls             Clear screen",
        "  help, h                Show this help message",
        "  exit, quit, q          Leave the session",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<ConsoleHandler> {
        Session::new(ConsoleHandler::default(), CouncilConfig::default())
    }

    fn printed(step: Step) -> String {
        match step {
            Step::Print(text) => text,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    fn write_results(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("results.json");
        std::fs::write(
            &path,
            r#"{
                "winner": " GPT-X ",
                "manifestos": [
                    {"model": "GPT-X", "manifesto": "Efficiency first"},
                    {"model": "Claude-Y", "manifesto": "Safety first"}
                ],
                "votes": [
                    {"voter": "GPT-X", "vote_for": "GPT-X"},
                    {"voter": "Claude-Y", "vote_for": "GPT-X"}
                ]
            }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("START").unwrap(), Some(Command::Start));
        assert_eq!(
            Command::parse("status running").unwrap(),
            Some(Command::Status("running".into()))
        );
        assert_eq!(
            Command::parse("r out/results.json").unwrap(),
            Some(Command::Results(PathBuf::from("out/results.json")))
        );
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("status"), Err(CouncilError::Command(_))));
        assert!(matches!(Command::parse("results"), Err(CouncilError::Command(_))));
        assert!(matches!(Command::parse("vote GPT-X"), Err(CouncilError::Command(_))));
    }

    #[test]
    fn test_start_only_once() {
        let mut session = session();
        let first = printed(session.execute(Command::Start).unwrap());
        assert!(first.contains("Starting Election..."));
        let second = printed(session.execute(Command::Start).unwrap());
        assert!(second.contains("no StartElection control"));
        assert_eq!(session.widget().handler().starts, 1);
    }

    #[test]
    fn test_results_flow_normalizes_winner() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_results(&dir);
        let mut session = session();

        session.execute(Command::Results(path)).unwrap();
        let text = printed(session.execute(Command::Status("completed".into())).unwrap());
        assert!(text.contains("* GPT-X: \"Efficiency first\""));
        assert!(text.contains("Claude-Y ➜ GPT-X"));

        session.execute(Command::Proceed).unwrap();
        session.execute(Command::Proceed).unwrap();
        assert_eq!(session.widget().handler().proceeds, 2);
    }

    #[test]
    fn test_completed_without_results() {
        let mut session = session();
        let text = printed(session.execute(Command::Status("completed".into())).unwrap());
        assert_eq!(text, "  (nothing to show)");
    }

    #[test]
    fn test_strict_mode_rejects_missing_results() {
        let mut config = CouncilConfig::default();
        config.results.strict = true;
        let mut session = Session::new(ConsoleHandler::default(), config);

        assert!(matches!(
            session.execute(Command::Status("completed".into())),
            Err(CouncilError::MissingResults)
        ));
        assert!(matches!(
            session.execute(Command::Status("halted".into())),
            Err(CouncilError::UnknownStatus(_))
        ));
        // rejected updates leave the view where it was
        assert_eq!(session.widget().view(), &ElectionView::Pending);
    }

    #[test]
    fn test_quit() {
        assert!(matches!(session().execute(Command::Quit).unwrap(), Step::Quit));
    }
}
