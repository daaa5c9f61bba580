use depgraph_forge::prelude::*;
use std::sync::{Arc, Mutex};

/// One `report_progress` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStep {
    pub current: usize,
    pub total: usize,
    pub node: Option<String>,
}

/// Mock ProgressReporter that records messages and per-node progress
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    steps: Arc<Mutex<Vec<ProgressStep>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn has_message_containing(&self, needle: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(needle))
    }

    pub fn steps(&self) -> Vec<ProgressStep> {
        self.steps.lock().unwrap().clone()
    }

    /// Node names in the order their builds were reported
    pub fn built_nodes(&self) -> Vec<String> {
        self.steps().into_iter().filter_map(|step| step.node).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let msg = match message {
            Some(node) => format!("Progress: {}/{} nodes - {}", current, total, node),
            None => format!("Progress: {}/{} nodes", current, total),
        };
        self.messages.lock().unwrap().push(msg);
        self.steps.lock().unwrap().push(ProgressStep {
            current,
            total,
            node: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}
