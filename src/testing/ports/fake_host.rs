use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ActionHost;

/// Everything a run asked the host to do, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Output { name: String, value: String },
    Export { name: String, value: String },
    Secret(String),
    Debug(String),
    Warning(String),
    Failed(String),
}

#[derive(Default)]
pub struct FakeHost {
    inputs: HashMap<String, String>,
    pub events: Mutex<Vec<HostEvent>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn exports(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Export { name, value } => Some((name, value)),
                _ => None,
            })
            .collect()
    }

    pub fn outputs(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Output { name, value } => Some((name, value)),
                _ => None,
            })
            .collect()
    }

    pub fn secrets(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Secret(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Failed(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ActionHost for FakeHost {
    fn get_input(&self, name: &str) -> String {
        self.inputs.get(name).cloned().unwrap_or_default()
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), AppError> {
        self.record(HostEvent::Output { name: name.to_string(), value: value.to_string() });
        Ok(())
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<(), AppError> {
        self.record(HostEvent::Export { name: name.to_string(), value: value.to_string() });
        Ok(())
    }

    fn set_secret(&self, value: &str) -> Result<(), AppError> {
        self.record(HostEvent::Secret(value.to_string()));
        Ok(())
    }

    fn debug(&self, message: &str) {
        self.record(HostEvent::Debug(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.record(HostEvent::Warning(message.to_string()));
    }

    fn set_failed(&self, message: &str) {
        self.record(HostEvent::Failed(message.to_string()));
    }
}
