//! One module per menu operation. Each `run` takes the inventory, does the work and
//! returns a [`CmdResult`] describing what happened. Nothing here prints.

use crate::model::BoatRecord;

pub mod add;
pub mod list;
pub mod month;
pub mod payment;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_boats: Vec<BoatRecord>,
    pub listed_boats: Vec<BoatRecord>,
    /// Balance left on the boat after a payment.
    pub balance: Option<f64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_boats(mut self, boats: Vec<BoatRecord>) -> Self {
        self.affected_boats = boats;
        self
    }

    pub fn with_listed_boats(mut self, boats: Vec<BoatRecord>) -> Self {
        self.listed_boats = boats;
        self
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }
}
