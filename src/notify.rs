//! オペレーター向け通知
//!
//! 成功・失敗のメッセージを伝える経路。CLIではコンソールに表示し、
//! テストでは記録用の実装に差し替える。

use std::cell::RefCell;

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// コンソール表示（成功: stdout / 失敗: stderr）
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        tracing::debug!(kind = "success", "{}", message);
        println!("✔ {}", message);
    }

    fn error(&self, message: &str) {
        tracing::debug!(kind = "error", "{}", message);
        eprintln!("✖ {}", message);
    }
}

/// 通知の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// 通知を溜めておく実装
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m.clone()),
                Notice::Success(_) => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Success(m) => Some(m.clone()),
                Notice::Error(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices.borrow_mut().push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices.borrow_mut().push(Notice::Error(message.to_string()));
    }
}
