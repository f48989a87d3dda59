use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TaskKey {
    ReadSettings,
    ReadBufferLib,
    GenerateDecks,
}

impl TaskKey {
    pub fn desc(&self) -> &'static str {
        match self {
            TaskKey::ReadSettings => "Read settings",
            TaskKey::ReadBufferLib => "Read buffer library",
            TaskKey::GenerateDecks => "Generate decks",
        }
    }
}

#[derive(PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Pending,
    InProgress,
    Skipped,
    Failed,
}

/// Terminal display of the run's steps, completed in order.
pub struct StepContext {
    step_num: usize,
    steps: Vec<Step>,
}

pub struct Step {
    key: TaskKey,
    progress_bar: ProgressBar,
}

impl StepContext {
    pub fn new(keys: &[TaskKey]) -> Self {
        println!("Tasks:");

        let mp = MultiProgress::new();
        let width = format!("{}", keys.len()).len();
        let mut steps = Vec::with_capacity(keys.len());
        for (i, &key) in keys.iter().enumerate() {
            let mut step = Step {
                key,
                progress_bar: mp.add(ProgressBar::new_spinner()),
            };
            let msg = format!("[{:width$}/{:width$}] {}", i + 1, keys.len(), key.desc());
            step.set_status(StepStatus::Pending, Some(msg));
            steps.push(step);
        }

        let mut ctx = StepContext { step_num: 0, steps };
        if let Some(step) = ctx.current_step() {
            step.set_status(StepStatus::InProgress, None);
        }
        ctx
    }

    #[inline]
    fn current_step(&mut self) -> Option<&mut Step> {
        self.steps.get_mut(self.step_num)
    }

    /// Marks the current and remaining steps as failed or skipped if `res` is an error.
    pub fn check<T>(&mut self, res: Result<T>) -> Result<T> {
        if res.is_err() {
            if let Some(step) = self.current_step() {
                step.set_status(StepStatus::Failed, None);
            }
            self.step_num += 1;
            self.skip_remaining();
        }

        res
    }

    /// Marks every step not yet completed as skipped.
    pub fn skip_remaining(&mut self) {
        while let Some(step) = self.current_step() {
            step.set_status(StepStatus::Skipped, None);
            self.step_num += 1;
        }
        println!("\n");
    }

    pub fn finish(&mut self, key: TaskKey) {
        let step = self
            .current_step()
            .unwrap_or_else(|| panic!("{:?} completed after all steps finished", key));
        assert_eq!(step.key, key, "a step was completed out of order");
        step.set_status(StepStatus::Done, None);

        self.step_num += 1;
        if let Some(step) = self.current_step() {
            step.set_status(StepStatus::InProgress, None);
        } else {
            println!("\n\nCompleted all tasks");
        }
    }
}

fn format_template(spinner: bool, status: impl Display) -> String {
    if spinner {
        format!("{{spinner:.green}} {:16} {{msg}}", status)
    } else {
        format!("  {:16} {{msg}}", status)
    }
}

impl Step {
    fn set_status(&mut self, status: StepStatus, msg: Option<String>) {
        let status_template = match status {
            StepStatus::Done => format_template(false, "Done".green().bold()),
            StepStatus::Failed => format_template(false, "Failed".bright_white().on_red().bold()),
            StepStatus::InProgress => format_template(true, "In Progress".bright_white().bold()),
            StepStatus::Pending => format_template(true, "Pending".blue().bold()),
            StepStatus::Skipped => format_template(false, "Skipped".yellow().bold()),
        };
        if let Ok(style) = ProgressStyle::with_template(&status_template) {
            self.progress_bar.set_style(style);
        }

        if let Some(msg) = msg {
            self.progress_bar.set_message(msg);
        }

        if status == StepStatus::InProgress {
            self.progress_bar
                .enable_steady_tick(Duration::from_millis(200));
        } else if status != StepStatus::Pending {
            self.progress_bar.finish();
        }
    }
}
