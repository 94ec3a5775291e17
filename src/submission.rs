//! Student assignment submission as a plain-text document

use crate::error::{LabError, LabResult};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Assignment questions, in order
pub const QUESTIONS: [&str; 5] = [
    "Which policy would you choose and why?",
    "What did you learn from the three NPV curves?",
    "Why can a negative NPV policy still be a good decision?",
    "Which curve (Term / Premium / Discount Rate) changed your thinking the most? Why?",
    "In your own words: explain the difference between a 'bad investment' and a 'good insurance product'.",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub student_name: String,
    pub student_id: String,
    pub npv_a: f64,
    pub npv_b: f64,
    pub answers: [String; 5],
    pub timestamp: DateTime<Local>,
}

impl Submission {
    /// Build a submission stamped with the current local time
    pub fn new(student_name: &str, student_id: &str, npv_a: f64, npv_b: f64, answers: Vec<String>) -> LabResult<Self> {
        Self::with_timestamp(student_name, student_id, npv_a, npv_b, answers, Local::now())
    }

    pub fn with_timestamp(
        student_name: &str,
        student_id: &str,
        npv_a: f64,
        npv_b: f64,
        answers: Vec<String>,
        timestamp: DateTime<Local>,
    ) -> LabResult<Self> {
        let found = answers.len();
        let answers: [String; 5] = answers.try_into().map_err(|_| LabError::AnswerCount {
            expected: QUESTIONS.len(),
            found,
        })?;

        Ok(Self {
            student_name: student_name.to_string(),
            student_id: student_id.to_string(),
            npv_a,
            npv_b,
            answers,
            timestamp,
        })
    }

    /// Read the five answers from a JSON array of strings
    pub fn load_answers(path: &Path) -> LabResult<Vec<String>> {
        let text = fs::read_to_string(path).map_err(|source| LabError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| LabError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Insurance Lab Submission\n");
        out.push_str(&format!("Date: {}\n\n", self.timestamp.format("%Y-%m-%d %H:%M:%S")));
        out.push_str(&format!("Name: {}\n", self.student_name));
        out.push_str(&format!("ID: {}\n\n", self.student_id));
        out.push_str(&format!("NPV Policy A: {}\n", self.npv_a));
        out.push_str(&format!("NPV Policy B: {}\n", self.npv_b));

        for (i, (question, answer)) in QUESTIONS.iter().zip(&self.answers).enumerate() {
            out.push_str(&format!("\nQ{}: {}\n{}\n", i + 1, question, answer));
        }
        out
    }

    /// File name built from the student name, with path separators replaced by `_`
    pub fn file_name(&self) -> String {
        let stem: String = self
            .student_name
            .chars()
            .map(|c| {
                if std::path::is_separator(c) || matches!(c, '/' | '\\' | ':') || c.is_control() {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        format!("{}_insurance_assignment.txt", stem)
    }

    /// Write the rendered document into `dir`, returning the file path
    pub fn write_to(&self, dir: &Path) -> LabResult<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.render())?;
        Ok(path)
    }
}
