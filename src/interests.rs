use anyhow::{anyhow, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::info;

use crate::spelling::{SpellCorrector, TARGET_SPELLING};

/// A fragment of user input that the spell corrector changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
}

/// User interests after splitting and spell correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedInterests {
    pub interests: Vec<String>,
    pub corrections: Vec<Correction>,
}

impl ProcessedInterests {
    /// The text embedded as the user's query: interests joined by single spaces.
    pub fn query_text(&self) -> String {
        self.interests.join(" ")
    }
}

/// Turn raw comma-separated input such as `"Technolgy, sports"` into corrected interests.
pub fn process_interests<S>(raw_input: &str, corrector: &S) -> Result<ProcessedInterests>
where
    S: SpellCorrector + ?Sized,
{
    let lowered = raw_input.trim().to_lowercase();
    let mut interests = Vec::new();
    let mut corrections = Vec::new();

    for fragment in lowered.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        let corrected = corrector.correct(fragment);
        if corrected != fragment {
            info!(target: TARGET_SPELLING, "Corrected interest '{}' to '{}'", fragment, corrected);
            corrections.push(Correction {
                original: fragment.to_string(),
                corrected: corrected.clone(),
            });
        }
        interests.push(corrected);
    }

    if interests.is_empty() {
        return Err(anyhow!("No interests found in input '{}'", raw_input));
    }

    Ok(ProcessedInterests {
        interests,
        corrections,
    })
}

/// Ask for interests on `prompt` and read one line from `input`.
///
/// The prompt goes wherever the caller points it, so machine-readable output on
/// stdout stays clean.
pub fn read_interests<R, W>(mut input: R, mut prompt: W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(prompt, "\nPersonalized News Feed")?;
    writeln!(prompt, "{}", "-".repeat(30))?;
    write!(
        prompt,
        "Enter your interests (e.g., technology, sports, separated by commas): "
    )?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("No interests provided"));
    }
    Ok(line)
}
