//! Per-generation fitness history
//!
//! Summarizes each episode for the optimizer's progress reporting and keeps
//! the best generation seen so far.

use serde::{Deserialize, Serialize};

use crate::episode::EpisodeOutcome;

/// Maximum number of generations to keep
pub const MAX_GENERATIONS: usize = 1000;

/// Summary of one generation's episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation index (0-based)
    pub generation: u32,
    pub best_fitness: f32,
    pub mean_fitness: f32,
    /// Most score zones any agent passed
    pub best_score: u32,
    /// Number of controllers evaluated
    pub evaluated: usize,
    /// Ticks until the episode ended
    pub ticks: u64,
    pub gates_passed: u32,
}

impl GenerationRecord {
    /// Summarize an outcome (empty outcomes record zero fitness)
    pub fn from_outcome<C>(generation: u32, outcome: &EpisodeOutcome<C>) -> Self {
        let evaluated = outcome.results.len();
        let best_fitness = outcome.best().map_or(0.0, |b| b.fitness);
        let mean_fitness = if evaluated == 0 {
            0.0
        } else {
            outcome.results.iter().map(|r| r.fitness).sum::<f32>() / evaluated as f32
        };
        Self {
            generation,
            best_fitness,
            mean_fitness,
            best_score: outcome.results.iter().map(|r| r.score).max().unwrap_or(0),
            evaluated,
            ticks: outcome.ticks,
            gates_passed: outcome.gates_passed,
        }
    }
}

/// Generation history, oldest first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FitnessHistory {
    pub records: Vec<GenerationRecord>,
    /// Best generation ever recorded (survives trimming)
    pub best: Option<GenerationRecord>,
    next_generation: u32,
}

impl FitnessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next generation's outcome
    /// Returns true if it set a new best fitness
    pub fn record<C>(&mut self, outcome: &EpisodeOutcome<C>) -> bool {
        let record = GenerationRecord::from_outcome(self.next_generation, outcome);
        self.next_generation += 1;

        let improved = self
            .best
            .as_ref()
            .is_none_or(|best| record.best_fitness > best.best_fitness);
        if improved {
            self.best = Some(record.clone());
        }

        log::info!(
            "Generation {}: best {:.3}, mean {:.3}, best score {}{}",
            record.generation,
            record.best_fitness,
            record.mean_fitness,
            record.best_score,
            if improved { " (new best)" } else { "" }
        );

        self.records.push(record);
        if self.records.len() > MAX_GENERATIONS {
            let excess = self.records.len() - MAX_GENERATIONS;
            self.records.drain(..excess);
        }
        improved
    }

    /// Check if any generation has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    /// Best fitness ever recorded
    pub fn best_fitness(&self) -> Option<f32> {
        self.best.as_ref().map(|b| b.best_fitness)
    }

    /// Generations recorded since the best fitness last improved
    pub fn generations_since_improvement(&self) -> u32 {
        match &self.best {
            Some(best) => self.next_generation - 1 - best.generation,
            None => 0,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
