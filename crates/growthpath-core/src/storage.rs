//! Key-value persistence for assessment results and plans.
//!
//! [`KeyValueStore`] is the raw capability (string keys, JSON values).
//! [`AssessmentStore`] layers the typed entries on top of any store.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::analysis::AssessmentResults;
use crate::error::StoreError;
use crate::model::{MemoryScore, PlanData, SpeechScore, TraitScores};
use crate::plan::PlanProgress;

/// Keys of the persisted entries.
pub mod keys {
    pub const PERSONALITY_RESULTS: &str = "personalityResults";
    pub const MEMORY_RESULTS: &str = "memoryResults";
    pub const SPEECH_RESULTS: &str = "speechResults";
    pub const IMPROVEMENT_PLAN: &str = "improvementPlan";
    pub const COMPLETED_WEEKS: &str = "completedWeeks";
}

/// A string-keyed store of JSON values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}

/// Typed access to the persisted entries.
#[derive(Debug)]
pub struct AssessmentStore<S> {
    store: S,
}

impl<S: KeyValueStore> AssessmentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, value)?;
        tracing::info!(key, "saved entry");
        Ok(())
    }

    pub fn personality(&self) -> Result<Option<TraitScores>, StoreError> {
        self.load(keys::PERSONALITY_RESULTS)
    }

    pub fn save_personality(&mut self, scores: &TraitScores) -> Result<(), StoreError> {
        self.save(keys::PERSONALITY_RESULTS, scores)
    }

    pub fn memory(&self) -> Result<Option<MemoryScore>, StoreError> {
        self.load(keys::MEMORY_RESULTS)
    }

    pub fn save_memory(&mut self, score: &MemoryScore) -> Result<(), StoreError> {
        self.save(keys::MEMORY_RESULTS, score)
    }

    pub fn speech(&self) -> Result<Option<SpeechScore>, StoreError> {
        self.load(keys::SPEECH_RESULTS)
    }

    pub fn save_speech(&mut self, score: &SpeechScore) -> Result<(), StoreError> {
        self.save(keys::SPEECH_RESULTS, score)
    }

    /// All three assessment results, each `None` if not taken yet.
    pub fn results(&self) -> Result<AssessmentResults, StoreError> {
        Ok(AssessmentResults {
            personality: self.personality()?,
            memory: self.memory()?,
            speech: self.speech()?,
        })
    }

    pub fn plan(&self) -> Result<Option<PlanData>, StoreError> {
        self.load(keys::IMPROVEMENT_PLAN)
    }

    /// Store a new plan. Progress from any earlier plan is discarded.
    pub fn save_plan(&mut self, plan: &PlanData) -> Result<(), StoreError> {
        self.save(keys::IMPROVEMENT_PLAN, plan)?;
        self.store.remove(keys::COMPLETED_WEEKS)
    }

    /// Completed weeks; empty when nothing has been recorded.
    pub fn progress(&self) -> Result<PlanProgress, StoreError> {
        Ok(self.load(keys::COMPLETED_WEEKS)?.unwrap_or_default())
    }

    pub fn save_progress(&mut self, progress: &PlanProgress) -> Result<(), StoreError> {
        self.save(keys::COMPLETED_WEEKS, progress)
    }

    /// Drop every entry.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.clear()?;
        tracing::info!("cleared all stored entries");
        Ok(())
    }
}
