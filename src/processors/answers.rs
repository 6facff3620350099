// Copyright 2019 Guillaume Becquin
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::ProcessorError;
use crate::vocab::{AnswerVocab, Vocab};
use serde::Deserialize;

fn default_num_answers() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct MultiHotAnswerConfig {
    pub vocab_file: String,
    #[serde(default = "default_num_answers")]
    pub num_answers: usize,
}

/// Encoded answers for one example: a fixed-length index array cycling over the provided
/// answers, and a multi-hot score vector over the answer vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiHotAnswerOutput {
    pub answers_indices: Vec<i64>,
    pub answers_scores: Vec<f32>,
}

/// # Multi-hot answer encoder
/// Encodes a set of free-text answers against a fixed answer vocabulary. Unknown answers map to
/// the reserved unknown slot in the index array but never set a score bit.
pub struct MultiHotAnswerProcessor {
    vocab: AnswerVocab,
    num_answers: usize,
}

impl MultiHotAnswerProcessor {
    pub fn new(config: &MultiHotAnswerConfig) -> Result<MultiHotAnswerProcessor, ProcessorError> {
        if config.num_answers == 0 {
            return Err(ProcessorError::ValueError(
                "num_answers must be strictly positive".to_owned(),
            ));
        }
        let vocab = AnswerVocab::from_file(&config.vocab_file)?;
        Ok(MultiHotAnswerProcessor {
            vocab,
            num_answers: config.num_answers,
        })
    }

    /// Encode a list of answers. The index array has exactly `num_answers` entries, repeating
    /// the provided answers in order until filled.
    pub fn process(&self, answers: &[&str]) -> Result<MultiHotAnswerOutput, ProcessorError> {
        if answers.is_empty() {
            return Err(ProcessorError::ValueError(
                "at least one answer is required".to_owned(),
            ));
        }
        let unknown_id = self.vocab.token_to_id(self.vocab.get_unknown_value());
        let answer_ids: Vec<i64> = answers
            .iter()
            .map(|answer| self.vocab.token_to_id(answer))
            .collect();

        let answers_indices: Vec<i64> = (0..self.num_answers)
            .map(|position| answer_ids[position % answer_ids.len()])
            .collect();

        let mut answers_scores: Vec<f32> = vec![0.0; self.vocab.num_words()];
        for &answer_id in &answer_ids {
            if answer_id != unknown_id {
                answers_scores[answer_id as usize] = 1.0;
            }
        }
        Ok(MultiHotAnswerOutput {
            answers_indices,
            answers_scores,
        })
    }
}
