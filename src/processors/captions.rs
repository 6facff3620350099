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
use itertools::Itertools;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionConfig {
    pub vocab_file: String,
}

/// Decoded caption: the surviving token strings and their joined text form.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub tokens: Vec<String>,
    pub caption: String,
}

/// # Caption decoder
/// Converts generated token id sequences back to caption text through a captioning vocabulary,
/// dropping the sequence start, end and padding markers.
pub struct CaptionProcessor {
    vocab: AnswerVocab,
}

impl CaptionProcessor {
    pub fn new(config: &CaptionConfig) -> Result<CaptionProcessor, ProcessorError> {
        let vocab = AnswerVocab::from_file(&config.vocab_file)?;
        Ok(CaptionProcessor { vocab })
    }

    pub fn process(&self, token_ids: &[i64]) -> Caption {
        let tokens: Vec<String> = token_ids
            .iter()
            .map(|id| self.vocab.id_to_token(id))
            .filter(|token| {
                token != AnswerVocab::start_value()
                    && token != AnswerVocab::end_value()
                    && token != AnswerVocab::pad_value()
            })
            .collect();
        let caption = tokens.iter().join(" ");
        Caption { tokens, caption }
    }
}
