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
use crate::vocab::base_vocab::{swap_key_values, Vocab};
use std::collections::HashMap;

/// # Answer/caption vocabulary
/// Flat word vocabulary used by the answer and caption processors. The `<unk>` token must be
/// present in the file; answer vocabularies conventionally place it on the first line so that
/// index 0 serves as the unknown slot. The `<pad>`, `<s>` and `</s>` markers used by captioning
/// vocabularies are registered as special values when present in the file.
pub struct AnswerVocab {
    pub values: HashMap<String, i64>,
    pub indices: HashMap<i64, String>,
    pub unknown_value: &'static str,
    pub special_values: HashMap<String, i64>,
    pub special_indices: HashMap<i64, String>,
}

impl AnswerVocab {
    pub fn pad_value() -> &'static str {
        "<pad>"
    }
    pub fn start_value() -> &'static str {
        "<s>"
    }
    pub fn end_value() -> &'static str {
        "</s>"
    }

    /// Number of words in the vocabulary, including special values
    pub fn num_words(&self) -> usize {
        self.values.len()
    }
}

impl Vocab for AnswerVocab {
    fn unknown_value() -> &'static str {
        "<unk>"
    }

    fn get_unknown_value(&self) -> &'static str {
        "<unk>"
    }

    fn values(&self) -> &HashMap<String, i64> {
        &self.values
    }

    fn indices(&self) -> &HashMap<i64, String> {
        &self.indices
    }

    fn special_values(&self) -> &HashMap<String, i64> {
        &self.special_values
    }

    fn special_indices(&self) -> &HashMap<i64, String> {
        &self.special_indices
    }

    fn from_file(path: &str) -> Result<AnswerVocab, ProcessorError> {
        let values = AnswerVocab::read_vocab_file(path)?;
        let mut special_values = HashMap::new();

        let unknown_value = AnswerVocab::unknown_value();
        AnswerVocab::_register_as_special_value(unknown_value, &values, &mut special_values)?;

        // sequence markers are only present in captioning vocabularies
        for marker in &[
            AnswerVocab::pad_value(),
            AnswerVocab::start_value(),
            AnswerVocab::end_value(),
        ] {
            if values.contains_key(*marker) {
                AnswerVocab::_register_as_special_value(marker, &values, &mut special_values)?;
            }
        }

        let indices = swap_key_values(&values);
        let special_indices = swap_key_values(&special_values);

        Ok(AnswerVocab {
            values,
            indices,
            unknown_value,
            special_values,
            special_indices,
        })
    }

    fn token_to_id(&self, token: &str) -> i64 {
        self._token_to_id(
            token,
            &self.values,
            &self.special_values,
            self.unknown_value,
        )
    }

    fn id_to_token(&self, id: &i64) -> String {
        self._id_to_token(id, &self.indices, &self.special_indices, self.unknown_value)
    }
}
