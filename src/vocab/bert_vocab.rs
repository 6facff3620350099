// Copyright 2018 The Google AI Language Team Authors
// Copyright 2018 The HuggingFace Inc. team.
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

/// # BERT-style vocabulary
/// WordPiece vocabulary with `[PAD]`, `[UNK]`, `[CLS]`, `[SEP]` and `[MASK]` special values,
/// read from a flat text file (one token per line).
pub struct BertVocab {
    /// A mapping of tokens as string to indices (i.e. the encoder base)
    pub values: HashMap<String, i64>,

    /// A mapping of token ids to strings (i.e. the decoder base)
    pub indices: HashMap<i64, String>,

    /// The string to use for unknown (out of vocabulary) tokens
    pub unknown_value: &'static str,

    /// A mapping of special value tokens as strings to IDs
    pub special_values: HashMap<String, i64>,

    /// A mapping of special value tokens as IDs to strings
    pub special_indices: HashMap<i64, String>,
}

impl BertVocab {
    pub fn pad_value() -> &'static str {
        "[PAD]"
    }
    pub fn sep_value() -> &'static str {
        "[SEP]"
    }
    pub fn cls_value() -> &'static str {
        "[CLS]"
    }
    pub fn mask_value() -> &'static str {
        "[MASK]"
    }
}

impl Vocab for BertVocab {
    fn unknown_value() -> &'static str {
        "[UNK]"
    }

    fn get_unknown_value(&self) -> &'static str {
        "[UNK]"
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

    fn from_file(path: &str) -> Result<BertVocab, ProcessorError> {
        let values = BertVocab::read_vocab_file(path)?;
        let mut special_values = HashMap::new();

        let unknown_value = BertVocab::unknown_value();
        BertVocab::_register_as_special_value(unknown_value, &values, &mut special_values)?;
        BertVocab::_register_as_special_value(BertVocab::pad_value(), &values, &mut special_values)?;
        BertVocab::_register_as_special_value(BertVocab::sep_value(), &values, &mut special_values)?;
        BertVocab::_register_as_special_value(BertVocab::cls_value(), &values, &mut special_values)?;
        BertVocab::_register_as_special_value(
            BertVocab::mask_value(),
            &values,
            &mut special_values,
        )?;

        let indices = swap_key_values(&values);
        let special_indices = swap_key_values(&special_values);

        Ok(BertVocab {
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
