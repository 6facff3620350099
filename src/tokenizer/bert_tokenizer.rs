// Copyright 2018 The Google AI Language Team Authors
// Copyright 2018 The HuggingFace Inc. team.
// Copyright 2019-2020 Guillaume Becquin
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
use crate::tokenizer::base_tokenizer::{BaseTokenizer, MultiThreadedTokenizer, Tokenizer};
use crate::tokenizer::tokenization_utils::tokenize_wordpiece;
use crate::vocab::{BertVocab, Vocab};
use std::sync::Arc;

/// # BERT tokenizer
/// WordPiece tokenizer performing whitespace and punctuation splitting, optional lower casing
/// and accent stripping, followed by a greedy WordPiece decomposition against the vocabulary.
pub struct BertTokenizer {
    vocab: Arc<BertVocab>,
    base_tokenizer: BaseTokenizer<BertVocab>,
}

impl BertTokenizer {
    pub fn from_file(
        path: &str,
        lower_case: bool,
        strip_accents: bool,
    ) -> Result<BertTokenizer, ProcessorError> {
        let vocab = Arc::new(BertVocab::from_file(path)?);
        let base_tokenizer =
            BaseTokenizer::from_existing_vocab(vocab.clone(), lower_case, strip_accents);
        Ok(BertTokenizer {
            vocab,
            base_tokenizer,
        })
    }

    pub fn from_existing_vocab(
        vocab: Arc<BertVocab>,
        lower_case: bool,
        strip_accents: bool,
    ) -> BertTokenizer {
        let base_tokenizer =
            BaseTokenizer::from_existing_vocab(vocab.clone(), lower_case, strip_accents);
        BertTokenizer {
            vocab,
            base_tokenizer,
        }
    }
}

impl Tokenizer<BertVocab> for BertTokenizer {
    fn vocab(&self) -> &BertVocab {
        self.vocab.as_ref()
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        //the base tokenizer does most of the work, we simply add a wordpiece tokenizer on top
        self.base_tokenizer
            .tokenize(text)
            .into_iter()
            .flat_map(|token| tokenize_wordpiece(token, self.vocab.as_ref(), 100))
            .collect()
    }
}

impl MultiThreadedTokenizer<BertVocab> for BertTokenizer {}
