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

use crate::tokenizer::tokenization_utils::{
    split_on_punct, split_on_special_tokens, strip_accents, whitespace_tokenize,
};
use crate::vocab::Vocab;
use rayon::prelude::*;
use std::sync::Arc;

/// # Base trait for tokenizers
/// The processors treat the tokenizer as an opaque capability: a mapping from text to an ordered
/// sequence of subword tokens, and from tokens to vocabulary ids. Implementors only need to
/// provide `vocab` and `tokenize`.
pub trait Tokenizer<V: Vocab> {
    /// Returns a reference to the tokenizer vocabulary
    fn vocab(&self) -> &V;

    /// Tokenize a text into subword tokens
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Tokenize a list of texts, returning the tokens for each of them
    fn tokenize_list(&self, text_list: &[&str]) -> Vec<Vec<String>> {
        text_list.iter().map(|text| self.tokenize(text)).collect()
    }

    /// Converts a list of tokens to the corresponding vocabulary ids
    fn convert_tokens_to_ids(&self, tokens: &[String]) -> Vec<i64> {
        tokens.iter().map(|v| self.vocab().token_to_id(v)).collect()
    }

    /// Tokenize a text and convert the resulting tokens to vocabulary ids
    fn encode(&self, text: &str) -> Vec<i64> {
        self.convert_tokens_to_ids(&self.tokenize(text))
    }
}

/// # Multi-threaded tokenizer
/// Batch counterpart of `Tokenizer` for preparing whole dataset shards, parallelized over the
/// input list with `rayon`.
pub trait MultiThreadedTokenizer<V: Vocab>
where
    Self: Tokenizer<V> + Sync,
{
    fn tokenize_list(&self, text_list: &[&str]) -> Vec<Vec<String>> {
        text_list
            .par_iter()
            .map(|text| self.tokenize(text))
            .collect()
    }

    fn encode_list(&self, text_list: &[&str]) -> Vec<Vec<i64>> {
        text_list
            .par_iter()
            .map(|text| self.tokenize(text))
            .map(|tokens| self.convert_tokens_to_ids(&tokens))
            .collect()
    }
}

/// # Base tokenizer
/// Performs whitespace and punctuation splitting with optional lower casing and accent
/// stripping. Registered special tokens pass through unsplit.
pub struct BaseTokenizer<V: Vocab> {
    vocab: Arc<V>,
    lower_case: bool,
    strip_accents: bool,
}

impl<V: Vocab + Sync + Send> BaseTokenizer<V> {
    pub fn from_existing_vocab(
        vocab: Arc<V>,
        lower_case: bool,
        strip_accents: bool,
    ) -> BaseTokenizer<V> {
        BaseTokenizer {
            vocab,
            lower_case,
            strip_accents,
        }
    }
}

impl<V: Vocab + Sync + Send> Tokenizer<V> for BaseTokenizer<V> {
    fn vocab(&self) -> &V {
        self.vocab.as_ref()
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokenized_text: Vec<String> = Vec::with_capacity(text.len());
        for chunk in split_on_special_tokens(text, self.vocab.as_ref()) {
            if self.vocab.special_values().contains_key(chunk) {
                tokenized_text.push(chunk.to_owned());
                continue;
            }
            let mut cleaned = chunk.to_owned();
            if self.lower_case {
                cleaned = cleaned.to_lowercase();
            }
            if self.strip_accents {
                cleaned = strip_accents(cleaned);
            }
            for word in whitespace_tokenize(&cleaned) {
                tokenized_text.extend(split_on_punct(word.to_owned(), self.vocab.as_ref()));
            }
        }
        tokenized_text
    }
}

impl<V: Vocab + Sync + Send> MultiThreadedTokenizer<V> for BaseTokenizer<V> {}

//==============================
// Unit tests
//==============================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::base_vocab::swap_key_values;
    use crate::vocab::BertVocab;
    use std::collections::HashMap;

    fn generate_test_vocab() -> BertVocab {
        let values: HashMap<String, i64> = [
            ("hello".to_owned(), 0),
            ("world".to_owned(), 1),
            ("[UNK]".to_owned(), 2),
            ("!".to_owned(), 3),
            ("[CLS]".to_owned(), 4),
            ("[SEP]".to_owned(), 5),
            ("[MASK]".to_owned(), 6),
            ("[PAD]".to_owned(), 7),
        ]
        .iter()
        .cloned()
        .collect();

        let special_values: HashMap<String, i64> = [
            ("[UNK]".to_owned(), 2),
            ("[CLS]".to_owned(), 4),
            ("[SEP]".to_owned(), 5),
            ("[MASK]".to_owned(), 6),
            ("[PAD]".to_owned(), 7),
        ]
        .iter()
        .cloned()
        .collect();

        let indices = swap_key_values(&values);
        let special_indices = swap_key_values(&special_values);

        BertVocab {
            values,
            indices,
            unknown_value: "[UNK]",
            special_values,
            special_indices,
        }
    }

    #[test]
    fn test_base_tokenizer() {
        //        Given
        let vocab = Arc::new(generate_test_vocab());
        let base_tokenizer: BaseTokenizer<BertVocab> =
            BaseTokenizer::from_existing_vocab(vocab, true, true);
        let test_tuples = [
            ("Hello world!", vec!["hello", "world", "!"]),
            (
                "Hello [MASK] tokénized world!",
                vec!["hello", "[MASK]", "tokenized", "world", "!"],
            ),
            ("", vec![]),
        ];

        //        When & Then
        for (source_text, expected_result) in test_tuples.iter() {
            assert_eq!(base_tokenizer.tokenize(source_text), *expected_result);
        }
    }

    #[test]
    fn test_base_tokenizer_no_lower_casing() {
        //        Given
        let vocab = Arc::new(generate_test_vocab());
        let base_tokenizer: BaseTokenizer<BertVocab> =
            BaseTokenizer::from_existing_vocab(vocab, false, false);

        //        When & Then
        assert_eq!(
            base_tokenizer.tokenize("Hello [MASK] tokénized world!"),
            vec!["Hello", "[MASK]", "tokénized", "world", "!"]
        );
    }

    #[test]
    fn test_tokenize_list_parallel_matches_sequential() {
        //        Given
        let vocab = Arc::new(generate_test_vocab());
        let base_tokenizer: BaseTokenizer<BertVocab> =
            BaseTokenizer::from_existing_vocab(vocab, true, true);
        let texts = ["Hello world!", "hello [SEP]", "world"];

        //        When
        let sequential = Tokenizer::tokenize_list(&base_tokenizer, &texts);
        let parallel = MultiThreadedTokenizer::tokenize_list(&base_tokenizer, &texts);

        //        Then
        assert_eq!(sequential, parallel);
    }
}
