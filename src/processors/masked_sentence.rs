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
use crate::tokenizer::Tokenizer;
use crate::vocab::{BertVocab, Vocab};
use rand::Rng;
use serde::Deserialize;

/// Sentence selection strategy, fixed for the lifetime of a processor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SelectionStrategy {
    /// Take all sentences in their original order
    #[serde(rename = "full_sentences")]
    FullSentences,
    /// Take a leading window of sentences fitting the token budget
    #[serde(rename = "two_sentences")]
    TwoSentences,
    /// Take a contiguous window starting at a randomly drawn sentence
    #[serde(rename = "rand_sentences")]
    RandSentences,
}

/// Configuration for the masked multi-sentence processor. Mirrors the serialized processor
/// configuration (`type`, `mask_probability`, `max_seq_length`, `with_sentence_separator`).
#[derive(Debug, Clone, Deserialize)]
pub struct MaskedSentenceConfig {
    #[serde(rename = "type")]
    pub strategy: SelectionStrategy,
    pub mask_probability: f64,
    pub max_seq_length: usize,
    #[serde(default)]
    pub with_sentence_separator: bool,
}

impl MaskedSentenceConfig {
    fn validate(&self) -> Result<(), ProcessorError> {
        if !(0f64..=1f64).contains(&self.mask_probability) {
            return Err(ProcessorError::ValueError(format!(
                "mask_probability must be in [0, 1], got {}",
                self.mask_probability
            )));
        }
        if self.max_seq_length < 3 {
            return Err(ProcessorError::ValueError(format!(
                "max_seq_length must leave room for at least one token between the sequence markers, got {}",
                self.max_seq_length
            )));
        }
        Ok(())
    }
}

/// Fixed-length arrays produced for one example. `tokens` holds the masked token strings before
/// padding; the four parallel arrays are right-padded to `max_seq_length`.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedSentenceOutput {
    pub tokens: Vec<String>,
    pub input_ids: Vec<i64>,
    pub segment_ids: Vec<i8>,
    pub input_mask: Vec<i8>,
    pub lm_label_ids: Vec<i64>,
}

/// # Masked multi-sentence processor
/// Prepares masked-language-model training examples from an ordered list of raw sentences:
/// selects a subset of sentences according to the configured strategy, assembles their subword
/// tokenization between `[CLS]` and `[SEP]` markers (with optional inter-sentence separators),
/// masks a fraction of the tokens and packs the result into fixed-length arrays.
///
/// All randomness is drawn from the generator handle passed to `process`, in strict
/// left-to-right position order, so results are reproducible for a fixed seed.
pub struct MaskedMultiSentenceProcessor<T>
where
    T: Tokenizer<BertVocab>,
{
    tokenizer: T,
    config: MaskedSentenceConfig,
}

impl<T> MaskedMultiSentenceProcessor<T>
where
    T: Tokenizer<BertVocab>,
{
    pub fn new(tokenizer: T, config: MaskedSentenceConfig) -> Result<Self, ProcessorError> {
        config.validate()?;
        Ok(MaskedMultiSentenceProcessor { tokenizer, config })
    }

    /// Process one example. Returns an error for an empty sentence list.
    pub fn process<R: Rng>(
        &self,
        sentences: &[&str],
        rng: &mut R,
    ) -> Result<MaskedSentenceOutput, ProcessorError> {
        if sentences.is_empty() {
            return Err(ProcessorError::ValueError(
                "at least one sentence is required".to_owned(),
            ));
        }
        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|sentence| self.tokenizer.tokenize(sentence))
            .collect();
        let selected = self.select(tokenized, rng);
        // the two-segment layout is supported by the assembler but not activated by any of the
        // shipped strategies, segment ids therefore remain all zeros
        let (tokens, segment_ids) = self.assemble(&selected, None);
        let (masked_tokens, lm_label_ids) = self.mask_tokens(tokens, rng);
        Ok(self.pack(masked_tokens, segment_ids, lm_label_ids))
    }

    /// Token budget available to sentence tokens once the leading and trailing markers are
    /// accounted for.
    fn token_budget(&self) -> usize {
        self.config.max_seq_length - 2
    }

    fn select<R: Rng>(&self, tokenized: Vec<Vec<String>>, rng: &mut R) -> Vec<Vec<String>> {
        match self.config.strategy {
            SelectionStrategy::FullSentences => tokenized,
            SelectionStrategy::TwoSentences => {
                let budget = self.token_budget();
                let mut used = 0usize;
                let mut selected: Vec<Vec<String>> = Vec::new();
                for sentence in tokenized {
                    let separator_cost =
                        if self.config.with_sentence_separator && !selected.is_empty() {
                            1
                        } else {
                            0
                        };
                    if !selected.is_empty() && used + separator_cost + sentence.len() > budget {
                        break;
                    }
                    used += separator_cost + sentence.len();
                    selected.push(sentence);
                }
                selected
            }
            SelectionStrategy::RandSentences => {
                let start = rng.gen_range(0..tokenized.len());
                tokenized.into_iter().skip(start).collect()
            }
        }
    }

    /// Concatenates the selected sentence tokens between the sequence markers. A `[SEP]` marker
    /// is inserted between sentences when configured. Sequences longer than `max_seq_length` are
    /// cut at `max_seq_length - 1` so that the trailing `[SEP]` always survives.
    ///
    /// `segment_boundary`, when provided, is the token position at which segment 1 begins.
    fn assemble(
        &self,
        selected: &[Vec<String>],
        segment_boundary: Option<usize>,
    ) -> (Vec<String>, Vec<i8>) {
        let mut tokens: Vec<String> = Vec::with_capacity(self.config.max_seq_length);
        tokens.push(BertVocab::cls_value().to_owned());
        for (position, sentence) in selected.iter().enumerate() {
            if position > 0 && self.config.with_sentence_separator {
                tokens.push(BertVocab::sep_value().to_owned());
            }
            tokens.extend_from_slice(sentence);
        }
        if tokens.len() >= self.config.max_seq_length {
            tokens.truncate(self.config.max_seq_length - 1);
        }
        tokens.push(BertVocab::sep_value().to_owned());

        let segment_ids = match segment_boundary {
            Some(boundary) => (0..tokens.len())
                .map(|position| if position >= boundary { 1 } else { 0 })
                .collect(),
            None => vec![0; tokens.len()],
        };
        (tokens, segment_ids)
    }

    /// One Bernoulli draw per token, in position order, skipping only the markers inserted by
    /// the assembler. A successful draw replaces the token with `[MASK]` and records its original
    /// vocabulary id as the label; all other positions carry the 0 sentinel. Unknown tokens take
    /// a draw like any other, recording the unknown token id as their label.
    fn mask_tokens<R: Rng>(&self, tokens: Vec<String>, rng: &mut R) -> (Vec<String>, Vec<i64>) {
        let vocab = self.tokenizer.vocab();
        let mut masked_tokens: Vec<String> = Vec::with_capacity(tokens.len());
        let mut lm_label_ids: Vec<i64> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if token == BertVocab::cls_value() || token == BertVocab::sep_value() {
                masked_tokens.push(token);
                lm_label_ids.push(0);
            } else if rng.gen::<f64>() < self.config.mask_probability {
                lm_label_ids.push(vocab.token_to_id(&token));
                masked_tokens.push(BertVocab::mask_value().to_owned());
            } else {
                masked_tokens.push(token);
                lm_label_ids.push(0);
            }
        }
        (masked_tokens, lm_label_ids)
    }

    fn pack(
        &self,
        tokens: Vec<String>,
        mut segment_ids: Vec<i8>,
        mut lm_label_ids: Vec<i64>,
    ) -> MaskedSentenceOutput {
        let max_seq_length = self.config.max_seq_length;
        let mut input_ids = self.tokenizer.convert_tokens_to_ids(&tokens);
        let mut input_mask: Vec<i8> = vec![1; tokens.len()];

        input_ids.resize(max_seq_length, 0);
        segment_ids.resize(max_seq_length, 0);
        input_mask.resize(max_seq_length, 0);
        lm_label_ids.resize(max_seq_length, 0);

        MaskedSentenceOutput {
            tokens,
            input_ids,
            segment_ids,
            input_mask,
            lm_label_ids,
        }
    }
}
