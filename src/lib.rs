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

//! # Dataset preprocessing processors for multimodal machine learning
//!
//! This crate provides the text and feature processors used to prepare training examples for
//! vision-and-language models: a masked multi-sentence encoder producing fixed-length arrays
//! for masked-language-model objectives, answer vocabulary encoders, an EvalAI answer
//! normalizer, a caption decoder, a bounding-box normalizer and a class-index lookup.
//!
//! The subword tokenization relies on a WordPiece tokenizer and flat vocabulary files; the
//! processors only depend on the `Tokenizer` trait and can be exercised with any vocabulary.

pub mod error;
pub mod processors;
pub mod tokenizer;
pub mod vocab;

pub use error::ProcessorError;
pub use processors::{
    BboxConfig, Caption, CaptionConfig, CaptionProcessor, ClassLookupConfig, EvalAIAnswerProcessor,
    MaskedMultiSentenceProcessor, MaskedSentenceConfig, MaskedSentenceOutput, MultiClassFromFile,
    MultiHotAnswerConfig, MultiHotAnswerOutput, MultiHotAnswerProcessor, SelectionStrategy,
    TransformerBboxProcessor,
};
pub use tokenizer::{BertTokenizer, MultiThreadedTokenizer, Tokenizer};
pub use vocab::{AnswerVocab, BertVocab, Vocab};

#[macro_use]
extern crate lazy_static;
