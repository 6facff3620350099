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

//! # Dataset processors
//!
//! This module contains the processors preparing training examples for vision-and-language
//! models:
//! - masked multi-sentence encoding for masked-language-model objectives
//! - answer vocabulary encoding (multi-hot) and EvalAI answer normalization
//! - caption decoding
//! - bounding-box normalization
//! - label to class-index lookup
//!
//! Processors are constructed once from a typed configuration and are pure functions of their
//! inputs; the stochastic ones additionally take an explicit random generator handle.

mod answers;
mod bbox;
mod captions;
mod class_lookup;
mod evalai;
mod masked_sentence;

pub use answers::{MultiHotAnswerConfig, MultiHotAnswerOutput, MultiHotAnswerProcessor};
pub use bbox::{BboxConfig, TransformerBboxProcessor};
pub use captions::{Caption, CaptionConfig, CaptionProcessor};
pub use class_lookup::{ClassLookupConfig, MultiClassFromFile};
pub use evalai::EvalAIAnswerProcessor;
pub use masked_sentence::{
    MaskedMultiSentenceProcessor, MaskedSentenceConfig, MaskedSentenceOutput, SelectionStrategy,
};
