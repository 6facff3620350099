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

//! # Vocabularies
//!
//! This module contains the vocabularies mapping tokens to ids. Two families are available:
//! - WordPiece vocabularies with BERT-style special values, used by the tokenizer and the
//!   masked multi-sentence processor
//! - flat word vocabularies with an unknown slot, used by the answer and caption processors

pub(crate) mod base_vocab;
mod answer_vocab;
mod bert_vocab;

pub use answer_vocab::AnswerVocab;
pub use base_vocab::Vocab;
pub use bert_vocab::BertVocab;
