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

//! # Tokenizers
//!
//! This module contains the tokenizers splitting an input text into a sequence of subword
//! tokens. The processors only rely on the `Tokenizer` trait, so they can be exercised with any
//! vocabulary. All tokenizers are `Send`, `Sync` and support multi-threaded batch tokenization.

pub(crate) mod base_tokenizer;
mod bert_tokenizer;
pub(crate) mod tokenization_utils;

pub use base_tokenizer::{BaseTokenizer, MultiThreadedTokenizer, Tokenizer};
pub use bert_tokenizer::BertTokenizer;
