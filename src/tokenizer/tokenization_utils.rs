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

use crate::vocab::Vocab;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};
use unicode_normalization::is_nfd;

/// Split a text on special tokens, so that registered markers (e.g. `[MASK]`) survive the
/// downstream lower-casing and punctuation splitting untouched.
pub fn split_on_special_tokens<'a>(text: &'a str, vocab: &'a impl Vocab) -> Vec<&'a str> {
    let mut text_list: Vec<&str> = vec![text];
    let mut temp_list: Vec<&str>;

    for special_value in vocab.special_values() {
        temp_list = vec![];
        for subtext in &text_list {
            let new_items = split_with_separator(subtext, special_value.0);
            temp_list.extend(new_items);
        }
        text_list = temp_list;
    }
    text_list
}

fn split_with_separator<'a>(text: &'a str, separator: &'a str) -> Vec<&'a str> {
    let split_text: Vec<&str> = text.split(separator).collect();
    let mut result: Vec<&str> = vec![];
    if text.is_empty() {
        result.push(text);
        return result;
    }
    for (i, subtext) in split_text.iter().enumerate() {
        let trimmed_subtext = subtext.trim();
        if (i == 0) & trimmed_subtext.is_empty() {
            result.push(separator);
        } else if i == split_text.len() - 1 {
            if !trimmed_subtext.is_empty() {
                result.push(trimmed_subtext);
            }
        } else {
            if !trimmed_subtext.is_empty() {
                result.push(trimmed_subtext);
            }
            result.push(separator);
        }
    }
    result
}

pub fn whitespace_tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn strip_accents(text: String) -> String {
    if !is_nfd(&text) {
        let mut decomposed_string: String = String::with_capacity(text.capacity());
        for character in text.chars() {
            decompose_canonical(character, |c| {
                if !is_combining_mark(c) {
                    decomposed_string.push(c)
                }
            });
        }
        decomposed_string
    } else {
        text
    }
}

/// Split a word on ASCII punctuation, keeping each punctuation character as its own token.
/// Special tokens pass through unsplit.
pub fn split_on_punct(text: String, vocab: &impl Vocab) -> Vec<String> {
    let mut output: Vec<String> = Vec::new();
    let mut start_new_word: bool = true;
    let mut temp_string = String::new();
    if vocab.special_values().contains_key(&text) {
        output.push(text);
        return output;
    }
    for character in text.chars() {
        if character.is_ascii_punctuation() {
            if !temp_string.is_empty() {
                output.push(temp_string.clone());
                temp_string = String::new();
            }
            output.push(character.to_string());
            start_new_word = true
        } else {
            if start_new_word {
                temp_string = String::new();
            }
            start_new_word = false;
            temp_string.push(character);
        }
    }
    if !start_new_word & !temp_string.is_empty() {
        output.push(temp_string.clone());
    }
    output
}

/// Greedy longest-match-first WordPiece decomposition. Continuation pieces carry the `##`
/// prefix. Words longer than `max_word_len` characters and words with no valid decomposition
/// collapse to the unknown token.
pub fn tokenize_wordpiece(token: String, vocab: &impl Vocab, max_word_len: usize) -> Vec<String> {
    let mut tokenized_text: Vec<String> = Vec::new();
    if token.chars().count() > max_word_len {
        tokenized_text.push(vocab.get_unknown_value().to_owned());
        return tokenized_text;
    }
    let char_indices: Vec<usize> = token.char_indices().map(|v| v.0).collect();
    let max_end: usize = char_indices.last().unwrap() + token.chars().last().unwrap().len_utf8();
    let mut start: usize = 0;
    let mut pos_end;
    let mut end;
    while start < max_end {
        end = max_end;
        pos_end = char_indices.len() - 1;
        while start < end {
            let mut substr = token[start..end].to_owned();
            if start > 0 {
                substr = format!("##{}", substr);
            }
            if vocab.values().contains_key(&substr) {
                tokenized_text.push(substr);
                break;
            }
            if pos_end == start {
                return vec![vocab.get_unknown_value().to_owned()];
            }
            pos_end -= 1;
            end = char_indices[pos_end + 1];
        }
        start = end;
    }
    tokenized_text
}

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
            ("una".to_owned(), 8),
            ("##ffa".to_owned(), 9),
            ("##ble".to_owned(), 10),
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
    fn test_split_on_special_tokens() {
        //        Given
        let vocab = generate_test_vocab();

        //        When & Then
        for (source_text, expected_result) in [
            (
                "Sentence with [MASK] token.",
                vec!["Sentence with", "[MASK]", "token."],
            ),
            (
                "[CLS]Sentence with [MASK] token.",
                vec!["[CLS]", "Sentence with", "[MASK]", "token."],
            ),
            ("[CLS]", vec!["[CLS]"]),
            ("[CLS] [PAD]", vec!["[CLS]", "[PAD]"]),
            ("asdf[CLS]", vec!["asdf", "[CLS]"]),
            (
                "No special token in sentence",
                vec!["No special token in sentence"],
            ),
            ("", vec![""]),
        ]
        .iter()
        {
            assert_eq!(split_on_special_tokens(source_text, &vocab), *expected_result);
        }
    }

    #[test]
    fn test_whitespace_tokenize() {
        //        Given

        //        When & Then
        for (source_text, expected_result) in [
            ("hello world", vec!["hello", "world"]),
            ("hello \t \n  world", vec!["hello", "world"]),
            ("   ", Vec::new()),
        ]
        .iter()
        {
            assert_eq!(whitespace_tokenize(source_text), *expected_result);
        }
    }

    #[test]
    fn test_strip_accents() {
        //        Given

        //        When & Then
        for (source_text, expected_result) in [
            ("tokénized", "tokenized"),
            ("Ugljšić", "Ugljsic"),
            ("plain", "plain"),
        ]
        .iter()
        {
            assert_eq!(strip_accents(source_text.to_string()), *expected_result);
        }
    }

    #[test]
    fn test_split_on_punct() {
        //        Given
        let vocab = generate_test_vocab();

        //        When & Then
        for (source_text, expected_result) in [
            ("hello!", vec!["hello", "!"]),
            ("couch,", vec!["couch", ","]),
            ("[MASK]", vec!["[MASK]"]),
            ("mountain's", vec!["mountain", "'", "s"]),
        ]
        .iter()
        {
            assert_eq!(
                split_on_punct(source_text.to_string(), &vocab),
                *expected_result
            );
        }
    }

    #[test]
    fn test_tokenize_wordpiece() {
        //        Given
        let vocab = generate_test_vocab();

        //        When & Then
        for (source_text, expected_result) in [
            ("hello", vec!["hello"]),
            ("unaffable", vec!["una", "##ffa", "##ble"]),
            ("asdf", vec!["[UNK]"]),
        ]
        .iter()
        {
            assert_eq!(
                tokenize_wordpiece(source_text.to_string(), &vocab, 100),
                *expected_result
            );
        }

        //        an over-long word collapses to the unknown token
        assert_eq!(
            tokenize_wordpiece("hello".to_string(), &vocab, 3),
            vec!["[UNK]"]
        );
    }
}
