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
use std::collections::HashMap;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader};

pub(crate) fn swap_key_values<T: Clone, U: Hash + Eq + Copy>(
    input_hashmap: &HashMap<T, U>,
) -> HashMap<U, T> {
    input_hashmap
        .iter()
        .map(|(key, &value)| (value, key.clone()))
        .collect()
}

/// # Base Vocab trait
/// Common interface to the vocabularies backing the processors. A vocabulary maps token strings
/// to integer ids (and back), with a subset of tokens registered as special values (markers for
/// sequence start/end, masking, padding or unknown words).
pub trait Vocab {
    /// Associative function returning the unknown value for the vocabulary
    fn unknown_value() -> &'static str;

    /// Returns the unknown value on an instance
    fn get_unknown_value(&self) -> &'static str;

    /// Return the map of token strings to IDs
    fn values(&self) -> &HashMap<String, i64>;

    /// Return the map of token IDs to strings
    fn indices(&self) -> &HashMap<i64, String>;

    /// Return the map of special token strings to IDs
    fn special_values(&self) -> &HashMap<String, i64>;

    /// Return the map of special token IDs to strings
    fn special_indices(&self) -> &HashMap<i64, String>;

    /// Read a vocabulary from a file. Needs to be implemented by the specific vocabularies to
    /// register their special values.
    fn from_file(path: &str) -> Result<Self, ProcessorError>
    where
        Self: std::marker::Sized;

    /// Read a flat vocabulary file (single column, one token per line, the line number defines
    /// the token index)
    fn read_vocab_file(path: &str) -> Result<HashMap<String, i64>, ProcessorError> {
        let f = File::open(path).map_err(|e| {
            ProcessorError::FileNotFound(format!("{} vocabulary file not found :{}", path, e))
        })?;
        let br = BufReader::new(f);
        let mut data = HashMap::new();

        for (index, line) in br.lines().enumerate() {
            let line = match line {
                Ok(value) => value,
                Err(e) => {
                    return Err(ProcessorError::VocabularyParsingError(e.to_string()));
                }
            };
            data.insert(line.trim().to_owned(), index as i64);
        }
        Ok(data)
    }

    /// Converts a token to an id, provided the maps of values and special values and the unknown
    /// token string. The `token_to_id` method offers a more convenient interface and needs to be
    /// implemented by the specific vocabulary.
    fn _token_to_id(
        &self,
        token: &str,
        values: &HashMap<String, i64>,
        special_values: &HashMap<String, i64>,
        unknown_value: &str,
    ) -> i64 {
        match special_values.get(token) {
            Some(index) => *index,
            None => match values.get(token) {
                Some(index) => *index,
                None => *values.get(unknown_value).unwrap(),
            },
        }
    }

    /// Converts an id to a token, provided the maps of indices and special indices and the
    /// unknown token string. The `id_to_token` method offers a more convenient interface and
    /// needs to be implemented by the specific vocabulary.
    fn _id_to_token(
        &self,
        id: &i64,
        indices: &HashMap<i64, String>,
        special_indices: &HashMap<i64, String>,
        unknown_value: &str,
    ) -> String {
        match special_indices.get(id) {
            Some(token) => token.clone(),
            None => match indices.get(id) {
                Some(token) => token.clone(),
                None => unknown_value.to_owned(),
            },
        }
    }

    /// Register a token as a special value. The token must already be present in `values`, its
    /// id is copied over to `special_values`.
    fn _register_as_special_value(
        token: &str,
        values: &HashMap<String, i64>,
        special_values: &mut HashMap<String, i64>,
    ) -> Result<(), ProcessorError> {
        let token_id = match values.get(token) {
            Some(index) => *index,
            None => {
                return Err(ProcessorError::TokenNotFound(format!(
                    "The special value {} could not be found in the vocabulary",
                    token
                )));
            }
        };
        special_values.insert(String::from(token), token_id);
        Ok(())
    }

    /// Converts a token to an id. Returns the unknown token id for out-of-vocabulary tokens.
    fn token_to_id(&self, token: &str) -> i64;

    /// Converts an id to a token. Returns the unknown token string for ids not in the vocabulary.
    fn id_to_token(&self, id: &i64) -> String;

    /// Converts a list of tokens to a list of indices.
    fn convert_tokens_to_ids(&self, tokens: &[&str]) -> Vec<i64> {
        tokens.iter().map(|v| self.token_to_id(v)).collect()
    }
}

//==============================
// Unit tests
//==============================
#[cfg(test)]
mod tests {
    extern crate anyhow;

    use super::*;
    use crate::vocab::BertVocab;
    use std::io::Write;

    #[test]
    fn test_swap_key_values() {
        //        Given
        let input: HashMap<String, i64> = [("first".to_owned(), 0), ("second".to_owned(), 1)]
            .iter()
            .cloned()
            .collect();

        //        When
        let swapped = swap_key_values(&input);

        //        Then
        assert_eq!(swapped.get(&0), Some(&"first".to_owned()));
        assert_eq!(swapped.get(&1), Some(&"second".to_owned()));
    }

    #[test]
    fn test_read_vocab_file() -> anyhow::Result<()> {
        //        Given
        let mut vocab_file = tempfile::NamedTempFile::new()?;
        write!(vocab_file, "hello \n world \n [UNK] \n !")?;
        let path = vocab_file.into_temp_path();
        let target_values: HashMap<String, i64> = [
            ("hello".to_owned(), 0),
            ("world".to_owned(), 1),
            ("[UNK]".to_owned(), 2),
            ("!".to_owned(), 3),
        ]
        .iter()
        .cloned()
        .collect();

        //        When
        let values = BertVocab::read_vocab_file(path.to_path_buf().to_str().unwrap())?;

        //        Then
        assert_eq!(values, target_values);
        drop(path);
        Ok(())
    }

    #[test]
    fn test_read_vocab_file_not_found() {
        //        Given
        let path = "/tmp/this-vocabulary-file-does-not-exist.txt";

        //        When
        let result = BertVocab::read_vocab_file(path);

        //        Then
        assert!(result.is_err());
    }
}
