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
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

#[derive(Debug, Clone, Deserialize)]
pub struct ClassLookupConfig {
    pub vocab_file: String,
}

/// # Class lookup from file
/// Maps class labels to their 0-based line index in a newline-delimited vocabulary file. There
/// is no unknown fallback: looking up a label absent from the file is a hard error.
pub struct MultiClassFromFile {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl MultiClassFromFile {
    pub fn new(config: &ClassLookupConfig) -> Result<MultiClassFromFile, ProcessorError> {
        MultiClassFromFile::from_file(&config.vocab_file)
    }

    pub fn from_file(path: &str) -> Result<MultiClassFromFile, ProcessorError> {
        let f = File::open(path).map_err(|e| {
            ProcessorError::FileNotFound(format!("{} class vocabulary file not found :{}", path, e))
        })?;
        let br = BufReader::new(f);
        let mut classes: Vec<String> = Vec::new();

        for line in br.lines() {
            let line = line.map_err(|e| ProcessorError::VocabularyParsingError(e.to_string()))?;
            classes.push(line.trim().to_owned());
        }
        let index = classes
            .iter()
            .enumerate()
            .map(|(position, label)| (label.clone(), position))
            .collect();
        Ok(MultiClassFromFile { classes, index })
    }

    /// Number of classes read from the vocabulary file
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Returns the class index for a label, failing for labels absent from the vocabulary
    pub fn class_index(&self, label: &str) -> Result<usize, ProcessorError> {
        self.index.get(label).copied().ok_or_else(|| {
            ProcessorError::TokenNotFound(format!(
                "Label {} not present in the class vocabulary",
                label
            ))
        })
    }
}
