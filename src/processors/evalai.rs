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

use itertools::Itertools;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref COMMA_BETWEEN_DIGITS: Regex = Regex::new(r"\d,+\d").unwrap();
    static ref CONTRACTIONS: HashMap<&'static str, &'static str> = [
        ("aint", "ain't"),
        ("arent", "aren't"),
        ("cant", "can't"),
        ("couldve", "could've"),
        ("couldnt", "couldn't"),
        ("couldn'tve", "couldn't've"),
        ("couldnt've", "couldn't've"),
        ("didnt", "didn't"),
        ("doesnt", "doesn't"),
        ("dont", "don't"),
        ("hadnt", "hadn't"),
        ("hadnt've", "hadn't've"),
        ("hadn'tve", "hadn't've"),
        ("hasnt", "hasn't"),
        ("havent", "haven't"),
        ("hed", "he'd"),
        ("hed've", "he'd've"),
        ("he'dve", "he'd've"),
        ("hes", "he's"),
        ("howd", "how'd"),
        ("howll", "how'll"),
        ("hows", "how's"),
        ("id've", "i'd've"),
        ("i'dve", "i'd've"),
        ("im", "i'm"),
        ("ive", "i've"),
        ("isnt", "isn't"),
        ("itd", "it'd"),
        ("itd've", "it'd've"),
        ("it'dve", "it'd've"),
        ("itll", "it'll"),
        ("let's", "let's"),
        ("maam", "ma'am"),
        ("mightnt", "mightn't"),
        ("mightnt've", "mightn't've"),
        ("mightn'tve", "mightn't've"),
        ("mightve", "might've"),
        ("mustnt", "mustn't"),
        ("mustve", "must've"),
        ("neednt", "needn't"),
        ("notve", "not've"),
        ("oclock", "o'clock"),
        ("oughtnt", "oughtn't"),
        ("ow's'at", "'ow's'at"),
        ("'ows'at", "'ow's'at"),
        ("'ow'sat", "'ow's'at"),
        ("shant", "shan't"),
        ("shed've", "she'd've"),
        ("she'dve", "she'd've"),
        ("she's", "she's"),
        ("shouldve", "should've"),
        ("shouldnt", "shouldn't"),
        ("shouldnt've", "shouldn't've"),
        ("shouldn'tve", "shouldn't've"),
        ("somebodyd", "somebody'd"),
        ("somebodyd've", "somebody'd've"),
        ("somebody'dve", "somebody'd've"),
        ("somebodyll", "somebody'll"),
        ("somebodys", "somebody's"),
        ("someoned", "someone'd"),
        ("someoned've", "someone'd've"),
        ("someone'dve", "someone'd've"),
        ("someonell", "someone'll"),
        ("someones", "someone's"),
        ("somethingd", "something'd"),
        ("somethingd've", "something'd've"),
        ("something'dve", "something'd've"),
        ("somethingll", "something'll"),
        ("thats", "that's"),
        ("thered", "there'd"),
        ("thered've", "there'd've"),
        ("there'dve", "there'd've"),
        ("therere", "there're"),
        ("theres", "there's"),
        ("theyd", "they'd"),
        ("theyd've", "they'd've"),
        ("they'dve", "they'd've"),
        ("theyll", "they'll"),
        ("theyre", "they're"),
        ("theyve", "they've"),
        ("twas", "'twas"),
        ("wasnt", "wasn't"),
        ("wed've", "we'd've"),
        ("we'dve", "we'd've"),
        ("weve", "we've"),
        ("werent", "weren't"),
        ("whatll", "what'll"),
        ("whatre", "what're"),
        ("whats", "what's"),
        ("whatve", "what've"),
        ("whens", "when's"),
        ("whered", "where'd"),
        ("wheres", "where's"),
        ("whereve", "where've"),
        ("whod", "who'd"),
        ("whod've", "who'd've"),
        ("who'dve", "who'd've"),
        ("wholl", "who'll"),
        ("whos", "who's"),
        ("whove", "who've"),
        ("whyll", "why'll"),
        ("whyre", "why're"),
        ("whys", "why's"),
        ("wont", "won't"),
        ("wouldve", "would've"),
        ("wouldnt", "wouldn't"),
        ("wouldnt've", "wouldn't've"),
        ("wouldn'tve", "wouldn't've"),
        ("yall", "y'all"),
        ("yall'll", "y'all'll"),
        ("y'allll", "y'all'll"),
        ("yall'd've", "y'all'd've"),
        ("y'alld've", "y'all'd've"),
        ("y'all'dve", "y'all'd've"),
        ("youd", "you'd"),
        ("youd've", "you'd've"),
        ("you'dve", "you'd've"),
        ("youll", "you'll"),
        ("youre", "you're"),
        ("youve", "you've"),
    ]
    .iter()
    .cloned()
    .collect();
    static ref NUMBER_MAP: HashMap<&'static str, &'static str> = [
        ("none", "0"),
        ("zero", "0"),
        ("one", "1"),
        ("two", "2"),
        ("three", "3"),
        ("four", "4"),
        ("five", "5"),
        ("six", "6"),
        ("seven", "7"),
        ("eight", "8"),
        ("nine", "9"),
        ("ten", "10"),
    ]
    .iter()
    .cloned()
    .collect();
}

static ARTICLES: [&str; 3] = ["a", "an", "the"];

static PUNCTUATIONS: [&str; 21] = [
    ";", "/", "[", "]", "\"", "{", "}", "(", ")", "=", "+", "\\", "_", "-", ">", "<", "@", "`",
    ",", "?", "!",
];

/// # EvalAI answer normalizer
/// Deterministic normalization pipeline applied to free-text answers before accuracy scoring:
/// lower casing and possessive splitting, whitespace collapsing, punctuation stripping with
/// digit-aware comma and period rules, number-word to digit mapping, article removal and
/// contraction expansion.
#[derive(Default)]
pub struct EvalAIAnswerProcessor;

impl EvalAIAnswerProcessor {
    pub fn new() -> EvalAIAnswerProcessor {
        EvalAIAnswerProcessor
    }

    fn word_tokenize(text: &str) -> String {
        text.to_lowercase()
            .replace(',', "")
            .replace('?', "")
            .replace("'s", " 's")
            .trim()
            .to_owned()
    }

    fn process_punctuation(text: &str) -> String {
        let mut output = text.to_owned();
        for punctuation in PUNCTUATIONS.iter() {
            let attached_left = format!("{} ", punctuation);
            let attached_right = format!(" {}", punctuation);
            if text.contains(&attached_left)
                || text.contains(&attached_right)
                || COMMA_BETWEEN_DIGITS.is_match(text)
            {
                output = output.replace(punctuation, "");
            } else {
                output = output.replace(punctuation, " ");
            }
        }
        // periods are removed unless they are part of a decimal number
        let mut stripped = String::with_capacity(output.len());
        let mut characters = output.chars().peekable();
        while let Some(character) = characters.next() {
            if character == '.' && !matches!(characters.peek(), Some(next) if next.is_ascii_digit())
            {
                continue;
            }
            stripped.push(character);
        }
        stripped
    }

    fn process_digit_article(text: &str) -> String {
        text.split_whitespace()
            .map(|word| *NUMBER_MAP.get(word).unwrap_or(&word))
            .filter(|word| !ARTICLES.iter().any(|article| article == word))
            .map(|word| *CONTRACTIONS.get(word).unwrap_or(&word))
            .join(" ")
    }

    /// Normalize one answer string
    pub fn process(&self, item: &str) -> String {
        let item = EvalAIAnswerProcessor::word_tokenize(item);
        let item = item.replace('\n', " ").replace('\t', " ");
        let item = EvalAIAnswerProcessor::process_punctuation(item.trim());
        EvalAIAnswerProcessor::process_digit_article(&item)
    }
}

//==============================
// Unit tests
//==============================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_words() {
        //        Given
        let processor = EvalAIAnswerProcessor::new();

        //        When & Then
        assert_eq!(processor.process("two"), "2");
        assert_eq!(processor.process("ten"), "10");
        assert_eq!(processor.process("none"), "0");
    }

    #[test]
    fn test_article_removal() {
        //        Given
        let processor = EvalAIAnswerProcessor::new();

        //        When & Then
        assert_eq!(processor.process("a building"), "building");
        assert_eq!(processor.process("the tall building"), "tall building");
        assert_eq!(processor.process("an apple"), "apple");
    }

    #[test]
    fn test_tokenization() {
        //        Given
        let processor = EvalAIAnswerProcessor::new();

        //        When & Then
        assert_eq!(processor.process("snow, mountain"), "snow mountain");
    }

    #[test]
    fn test_contractions() {
        //        Given
        let processor = EvalAIAnswerProcessor::new();

        //        When & Then
        assert_eq!(processor.process("isnt"), "isn't");
        assert_eq!(processor.process("dont"), "don't");
        assert_eq!(processor.process("youre"), "you're");
    }

    #[test]
    fn test_full_pipeline() {
        //        Given
        let processor = EvalAIAnswerProcessor::new();

        //        When & Then
        assert_eq!(
            processor.process("the two mountain's \t \n   "),
            "2 mountain 's"
        );
    }

    #[test]
    fn test_idempotent_on_identical_input() {
        //        Given
        let processor = EvalAIAnswerProcessor::new();

        //        When & Then
        assert_eq!(
            processor.process("the two mountain's"),
            processor.process("the two mountain's")
        );
    }

    #[test]
    fn test_decimal_periods_survive() {
        //        Given
        let processor = EvalAIAnswerProcessor::new();

        //        When & Then
        assert_eq!(processor.process("1.5"), "1.5");
        assert_eq!(processor.process("mountain."), "mountain");
    }
}
