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
use serde_json::Value;

/// Field names under which the raw boxes and image dimensions are stored in a feature record.
#[derive(Debug, Clone, Deserialize)]
pub struct BboxConfig {
    pub bbox_key: String,
    pub image_width_key: String,
    pub image_height_key: String,
}

/// # Bounding-box normalizer
/// Divides raw `[x1, y1, x2, y2]` box coordinates by the image dimensions and appends the
/// normalized box area as a fifth element. The boxes and dimensions are read out of a
/// key-addressed feature record under the configured field names.
pub struct TransformerBboxProcessor {
    config: BboxConfig,
}

impl TransformerBboxProcessor {
    pub fn new(config: BboxConfig) -> TransformerBboxProcessor {
        TransformerBboxProcessor { config }
    }

    /// Normalize a single box against the image dimensions
    pub fn normalize_bbox(
        bbox: &[f32; 4],
        image_width: f32,
        image_height: f32,
    ) -> Result<[f32; 5], ProcessorError> {
        if image_width <= 0.0 || image_height <= 0.0 {
            return Err(ProcessorError::ValueError(format!(
                "image dimensions must be strictly positive, got {}x{}",
                image_width, image_height
            )));
        }
        let x1 = bbox[0] / image_width;
        let y1 = bbox[1] / image_height;
        let x2 = bbox[2] / image_width;
        let y2 = bbox[3] / image_height;
        Ok([x1, y1, x2, y2, (x2 - x1) * (y2 - y1)])
    }

    /// Normalize all boxes of a feature record
    pub fn process(&self, item: &Value) -> Result<Vec<[f32; 5]>, ProcessorError> {
        let image_width = self.read_dimension(item, &self.config.image_width_key)?;
        let image_height = self.read_dimension(item, &self.config.image_height_key)?;
        let boxes = item
            .get(&self.config.bbox_key)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ProcessorError::ValueError(format!(
                    "feature record is missing the {} field",
                    self.config.bbox_key
                ))
            })?;

        let mut output: Vec<[f32; 5]> = Vec::with_capacity(boxes.len());
        for raw_box in boxes {
            let coordinates: Vec<f32> = raw_box
                .as_array()
                .map(|values| {
                    values
                        .iter()
                        .filter_map(Value::as_f64)
                        .map(|v| v as f32)
                        .collect()
                })
                .unwrap_or_default();
            if coordinates.len() != 4 {
                return Err(ProcessorError::ValueError(format!(
                    "bounding boxes must have 4 coordinates, got {}",
                    coordinates.len()
                )));
            }
            let bbox = [
                coordinates[0],
                coordinates[1],
                coordinates[2],
                coordinates[3],
            ];
            output.push(TransformerBboxProcessor::normalize_bbox(
                &bbox,
                image_width,
                image_height,
            )?);
        }
        Ok(output)
    }

    fn read_dimension(&self, item: &Value, key: &str) -> Result<f32, ProcessorError> {
        item.get(key)
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .ok_or_else(|| {
                ProcessorError::ValueError(format!("feature record is missing the {} field", key))
            })
    }
}

//==============================
// Unit tests
//==============================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generate_test_config() -> BboxConfig {
        BboxConfig {
            bbox_key: "bbox".to_owned(),
            image_width_key: "image_width".to_owned(),
            image_height_key: "image_height".to_owned(),
        }
    }

    #[test]
    fn test_full_image_box() -> anyhow::Result<()> {
        //        Given
        let processor = TransformerBboxProcessor::new(generate_test_config());
        let item = json!({
            "bbox": [[100, 100, 100, 100]],
            "image_width": 100,
            "image_height": 100,
        });

        //        When
        let processed = processor.process(&item)?;

        //        Then
        assert_eq!(processed, vec![[1.0, 1.0, 1.0, 1.0, 0.0]]);
        Ok(())
    }

    #[test]
    fn test_normalized_coordinates_and_area() -> anyhow::Result<()> {
        //        Given
        let processor = TransformerBboxProcessor::new(generate_test_config());
        let item = json!({
            "bbox": [[0, 0, 50, 100], [25, 50, 75, 100]],
            "image_width": 100,
            "image_height": 200,
        });

        //        When
        let processed = processor.process(&item)?;

        //        Then
        assert_eq!(processed[0], [0.0, 0.0, 0.5, 0.5, 0.25]);
        assert_eq!(processed[1], [0.25, 0.25, 0.75, 0.5, 0.125]);
        for bbox in processed {
            assert!(bbox.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
        Ok(())
    }

    #[test]
    fn test_missing_field() {
        //        Given
        let processor = TransformerBboxProcessor::new(generate_test_config());
        let item = json!({
            "bbox": [[100, 100, 100, 100]],
            "image_width": 100,
        });

        //        When & Then
        assert!(processor.process(&item).is_err());
    }

    #[test]
    fn test_malformed_box() {
        //        Given
        let processor = TransformerBboxProcessor::new(generate_test_config());
        let item = json!({
            "bbox": [[100, 100, 100]],
            "image_width": 100,
            "image_height": 100,
        });

        //        When & Then
        assert!(processor.process(&item).is_err());
    }

    #[test]
    fn test_zero_image_dimension() {
        //        Given
        let bbox = [10.0, 10.0, 20.0, 20.0];

        //        When & Then
        assert!(TransformerBboxProcessor::normalize_bbox(&bbox, 0.0, 100.0).is_err());
    }
}
